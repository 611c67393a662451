mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plandeck_store::TaskStore;
use plandeck_types::{Task, TaskId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::presentation::presenters;
use crate::presentation::view_models::StatusLevel;
use app::{AppState, InputMode};

/// The interactive planner: a task table wired to the store.
///
/// Every mutation goes through the store by id and the table is re-read
/// from the store afterwards, so the screen never drifts from the
/// persisted collection.
pub struct PlannerTui<'a> {
    store: &'a TaskStore,
    alert_timeout: Duration,
}

impl<'a> PlannerTui<'a> {
    pub fn new(store: &'a TaskStore, alert_timeout: Duration) -> Self {
        Self {
            store,
            alert_timeout,
        }
    }

    pub fn run(self) -> Result<()> {
        let mut app_state = AppState::new(self.alert_timeout);

        // Load before touching the terminal so a corrupt document fails
        // with a readable error instead of a garbled alternate screen.
        self.refresh(&mut app_state)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &mut app_state);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app_state: &mut AppState,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(250);
        let mut last_tick = Instant::now();

        while !app_state.should_quit {
            terminal.draw(|f| ui::draw(f, app_state))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    // Some platforms also deliver Release events
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, app_state)?;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app_state.tick(Instant::now());
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn handle_key(&self, key: KeyEvent, app: &mut AppState) -> Result<()> {
        match app.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code, app),
            InputMode::Editing => self.handle_form_key(key.code, app),
        }
    }

    fn handle_normal_key(&self, code: KeyCode, app: &mut AppState) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('a') => app.open_form(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(app)?,
            KeyCode::Char('d') => self.remove_selected(app)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&self, code: KeyCode, app: &mut AppState) -> Result<()> {
        match code {
            KeyCode::Esc => app.close_form(),
            KeyCode::Enter => self.submit_form(app)?,
            KeyCode::Tab => app.form.focus_next(),
            KeyCode::BackTab => app.form.focus_previous(),
            KeyCode::Backspace => app.form.pop_char(),
            KeyCode::Char(c) => app.form.push_char(c),
            _ => {}
        }
        Ok(())
    }

    fn refresh(&self, app: &mut AppState) -> Result<()> {
        let tasks = self.store.list()?;
        app.reload(presenters::present_task_rows(&tasks));
        Ok(())
    }

    fn toggle_selected(&self, app: &mut AppState) -> Result<()> {
        let Some((id, completed)) = app
            .selected_task()
            .map(|row| (TaskId::new(row.id.clone()), !row.is_completed))
        else {
            return Ok(());
        };

        self.store.update(&id, completed)?;
        self.refresh(app)?;

        let message = if completed {
            "Task completed"
        } else {
            "Task reopened"
        };
        app.show_alert(message, StatusLevel::Success);
        Ok(())
    }

    fn remove_selected(&self, app: &mut AppState) -> Result<()> {
        let Some(id) = app
            .selected_task()
            .map(|row| TaskId::new(row.id.clone()))
        else {
            return Ok(());
        };

        self.store.remove(&id)?;
        self.refresh(app)?;
        app.show_alert("Task removed", StatusLevel::Success);
        Ok(())
    }

    fn submit_form(&self, app: &mut AppState) -> Result<()> {
        if !app.form.is_valid() {
            app.show_alert("Please fill in all fields", StatusLevel::Error);
            return Ok(());
        }

        let task = Task::new(
            app.form.title.clone(),
            app.form.description.clone(),
            app.form.date.clone(),
        );
        self.store.add(task)?;
        self.refresh(app)?;

        app.show_alert("Task added", StatusLevel::Success);
        app.form.clear_fields();
        app.close_form();
        Ok(())
    }
}
