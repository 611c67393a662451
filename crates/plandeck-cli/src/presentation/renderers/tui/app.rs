use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::presentation::view_models::{StatusLevel, TaskRowViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    Title,
    Description,
    Date,
}

/// The entry form: three free-text inputs and a focus cursor.
#[derive(Debug, Default)]
pub(crate) struct EntryForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub focus: FormField,
}

impl EntryForm {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Date,
            FormField::Date => FormField::Title,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Date,
            FormField::Description => FormField::Title,
            FormField::Date => FormField::Description,
        };
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Date => &mut self.date,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_field_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.active_field_mut().pop();
    }

    /// All three fields must be filled in before a task is constructed.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && !self.date.is_empty()
    }

    /// Reset the inputs to empty (after a successful submission).
    pub fn clear_fields(&mut self) {
        self.title.clear();
        self.description.clear();
        self.date.clear();
        self.focus = FormField::Title;
    }
}

/// A transient notification banner. Single slot: showing a new alert
/// replaces the old one, and the expiry instant travels with the alert it
/// belongs to, so the dismiss can never remove the wrong banner.
#[derive(Debug)]
pub(crate) struct Alert {
    pub message: String,
    pub level: StatusLevel,
    expires_at: Instant,
}

pub(crate) struct AppState {
    pub tasks: Vec<TaskRowViewModel>,
    pub table_state: TableState,
    pub input_mode: InputMode,
    pub form: EntryForm,
    pub alert: Option<Alert>,
    pub should_quit: bool,
    alert_timeout: Duration,
}

impl AppState {
    pub fn new(alert_timeout: Duration) -> Self {
        Self {
            tasks: Vec::new(),
            table_state: TableState::default(),
            input_mode: InputMode::Normal,
            form: EntryForm::default(),
            alert: None,
            should_quit: false,
            alert_timeout,
        }
    }

    /// Replace the rendered projection with a fresh read of the store,
    /// clamping the selection to the new bounds.
    pub fn reload(&mut self, tasks: Vec<TaskRowViewModel>) {
        self.tasks = tasks;

        if self.tasks.is_empty() {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0);
            self.table_state
                .select(Some(selected.min(self.tasks.len() - 1)));
        }
    }

    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < self.tasks.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(0) | None => self.tasks.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(previous));
    }

    pub fn selected_task(&self) -> Option<&TaskRowViewModel> {
        self.table_state.selected().and_then(|i| self.tasks.get(i))
    }

    pub fn open_form(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_alert(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.alert = Some(Alert {
            message: message.into(),
            level,
            expires_at: Instant::now() + self.alert_timeout,
        });
    }

    /// Dismiss the alert once its own deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .alert
            .as_ref()
            .is_some_and(|alert| now >= alert.expires_at);
        if expired {
            self.alert = None;
        }
    }
}
