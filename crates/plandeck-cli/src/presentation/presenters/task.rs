use crate::args::hints;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, TaskAction, TaskActionViewModel,
    TaskListViewModel, TaskRowViewModel,
};
use plandeck_types::Task;

pub fn present_task_row(task: &Task) -> TaskRowViewModel {
    TaskRowViewModel {
        id: task.id.to_string(),
        title: task.title.clone(),
        description: task.description.clone(),
        date: task.date.clone(),
        is_completed: task.is_completed,
    }
}

pub fn present_task_rows(tasks: &[Task]) -> Vec<TaskRowViewModel> {
    tasks.iter().map(present_task_row).collect()
}

pub fn present_task_list(tasks: &[Task]) -> CommandResultViewModel<TaskListViewModel> {
    let rows = present_task_rows(tasks);
    let total_count = rows.len();
    let completed_count = rows.iter().filter(|row| row.is_completed).count();

    let content = TaskListViewModel {
        tasks: rows,
        total_count,
        completed_count,
    };

    let mut result = CommandResultViewModel::new(content);
    if total_count == 0 {
        result = result
            .with_suggestion(Guidance::new("Add your first task").with_command(hints::cmd::ADD));
    }
    result
}

pub fn present_task_added(task: &Task) -> CommandResultViewModel<TaskActionViewModel> {
    let content = TaskActionViewModel {
        action: TaskAction::Added,
        id: task.id.to_string(),
        task: Some(present_task_row(task)),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Task added"))
        .with_suggestion(
            Guidance::new("Mark it done when finished")
                .with_command(hints::fmt::done(task.id.as_str())),
        )
}

pub fn present_task_toggled(task: &Task) -> CommandResultViewModel<TaskActionViewModel> {
    let (action, label) = if task.is_completed {
        (TaskAction::Completed, "Task completed")
    } else {
        (TaskAction::Reopened, "Task reopened")
    };

    let content = TaskActionViewModel {
        action,
        id: task.id.to_string(),
        task: Some(present_task_row(task)),
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}

pub fn present_task_removed(task: &Task) -> CommandResultViewModel<TaskActionViewModel> {
    let content = TaskActionViewModel {
        action: TaskAction::Removed,
        id: task.id.to_string(),
        task: Some(present_task_row(task)),
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::success("Task removed"))
}

pub fn present_task_missing(
    id: &str,
    action: TaskAction,
) -> CommandResultViewModel<TaskActionViewModel> {
    let content = TaskActionViewModel {
        action,
        id: id.to_string(),
        task: None,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::warning(format!("No task with id {}", id)))
        .with_suggestion(Guidance::new("See task ids").with_command(hints::cmd::LIST))
}
