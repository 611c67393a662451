use serde::Serialize;

/// One rendered task row. Carries the full id so actions can be wired
/// straight back to the store without re-reading anything off the screen.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRowViewModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskListViewModel {
    pub tasks: Vec<TaskRowViewModel>,
    pub total_count: usize,
    pub completed_count: usize,
}

/// What a mutating command did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Added,
    Completed,
    Reopened,
    Removed,
}

/// Outcome of `add`/`done`/`remove`. `task` is `None` when the id matched
/// nothing and the collection was left unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct TaskActionViewModel {
    pub action: TaskAction,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRowViewModel>,
}
