use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique task identifier, generated once at creation and immutable after.
///
/// Stored as a plain string in the persisted document so lookups against
/// ids from any source (CLI args, older documents) stay comparisons, not
/// parses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// Task (single to-do item)
// ==========================================

/// A single to-do item.
///
/// Field names serialize in camelCase; the persisted document is an array of
/// these objects and that layout is the storage contract
/// (`{title, description, date, isCompleted, id}`).
///
/// `title`, `description`, and `date` are validated non-empty at the entry
/// surface, never here; the entity is a pure data holder. `date` is free-form
/// date text, not a parsed calendar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    pub description: String,
    pub date: String,
    pub is_completed: bool,
    pub id: TaskId,
}

impl Task {
    /// Construct a new task with a freshly generated id, not yet completed.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            is_completed: false,
            id: TaskId::generate(),
        }
    }
}
