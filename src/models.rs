use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public field contract of a todo. Serialized as-is; `updated_at`
/// renders as JSON null until the record has been updated at least once.
#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A create/update payload that has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub completed: bool,
}
