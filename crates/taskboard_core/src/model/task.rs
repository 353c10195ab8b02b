//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its write-path companions.
//! - Keep wire field naming stable for persisted snapshots.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `TaskPatch` carries no `id` field, so merges cannot rewrite identity.
//! - Content rules (non-empty title, due date in the future) belong to the
//!   calling layer; the model stores what it is given.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical task record.
///
/// `assignee`, `priority` and `status` are opaque catalog ids; the matching
/// display labels live in reference catalogs outside this crate and are
/// never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup, updates and removal.
    pub id: TaskId,
    /// Short task summary shown in list views.
    pub title: String,
    /// Optional free-form body text.
    pub description: Option<String>,
    /// Opaque id into the external user catalog.
    pub assignee: String,
    /// Opaque id into the external priority catalog.
    pub priority: String,
    /// ISO calendar date (`YYYY-MM-DD`). Serialized as `dueDate` to match
    /// the persisted snapshot schema.
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Opaque id into the external status catalog.
    pub status: String,
}

/// Field values for a task that does not exist yet.
///
/// The store owns id generation, so creation paths accept a draft instead
/// of a full record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub assignee: String,
    pub priority: String,
    pub due_date: String,
    pub status: String,
}

impl TaskDraft {
    /// Materializes this draft into a task with the given stable id.
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            assignee: self.assignee,
            priority: self.priority,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

/// Shallow-merge overlay for task updates.
///
/// `None` leaves the corresponding field untouched. There is deliberately
/// no `id` member: identity survives every merge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl TaskPatch {
    /// Returns a copy of `task` with the patched fields replaced.
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            id: task.id,
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            description: self
                .description
                .clone()
                .map_or_else(|| task.description.clone(), Some),
            assignee: self
                .assignee
                .clone()
                .unwrap_or_else(|| task.assignee.clone()),
            priority: self
                .priority
                .clone()
                .unwrap_or_else(|| task.priority.clone()),
            due_date: self
                .due_date
                .clone()
                .unwrap_or_else(|| task.due_date.clone()),
            status: self.status.clone().unwrap_or_else(|| task.status.clone()),
        }
    }

    /// Builds a patch that replaces every field with the draft's values.
    ///
    /// Used by edit forms that resubmit the full record.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: draft.description,
            assignee: Some(draft.assignee),
            priority: Some(draft.priority),
            due_date: Some(draft.due_date),
            status: Some(draft.status),
        }
    }
}
