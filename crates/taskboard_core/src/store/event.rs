//! Store domain events and their user-facing notification mapping.
//!
//! # Responsibility
//! - Define the event vocabulary emitted by [`TaskStore`] mutations.
//! - Map events to transient notification severities and messages.
//!
//! # Invariants
//! - Events describe what happened, never how it should be rendered.
//! - The notification mapping is pure; rendering belongs to callers.
//!
//! [`TaskStore`]: crate::store::task_store::TaskStore

use crate::model::task::TaskId;

/// Structured event published after a store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TaskAdded { id: TaskId },
    TaskUpdated { id: TaskId },
    StatusChanged { id: TaskId, status: String },
    TaskRemoved { id: TaskId },
    TasksCleared { removed: usize },
    /// A mutation succeeded in memory but its snapshot write failed. The
    /// in-memory collection stays authoritative for the session.
    SnapshotWriteFailed { message: String },
}

/// Severity of a transient user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient message derived from a store event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Observer seam for store events.
///
/// Presentation layers register a sink and translate events into whatever
/// notification surface they own; tests register recording sinks.
pub trait EventSink {
    fn publish(&self, event: &StoreEvent);
}

/// Maps a store event to its transient notification.
///
/// Removal is a completed operation and maps to success severity.
pub fn notification_for(event: &StoreEvent) -> Notification {
    let (severity, message) = match event {
        StoreEvent::TaskAdded { .. } => (Severity::Success, "Task added successfully".to_string()),
        StoreEvent::TaskUpdated { .. } => {
            (Severity::Success, "Task updated successfully".to_string())
        }
        StoreEvent::StatusChanged { .. } => (Severity::Info, "Status updated".to_string()),
        StoreEvent::TaskRemoved { .. } => {
            (Severity::Success, "Task removed successfully".to_string())
        }
        StoreEvent::TasksCleared { .. } => (Severity::Warning, "All tasks cleared".to_string()),
        StoreEvent::SnapshotWriteFailed { message } => (
            Severity::Error,
            format!("Failed to save tasks: {message}"),
        ),
    };

    Notification { severity, message }
}
