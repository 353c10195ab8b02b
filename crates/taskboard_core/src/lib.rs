//! Core domain logic for the taskboard task tracker.
//! This crate is the single source of truth for task collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskDraft, TaskId, TaskPatch};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, Snapshot, SnapshotRepository, SqliteSnapshotRepository, SCHEMA_VERSION,
    SNAPSHOT_KEY,
};
pub use store::event::{notification_for, EventSink, Notification, Severity, StoreEvent};
pub use store::task_store::{StoreError, TaskStore};
pub use view::projection::{project_page, PageCursor, PageQuery, TaskPage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
