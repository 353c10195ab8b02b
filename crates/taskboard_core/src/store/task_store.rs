//! Authoritative task collection with write-through persistence.
//!
//! # Responsibility
//! - Provide create/update/remove/clear entry points for tasks.
//! - Restore state from the snapshot repository on open and write a fresh
//!   snapshot after every mutation.
//! - Publish [`StoreEvent`]s to registered sinks.
//!
//! # Invariants
//! - No two tasks share an id; creation paths reject collisions.
//! - Collection order is insertion order.
//! - Mutators compute the next collection from the previous one and swap
//!   it in whole; readers never see an intermediate state.
//! - A failed snapshot write never rolls back the in-memory mutation; it
//!   is surfaced as [`StoreEvent::SnapshotWriteFailed`].

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::repo::snapshot_repo::{RepoError, Snapshot, SnapshotRepository};
use crate::store::event::{EventSink, StoreEvent};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Store error for open and creation paths.
#[derive(Debug)]
pub enum StoreError {
    /// A task with the given id already exists.
    DuplicateId(TaskId),
    /// Snapshot restore failed; the store cannot open without it.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "task id already exists: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Explicitly constructed task state container.
///
/// One instance owns the collection for a session. There is no process
/// global; callers hold the store and pass it where it is needed.
pub struct TaskStore<R: SnapshotRepository> {
    repo: R,
    tasks: Vec<Task>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl<R: SnapshotRepository> TaskStore<R> {
    /// Opens a store, restoring the persisted snapshot if one exists.
    pub fn open(repo: R) -> Result<Self, StoreError> {
        let tasks = repo
            .load()?
            .map(|snapshot| snapshot.tasks)
            .unwrap_or_default();
        info!(
            "event=store_open module=store status=ok restored={}",
            tasks.len()
        );

        Ok(Self {
            repo,
            tasks,
            sinks: Vec::new(),
        })
    }

    /// Registers an event sink notified after every mutation.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Returns the full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates a task from a draft, appending it to the collection.
    ///
    /// The store generates the id; callers never supply identity for new
    /// tasks.
    ///
    /// # Errors
    /// Returns `DuplicateId` if the generated id collides with an existing
    /// task.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId, StoreError> {
        let id = Uuid::new_v4();
        self.append(draft.into_task(id))?;
        info!("event=task_add module=store status=ok id={id}");
        self.finish_mutation(StoreEvent::TaskAdded { id });
        Ok(id)
    }

    /// Inserts a task whose identity already exists externally.
    ///
    /// Used by import/restore paths. Unlike [`add_task`](Self::add_task),
    /// the caller supplies the id; duplicates are rejected, never
    /// overwritten.
    pub fn import_task(&mut self, task: Task) -> Result<(), StoreError> {
        let id = task.id;
        self.append(task)?;
        info!("event=task_import module=store status=ok id={id}");
        self.finish_mutation(StoreEvent::TaskAdded { id });
        Ok(())
    }

    /// Shallow-merges `patch` into the task matching `id`.
    ///
    /// Returns whether a task matched. On no match the collection, the
    /// persisted snapshot and the event stream are all untouched.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> bool {
        if self.get_task(id).is_none() {
            info!("event=task_update module=store status=not_found id={id}");
            return false;
        }

        let next = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    patch.apply_to(task)
                } else {
                    task.clone()
                }
            })
            .collect();
        self.tasks = next;

        info!("event=task_update module=store status=ok id={id}");
        self.finish_mutation(StoreEvent::TaskUpdated { id });
        true
    }

    /// Replaces only the status of the task matching `id`.
    ///
    /// Returns whether a task matched.
    pub fn update_status(&mut self, id: TaskId, status: impl Into<String>) -> bool {
        let status = status.into();
        if self.get_task(id).is_none() {
            info!("event=status_update module=store status=not_found id={id}");
            return false;
        }

        let next = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    let mut updated = task.clone();
                    updated.status = status.clone();
                    updated
                } else {
                    task.clone()
                }
            })
            .collect();
        self.tasks = next;

        info!("event=status_update module=store status=ok id={id} new_status={status}");
        self.finish_mutation(StoreEvent::StatusChanged { id, status });
        true
    }

    /// Removes the task matching `id`, if present.
    ///
    /// Returns whether a task was removed; repeated calls are idempotent.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        if next.len() == self.tasks.len() {
            info!("event=task_remove module=store status=not_found id={id}");
            return false;
        }
        self.tasks = next;

        info!("event=task_remove module=store status=ok id={id}");
        self.finish_mutation(StoreEvent::TaskRemoved { id });
        true
    }

    /// Empties the collection regardless of prior size.
    pub fn clear_tasks(&mut self) {
        let removed = self.tasks.len();
        self.tasks = Vec::new();

        info!("event=tasks_clear module=store status=ok removed={removed}");
        self.finish_mutation(StoreEvent::TasksCleared { removed });
    }

    fn append(&mut self, task: Task) -> Result<(), StoreError> {
        if self.get_task(task.id).is_some() {
            return Err(StoreError::DuplicateId(task.id));
        }

        let mut next = self.tasks.clone();
        next.push(task);
        self.tasks = next;
        Ok(())
    }

    /// Persists the current collection and publishes `event`.
    ///
    /// A failed write keeps the in-memory state authoritative and is
    /// surfaced as a follow-up `SnapshotWriteFailed` event.
    fn finish_mutation(&self, event: StoreEvent) {
        let write_error = self
            .repo
            .save(&Snapshot::new(self.tasks.clone()))
            .err()
            .map(|err| err.to_string());

        self.emit(&event);

        if let Some(message) = write_error {
            error!("event=snapshot_write module=store status=error error={message}");
            self.emit(&StoreEvent::SnapshotWriteFailed { message });
        }
    }

    fn emit(&self, event: &StoreEvent) {
        for sink in &self.sinks {
            sink.publish(event);
        }
    }
}
