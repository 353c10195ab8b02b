//! Snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist and restore the full task collection as one serialized
//!   snapshot under a fixed key-value slot.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The slot key is the fixed string [`SNAPSHOT_KEY`]; there is exactly
//!   one authoritative snapshot per database.
//! - Every write replaces the whole snapshot body.
//! - Snapshots with a `schema_version` newer than [`SCHEMA_VERSION`] are
//!   rejected on load.

use crate::db::DbError;
use crate::model::task::Task;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the single snapshot slot.
pub const SNAPSHOT_KEY: &str = "task-storage";

/// Snapshot schema version written by this binary.
///
/// The original storage format carried no version field; version 1 is the
/// first versioned shape.
pub const SCHEMA_VERSION: u32 = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted body is not valid snapshot JSON.
    Encoding(serde_json::Error),
    /// Persisted snapshot was written by a newer binary.
    UnsupportedSnapshot {
        snapshot_version: u32,
        latest_supported: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encoding(err) => write!(f, "invalid snapshot body: {err}"),
            Self::UnsupportedSnapshot {
                snapshot_version,
                latest_supported,
            } => write!(
                f,
                "snapshot schema version {snapshot_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encoding(err) => Some(err),
            Self::UnsupportedSnapshot { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

/// Serialized state of the task collection at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot shape version, for forward-compatibility checks on load.
    pub schema_version: u32,
    /// Full task collection in insertion order.
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Wraps the given collection in a current-version snapshot.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tasks,
        }
    }
}

/// Repository interface for snapshot persistence.
pub trait SnapshotRepository {
    /// Loads the persisted snapshot, or `None` when the slot is empty.
    fn load(&self) -> RepoResult<Option<Snapshot>>;
    /// Replaces the persisted snapshot with `snapshot`.
    fn save(&self, snapshot: &Snapshot) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository {
    conn: Connection,
}

impl SqliteSnapshotRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn load(&self) -> RepoResult<Option<Snapshot>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE key = ?1;",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            return Ok(None);
        };

        let snapshot: Snapshot = serde_json::from_str(&body)?;
        if snapshot.schema_version > SCHEMA_VERSION {
            return Err(RepoError::UnsupportedSnapshot {
                snapshot_version: snapshot.schema_version,
                latest_supported: SCHEMA_VERSION,
            });
        }

        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> RepoResult<()> {
        let body = serde_json::to_string(snapshot)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![SNAPSHOT_KEY, body],
        )?;
        Ok(())
    }
}
