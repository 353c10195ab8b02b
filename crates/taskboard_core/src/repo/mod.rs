//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot persistence contract used by the task store.
//! - Isolate SQLite and serialization details from store orchestration.
//!
//! # Invariants
//! - Repositories persist whole snapshots; partial writes are not part of
//!   the contract.
//! - Read paths must reject snapshots newer than this binary supports
//!   instead of masking them.

pub mod snapshot_repo;
