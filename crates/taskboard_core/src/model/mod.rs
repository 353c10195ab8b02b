//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and projections.
//! - Define draft/patch shapes used by store write paths.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `id` is assigned at creation and never rewritten afterwards.

pub mod task;
