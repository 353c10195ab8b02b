//! Task store and its observable domain events.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection and its mutations.
//! - Publish structured events so presentation layers can render
//!   notifications without the store knowing about any UI.
//!
//! # Invariants
//! - Mutations replace the collection wholesale; readers never observe a
//!   partially updated collection.
//! - Every successful mutation persists a fresh snapshot.

pub mod event;
pub mod task_store;
