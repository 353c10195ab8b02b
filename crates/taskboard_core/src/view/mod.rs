//! Display-oriented derivations over the task collection.
//!
//! # Responsibility
//! - Expose pure filter/pagination projections for list views.
//! - Keep the page-reset policy for transient view state in one place.

pub mod projection;
