//! Common types and traits for all aggregates

pub mod workflow_status;

// Re-exports
pub use workflow_status::{StatusTransitionError, WorkflowStatus};

/// Backend identifiers are plain integers.
pub type EntityId = i64;
