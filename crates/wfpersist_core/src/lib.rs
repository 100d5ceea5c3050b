//! Persistence record types for workflow execution state, with nil-safe
//! accessors that normalize missing data into typed defaults.

#[macro_use]
mod macros;

/// Record catalog, accessor layer, and snapshot loading.
pub mod record;
