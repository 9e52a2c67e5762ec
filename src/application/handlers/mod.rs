//! Command and query handlers, one per exposed governance operation.
//!
//! Handlers compose repository and notifier ports, run the domain rules,
//! and persist the outcome. Each `handle` call maps to one storage
//! transaction in a durable adapter.

pub mod budget;
pub mod evaluation;
pub mod initiative;
pub mod plan;
pub mod project;
