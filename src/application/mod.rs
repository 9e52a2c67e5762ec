//! Application layer - orchestration of the governance operations.

pub mod handlers;
