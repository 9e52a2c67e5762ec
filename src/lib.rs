//! Capgov - Capital Investment Governance Core
//!
//! This crate implements the governance rules that take a capital-investment
//! initiative from proposal to an active, budget-tracked project: the
//! lifecycle state machine, priority scoring, investment classification,
//! committee evaluation aggregation and CAPEX/OPEX budget tracking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
