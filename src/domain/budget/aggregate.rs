//! Budget aggregate entity.
//!
//! One budget per project, tracking approved/committed/executed CAPEX and
//! the projected annual OPEX. `executed <= committed` is a soft rule:
//! execution can legitimately lag or, transiently, exceed commitment
//! pending a change request, so it is surfaced via overrun alerts rather
//! than hard-enforced here.

use serde::{Deserialize, Serialize};

use super::change_request::ChangeType;
use crate::domain::foundation::{Money, ProjectId, Timestamp, UserId};

/// Category of the projected operating spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpexCategory {
    Licenses,
    Support,
    Maintenance,
    #[default]
    Other,
}

/// CAPEX/OPEX budget for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    project_id: ProjectId,
    approved_capex: Money,
    committed_capex: Money,
    executed_capex: Money,
    projected_annual_opex: Money,
    opex_category: OpexCategory,
    opex_description: Option<String>,
    approved_by: Option<UserId>,
    approved_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
    version: u64,
}

impl Budget {
    /// Creates a budget with explicit CAPEX and OPEX figures.
    pub fn new(
        project_id: ProjectId,
        approved_capex: Money,
        projected_annual_opex: Money,
        approved_by: Option<UserId>,
    ) -> Self {
        let now = Timestamp::now();
        let approved_at = approved_by.as_ref().map(|_| now);
        Self {
            project_id,
            approved_capex,
            committed_capex: Money::ZERO,
            executed_capex: Money::ZERO,
            projected_annual_opex,
            opex_category: OpexCategory::Other,
            opex_description: None,
            approved_by,
            approved_at,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Seeds a budget by splitting an assigned amount by the configured
    /// CAPEX share (the remainder becomes projected annual OPEX).
    ///
    /// Used at project activation when no feasibility budget was supplied;
    /// the split is a documented fallback, not an estimate.
    pub fn split_from_assignment(
        project_id: ProjectId,
        assigned: Money,
        capex_share: u8,
        approved_by: Option<UserId>,
    ) -> Self {
        let capex = assigned.percent(capex_share);
        let opex = assigned - capex;
        Self::new(project_id, capex, opex, approved_by)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn approved_capex(&self) -> Money {
        self.approved_capex
    }

    pub fn committed_capex(&self) -> Money {
        self.committed_capex
    }

    pub fn executed_capex(&self) -> Money {
        self.executed_capex
    }

    pub fn projected_annual_opex(&self) -> Money {
        self.projected_annual_opex
    }

    pub fn opex_category(&self) -> OpexCategory {
        self.opex_category
    }

    pub fn opex_description(&self) -> Option<&str> {
        self.opex_description.as_deref()
    }

    pub fn approved_by(&self) -> Option<&UserId> {
        self.approved_by.as_ref()
    }

    pub fn approved_at(&self) -> Option<&Timestamp> {
        self.approved_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the persistence version used for optimistic concurrency.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a resolved change request to the approved CAPEX.
    ///
    /// Increase adds, decrease subtracts; a reallocation is bookkeeping
    /// only and leaves the total untouched.
    pub fn apply_change(&mut self, change_type: ChangeType, approved_amount: Money) {
        match change_type {
            ChangeType::Increase => self.approved_capex += approved_amount,
            ChangeType::Decrease => self.approved_capex -= approved_amount,
            ChangeType::Reallocation => {}
        }
        self.updated_at = Timestamp::now();
    }

    /// Adds a commitment against the approved CAPEX.
    pub fn add_commitment(&mut self, amount: Money) {
        self.committed_capex += amount;
        self.updated_at = Timestamp::now();
    }

    /// Replaces the cumulative executed total.
    ///
    /// Always a full recompute from the execution records, never an
    /// incremental add, so period edits cannot drift the total.
    pub fn set_executed_total(&mut self, total: Money) {
        self.executed_capex = total;
        self.updated_at = Timestamp::now();
    }

    /// Describes the projected OPEX.
    pub fn describe_opex(&mut self, category: OpexCategory, description: Option<String>) {
        self.opex_category = category;
        self.opex_description = description;
        self.updated_at = Timestamp::now();
    }
}
