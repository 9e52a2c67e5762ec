//! Project aggregate entity.
//!
//! A project is created exactly once, when its originating initiative's
//! evaluation round resolves to approval. It starts in the reserve bank
//! with the initiative's estimated amount as its assigned budget and runs
//! its own lifecycle from there.
//!
//! # Ownership
//!
//! The project owns its phases, milestones, risks, issues and journal.
//! The budget and execution records live in the budget module and
//! reference the project by identity.

use serde::{Deserialize, Serialize};

use super::health::HealthSignal;
use super::phase::{Milestone, Phase};
use super::status::ProjectStatus;
use super::tracking::{Issue, JournalEntry, JournalKind, Risk};
use crate::domain::foundation::{
    DomainError, ErrorCode, InitiativeId, Money, Percentage, ProjectId, StateMachine, Timestamp,
    UserId,
};
use crate::domain::initiative::Initiative;

/// Project aggregate - an approved initiative under delivery.
///
/// # Invariants
///
/// - one-to-one with its originating initiative
/// - `percent_complete` is 0-100
/// - health changes are journaled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    code: String,
    initiative_id: InitiativeId,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    health: HealthSignal,
    plan_year: Option<i32>,
    assigned_budget: Money,
    percent_complete: Percentage,
    manager: Option<UserId>,
    activated_at: Option<Timestamp>,
    planned_start: Option<Timestamp>,
    planned_end: Option<Timestamp>,
    actual_start: Option<Timestamp>,
    actual_end: Option<Timestamp>,
    closed_at: Option<Timestamp>,
    lessons_learned: Option<String>,
    success_metrics: Option<String>,
    phases: Vec<Phase>,
    milestones: Vec<Milestone>,
    risks: Vec<Risk>,
    issues: Vec<Issue>,
    journal: Vec<JournalEntry>,
    created_at: Timestamp,
    updated_at: Timestamp,
    version: u64,
}

impl Project {
    /// Spawns the project for a freshly approved initiative.
    ///
    /// The project code mirrors the initiative code (INI-x -> PRY-x) and
    /// the assigned budget is seeded from the estimated amount.
    pub fn spawn_from(initiative: &Initiative) -> Self {
        let code = format!(
            "PRY-{}",
            initiative.code().trim_start_matches("INI-")
        );
        let now = Timestamp::now();

        Self {
            id: ProjectId::new(),
            code,
            initiative_id: *initiative.id(),
            name: initiative.title().to_string(),
            description: Some(initiative.description().to_string()),
            status: ProjectStatus::ReserveBank,
            health: HealthSignal::Green,
            plan_year: None,
            assigned_budget: initiative.estimated_amount(),
            percent_complete: Percentage::ZERO,
            manager: None,
            activated_at: None,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            closed_at: None,
            lessons_learned: None,
            success_metrics: None,
            phases: Vec::new(),
            milestones: Vec::new(),
            risks: Vec::new(),
            issues: Vec::new(),
            journal: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the human-readable code (e.g. "PRY-1A2B3C4D").
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn initiative_id(&self) -> &InitiativeId {
        &self.initiative_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn health(&self) -> HealthSignal {
        self.health
    }

    pub fn plan_year(&self) -> Option<i32> {
        self.plan_year
    }

    pub fn assigned_budget(&self) -> Money {
        self.assigned_budget
    }

    pub fn percent_complete(&self) -> Percentage {
        self.percent_complete
    }

    pub fn manager(&self) -> Option<&UserId> {
        self.manager.as_ref()
    }

    pub fn activated_at(&self) -> Option<&Timestamp> {
        self.activated_at.as_ref()
    }

    pub fn actual_start(&self) -> Option<&Timestamp> {
        self.actual_start.as_ref()
    }

    pub fn actual_end(&self) -> Option<&Timestamp> {
        self.actual_end.as_ref()
    }

    pub fn closed_at(&self) -> Option<&Timestamp> {
        self.closed_at.as_ref()
    }

    pub fn lessons_learned(&self) -> Option<&str> {
        self.lessons_learned.as_deref()
    }

    pub fn success_metrics(&self) -> Option<&str> {
        self.success_metrics.as_deref()
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
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
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Activates the project into execution.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the project is in the reserve bank or
    ///   the annual plan
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if !self.status.is_activatable() {
            return Err(self.transition_error(ProjectStatus::InExecution));
        }
        let now = Timestamp::now();
        self.status = ProjectStatus::InExecution;
        self.activated_at = Some(now);
        self.actual_start = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Pauses an executing project.
    pub fn pause(&mut self) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::Paused)
    }

    /// Resumes a paused project.
    pub fn resume(&mut self) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::InExecution)
    }

    /// Cancels an executing project.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::Cancelled)?;
        self.closed_at = Some(self.updated_at);
        Ok(())
    }

    /// Completes and closes an executing project.
    ///
    /// Sets percent-complete to 100 and stamps the close dates; lessons
    /// learned and success metrics are recorded when supplied.
    pub fn complete(
        &mut self,
        lessons_learned: Option<String>,
        success_metrics: Option<String>,
    ) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::Completed)?;
        let now = self.updated_at;
        self.percent_complete = Percentage::HUNDRED;
        self.actual_end = Some(now);
        self.closed_at = Some(now);
        if lessons_learned.is_some() {
            self.lessons_learned = lessons_learned;
        }
        if success_metrics.is_some() {
            self.success_metrics = success_metrics;
        }
        Ok(())
    }

    /// Moves the project into an annual plan with its committed amount.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the project is in the reserve bank
    pub fn assign_to_plan(&mut self, year: i32, amount: Money) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::AnnualPlan)?;
        self.plan_year = Some(year);
        self.assigned_budget = amount;
        Ok(())
    }

    /// Returns the project from an annual plan to the reserve bank.
    pub fn remove_from_plan(&mut self) -> Result<(), DomainError> {
        self.apply_transition(ProjectStatus::ReserveBank)?;
        self.plan_year = None;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tracking
    // ─────────────────────────────────────────────────────────────────────────

    /// Updates the health signal, journaling the change.
    pub fn set_health(&mut self, health: HealthSignal, author: &UserId) {
        if health == self.health {
            return;
        }
        let entry = JournalEntry::new(
            JournalKind::HealthChange,
            format!("Health changed {} -> {}", self.health, health),
            author.clone(),
        );
        self.health = health;
        self.journal.push(entry);
        self.updated_at = Timestamp::now();
    }

    /// Updates the overall progress percentage.
    pub fn set_progress(&mut self, percent_complete: Percentage) {
        self.percent_complete = percent_complete;
        self.updated_at = Timestamp::now();
    }

    /// Assigns the delivery manager.
    pub fn assign_manager(&mut self, manager: UserId) {
        self.manager = Some(manager);
        self.updated_at = Timestamp::now();
    }

    /// Appends a phase, keeping the list ordered.
    pub fn add_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
        self.phases.sort_by_key(|p| p.order);
        self.updated_at = Timestamp::now();
    }

    /// Appends a milestone.
    pub fn add_milestone(&mut self, milestone: Milestone) {
        self.milestones.push(milestone);
        self.updated_at = Timestamp::now();
    }

    /// Registers a risk.
    pub fn add_risk(&mut self, risk: Risk) {
        self.risks.push(risk);
        self.updated_at = Timestamp::now();
    }

    /// Opens an issue.
    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
        self.updated_at = Timestamp::now();
    }

    /// Appends a free-form journal entry.
    pub fn add_journal_entry(&mut self, entry: JournalEntry) {
        self.journal.push(entry);
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_transition(&mut self, target: ProjectStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(self.transition_error(target));
        }
        self.status = target;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn transition_error(&self, target: ProjectStatus) -> DomainError {
        DomainError::new(
            ErrorCode::InvalidTransition,
            format!(
                "Cannot transition project from {} to {}",
                self.status, target
            ),
        )
        .with_detail("from", self.status.as_str())
        .with_detail("to", target.as_str())
    }
}
