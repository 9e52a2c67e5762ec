//! Initiative aggregate entity.
//!
//! An initiative is a proposed capital investment moving through the
//! governance funnel. Its derived fields (classification, report type,
//! priority score) are always kept consistent with the amount,
//! transformation percentage and sub-scores that produced them: every
//! mutation of those inputs goes through a recomputation path.
//!
//! # Ownership
//!
//! The initiative owns its Score and its state history records. The
//! project spawned on approval is referenced by identity only.

use serde::{Deserialize, Serialize};

use super::classification::{classify, InvestmentBands, InvestmentClass, ReportType};
use super::score::Score;
use super::status::InitiativeStatus;
use super::transition::StateTransitionRecord;
use crate::domain::foundation::{
    DomainError, ErrorCode, ForceTransition, InitiativeId, Money, Percentage, StateMachine,
    Timestamp, UserId, ValidationError,
};

/// Maximum length for an initiative title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Content fields that may be edited while the initiative is not activated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub justification: Option<String>,
    pub expected_benefits: Option<String>,
    pub requesting_area: Option<String>,
}

/// Initiative aggregate - a proposed capital investment.
///
/// # Invariants
///
/// - `estimated_amount` is non-negative
/// - `classification`/`report_type` always match the current amount and
///   transformation percentage
/// - no content mutation once `Activated`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    id: InitiativeId,
    code: String,
    title: String,
    description: String,
    justification: Option<String>,
    expected_benefits: Option<String>,
    requesting_area: String,
    estimated_amount: Money,
    transformation: Percentage,
    classification: InvestmentClass,
    report_type: ReportType,
    score: Option<Score>,
    status: InitiativeStatus,
    requested_at: Timestamp,
    approved_at: Option<Timestamp>,
    created_by: UserId,
    created_at: Timestamp,
    updated_at: Timestamp,
    version: u64,
}

impl Initiative {
    /// Creates a new draft initiative with derived fields computed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title, description or requesting area is empty
    /// - `InvalidFormat` if the title exceeds [`MAX_TITLE_LENGTH`]
    /// - `OutOfRange` if the estimated amount is negative
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: InitiativeId,
        title: String,
        description: String,
        requesting_area: String,
        estimated_amount: Money,
        transformation: Percentage,
        created_by: UserId,
        bands: &InvestmentBands,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        if description.is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }
        if requesting_area.is_empty() {
            return Err(ValidationError::empty_field("requesting_area").into());
        }
        let estimated_amount = Money::try_non_negative(estimated_amount.cents())?;

        let (classification, report_type) = classify(estimated_amount, transformation, bands);
        let code = Self::derive_code(&id);
        let now = Timestamp::now();

        Ok(Self {
            id,
            code,
            title,
            description,
            justification: None,
            expected_benefits: None,
            requesting_area,
            estimated_amount,
            transformation,
            classification,
            report_type,
            score: None,
            status: InitiativeStatus::Draft,
            requested_at: now,
            approved_at: None,
            created_by,
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &InitiativeId {
        &self.id
    }

    /// Returns the human-readable code (e.g. "INI-1A2B3C4D").
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn justification(&self) -> Option<&str> {
        self.justification.as_deref()
    }

    pub fn expected_benefits(&self) -> Option<&str> {
        self.expected_benefits.as_deref()
    }

    pub fn requesting_area(&self) -> &str {
        &self.requesting_area
    }

    pub fn estimated_amount(&self) -> Money {
        self.estimated_amount
    }

    pub fn transformation(&self) -> Percentage {
        self.transformation
    }

    pub fn classification(&self) -> InvestmentClass {
        self.classification
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn status(&self) -> InitiativeStatus {
        self.status
    }

    pub fn requested_at(&self) -> &Timestamp {
        &self.requested_at
    }

    pub fn approved_at(&self) -> Option<&Timestamp> {
        self.approved_at.as_ref()
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
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

    /// Applies a content edit.
    ///
    /// # Errors
    ///
    /// - `InitiativeActivated` once the initiative is activated
    /// - `EmptyField`/`InvalidFormat` on invalid replacement values
    pub fn update_content(&mut self, update: ContentUpdate) -> Result<(), DomainError> {
        self.ensure_editable()?;

        if let Some(title) = update.title {
            Self::validate_title(&title)?;
            self.title = title;
        }
        if let Some(description) = update.description {
            if description.is_empty() {
                return Err(ValidationError::empty_field("description").into());
            }
            self.description = description;
        }
        if let Some(justification) = update.justification {
            self.justification = Some(justification);
        }
        if let Some(expected_benefits) = update.expected_benefits {
            self.expected_benefits = Some(expected_benefits);
        }
        if let Some(requesting_area) = update.requesting_area {
            if requesting_area.is_empty() {
                return Err(ValidationError::empty_field("requesting_area").into());
            }
            self.requesting_area = requesting_area;
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replaces the financial estimate and reclassifies the investment.
    ///
    /// # Errors
    ///
    /// - `InitiativeActivated` once the initiative is activated
    /// - `OutOfRange` if the amount is negative
    pub fn update_financials(
        &mut self,
        estimated_amount: Money,
        transformation: Percentage,
        bands: &InvestmentBands,
    ) -> Result<(), DomainError> {
        self.ensure_editable()?;
        let estimated_amount = Money::try_non_negative(estimated_amount.cents())?;

        self.estimated_amount = estimated_amount;
        self.transformation = transformation;
        self.reclassify(bands);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Recomputes classification and report type from the current inputs.
    ///
    /// Idempotent; safe to run on every reprocess.
    pub fn reclassify(&mut self, bands: &InvestmentBands) {
        let (classification, report_type) =
            classify(self.estimated_amount, self.transformation, bands);
        self.classification = classification;
        self.report_type = report_type;
    }

    /// Replaces the priority score (recomputed wholesale by the caller).
    ///
    /// # Errors
    ///
    /// - `InitiativeActivated` once the initiative is activated
    pub fn apply_score(&mut self, score: Score) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.score = Some(score);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Performs a validated state transition and returns the audit record.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the edge is not in the adjacency table
    pub fn transition(
        &mut self,
        target: InitiativeStatus,
        actor: &UserId,
        comment: Option<String>,
    ) -> Result<StateTransitionRecord, DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidTransition,
                format!(
                    "Cannot transition initiative from {} to {}",
                    self.status, target
                ),
            )
            .with_detail("from", self.status.as_str())
            .with_detail("to", target.as_str()));
        }

        Ok(self.apply_transition(target, actor, comment))
    }

    /// Performs a forced transition, bypassing the adjacency table.
    ///
    /// Requires the [`ForceTransition`] capability, which only an
    /// administrator can mint.
    pub fn force_transition(
        &mut self,
        target: InitiativeStatus,
        actor: &UserId,
        comment: Option<String>,
        _capability: &ForceTransition,
    ) -> StateTransitionRecord {
        self.apply_transition(target, actor, comment)
    }

    /// Builds the creation audit record (previous state is None).
    pub fn creation_record(&self) -> StateTransitionRecord {
        StateTransitionRecord::new(
            self.id,
            None,
            self.status,
            self.created_by.clone(),
            Some("Initiative created".to_string()),
        )
    }

    /// Returns true while content fields may still be edited.
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_transition(
        &mut self,
        target: InitiativeStatus,
        actor: &UserId,
        comment: Option<String>,
    ) -> StateTransitionRecord {
        let previous = self.status;
        self.status = target;

        let now = Timestamp::now();
        match target {
            InitiativeStatus::Submitted => self.requested_at = now,
            InitiativeStatus::Approved => self.approved_at = Some(now),
            _ => {}
        }
        self.updated_at = now;

        StateTransitionRecord::new(self.id, Some(previous), target, actor.clone(), comment)
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InitiativeActivated,
                "Cannot modify an activated initiative",
            ))
        }
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::invalid_format(
                "title",
                format!("exceeds {} characters", MAX_TITLE_LENGTH),
            )
            .into());
        }
        Ok(())
    }

    fn derive_code(id: &InitiativeId) -> String {
        let hex = id.as_uuid().simple().to_string();
        format!("INI-{}", hex[..8].to_uppercase())
    }
}
