//! Domain events emitted by committee evaluation operations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, EvaluationId, InitiativeId, Timestamp, UserId};
use crate::domain_event;

/// An evaluator submitted their sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSubmitted {
    pub event_id: EventId,
    pub evaluation_id: EvaluationId,
    pub initiative_id: InitiativeId,
    pub evaluator_id: UserId,
    pub total: u8,
    pub veto: bool,
    pub occurred_at: Timestamp,
}

domain_event!(
    EvaluationSubmitted,
    event_type = "evaluation.submitted",
    aggregate_id = evaluation_id,
    aggregate_type = "CommitteeEvaluation",
    occurred_at = occurred_at,
    event_id = event_id
);

/// An evaluator revised their sheet before the round closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRevised {
    pub event_id: EventId,
    pub evaluation_id: EvaluationId,
    pub initiative_id: InitiativeId,
    pub evaluator_id: UserId,
    pub total: u8,
    pub veto: bool,
    pub occurred_at: Timestamp,
}

domain_event!(
    EvaluationRevised,
    event_type = "evaluation.revised",
    aggregate_id = evaluation_id,
    aggregate_type = "CommitteeEvaluation",
    occurred_at = occurred_at,
    event_id = event_id
);

/// The round was closed and resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRoundClosed {
    pub event_id: EventId,
    pub initiative_id: InitiativeId,
    pub approved: bool,
    pub vetoed: bool,
    pub mean: f64,
    pub evaluation_count: usize,
    pub message: String,
    pub occurred_at: Timestamp,
}

domain_event!(
    EvaluationRoundClosed,
    event_type = "evaluation.round_closed",
    aggregate_id = initiative_id,
    aggregate_type = "Initiative",
    occurred_at = occurred_at,
    event_id = event_id
);
