//! Shared fixtures for the evaluation handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryEvaluationRepository, InMemoryInitiativeRepository, InMemoryProjectRepository,
};
use crate::adapters::notifications::RecordingNotifier;
use crate::config::GovernanceConfig;
use crate::domain::foundation::{Actor, InitiativeId, Money, Percentage, Role, UserId};
use crate::domain::initiative::{Initiative, InitiativeStatus};
use crate::ports::InitiativeRepository;

use super::submit_evaluation::{SubmitEvaluationCommand, SubmitEvaluationHandler};

pub(crate) struct Fixture {
    pub initiatives: Arc<InMemoryInitiativeRepository>,
    pub evaluations: Arc<InMemoryEvaluationRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub notifier: Arc<RecordingNotifier>,
    pub handler: SubmitEvaluationHandler,
}

pub(crate) fn fixture() -> Fixture {
    let initiatives = Arc::new(InMemoryInitiativeRepository::new());
    let evaluations = Arc::new(InMemoryEvaluationRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let handler = SubmitEvaluationHandler::new(
        initiatives.clone(),
        evaluations.clone(),
        notifier.clone(),
        GovernanceConfig::default(),
    );
    Fixture {
        initiatives,
        evaluations,
        projects,
        notifier,
        handler,
    }
}

pub(crate) fn expert(name: &str) -> Actor {
    Actor::new(UserId::new(name).unwrap(), Role::CommitteeExpert)
}

/// A sheet totalling 85 points (30 + 35 + 20).
pub(crate) fn sheet(
    initiative_id: InitiativeId,
    evaluator: Actor,
    veto: bool,
) -> SubmitEvaluationCommand {
    SubmitEvaluationCommand {
        initiative_id,
        evaluator,
        problem_clarity: 9,
        quantified_benefits: 13,
        strategic_alignment: 8,
        architecture: 13,
        integration: 9,
        security: 9,
        scalability: 4,
        detailed_budget: 8,
        roi_tco: 8,
        financial_risk: 4,
        veto,
        veto_reason: None,
        notes: None,
        recommendations: None,
    }
}

/// A sheet hitting an exact total by distributing points across bounds.
pub(crate) fn sheet_with_total(
    initiative_id: InitiativeId,
    evaluator: Actor,
    total: u8,
) -> SubmitEvaluationCommand {
    assert!(total <= 100);
    let mut remaining = total;
    let dim1 = remaining.min(35);
    remaining -= dim1;
    let dim2 = remaining.min(40);
    remaining -= dim2;
    let dim3 = remaining;

    SubmitEvaluationCommand {
        initiative_id,
        evaluator,
        problem_clarity: dim1.min(10),
        quantified_benefits: dim1.saturating_sub(10).min(15),
        strategic_alignment: dim1.saturating_sub(25),
        architecture: dim2.min(15),
        integration: dim2.saturating_sub(15).min(10),
        security: dim2.saturating_sub(25).min(10),
        scalability: dim2.saturating_sub(35),
        detailed_budget: dim3.min(10),
        roi_tco: dim3.saturating_sub(10).min(10),
        financial_risk: dim3.saturating_sub(20),
        veto: false,
        veto_reason: None,
        notes: None,
        recommendations: None,
    }
}

pub(crate) async fn seed_in_evaluation(fix: &Fixture) -> InitiativeId {
    seed_with_amount(fix, 500_000_000).await
}

pub(crate) async fn seed_with_amount(fix: &Fixture, amount: i64) -> InitiativeId {
    let mut initiative = Initiative::new(
        InitiativeId::new(),
        "Core banking".to_string(),
        "Replace core banking".to_string(),
        "Operations".to_string(),
        Money::from_major(amount),
        Percentage::new(40),
        UserId::new("requester-1").unwrap(),
        &GovernanceConfig::default().investment_bands(),
    )
    .unwrap();
    let admin = Actor::new(UserId::new("admin-1").unwrap(), Role::Admin);
    let capability = admin.force_transition().unwrap();
    initiative.force_transition(
        InitiativeStatus::InEvaluation,
        admin.user_id(),
        None,
        &capability,
    );
    let id = *initiative.id();
    fix.initiatives.save(&initiative).await.unwrap();
    id
}
