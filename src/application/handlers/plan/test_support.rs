//! Shared fixtures for the plan handler tests.

use std::sync::Arc;

use crate::adapters::memory::{InMemoryPlanRepository, InMemoryProjectRepository};
use crate::adapters::notifications::RecordingNotifier;
use crate::config::GovernanceConfig;
use crate::domain::foundation::{
    Actor, InitiativeId, Money, Percentage, PlanId, ProjectId, Role, UserId,
};
use crate::domain::initiative::Initiative;
use crate::domain::plan::AnnualPlan;
use crate::domain::project::Project;
use crate::ports::{PlanRepository, ProjectRepository};

pub(crate) struct Fixture {
    pub plans: Arc<InMemoryPlanRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

pub(crate) fn fixture() -> Fixture {
    Fixture {
        plans: Arc::new(InMemoryPlanRepository::new()),
        projects: Arc::new(InMemoryProjectRepository::new()),
        notifier: Arc::new(RecordingNotifier::new()),
    }
}

pub(crate) fn board() -> Actor {
    Actor::new(UserId::new("board-1").unwrap(), Role::GovernanceBoard)
}

pub(crate) async fn seed_plan(fix: &Fixture, year: i32, total: i64) {
    let plan = AnnualPlan::new(
        PlanId::new(),
        year,
        format!("{} plan", year),
        Money::from_major(total),
    )
    .unwrap();
    fix.plans.save(&plan).await.unwrap();
}

pub(crate) async fn seed_project(fix: &Fixture, amount: i64) -> ProjectId {
    let initiative = Initiative::new(
        InitiativeId::new(),
        "Fleet telemetry".to_string(),
        "Vehicle telemetry".to_string(),
        "Operations".to_string(),
        Money::from_major(amount),
        Percentage::new(20),
        UserId::new("requester-1").unwrap(),
        &GovernanceConfig::default().investment_bands(),
    )
    .unwrap();
    let project = Project::spawn_from(&initiative);
    let id = *project.id();
    fix.projects.save_new(&project).await.unwrap();
    id
}
