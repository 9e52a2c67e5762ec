//! Shared fixtures for the budget handler tests.

use std::sync::Arc;

use crate::adapters::memory::{InMemoryBudgetRepository, InMemoryProjectRepository};
use crate::adapters::notifications::RecordingNotifier;
use crate::config::GovernanceConfig;
use crate::domain::budget::Budget;
use crate::domain::foundation::{Actor, InitiativeId, Money, Percentage, ProjectId, Role, UserId};
use crate::domain::initiative::Initiative;
use crate::domain::project::Project;
use crate::ports::{BudgetRepository, ProjectRepository};

pub(crate) struct Fixture {
    pub projects: Arc<InMemoryProjectRepository>,
    pub budgets: Arc<InMemoryBudgetRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

pub(crate) fn fixture() -> Fixture {
    Fixture {
        projects: Arc::new(InMemoryProjectRepository::new()),
        budgets: Arc::new(InMemoryBudgetRepository::new()),
        notifier: Arc::new(RecordingNotifier::new()),
    }
}

pub(crate) fn pm() -> Actor {
    Actor::new(UserId::new("pm-1").unwrap(), Role::Analyst)
}

pub(crate) fn lead() -> Actor {
    Actor::new(UserId::new("lead-1").unwrap(), Role::PortfolioLead)
}

/// Seeds a reserve-bank project (no budget).
pub(crate) async fn seed_project(fix: &Fixture, amount: i64) -> ProjectId {
    let initiative = Initiative::new(
        InitiativeId::new(),
        "Payments modernization".to_string(),
        "Modernize payment rails".to_string(),
        "Finance".to_string(),
        Money::from_major(amount),
        Percentage::new(30),
        UserId::new("requester-1").unwrap(),
        &GovernanceConfig::default().investment_bands(),
    )
    .unwrap();
    let project = Project::spawn_from(&initiative);
    let id = *project.id();
    fix.projects.save_new(&project).await.unwrap();
    id
}

/// Seeds an executing project with an approved-CAPEX budget.
pub(crate) async fn seed_executing_project(
    fix: &Fixture,
    approved_capex: i64,
) -> ProjectId {
    let project_id = seed_project(fix, approved_capex).await;
    let mut project = fix.projects.find_by_id(&project_id).await.unwrap().unwrap();
    project.activate().unwrap();
    fix.projects.update(&project).await.unwrap();

    let budget = Budget::new(
        project_id,
        Money::from_major(approved_capex),
        Money::ZERO,
        Some(UserId::new("lead-1").unwrap()),
    );
    fix.budgets.save_budget(&budget).await.unwrap();
    project_id
}
