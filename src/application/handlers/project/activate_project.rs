//! ActivateProjectHandler - Command handler putting a project in execution.

use std::sync::Arc;

use tracing::warn;

use crate::config::GovernanceConfig;
use crate::domain::budget::Budget;
use crate::domain::foundation::{Actor, EventId, Money, ProjectId, Timestamp};
use crate::domain::initiative::InitiativeStatus;
use crate::domain::project::{Project, ProjectActivated, ProjectError};
use crate::ports::{
    notify_event, BudgetRepository, InitiativeRepository, Notifier, ProjectRepository,
};

/// Explicit CAPEX/OPEX figures from an approved feasibility report.
///
/// When supplied, these override the default activation split.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityBudget {
    pub capex: Money,
    pub annual_opex: Money,
}

/// Command to activate a project from the reserve bank or annual plan.
#[derive(Debug, Clone)]
pub struct ActivateProjectCommand {
    pub project_id: ProjectId,
    pub actor: Actor,
    pub feasibility_budget: Option<FeasibilityBudget>,
}

/// Result of a successful activation.
#[derive(Debug, Clone)]
pub struct ActivateProjectResult {
    pub project: Project,
    pub budget: Budget,
    /// True when activation had to create the budget.
    pub budget_created: bool,
}

/// Handler activating projects into execution.
///
/// Marks the originating initiative `activated` (stepping it along its
/// adjacency table with audit records), and creates the budget if none
/// exists yet: the default is the configured CAPEX/OPEX split of the
/// assigned amount, overridden verbatim by a feasibility budget when one
/// is supplied.
pub struct ActivateProjectHandler {
    projects: Arc<dyn ProjectRepository>,
    initiatives: Arc<dyn InitiativeRepository>,
    budgets: Arc<dyn BudgetRepository>,
    notifier: Arc<dyn Notifier>,
    config: GovernanceConfig,
}

impl ActivateProjectHandler {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        initiatives: Arc<dyn InitiativeRepository>,
        budgets: Arc<dyn BudgetRepository>,
        notifier: Arc<dyn Notifier>,
        config: GovernanceConfig,
    ) -> Self {
        Self {
            projects,
            initiatives,
            budgets,
            notifier,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: ActivateProjectCommand,
    ) -> Result<ActivateProjectResult, ProjectError> {
        let mut project = self
            .projects
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        project.activate()?;
        self.projects.update(&project).await?;

        self.mark_initiative_activated(&project, &cmd.actor).await?;

        let (budget, budget_created) = match self.budgets.find_budget(project.id()).await? {
            Some(existing) => (existing, false),
            None => {
                let budget = match cmd.feasibility_budget {
                    Some(feasibility) => Budget::new(
                        *project.id(),
                        feasibility.capex,
                        feasibility.annual_opex,
                        Some(cmd.actor.user_id().clone()),
                    ),
                    None => Budget::split_from_assignment(
                        *project.id(),
                        project.assigned_budget(),
                        self.config.activation_capex_share,
                        Some(cmd.actor.user_id().clone()),
                    ),
                };
                self.budgets.save_budget(&budget).await?;
                (budget, true)
            }
        };

        let event = ProjectActivated {
            event_id: EventId::new(),
            project_id: *project.id(),
            actor: cmd.actor.user_id().clone(),
            budget_created,
            assigned_budget: project.assigned_budget(),
            occurred_at: Timestamp::now(),
        };
        notify_event(self.notifier.as_ref(), &event).await;

        Ok(ActivateProjectResult {
            project,
            budget,
            budget_created,
        })
    }

    /// Steps the originating initiative along its lifecycle to
    /// `activated`, appending audit records for each edge.
    async fn mark_initiative_activated(
        &self,
        project: &Project,
        actor: &Actor,
    ) -> Result<(), ProjectError> {
        let Some(mut initiative) = self
            .initiatives
            .find_by_id(project.initiative_id())
            .await?
        else {
            warn!(
                initiative_id = %project.initiative_id(),
                "originating initiative missing at activation"
            );
            return Ok(());
        };

        let mut records = Vec::new();
        loop {
            let next = match initiative.status() {
                InitiativeStatus::Approved => InitiativeStatus::InReserveBank,
                InitiativeStatus::InReserveBank => InitiativeStatus::InAnnualPlan,
                InitiativeStatus::InAnnualPlan => InitiativeStatus::Activated,
                InitiativeStatus::Activated => break,
                other => {
                    warn!(
                        initiative_id = %initiative.id(),
                        status = %other,
                        "initiative in unexpected state at activation; leaving untouched"
                    );
                    return Ok(());
                }
            };
            let record = initiative.transition(
                next,
                actor.user_id(),
                Some("Project activated".to_string()),
            )?;
            records.push(record);
        }

        if !records.is_empty() {
            self.initiatives.update(&initiative).await?;
            for record in &records {
                self.initiatives.append_transition(record).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryBudgetRepository, InMemoryInitiativeRepository, InMemoryProjectRepository,
    };
    use crate::adapters::notifications::RecordingNotifier;
    use crate::domain::foundation::{InitiativeId, Percentage, Role, UserId};
    use crate::domain::initiative::Initiative;
    use crate::domain::project::ProjectStatus;

    struct Fixture {
        projects: Arc<InMemoryProjectRepository>,
        initiatives: Arc<InMemoryInitiativeRepository>,
        budgets: Arc<InMemoryBudgetRepository>,
        handler: ActivateProjectHandler,
    }

    fn fixture() -> Fixture {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let initiatives = Arc::new(InMemoryInitiativeRepository::new());
        let budgets = Arc::new(InMemoryBudgetRepository::new());
        let handler = ActivateProjectHandler::new(
            projects.clone(),
            initiatives.clone(),
            budgets.clone(),
            Arc::new(RecordingNotifier::new()),
            GovernanceConfig::default(),
        );
        Fixture {
            projects,
            initiatives,
            budgets,
            handler,
        }
    }

    fn lead() -> Actor {
        Actor::new(UserId::new("lead-1").unwrap(), Role::PortfolioLead)
    }

    /// Seeds an approved initiative plus its spawned project.
    async fn seed(fix: &Fixture, amount: i64) -> ProjectId {
        let mut initiative = Initiative::new(
            InitiativeId::new(),
            "Warehouse automation".to_string(),
            "Automate picking".to_string(),
            "Logistics".to_string(),
            Money::from_major(amount),
            Percentage::new(30),
            UserId::new("requester-1").unwrap(),
            &GovernanceConfig::default().investment_bands(),
        )
        .unwrap();
        let admin = Actor::new(UserId::new("admin-1").unwrap(), Role::Admin);
        let capability = admin.force_transition().unwrap();
        initiative.force_transition(
            InitiativeStatus::Approved,
            admin.user_id(),
            None,
            &capability,
        );
        fix.initiatives.save(&initiative).await.unwrap();

        let project = Project::spawn_from(&initiative);
        let id = *project.id();
        fix.projects.save_new(&project).await.unwrap();
        id
    }

    #[tokio::test]
    async fn activation_creates_default_split_budget() {
        let fix = fixture();
        let project_id = seed(&fix, 1_000).await;

        let result = fix
            .handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap();

        assert_eq!(result.project.status(), ProjectStatus::InExecution);
        assert!(result.budget_created);
        // 80/20 split of the assigned amount.
        assert_eq!(result.budget.approved_capex(), Money::from_major(800));
        assert_eq!(result.budget.projected_annual_opex(), Money::from_major(200));
        assert_eq!(result.budget.approved_by().unwrap().as_str(), "lead-1");
    }

    #[tokio::test]
    async fn feasibility_budget_overrides_the_split() {
        let fix = fixture();
        let project_id = seed(&fix, 1_000).await;

        let result = fix
            .handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: Some(FeasibilityBudget {
                    capex: Money::from_major(950),
                    annual_opex: Money::from_major(75),
                }),
            })
            .await
            .unwrap();

        assert!(result.budget_created);
        assert_eq!(result.budget.approved_capex(), Money::from_major(950));
        assert_eq!(result.budget.projected_annual_opex(), Money::from_major(75));
    }

    #[tokio::test]
    async fn existing_budget_is_left_untouched() {
        let fix = fixture();
        let project_id = seed(&fix, 1_000).await;
        let existing = Budget::new(project_id, Money::from_major(123), Money::ZERO, None);
        fix.budgets.save_budget(&existing).await.unwrap();

        let result = fix
            .handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap();

        assert!(!result.budget_created);
        assert_eq!(result.budget.approved_capex(), Money::from_major(123));
    }

    #[tokio::test]
    async fn activation_marks_initiative_activated_with_audit_trail() {
        let fix = fixture();
        let project_id = seed(&fix, 1_000).await;

        fix.handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap();

        let project = fix.projects.find_by_id(&project_id).await.unwrap().unwrap();
        let initiative = fix
            .initiatives
            .find_by_id(project.initiative_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(initiative.status(), InitiativeStatus::Activated);

        let trail = fix
            .initiatives
            .transitions_for(initiative.id())
            .await
            .unwrap();
        // approved -> in_reserve_bank -> in_annual_plan -> activated
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.last().unwrap().next(), InitiativeStatus::Activated);
    }

    #[tokio::test]
    async fn activating_a_running_project_fails() {
        let fix = fixture();
        let project_id = seed(&fix, 1_000).await;

        fix.handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap();

        let err = fix
            .handler
            .handle(ActivateProjectCommand {
                project_id,
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn unknown_project_fails_with_not_found() {
        let fix = fixture();
        let err = fix
            .handler
            .handle(ActivateProjectCommand {
                project_id: ProjectId::new(),
                actor: lead(),
                feasibility_budget: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
    }
}
