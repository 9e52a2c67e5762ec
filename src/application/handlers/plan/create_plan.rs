//! CreateAnnualPlanHandler - Command handler opening a yearly envelope.

use std::sync::Arc;

use crate::domain::foundation::{Actor, ErrorCode, Money, PlanId};
use crate::domain::plan::{AnnualPlan, PlanError};
use crate::ports::PlanRepository;

/// Command to create the annual plan for a year.
#[derive(Debug, Clone)]
pub struct CreateAnnualPlanCommand {
    pub year: i32,
    pub name: String,
    pub total_budget: Money,
    pub actor: Actor,
}

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct CreateAnnualPlanResult {
    pub plan: AnnualPlan,
}

/// Handler creating annual plans (one per year).
pub struct CreateAnnualPlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl CreateAnnualPlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(
        &self,
        cmd: CreateAnnualPlanCommand,
    ) -> Result<CreateAnnualPlanResult, PlanError> {
        let plan = AnnualPlan::new(PlanId::new(), cmd.year, cmd.name, cmd.total_budget)?;

        match self.plans.save(&plan).await {
            Ok(()) => Ok(CreateAnnualPlanResult { plan }),
            Err(err) if err.code == ErrorCode::ConcurrencyConflict => {
                Err(PlanError::YearTaken(cmd.year))
            }
            Err(err) => Err(err.into()),
        }
    }
}
