//! Annual plan command handlers.

mod assign_project;
mod create_plan;
mod remove_project;

#[cfg(test)]
pub(crate) mod test_support;

pub use assign_project::{
    AssignProjectToPlanCommand, AssignProjectToPlanHandler, AssignProjectToPlanResult,
};
pub use create_plan::{CreateAnnualPlanCommand, CreateAnnualPlanHandler, CreateAnnualPlanResult};
pub use remove_project::{
    RemoveProjectFromPlanCommand, RemoveProjectFromPlanHandler, RemoveProjectFromPlanResult,
};
