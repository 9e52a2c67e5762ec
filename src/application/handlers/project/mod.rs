//! Project command handlers.

mod activate_project;
mod close_project;
mod update_health;

pub use activate_project::{
    ActivateProjectCommand, ActivateProjectHandler, ActivateProjectResult, FeasibilityBudget,
};
pub use close_project::{CloseProjectCommand, CloseProjectHandler, CloseProjectResult};
pub use update_health::{
    UpdateProjectHealthCommand, UpdateProjectHealthHandler, UpdateProjectHealthResult,
};
