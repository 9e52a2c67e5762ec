//! Project module - delivery lifecycle of approved initiatives.

mod aggregate;
mod errors;
mod events;
mod health;
mod phase;
mod status;
mod tracking;

pub use aggregate::Project;
pub use errors::ProjectError;
pub use events::{
    ProjectActivated, ProjectClosed, ProjectCreated, ProjectHealthChanged, ProjectStateChanged,
};
pub use health::HealthSignal;
pub use phase::{Milestone, Phase, PhaseStatus};
pub use status::ProjectStatus;
pub use tracking::{
    Issue, IssueSeverity, IssueState, JournalEntry, JournalKind, Risk, RiskLevel, RiskState,
};
