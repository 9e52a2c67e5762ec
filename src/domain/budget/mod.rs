//! Budget module - CAPEX/OPEX tracking, NIIF classification, execution
//! S-curve and overrun alerting.

mod aggregate;
mod alerts;
mod change_request;
mod errors;
mod events;
mod execution;
mod niif;

pub use aggregate::{Budget, OpexCategory};
pub use alerts::{check_overrun, AlertKind, AlertSeverity, OverrunAlert, ESCALATION_GAP};
pub use change_request::{BudgetChangeRequest, ChangeStatus, ChangeType};
pub use errors::BudgetError;
pub use events::{
    BudgetAlertRaised, BudgetChangeApproved, BudgetChangeRejected, BudgetChangeRequested,
    ExecutionRecorded, ExpensesClassified,
};
pub use execution::{compute_s_curve, MonthlyExecutionRecord, SCurve, SCurvePoint};
pub use niif::{
    classify_expense, ClassificationSummary, ExpenseClassification, NiifTag, NiifThresholds,
};
