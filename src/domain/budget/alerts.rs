//! Budget overrun alert rules.
//!
//! Two independent checks that may both fire: a cost-overrun alert when
//! spend outpaces progress by more than the caller's threshold, and a
//! critical nearly-exhausted alert when the budget is almost gone with
//! the project still incomplete.

use serde::{Deserialize, Serialize};

use super::aggregate::Budget;
use crate::domain::foundation::Percentage;

/// Gap (in percentage points) above which a cost overrun escalates to
/// high severity.
pub const ESCALATION_GAP: f64 = 20.0;

/// Executed share above which the nearly-exhausted check arms.
const EXHAUSTION_EXECUTED_PCT: f64 = 90.0;

/// Progress below which the nearly-exhausted check fires.
const EXHAUSTION_PROGRESS_PCT: f64 = 80.0;

/// Kind of overrun alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    CostOverrun,
    BudgetNearlyExhausted,
}

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Medium,
    High,
    Critical,
}

/// One raised budget alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrunAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    /// Executed CAPEX as a share of approved CAPEX.
    pub executed_pct: f64,
    /// Reported project completion.
    pub progress_pct: f64,
}

/// Evaluates the overrun rules for a project's budget and progress.
///
/// A project with no approved CAPEX yields no alerts (there is nothing to
/// overrun). `alert_threshold` is the tolerated gap, in percentage
/// points, between executed share and completion.
pub fn check_overrun(
    budget: &Budget,
    percent_complete: Percentage,
    alert_threshold: f64,
) -> Vec<OverrunAlert> {
    if budget.approved_capex().is_zero() {
        return Vec::new();
    }

    let executed_pct = budget.executed_capex().pct_of(budget.approved_capex());
    let progress_pct = percent_complete.as_f64();
    let gap = executed_pct - progress_pct;

    let mut alerts = Vec::new();

    if gap > alert_threshold {
        let severity = if gap > ESCALATION_GAP {
            AlertSeverity::High
        } else {
            AlertSeverity::Medium
        };
        alerts.push(OverrunAlert {
            kind: AlertKind::CostOverrun,
            severity,
            message: format!("Cost overrun of {:.1} points versus reported progress", gap),
            executed_pct,
            progress_pct,
        });
    }

    if executed_pct > EXHAUSTION_EXECUTED_PCT && progress_pct < EXHAUSTION_PROGRESS_PCT {
        alerts.push(OverrunAlert {
            kind: AlertKind::BudgetNearlyExhausted,
            severity: AlertSeverity::Critical,
            message: "Budget nearly exhausted with project incomplete".to_string(),
            executed_pct,
            progress_pct,
        });
    }

    alerts
}
