//! Monthly execution tracking and the cumulative S-curve.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Percentage, Period, ProjectId, Timestamp};

/// Planned and actual execution for one (project, period).
///
/// Upserted by period: a second write for the same period replaces the
/// first rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyExecutionRecord {
    project_id: ProjectId,
    period: Period,
    planned_capex: Money,
    executed_capex: Money,
    planned_progress: Percentage,
    actual_progress: Percentage,
    comment: Option<String>,
    recorded_at: Timestamp,
}

impl MonthlyExecutionRecord {
    /// Creates a record for one period.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_id: ProjectId,
        period: Period,
        planned_capex: Money,
        executed_capex: Money,
        planned_progress: Percentage,
        actual_progress: Percentage,
        comment: Option<String>,
    ) -> Self {
        Self {
            project_id,
            period,
            planned_capex,
            executed_capex,
            planned_progress,
            actual_progress,
            comment,
            recorded_at: Timestamp::now(),
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn planned_capex(&self) -> Money {
        self.planned_capex
    }

    pub fn executed_capex(&self) -> Money {
        self.executed_capex
    }

    pub fn planned_progress(&self) -> Percentage {
        self.planned_progress
    }

    pub fn actual_progress(&self) -> Percentage {
        self.actual_progress
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}

/// One point of the S-curve series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SCurvePoint {
    pub period: Period,
    pub planned_monthly: Money,
    pub executed_monthly: Money,
    pub planned_cumulative: Money,
    pub executed_cumulative: Money,
    pub planned_progress: Percentage,
    pub actual_progress: Percentage,
}

/// Cumulative planned-vs-executed spend over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SCurve {
    pub points: Vec<SCurvePoint>,
    pub approved_capex: Money,
    pub total_planned: Money,
    pub total_executed: Money,
    /// Cost variance percentage, rounded to two decimals.
    /// Zero planned spend reports zero variance, not a division error.
    pub cost_variance_pct: f64,
    /// Naive forecast at completion: the executed cumulative to date.
    pub forecast_at_completion: Money,
}

/// Builds the S-curve from execution records, ordered by period.
pub fn compute_s_curve(records: &[MonthlyExecutionRecord], approved_capex: Money) -> SCurve {
    let mut ordered: Vec<&MonthlyExecutionRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.period());

    let mut points = Vec::with_capacity(ordered.len());
    let mut planned_cumulative = Money::ZERO;
    let mut executed_cumulative = Money::ZERO;

    for record in ordered {
        planned_cumulative += record.planned_capex();
        executed_cumulative += record.executed_capex();
        points.push(SCurvePoint {
            period: record.period(),
            planned_monthly: record.planned_capex(),
            executed_monthly: record.executed_capex(),
            planned_cumulative,
            executed_cumulative,
            planned_progress: record.planned_progress(),
            actual_progress: record.actual_progress(),
        });
    }

    let cost_variance_pct = if planned_cumulative.is_zero() {
        0.0
    } else {
        let raw = (executed_cumulative - planned_cumulative).cents() as f64
            / planned_cumulative.cents() as f64
            * 100.0;
        (raw * 100.0).round() / 100.0
    };

    SCurve {
        points,
        approved_capex,
        total_planned: planned_cumulative,
        total_executed: executed_cumulative,
        cost_variance_pct,
        forecast_at_completion: executed_cumulative,
    }
}
