//! Project risks, issues and journal entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Qualitative risk level for probability and impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Lifecycle of an identified risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskState {
    #[default]
    Open,
    Mitigated,
    Closed,
}

/// An identified project risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub description: String,
    pub probability: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: Option<String>,
    pub contingency_plan: Option<String>,
    pub state: RiskState,
    pub owner: Option<UserId>,
    pub identified_at: Timestamp,
    pub closed_at: Option<Timestamp>,
}

impl Risk {
    /// Registers an open risk with default medium probability and impact.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            probability: RiskLevel::Medium,
            impact: RiskLevel::Medium,
            mitigation: None,
            contingency_plan: None,
            state: RiskState::Open,
            owner: None,
            identified_at: Timestamp::now(),
            closed_at: None,
        }
    }
}

/// Severity of a materialized issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Lifecycle of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    #[default]
    Open,
    InProgress,
    Resolved,
}

/// A materialized problem being worked on the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub description: String,
    pub severity: IssueSeverity,
    pub state: IssueState,
    pub owner: Option<UserId>,
    pub resolution: Option<String>,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl Issue {
    /// Opens a new issue at medium severity.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: IssueSeverity::Medium,
            state: IssueState::Open,
            owner: None,
            resolution: None,
            created_at: Timestamp::now(),
            resolved_at: None,
        }
    }
}

/// Category of a journal entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalKind {
    Decision,
    Change,
    #[default]
    Note,
    Escalation,
    HealthChange,
}

/// Append-only project journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub kind: JournalKind,
    pub description: String,
    pub author: UserId,
    pub occurred_at: Timestamp,
}

impl JournalEntry {
    /// Creates a journal entry stamped now.
    pub fn new(kind: JournalKind, description: impl Into<String>, author: UserId) -> Self {
        Self {
            kind,
            description: description.into(),
            author,
            occurred_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_risk_defaults_to_open_medium() {
        let risk = Risk::new("Vendor delivery slips");
        assert_eq!(risk.state, RiskState::Open);
        assert_eq!(risk.probability, RiskLevel::Medium);
        assert_eq!(risk.impact, RiskLevel::Medium);
    }

    #[test]
    fn issue_severity_orders_low_to_critical() {
        assert!(IssueSeverity::Low < IssueSeverity::Medium);
        assert!(IssueSeverity::High < IssueSeverity::Critical);
    }

    #[test]
    fn journal_entry_records_author_and_kind() {
        let entry = JournalEntry::new(
            JournalKind::HealthChange,
            "health green -> red",
            UserId::new("pm-1").unwrap(),
        );
        assert_eq!(entry.kind, JournalKind::HealthChange);
        assert_eq!(entry.author.as_str(), "pm-1");
    }
}
