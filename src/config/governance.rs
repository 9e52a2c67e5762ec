//! Governance thresholds configuration.
//!
//! Every rule-engine threshold is carried here and passed explicitly
//! into engine calls, never read from ambient process state, so tests
//! can run in parallel with different threshold sets.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::budget::NiifThresholds;
use crate::domain::foundation::Money;
use crate::domain::initiative::InvestmentBands;

/// Thresholds driving classification, evaluation and budget alerting.
///
/// Monetary values are in whole currency units. Defaults match the
/// governance policy in force.
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceConfig {
    /// Amounts at or above this enter the high investment band.
    #[serde(default = "default_standard_investment_threshold")]
    pub standard_investment_threshold: i64,

    /// Amounts above this are strategic.
    #[serde(default = "default_high_investment_threshold")]
    pub high_investment_threshold: i64,

    /// CAPEX expenses below this are reclassified as OPEX.
    #[serde(default = "default_capex_threshold")]
    pub capex_threshold: i64,

    /// Right-of-use expenses below this are reclassified as OPEX.
    #[serde(default = "default_right_of_use_threshold")]
    pub right_of_use_threshold: i64,

    /// Minimum mean committee score for approval.
    #[serde(default = "default_committee_approval_threshold")]
    pub committee_approval_threshold: f64,

    /// CAPEX share (percent) of the default budget split at activation.
    #[serde(default = "default_activation_capex_share")]
    pub activation_capex_share: u8,

    /// Default tolerated gap (points) between executed share and progress.
    #[serde(default = "default_overrun_alert_gap")]
    pub overrun_alert_gap: f64,
}

fn default_standard_investment_threshold() -> i64 {
    300_000_000
}

fn default_high_investment_threshold() -> i64 {
    1_500_000_000
}

fn default_capex_threshold() -> i64 {
    500_000
}

fn default_right_of_use_threshold() -> i64 {
    5_000_000
}

fn default_committee_approval_threshold() -> f64 {
    80.0
}

fn default_activation_capex_share() -> u8 {
    80
}

fn default_overrun_alert_gap() -> f64 {
    10.0
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            standard_investment_threshold: default_standard_investment_threshold(),
            high_investment_threshold: default_high_investment_threshold(),
            capex_threshold: default_capex_threshold(),
            right_of_use_threshold: default_right_of_use_threshold(),
            committee_approval_threshold: default_committee_approval_threshold(),
            activation_capex_share: default_activation_capex_share(),
            overrun_alert_gap: default_overrun_alert_gap(),
        }
    }
}

impl GovernanceConfig {
    /// Investment bands for the classification engine.
    pub fn investment_bands(&self) -> InvestmentBands {
        InvestmentBands {
            standard_threshold: Money::from_major(self.standard_investment_threshold),
            high_threshold: Money::from_major(self.high_investment_threshold),
        }
    }

    /// Monetary thresholds for the NIIF engine.
    pub fn niif_thresholds(&self) -> NiifThresholds {
        NiifThresholds {
            capex_threshold: Money::from_major(self.capex_threshold),
            right_of_use_threshold: Money::from_major(self.right_of_use_threshold),
        }
    }

    /// Validates internal consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.standard_investment_threshold < 0 {
            return Err(ValidationError::NegativeThreshold("standard_investment_threshold"));
        }
        if self.high_investment_threshold < 0 {
            return Err(ValidationError::NegativeThreshold("high_investment_threshold"));
        }
        if self.capex_threshold < 0 {
            return Err(ValidationError::NegativeThreshold("capex_threshold"));
        }
        if self.right_of_use_threshold < 0 {
            return Err(ValidationError::NegativeThreshold("right_of_use_threshold"));
        }
        if self.standard_investment_threshold >= self.high_investment_threshold {
            return Err(ValidationError::ThresholdOrdering);
        }
        if !(0.0..=100.0).contains(&self.committee_approval_threshold) {
            return Err(ValidationError::InvalidApprovalThreshold);
        }
        if self.activation_capex_share > 100 {
            return Err(ValidationError::InvalidCapexShare);
        }
        if self.overrun_alert_gap < 0.0 {
            return Err(ValidationError::InvalidAlertGap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_governance_policy() {
        let config = GovernanceConfig::default();
        assert_eq!(config.standard_investment_threshold, 300_000_000);
        assert_eq!(config.high_investment_threshold, 1_500_000_000);
        assert_eq!(config.capex_threshold, 500_000);
        assert_eq!(config.right_of_use_threshold, 5_000_000);
        assert_eq!(config.committee_approval_threshold, 80.0);
        assert_eq!(config.activation_capex_share, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn investment_bands_convert_to_money() {
        let bands = GovernanceConfig::default().investment_bands();
        assert_eq!(bands.standard_threshold, Money::from_major(300_000_000));
        assert_eq!(bands.high_threshold, Money::from_major(1_500_000_000));
    }

    #[test]
    fn inverted_thresholds_fail_validation() {
        let config = GovernanceConfig {
            standard_investment_threshold: 2_000_000_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::ThresholdOrdering));
    }

    #[test]
    fn capex_share_above_100_fails_validation() {
        let config = GovernanceConfig {
            activation_capex_share: 101,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCapexShare));
    }

    #[test]
    fn negative_alert_gap_fails_validation() {
        let config = GovernanceConfig {
            overrun_alert_gap: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAlertGap));
    }
}
