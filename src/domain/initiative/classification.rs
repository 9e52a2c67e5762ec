//! Investment classification engine.
//!
//! A pure function of (estimated amount, transformation percentage) that
//! derives the investment tier and the feasibility report the tier
//! requires. The two amount thresholds split the portfolio into standard,
//! high and strategic bands; the transformation percentage refines the
//! non-strategic bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Money, Percentage};

/// Amount thresholds partitioning the investment bands.
///
/// The high band covers `standard_threshold ≤ amount ≤ high_threshold`;
/// anything above `high_threshold` is strategic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentBands {
    pub standard_threshold: Money,
    pub high_threshold: Money,
}

impl Default for InvestmentBands {
    fn default() -> Self {
        Self {
            standard_threshold: Money::from_major(300_000_000),
            high_threshold: Money::from_major(1_500_000_000),
        }
    }
}

/// Investment classification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentClass {
    /// Standard band, transformation below 50%.
    EstandarA,
    /// Standard band, transformation 50% or more.
    EstandarB,
    /// High band, transformation below 25%.
    AltaA,
    /// High band, transformation 25-75% inclusive.
    AltaB,
    /// High band, transformation above 75%.
    AltaC,
    /// Above the high threshold, regardless of transformation.
    Estrategica,
}

impl InvestmentClass {
    /// Returns the wire label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentClass::EstandarA => "estandar_a",
            InvestmentClass::EstandarB => "estandar_b",
            InvestmentClass::AltaA => "alta_a",
            InvestmentClass::AltaB => "alta_b",
            InvestmentClass::AltaC => "alta_c",
            InvestmentClass::Estrategica => "estrategica",
        }
    }
}

impl fmt::Display for InvestmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feasibility report format required for an investment tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// Standard-band report.
    V1,
    /// High-band report.
    V2,
    /// Strategic report.
    V3,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportType::V1 => "V1",
            ReportType::V2 => "V2",
            ReportType::V3 => "V3",
        };
        write!(f, "{}", s)
    }
}

/// Classifies an investment by amount and transformation percentage.
///
/// Band boundaries: an amount equal to `standard_threshold` already falls
/// in the high band, and an amount equal to `high_threshold` stays in the
/// high band. Transformation 25 and 75 both land in `alta_b`.
pub fn classify(
    amount: Money,
    transformation: Percentage,
    bands: &InvestmentBands,
) -> (InvestmentClass, ReportType) {
    if amount > bands.high_threshold {
        return (InvestmentClass::Estrategica, ReportType::V3);
    }

    let t = transformation.value();
    if amount >= bands.standard_threshold {
        let class = if t < 25 {
            InvestmentClass::AltaA
        } else if t <= 75 {
            InvestmentClass::AltaB
        } else {
            InvestmentClass::AltaC
        };
        (class, ReportType::V2)
    } else {
        let class = if t < 50 {
            InvestmentClass::EstandarA
        } else {
            InvestmentClass::EstandarB
        };
        (class, ReportType::V1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify_major(amount: i64, transformation: u8) -> (InvestmentClass, ReportType) {
        classify(
            Money::from_major(amount),
            Percentage::new(transformation),
            &InvestmentBands::default(),
        )
    }

    #[test]
    fn amount_below_standard_threshold_is_standard_band() {
        assert_eq!(
            classify_major(299_999_999, 40),
            (InvestmentClass::EstandarA, ReportType::V1)
        );
    }

    #[test]
    fn amount_at_standard_threshold_enters_high_band() {
        assert_eq!(
            classify_major(300_000_000, 40),
            (InvestmentClass::AltaB, ReportType::V2)
        );
    }

    #[test]
    fn amount_at_high_threshold_stays_high_band() {
        assert_eq!(
            classify_major(1_500_000_000, 40),
            (InvestmentClass::AltaB, ReportType::V2)
        );
    }

    #[test]
    fn amount_above_high_threshold_is_strategic_regardless_of_transformation() {
        for t in [0, 25, 75, 100] {
            assert_eq!(
                classify_major(1_500_000_001, t),
                (InvestmentClass::Estrategica, ReportType::V3)
            );
        }
    }

    #[test]
    fn high_band_transformation_boundaries() {
        assert_eq!(classify_major(500_000_000, 24).0, InvestmentClass::AltaA);
        assert_eq!(classify_major(500_000_000, 25).0, InvestmentClass::AltaB);
        assert_eq!(classify_major(500_000_000, 75).0, InvestmentClass::AltaB);
        assert_eq!(classify_major(500_000_000, 76).0, InvestmentClass::AltaC);
    }

    #[test]
    fn standard_band_transformation_boundary() {
        assert_eq!(classify_major(100_000_000, 49).0, InvestmentClass::EstandarA);
        assert_eq!(classify_major(100_000_000, 50).0, InvestmentClass::EstandarB);
    }

    #[test]
    fn tiers_serialize_with_wire_labels() {
        assert_eq!(
            serde_json::to_string(&InvestmentClass::EstandarA).unwrap(),
            "\"estandar_a\""
        );
        assert_eq!(
            serde_json::to_string(&InvestmentClass::AltaC).unwrap(),
            "\"alta_c\""
        );
    }

    proptest! {
        #[test]
        fn report_type_matches_band(amount in 0i64..2_000_000_000, t in 0u8..=100) {
            let bands = InvestmentBands::default();
            let (_, report) = classify(Money::from_major(amount), Percentage::new(t), &bands);
            let expected = if Money::from_major(amount) > bands.high_threshold {
                ReportType::V3
            } else if Money::from_major(amount) >= bands.standard_threshold {
                ReportType::V2
            } else {
                ReportType::V1
            };
            prop_assert_eq!(report, expected);
        }

        #[test]
        fn classification_is_deterministic(amount in 0i64..2_000_000_000, t in 0u8..=100) {
            let bands = InvestmentBands::default();
            let first = classify(Money::from_major(amount), Percentage::new(t), &bands);
            let second = classify(Money::from_major(amount), Percentage::new(t), &bands);
            prop_assert_eq!(first, second);
        }
    }
}
