//! Bounded dimension score groups for committee evaluations.
//!
//! Unlike the priority scoring engine, committee sub-scores are validated
//! rather than clamped: an out-of-range value is an input error, because
//! the evaluation sheet is filled by a person and a silent clamp would
//! hide a data-entry mistake.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Dimension 1: justification and benefits (max 35).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustificationScores {
    problem_clarity: u8,
    quantified_benefits: u8,
    strategic_alignment: u8,
}

impl JustificationScores {
    pub const MAX_SUBTOTAL: u8 = 35;

    /// Creates validated justification scores (bounds 10/15/10).
    pub fn new(
        problem_clarity: u8,
        quantified_benefits: u8,
        strategic_alignment: u8,
    ) -> Result<Self, ValidationError> {
        check_bound("problem_clarity", problem_clarity, 10)?;
        check_bound("quantified_benefits", quantified_benefits, 15)?;
        check_bound("strategic_alignment", strategic_alignment, 10)?;
        Ok(Self {
            problem_clarity,
            quantified_benefits,
            strategic_alignment,
        })
    }

    pub fn problem_clarity(&self) -> u8 {
        self.problem_clarity
    }

    pub fn quantified_benefits(&self) -> u8 {
        self.quantified_benefits
    }

    pub fn strategic_alignment(&self) -> u8 {
        self.strategic_alignment
    }

    /// Arithmetic sum of the sub-scores.
    pub fn subtotal(&self) -> u8 {
        self.problem_clarity + self.quantified_benefits + self.strategic_alignment
    }
}

/// Dimension 2: technical solution (max 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalScores {
    architecture: u8,
    integration: u8,
    security: u8,
    scalability: u8,
}

impl TechnicalScores {
    pub const MAX_SUBTOTAL: u8 = 40;

    /// Creates validated technical scores (bounds 15/10/10/5).
    pub fn new(
        architecture: u8,
        integration: u8,
        security: u8,
        scalability: u8,
    ) -> Result<Self, ValidationError> {
        check_bound("architecture", architecture, 15)?;
        check_bound("integration", integration, 10)?;
        check_bound("security", security, 10)?;
        check_bound("scalability", scalability, 5)?;
        Ok(Self {
            architecture,
            integration,
            security,
            scalability,
        })
    }

    pub fn architecture(&self) -> u8 {
        self.architecture
    }

    pub fn integration(&self) -> u8 {
        self.integration
    }

    pub fn security(&self) -> u8 {
        self.security
    }

    pub fn scalability(&self) -> u8 {
        self.scalability
    }

    /// Arithmetic sum of the sub-scores.
    pub fn subtotal(&self) -> u8 {
        self.architecture + self.integration + self.security + self.scalability
    }
}

/// Dimension 3: economic analysis (max 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicScores {
    detailed_budget: u8,
    roi_tco: u8,
    financial_risk: u8,
}

impl EconomicScores {
    pub const MAX_SUBTOTAL: u8 = 25;

    /// Creates validated economic scores (bounds 10/10/5).
    pub fn new(
        detailed_budget: u8,
        roi_tco: u8,
        financial_risk: u8,
    ) -> Result<Self, ValidationError> {
        check_bound("detailed_budget", detailed_budget, 10)?;
        check_bound("roi_tco", roi_tco, 10)?;
        check_bound("financial_risk", financial_risk, 5)?;
        Ok(Self {
            detailed_budget,
            roi_tco,
            financial_risk,
        })
    }

    pub fn detailed_budget(&self) -> u8 {
        self.detailed_budget
    }

    pub fn roi_tco(&self) -> u8 {
        self.roi_tco
    }

    pub fn financial_risk(&self) -> u8 {
        self.financial_risk
    }

    /// Arithmetic sum of the sub-scores.
    pub fn subtotal(&self) -> u8 {
        self.detailed_budget + self.roi_tco + self.financial_risk
    }
}

/// The three dimension groups of one evaluation (nominal max 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub justification: JustificationScores,
    pub technical: TechnicalScores,
    pub economic: EconomicScores,
}

impl DimensionScores {
    /// Sum of the three dimension subtotals (0-100).
    pub fn total(&self) -> u8 {
        self.justification.subtotal() + self.technical.subtotal() + self.economic.subtotal()
    }
}

fn check_bound(field: &'static str, value: u8, max: u8) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::out_of_range(
            field,
            0,
            i64::from(max),
            i64::from(value),
        ));
    }
    Ok(())
}
