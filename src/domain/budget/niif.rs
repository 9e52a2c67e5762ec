//! NIIF accounting classification engine.
//!
//! Two-stage rule: a fixed expense-type matrix proposes a base tag, then
//! monetary/duration thresholds may downgrade it to OPEX. The thresholds
//! override the nominal type mapping, never the reverse.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{Money, ProjectId, Timestamp};

/// NIIF classification tag for an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NiifTag {
    /// IAS 38 intangible asset.
    CapexIntangible,
    /// IAS 16 property, plant and equipment.
    CapexTangible,
    /// IFRS 16 right-of-use asset.
    RightOfUse,
    /// IAS 1 period expense.
    Opex,
}

impl NiifTag {
    /// Returns true for the capital-expenditure tags.
    pub fn is_capex(&self) -> bool {
        matches!(self, NiifTag::CapexIntangible | NiifTag::CapexTangible)
    }

    /// Statutory basis attached to each classification for the audit file.
    pub fn statutory_basis(&self) -> &'static str {
        match self {
            NiifTag::CapexIntangible => {
                "IAS 38 Intangible Assets: identifiable non-monetary resource without \
                 physical substance expected to yield future economic benefits."
            }
            NiifTag::CapexTangible => {
                "IAS 16 Property, Plant and Equipment: tangible assets held for use in \
                 the production or supply of goods and services."
            }
            NiifTag::RightOfUse => {
                "IFRS 16 Leases: right to use an underlying asset over the lease term, \
                 recognized for contracts over 12 months above the monetary threshold."
            }
            NiifTag::Opex => {
                "IAS 1 Presentation of Financial Statements: expenditure that does not \
                 meet capitalization criteria and is recognized in period results."
            }
        }
    }

    /// Returns the wire label for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            NiifTag::CapexIntangible => "capex_intangible",
            NiifTag::CapexTangible => "capex_tangible",
            NiifTag::RightOfUse => "right_of_use",
            NiifTag::Opex => "opex",
        }
    }
}

impl fmt::Display for NiifTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monetary thresholds for the downgrade stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiifThresholds {
    /// CAPEX tags below this amount are expensed as OPEX.
    pub capex_threshold: Money,
    /// Right-of-use below this amount is expensed as OPEX.
    pub right_of_use_threshold: Money,
}

impl Default for NiifThresholds {
    fn default() -> Self {
        Self {
            capex_threshold: Money::from_major(500_000),
            right_of_use_threshold: Money::from_major(5_000_000),
        }
    }
}

/// Expense-type catalog, keyed by the normalized procurement labels.
static EXPENSE_TAG_MATRIX: Lazy<HashMap<&'static str, NiifTag>> = Lazy::new(|| {
    HashMap::from([
        // Software and development
        ("desarrollo_software", NiifTag::CapexIntangible),
        ("licencias_perpetuas", NiifTag::CapexIntangible),
        ("licencias_saas", NiifTag::Opex),
        ("licencias_saas_largo_plazo", NiifTag::RightOfUse),
        // Hardware and infrastructure
        ("servidores", NiifTag::CapexTangible),
        ("equipos_red", NiifTag::CapexTangible),
        ("equipos_computo", NiifTag::CapexTangible),
        // Services
        ("consultoria", NiifTag::Opex),
        ("capacitacion", NiifTag::Opex),
        ("soporte_mantenimiento", NiifTag::Opex),
        // Leases
        ("arrendamiento_equipos", NiifTag::RightOfUse),
        ("arrendamiento_datacenter", NiifTag::RightOfUse),
    ])
});

/// Classifies an expense line.
///
/// Looks up the base tag by normalized expense type (unknown types default
/// to OPEX), then applies the threshold downgrades: CAPEX below the CAPEX
/// threshold becomes OPEX; right-of-use below its threshold or with a
/// duration of 12 months or less becomes OPEX.
pub fn classify_expense(
    expense_type: &str,
    amount: Money,
    duration_months: u32,
    thresholds: &NiifThresholds,
) -> NiifTag {
    let normalized = expense_type.trim().to_lowercase().replace(' ', "_");
    let base = EXPENSE_TAG_MATRIX
        .get(normalized.as_str())
        .copied()
        .unwrap_or(NiifTag::Opex);

    if base.is_capex() && amount < thresholds.capex_threshold {
        return NiifTag::Opex;
    }

    if base == NiifTag::RightOfUse
        && (amount < thresholds.right_of_use_threshold || duration_months <= 12)
    {
        return NiifTag::Opex;
    }

    base
}

/// One classified expense line for a project. Append-only: corrections
/// are new entries, never edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseClassification {
    project_id: ProjectId,
    expense_type: String,
    description: Option<String>,
    tag: NiifTag,
    amount: Money,
    justification: String,
    recorded_at: Timestamp,
}

impl ExpenseClassification {
    /// Records a classified expense with its statutory justification.
    pub fn new(
        project_id: ProjectId,
        expense_type: String,
        description: Option<String>,
        tag: NiifTag,
        amount: Money,
    ) -> Self {
        Self {
            project_id,
            expense_type,
            description,
            tag,
            amount,
            justification: tag.statutory_basis().to_string(),
            recorded_at: Timestamp::now(),
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn expense_type(&self) -> &str {
        &self.expense_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tag(&self) -> NiifTag {
        self.tag
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}

/// Per-tag rollup of a batch of classified expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub capex_intangible: Money,
    pub capex_tangible: Money,
    pub right_of_use: Money,
    pub opex: Money,
}

impl ClassificationSummary {
    /// Totals a set of classified expenses by tag.
    pub fn from_classifications(classifications: &[ExpenseClassification]) -> Self {
        let mut summary = Self::default();
        for c in classifications {
            match c.tag() {
                NiifTag::CapexIntangible => summary.capex_intangible += c.amount(),
                NiifTag::CapexTangible => summary.capex_tangible += c.amount(),
                NiifTag::RightOfUse => summary.right_of_use += c.amount(),
                NiifTag::Opex => summary.opex += c.amount(),
            }
        }
        summary
    }

    /// Combined capital expenditure (tangible + intangible).
    pub fn total_capex(&self) -> Money {
        self.capex_intangible + self.capex_tangible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(expense_type: &str, amount: i64, duration: u32) -> NiifTag {
        classify_expense(
            expense_type,
            Money::from_major(amount),
            duration,
            &NiifThresholds::default(),
        )
    }

    #[test]
    fn servers_below_capex_threshold_downgrade_to_opex() {
        assert_eq!(classify("servidores", 400_000, 12), NiifTag::Opex);
    }

    #[test]
    fn servers_at_or_above_capex_threshold_stay_tangible() {
        assert_eq!(classify("servidores", 500_000, 12), NiifTag::CapexTangible);
        assert_eq!(classify("servidores", 900_000, 12), NiifTag::CapexTangible);
    }

    #[test]
    fn software_development_is_intangible_above_threshold() {
        assert_eq!(
            classify("desarrollo_software", 2_000_000, 12),
            NiifTag::CapexIntangible
        );
        assert_eq!(classify("desarrollo_software", 100_000, 12), NiifTag::Opex);
    }

    #[test]
    fn right_of_use_requires_amount_and_duration() {
        assert_eq!(
            classify("arrendamiento_datacenter", 6_000_000, 24),
            NiifTag::RightOfUse
        );
        // Below the monetary threshold.
        assert_eq!(classify("arrendamiento_datacenter", 4_000_000, 24), NiifTag::Opex);
        // Twelve months or shorter.
        assert_eq!(classify("arrendamiento_datacenter", 6_000_000, 12), NiifTag::Opex);
        assert_eq!(classify("arrendamiento_datacenter", 6_000_000, 13), NiifTag::RightOfUse);
    }

    #[test]
    fn unknown_expense_types_default_to_opex() {
        assert_eq!(classify("catering", 10_000_000, 36), NiifTag::Opex);
    }

    #[test]
    fn expense_type_is_normalized_before_lookup() {
        assert_eq!(classify("  Equipos Computo ", 800_000, 12), NiifTag::CapexTangible);
    }

    #[test]
    fn pure_opex_types_are_never_upgraded() {
        assert_eq!(classify("consultoria", 50_000_000, 48), NiifTag::Opex);
        assert_eq!(classify("licencias_saas", 50_000_000, 48), NiifTag::Opex);
    }

    #[test]
    fn classification_record_carries_statutory_justification() {
        let record = ExpenseClassification::new(
            ProjectId::new(),
            "servidores".to_string(),
            None,
            NiifTag::CapexTangible,
            Money::from_major(900_000),
        );
        assert!(record.justification().starts_with("IAS 16"));
    }

    #[test]
    fn summary_totals_by_tag() {
        let project_id = ProjectId::new();
        let entries = vec![
            ExpenseClassification::new(
                project_id,
                "desarrollo_software".to_string(),
                None,
                NiifTag::CapexIntangible,
                Money::from_major(2_000_000),
            ),
            ExpenseClassification::new(
                project_id,
                "servidores".to_string(),
                None,
                NiifTag::CapexTangible,
                Money::from_major(800_000),
            ),
            ExpenseClassification::new(
                project_id,
                "consultoria".to_string(),
                None,
                NiifTag::Opex,
                Money::from_major(300_000),
            ),
        ];
        let summary = ClassificationSummary::from_classifications(&entries);
        assert_eq!(summary.capex_intangible, Money::from_major(2_000_000));
        assert_eq!(summary.capex_tangible, Money::from_major(800_000));
        assert_eq!(summary.total_capex(), Money::from_major(2_800_000));
        assert_eq!(summary.opex, Money::from_major(300_000));
        assert_eq!(summary.right_of_use, Money::ZERO);
    }

    #[test]
    fn niif_tag_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&NiifTag::CapexTangible).unwrap(),
            "\"capex_tangible\""
        );
        assert_eq!(serde_json::to_string(&NiifTag::RightOfUse).unwrap(), "\"right_of_use\"");
    }
}
