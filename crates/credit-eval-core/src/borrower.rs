//! Borrower records: raw inputs plus derived verdicts, frozen at creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, Eligibility, RiskLevel, ThresholdProfile};
use crate::error::CreditEvalError;
use crate::scoring::{self, PaymentSignal};
use crate::types::{Money, Ratio, Score};
use crate::CreditEvalResult;

/// Placeholder for itemized debts entered without a name.
pub const UNNAMED_DEBT: &str = "Unnamed Debt";

/// Tabular column order consumed by renderers.
pub const COLUMNS: [&str; 9] = [
    "Name",
    "Income",
    "Debts",
    "DTI",
    "Loan Amount",
    "Score",
    "Eligibility",
    "Risk Level",
    "Debt Details",
];

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// One itemized debt position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtItem {
    pub name: String,
    pub amount: Money,
}

/// Raw borrower input, as collected by whatever front end is in use.
///
/// When `debt_details` is non-empty, `debts` is ignored and replaced by the
/// sum of the itemized amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerDraft {
    #[serde(default)]
    pub name: Option<String>,
    pub income: Money,
    #[serde(default)]
    pub debts: Money,
    #[serde(default)]
    pub debt_details: Vec<DebtItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Money>,
    pub payment: PaymentSignal,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One evaluated borrower.
///
/// `score`, `dti`, `eligibility`, and `risk_level` are pure functions of the
/// raw fields, computed once at construction. Records are frozen afterwards;
/// the registry only ever hands out shared references.
#[derive(Debug, Clone, Serialize)]
pub struct BorrowerRecord {
    pub id: u64,
    pub name: String,
    pub income: Money,
    pub debts: Money,
    pub debt_details: Vec<DebtItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Money>,
    pub payment: PaymentSignal,
    pub payment_ratio: Ratio,
    pub score: Score,
    pub dti: Ratio,
    pub eligibility: Eligibility,
    pub risk_level: RiskLevel,
    /// Name of the threshold profile that produced the verdicts.
    pub profile: String,
}

impl BorrowerRecord {
    /// Evaluate a draft under a profile, assigning the given id.
    ///
    /// Construction order: normalize strings, aggregate itemized debts,
    /// validate ranges, score, classify, freeze.
    pub fn evaluate(
        draft: BorrowerDraft,
        profile: &ThresholdProfile,
        id: u64,
    ) -> CreditEvalResult<Self> {
        let name = match draft.name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(CreditEvalError::InvalidInput {
                        field: "name".into(),
                        reason: "Borrower name must not be blank.".into(),
                    });
                }
                title_case(trimmed)
            }
            // Generated batches carry no names; fall back to the id.
            None => format!("Client {id}"),
        };

        let mut debt_details = Vec::with_capacity(draft.debt_details.len());
        for item in draft.debt_details {
            if item.amount < Decimal::ZERO {
                return Err(CreditEvalError::InvalidInput {
                    field: "debt_details".into(),
                    reason: format!("Debt '{}' has a negative amount.", item.name.trim()),
                });
            }
            let label = if item.name.trim().is_empty() {
                UNNAMED_DEBT.to_string()
            } else {
                title_case(item.name.trim())
            };
            debt_details.push(DebtItem {
                name: label,
                amount: item.amount,
            });
        }

        let debts = if debt_details.is_empty() {
            draft.debts
        } else {
            debt_details.iter().map(|d| d.amount).sum()
        };

        if let Some(loan) = draft.loan_amount {
            if loan < Decimal::ZERO {
                return Err(CreditEvalError::InvalidInput {
                    field: "loan_amount".into(),
                    reason: "Requested loan amount cannot be negative.".into(),
                });
            }
        }

        let score = scoring::compute_score(profile.formula, draft.income, debts, &draft.payment)?;
        let payment_ratio = draft.payment.ratio()?;
        let dti = scoring::debt_to_income_ratio(debts, draft.income);
        let classification = classify(score, profile);

        Ok(BorrowerRecord {
            id,
            name,
            income: draft.income,
            debts,
            debt_details,
            loan_amount: draft.loan_amount,
            payment: draft.payment,
            payment_ratio,
            score,
            dti,
            eligibility: classification.eligibility,
            risk_level: classification.risk_level,
            profile: profile.name.to_string(),
        })
    }

    /// Display label for the verdict under the profile that produced it.
    pub fn verdict_label(&self) -> &'static str {
        match ThresholdProfile::by_name(&self.profile) {
            Some(p) => p.label_for(self.eligibility),
            None => match self.eligibility {
                Eligibility::Eligible => "Eligible",
                Eligibility::NotEligible => "Not Eligible",
            },
        }
    }

    /// Ordered tabular view, aligned with [`COLUMNS`].
    pub fn columns(&self) -> Vec<(&'static str, String)> {
        let loan = match self.loan_amount {
            Some(amount) => amount.to_string(),
            None => "-".to_string(),
        };
        let details = if self.debt_details.is_empty() {
            "-".to_string()
        } else {
            self.debt_details
                .iter()
                .map(|d| format!("{}: {}", d.name, d.amount))
                .collect::<Vec<_>>()
                .join("; ")
        };
        vec![
            ("Name", self.name.clone()),
            ("Income", self.income.to_string()),
            ("Debts", self.debts.to_string()),
            ("DTI", self.dti.round_dp(2).to_string()),
            ("Loan Amount", loan),
            ("Score", self.score.round_dp(2).to_string()),
            ("Eligibility", self.verdict_label().to_string()),
            ("Risk Level", self.risk_level.to_string()),
            ("Debt Details", details),
        ]
    }
}

// ---------------------------------------------------------------------------
// Name normalization
// ---------------------------------------------------------------------------

/// Trim and title-case a name for storage and matching.
pub fn normalize_name(raw: &str) -> String {
    title_case(raw.trim())
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{MANUAL_ENTRY, PRIMARY};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn draft(name: Option<&str>) -> BorrowerDraft {
        BorrowerDraft {
            name: name.map(str::to_string),
            income: dec!(50000),
            debts: dec!(15000),
            debt_details: vec![],
            loan_amount: None,
            payment: PaymentSignal::History(vec![1; 12]),
        }
    }

    #[test]
    fn test_name_normalized_to_title_case() {
        let record = BorrowerRecord::evaluate(draft(Some("  jOHN smITH ")), &PRIMARY, 1).unwrap();
        assert_eq!(record.name, "John Smith");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = BorrowerRecord::evaluate(draft(Some("   ")), &PRIMARY, 1).unwrap_err();
        match err {
            CreditEvalError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_gets_placeholder() {
        let record = BorrowerRecord::evaluate(draft(None), &PRIMARY, 7).unwrap();
        assert_eq!(record.name, "Client 7");
    }

    #[test]
    fn test_itemized_debts_aggregate() {
        let mut d = draft(Some("Ana"));
        d.debts = dec!(999999); // ignored once items are present
        d.debt_details = vec![
            DebtItem {
                name: "car loan".into(),
                amount: dec!(9000),
            },
            DebtItem {
                name: "  ".into(),
                amount: dec!(6000),
            },
        ];
        let record = BorrowerRecord::evaluate(d, &PRIMARY, 1).unwrap();
        assert_eq!(record.debts, dec!(15000));
        assert_eq!(record.debt_details[0].name, "Car Loan");
        assert_eq!(record.debt_details[1].name, UNNAMED_DEBT);
    }

    #[test]
    fn test_negative_debt_item_rejected() {
        let mut d = draft(Some("Ana"));
        d.debt_details = vec![DebtItem {
            name: "card".into(),
            amount: dec!(-10),
        }];
        assert!(BorrowerRecord::evaluate(d, &PRIMARY, 1).is_err());
    }

    #[test]
    fn test_derived_fields_consistent() {
        let record = BorrowerRecord::evaluate(draft(Some("Ana")), &PRIMARY, 1).unwrap();
        assert_eq!(record.dti, dec!(15000) / dec!(50000));
        assert_eq!(record.payment_ratio, Decimal::ONE);
        assert_eq!(record.eligibility, Eligibility::Eligible);
        assert_eq!(record.profile, "primary");
    }

    #[test]
    fn test_verdict_label_follows_profile() {
        let mut d = draft(Some("Ana"));
        d.payment = PaymentSignal::Percent(dec!(100));
        let record = BorrowerRecord::evaluate(d, &MANUAL_ENTRY, 1).unwrap();
        assert_eq!(record.verdict_label(), "Approved");
    }

    #[test]
    fn test_columns_align_with_header() {
        let record = BorrowerRecord::evaluate(draft(Some("Ana")), &PRIMARY, 1).unwrap();
        let cols = record.columns();
        let headers: Vec<&str> = cols.iter().map(|(h, _)| *h).collect();
        assert_eq!(headers, COLUMNS);
    }

    #[test]
    fn test_normalize_name_collapses_case_and_spacing() {
        assert_eq!(normalize_name("JOHN "), "John");
        assert_eq!(normalize_name("john"), "John");
        assert_eq!(normalize_name("mary   jane"), "Mary Jane");
    }
}
