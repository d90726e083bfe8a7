//! Weighted-sum eligibility scoring.
//!
//! Two formulas ship side by side and are never merged:
//!
//! 1. **Balanced ratio** -- `0.5 * (income / debts) + 0.5 * payment_ratio`,
//!    with the income-to-debt ratio clamped to 0 when debts are zero.
//! 2. **Offset weighted** -- `(income / (debts + 1)) * 0.6
//!    + payment_ratio * 0.4`. The `+1` denominator offset keeps the division
//!    total without branching and biases the ratio downward for small debt
//!    balances; it is preserved for parity with manual-entry scoring.
//!
//! Their numeric ranges differ by orders of magnitude, so thresholds are
//! fitted per formula (see `classify::ThresholdProfile`).
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CreditEvalError;
use crate::types::{Money, Ratio, Score};
use crate::CreditEvalResult;

/// Months a full payment history covers.
pub const PAYMENT_MONTHS: usize = 12;

/// Weight on the income-to-debt ratio in the balanced formula.
pub const BALANCED_IDR_WEIGHT: Decimal = dec!(0.5);

/// Weight on the payment ratio in the balanced formula.
pub const BALANCED_PAYMENT_WEIGHT: Decimal = dec!(0.5);

/// Weight on the offset income/debt term.
pub const OFFSET_INCOME_WEIGHT: Decimal = dec!(0.6);

/// Weight on the payment ratio in the offset formula.
pub const OFFSET_PAYMENT_WEIGHT: Decimal = dec!(0.4);

/// Denominator offset in the offset-weighted formula.
pub const OFFSET_DEBT_OFFSET: Decimal = Decimal::ONE;

// ---------------------------------------------------------------------------
// Payment signal
// ---------------------------------------------------------------------------

/// How a borrower's repayment behaviour is supplied.
///
/// A full 12-month history reduces to its mean, so both forms are
/// semantically equivalent once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentSignal {
    /// Twelve months of on-time (1) / missed (0) markers.
    History(Vec<u8>),
    /// Share of payments made on time, in [0, 100].
    Percent(Decimal),
}

impl PaymentSignal {
    /// Check length and value ranges without reducing.
    pub fn validate(&self) -> CreditEvalResult<()> {
        match self {
            PaymentSignal::History(history) => {
                if history.is_empty() {
                    return Err(CreditEvalError::InsufficientData(
                        "Payment history is empty".into(),
                    ));
                }
                if history.len() != PAYMENT_MONTHS {
                    return Err(CreditEvalError::InvalidInput {
                        field: "payment_history".into(),
                        reason: format!(
                            "Expected {PAYMENT_MONTHS} monthly entries, got {}.",
                            history.len()
                        ),
                    });
                }
                if history.iter().any(|&m| m > 1) {
                    return Err(CreditEvalError::InvalidInput {
                        field: "payment_history".into(),
                        reason: "Entries must be 0 (missed) or 1 (on-time).".into(),
                    });
                }
                Ok(())
            }
            PaymentSignal::Percent(pct) => {
                if *pct < Decimal::ZERO || *pct > dec!(100) {
                    return Err(CreditEvalError::InvalidInput {
                        field: "payment_percent".into(),
                        reason: "Must be between 0 and 100.".into(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Reduce to an on-time ratio in [0, 1].
    pub fn ratio(&self) -> CreditEvalResult<Ratio> {
        self.validate()?;
        match self {
            PaymentSignal::History(history) => {
                let on_time: u64 = history.iter().map(|&m| u64::from(m)).sum();
                Ok(Decimal::from(on_time) / Decimal::from(PAYMENT_MONTHS as u64))
            }
            PaymentSignal::Percent(pct) => Ok(*pct / dec!(100)),
        }
    }
}

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

/// Scoring strategy, selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFormula {
    BalancedRatio,
    OffsetWeighted,
}

impl std::fmt::Display for ScoreFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreFormula::BalancedRatio => write!(f, "balanced-ratio"),
            ScoreFormula::OffsetWeighted => write!(f, "offset-weighted"),
        }
    }
}

impl ScoreFormula {
    /// Apply the formula to already-validated inputs.
    pub fn compute(self, income: Money, debts: Money, payment_ratio: Ratio) -> Score {
        match self {
            ScoreFormula::BalancedRatio => {
                BALANCED_IDR_WEIGHT * income_to_debt_ratio(income, debts)
                    + BALANCED_PAYMENT_WEIGHT * payment_ratio
            }
            ScoreFormula::OffsetWeighted => {
                income / (debts + OFFSET_DEBT_OFFSET) * OFFSET_INCOME_WEIGHT
                    + payment_ratio * OFFSET_PAYMENT_WEIGHT
            }
        }
    }
}

/// income / debts, clamped to 0 when debts are zero.
pub fn income_to_debt_ratio(income: Money, debts: Money) -> Ratio {
    if debts.is_zero() {
        Decimal::ZERO
    } else {
        income / debts
    }
}

/// debts / income, clamped to 0 when income is zero.
pub fn debt_to_income_ratio(debts: Money, income: Money) -> Ratio {
    if income.is_zero() {
        Decimal::ZERO
    } else {
        debts / income
    }
}

/// Validate raw amounts and the payment signal, then score.
pub fn compute_score(
    formula: ScoreFormula,
    income: Money,
    debts: Money,
    payment: &PaymentSignal,
) -> CreditEvalResult<Score> {
    if income < Decimal::ZERO {
        return Err(CreditEvalError::InvalidInput {
            field: "income".into(),
            reason: "Income cannot be negative.".into(),
        });
    }
    if debts < Decimal::ZERO {
        return Err(CreditEvalError::InvalidInput {
            field: "debts".into(),
            reason: "Debts cannot be negative.".into(),
        });
    }
    let payment_ratio = payment.ratio()?;
    Ok(formula.compute(income, debts, payment_ratio))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn clean_history() -> PaymentSignal {
        PaymentSignal::History(vec![1; 12])
    }

    #[test]
    fn test_history_reduces_to_mean() {
        let signal = PaymentSignal::History(vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0]);
        assert_eq!(signal.ratio().unwrap(), dec!(0.75));
    }

    #[test]
    fn test_percent_reduces_to_fraction() {
        let signal = PaymentSignal::Percent(dec!(85));
        assert_eq!(signal.ratio().unwrap(), dec!(0.85));
    }

    #[test]
    fn test_empty_history_rejected() {
        let err = PaymentSignal::History(vec![]).ratio().unwrap_err();
        match err {
            CreditEvalError::InsufficientData(_) => {}
            other => panic!("Expected InsufficientData, got {other:?}"),
        }
    }

    #[test]
    fn test_short_history_rejected() {
        let err = PaymentSignal::History(vec![1, 0, 1]).ratio().unwrap_err();
        match err {
            CreditEvalError::InvalidInput { field, .. } => assert_eq!(field, "payment_history"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_non_binary_history_rejected() {
        let mut months = vec![1; 12];
        months[4] = 2;
        assert!(PaymentSignal::History(months).ratio().is_err());
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        assert!(PaymentSignal::Percent(dec!(101)).ratio().is_err());
        assert!(PaymentSignal::Percent(dec!(-1)).ratio().is_err());
    }

    #[test]
    fn test_balanced_formula_exact() {
        // idr = 50000 / 15000, payment ratio = 1
        let score =
            compute_score(ScoreFormula::BalancedRatio, dec!(50000), dec!(15000), &clean_history())
                .unwrap();
        let expected = dec!(0.5) * (dec!(50000) / dec!(15000)) + dec!(0.5);
        assert_eq!(score, expected);
        assert_eq!(score.round_dp(4), dec!(2.1667));
    }

    #[test]
    fn test_offset_formula_exact() {
        // (20000 / 1) * 0.6 + 1 * 0.4 = 12000.4
        let score = compute_score(
            ScoreFormula::OffsetWeighted,
            dec!(20000),
            Decimal::ZERO,
            &PaymentSignal::Percent(dec!(100)),
        )
        .unwrap();
        assert_eq!(score, dec!(12000.4));
    }

    #[test]
    fn test_zero_debts_clamps_idr() {
        assert_eq!(income_to_debt_ratio(dec!(40000), Decimal::ZERO), Decimal::ZERO);
        // Balanced score then rests entirely on the payment ratio
        let score = compute_score(
            ScoreFormula::BalancedRatio,
            dec!(40000),
            Decimal::ZERO,
            &clean_history(),
        )
        .unwrap();
        assert_eq!(score, dec!(0.5));
    }

    #[test]
    fn test_zero_income_clamps_dti() {
        assert_eq!(debt_to_income_ratio(dec!(10000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_idr_monotonic_in_income_and_debts() {
        let base = income_to_debt_ratio(dec!(50000), dec!(20000));
        assert!(income_to_debt_ratio(dec!(60000), dec!(20000)) > base);
        assert!(income_to_debt_ratio(dec!(50000), dec!(25000)) < base);
    }

    #[test]
    fn test_score_monotonic_in_payment_ratio() {
        for formula in [ScoreFormula::BalancedRatio, ScoreFormula::OffsetWeighted] {
            let low = formula.compute(dec!(50000), dec!(20000), dec!(0.5));
            let high = formula.compute(dec!(50000), dec!(20000), dec!(0.9));
            assert!(high > low, "{formula} not monotonic in payment ratio");
        }
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(
            compute_score(ScoreFormula::BalancedRatio, dec!(-1), dec!(0), &clean_history())
                .is_err()
        );
        assert!(
            compute_score(ScoreFormula::BalancedRatio, dec!(0), dec!(-1), &clean_history())
                .is_err()
        );
    }
}
