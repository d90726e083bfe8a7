//! Single-shot eligibility evaluation with the standard output envelope.
//!
//! This is the predictor path: one borrower in, score plus verdicts plus the
//! analysis details out, without touching a session registry.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::classify::{
    self, DtiStatus, Eligibility, IncomeStability, RiskLevel, ThresholdProfile,
};
use crate::scoring::{self, PaymentSignal, ScoreFormula};
use crate::types::{with_metadata, ComputationOutput, Money, Ratio, Score};
use crate::CreditEvalResult;

/// Input for a single evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub income: Money,
    #[serde(default)]
    pub debts: Money,
    pub payment: PaymentSignal,
}

/// Output of a single evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub score: Score,
    pub eligibility: Eligibility,
    /// Profile-specific display label for the verdict.
    pub verdict: String,
    pub risk_level: RiskLevel,
    pub income_to_debt_ratio: Ratio,
    pub payment_ratio: Ratio,
    pub dti: Ratio,
    pub dti_status: DtiStatus,
    pub income_stability: IncomeStability,
}

/// Score and classify one borrower under the given profile.
pub fn evaluate(
    input: &EvaluationInput,
    profile: &ThresholdProfile,
) -> CreditEvalResult<ComputationOutput<EvaluationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.debts.is_zero() && profile.formula == ScoreFormula::BalancedRatio {
        warnings.push("Debts are zero; income-to-debt ratio clamped to 0.".into());
    }

    let score = scoring::compute_score(profile.formula, input.income, input.debts, &input.payment)?;
    let payment_ratio = input.payment.ratio()?;
    let idr = scoring::income_to_debt_ratio(input.income, input.debts);
    let dti = scoring::debt_to_income_ratio(input.debts, input.income);
    let classification = classify::classify(score, profile);

    let output = EvaluationOutput {
        score,
        eligibility: classification.eligibility,
        verdict: profile.label_for(classification.eligibility).to_string(),
        risk_level: classification.risk_level,
        income_to_debt_ratio: idr,
        payment_ratio,
        dti,
        dti_status: classify::dti_status(dti),
        income_stability: classify::income_stability(input.income),
    };

    let assumptions = serde_json::json!({
        "profile": profile.name,
        "formula": profile.formula.to_string(),
        "eligibility_floor": profile.eligibility_floor,
        "low_risk_floor": profile.low_risk_floor,
        "medium_risk_floor": profile.medium_risk_floor,
        "dti_healthy_ceiling": classify::DTI_HEALTHY_CEILING,
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        &format!("Weighted-sum eligibility scoring ({} profile)", profile.name),
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
