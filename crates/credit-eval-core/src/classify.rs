//! Threshold classification of eligibility scores.
//!
//! Thresholds are fixed constants bundled into named [`ThresholdProfile`]s,
//! one per scoring formula, because the formulas produce incompatible
//! numeric ranges. All boundary comparisons are inclusive.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreFormula;
use crate::types::{Money, Ratio, Score};

/// DTI below this reads as "Healthy" in narrative output. Advisory only;
/// the eligibility decision never consults it.
pub const DTI_HEALTHY_CEILING: Ratio = dec!(0.4);

/// Monthly income at or above this reads as "Strong" income stability.
pub const STABLE_INCOME_FLOOR: Money = dec!(2000);

// ---------------------------------------------------------------------------
// Verdict enums
// ---------------------------------------------------------------------------

/// Binary verdict on whether a borrower qualifies for credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    Eligible,
    NotEligible,
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::Eligible => write!(f, "Eligible"),
            Eligibility::NotEligible => write!(f, "Not Eligible"),
        }
    }
}

/// Coarse risk tier for qualitative communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Advisory reading of the debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtiStatus {
    Healthy,
    Risky,
}

impl std::fmt::Display for DtiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DtiStatus::Healthy => write!(f, "Healthy"),
            DtiStatus::Risky => write!(f, "Risky"),
        }
    }
}

/// Advisory reading of income stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeStability {
    Strong,
    Weak,
}

impl std::fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeStability::Strong => write!(f, "Strong"),
            IncomeStability::Weak => write!(f, "Weak"),
        }
    }
}

// ---------------------------------------------------------------------------
// Threshold profiles
// ---------------------------------------------------------------------------

/// A scoring formula plus the threshold set fitted to its range.
///
/// Profiles are the configuration surface: callers pick one by name and the
/// same profile drives scoring, classification, and display labels.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdProfile {
    pub name: &'static str,
    pub formula: ScoreFormula,
    /// Scores at or above this are eligible.
    pub eligibility_floor: Score,
    /// Scores at or above this are low risk.
    pub low_risk_floor: Score,
    /// Scores at or above this (but below the low floor) are medium risk.
    pub medium_risk_floor: Score,
    pub eligible_label: &'static str,
    pub not_eligible_label: &'static str,
}

/// Single-borrower predictor defaults.
pub const PRIMARY: ThresholdProfile = ThresholdProfile {
    name: "primary",
    formula: ScoreFormula::BalancedRatio,
    eligibility_floor: dec!(0.75),
    low_risk_floor: dec!(1.25),
    medium_risk_floor: dec!(0.25),
    eligible_label: "Eligible",
    not_eligible_label: "Not Eligible",
};

/// Stricter cut used when ranking generated demo batches.
pub const RANKED: ThresholdProfile = ThresholdProfile {
    name: "ranked",
    formula: ScoreFormula::BalancedRatio,
    eligibility_floor: dec!(1.0),
    low_risk_floor: dec!(1.5),
    medium_risk_floor: dec!(0.5),
    eligible_label: "Eligible",
    not_eligible_label: "Not Eligible",
};

/// Manual-entry dashboard thresholds, fitted to the offset-weighted range.
pub const MANUAL_ENTRY: ThresholdProfile = ThresholdProfile {
    name: "manual-entry",
    formula: ScoreFormula::OffsetWeighted,
    eligibility_floor: dec!(2.0),
    low_risk_floor: dec!(2.5),
    medium_risk_floor: dec!(1.5),
    eligible_label: "Approved",
    not_eligible_label: "Declined",
};

impl ThresholdProfile {
    /// Look up a built-in profile by its configuration name.
    pub fn by_name(name: &str) -> Option<&'static ThresholdProfile> {
        match name {
            "primary" => Some(&PRIMARY),
            "ranked" => Some(&RANKED),
            "manual-entry" | "manual_entry" => Some(&MANUAL_ENTRY),
            _ => None,
        }
    }

    /// Profile-specific display label for a verdict.
    pub fn label_for(&self, eligibility: Eligibility) -> &'static str {
        match eligibility {
            Eligibility::Eligible => self.eligible_label,
            Eligibility::NotEligible => self.not_eligible_label,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Verdict pair derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub eligibility: Eligibility,
    pub risk_level: RiskLevel,
}

/// Map a score to its verdicts under the given profile. Pure and total.
pub fn classify(score: Score, profile: &ThresholdProfile) -> Classification {
    let eligibility = if score >= profile.eligibility_floor {
        Eligibility::Eligible
    } else {
        Eligibility::NotEligible
    };
    let risk_level = if score >= profile.low_risk_floor {
        RiskLevel::Low
    } else if score >= profile.medium_risk_floor {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    Classification {
        eligibility,
        risk_level,
    }
}

/// Advisory DTI reading, independent of the eligibility decision.
pub fn dti_status(dti: Ratio) -> DtiStatus {
    if dti < DTI_HEALTHY_CEILING {
        DtiStatus::Healthy
    } else {
        DtiStatus::Risky
    }
}

/// Advisory income-stability reading.
pub fn income_stability(income: Money) -> IncomeStability {
    if income >= STABLE_INCOME_FLOOR {
        IncomeStability::Strong
    } else {
        IncomeStability::Weak
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
