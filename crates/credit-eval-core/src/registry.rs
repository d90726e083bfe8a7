//! In-memory session registry of evaluated borrowers.
//!
//! Single-session, process-local, single-writer. Insertion order is
//! preserved and ids stay stable across deletions.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::borrower::{normalize_name, BorrowerDraft, BorrowerRecord};
use crate::classify::{Eligibility, RiskLevel, ThresholdProfile};
use crate::types::{Money, Ratio};
use crate::CreditEvalResult;

/// Ordered collection of borrower records for one interactive session.
#[derive(Debug, Clone)]
pub struct BorrowerRegistry {
    profile: ThresholdProfile,
    records: Vec<BorrowerRecord>,
    // Monotonic so ids stay unique after removals.
    next_id: u64,
}

/// Session-level aggregates for the key-metrics view.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySummary {
    pub count: u64,
    pub average_income: Money,
    pub average_debts: Money,
    /// Share of records with an eligible verdict, in [0, 1].
    pub approval_rate: Ratio,
    pub high_risk_count: u64,
}

impl BorrowerRegistry {
    pub fn new(profile: ThresholdProfile) -> Self {
        BorrowerRegistry {
            profile,
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn profile(&self) -> &ThresholdProfile {
        &self.profile
    }

    /// Evaluate a draft under the session profile and append the record.
    pub fn add(&mut self, draft: BorrowerDraft) -> CreditEvalResult<&BorrowerRecord> {
        let record = BorrowerRecord::evaluate(draft, &self.profile, self.next_id)?;
        self.next_id += 1;
        let idx = self.records.len();
        self.records.push(record);
        Ok(&self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order. Re-iterable without side effects.
    pub fn iter(&self) -> std::slice::Iter<'_, BorrowerRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[BorrowerRecord] {
        &self.records
    }

    /// First record whose normalized name matches the normalized query.
    pub fn find_by_name(&self, name: &str) -> Option<&BorrowerRecord> {
        let wanted = normalize_name(name);
        self.records.iter().find(|r| r.name == wanted)
    }

    /// Remove every record matching the normalized name. Returns how many
    /// were removed; 0 when the name is absent. Remaining ids are untouched.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let wanted = normalize_name(name);
        let before = self.records.len();
        self.records.retain(|r| r.name != wanted);
        before - self.records.len()
    }

    /// Records sorted by score, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&BorrowerRecord> {
        let mut ordered: Vec<&BorrowerRecord> = self.records.iter().collect();
        ordered.sort_by(|a, b| b.score.cmp(&a.score));
        ordered
    }

    /// Session aggregates. An empty registry yields all zeroes.
    pub fn summary(&self) -> RegistrySummary {
        if self.records.is_empty() {
            return RegistrySummary {
                count: 0,
                average_income: Decimal::ZERO,
                average_debts: Decimal::ZERO,
                approval_rate: Decimal::ZERO,
                high_risk_count: 0,
            };
        }
        let count = self.records.len() as u64;
        let count_d = Decimal::from(count);
        let total_income: Decimal = self.records.iter().map(|r| r.income).sum();
        let total_debts: Decimal = self.records.iter().map(|r| r.debts).sum();
        let eligible = self
            .records
            .iter()
            .filter(|r| r.eligibility == Eligibility::Eligible)
            .count() as u64;
        let high_risk = self
            .records
            .iter()
            .filter(|r| r.risk_level == RiskLevel::High)
            .count() as u64;
        RegistrySummary {
            count,
            average_income: total_income / count_d,
            average_debts: total_debts / count_d,
            approval_rate: Decimal::from(eligible) / count_d,
            high_risk_count: high_risk,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
