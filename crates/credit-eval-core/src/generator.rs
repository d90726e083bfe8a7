//! Synthetic borrower batches for demo analytics.
//!
//! Purely illustrative; the decision logic never depends on this module.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::borrower::BorrowerDraft;
use crate::registry::BorrowerRegistry;
use crate::scoring::{PaymentSignal, PAYMENT_MONTHS};
use crate::CreditEvalResult;

/// Batch size used by the demo page.
pub const DEFAULT_COUNT: u32 = 30;

/// Sampled income bounds, inclusive.
pub const INCOME_MIN: u32 = 30_000;
pub const INCOME_MAX: u32 = 100_000;

/// Sampled debt bounds, inclusive.
pub const DEBTS_MIN: u32 = 5_000;
pub const DEBTS_MAX: u32 = 50_000;

/// Chance that any given month was paid on time.
pub const ON_TIME_PROBABILITY: f64 = 0.75;

/// Generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_count")]
    pub count: u32,
    /// Optional seed for reproducibility.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

/// Append `config.count` synthetic borrowers to the registry.
///
/// Names are left blank so each record falls back to its id placeholder.
/// Returns how many records were added.
pub fn generate_into(
    registry: &mut BorrowerRegistry,
    config: &GeneratorConfig,
) -> CreditEvalResult<u32> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..config.count {
        let income = Decimal::from(rng.gen_range(INCOME_MIN..=INCOME_MAX));
        let debts = Decimal::from(rng.gen_range(DEBTS_MIN..=DEBTS_MAX));
        let history: Vec<u8> = (0..PAYMENT_MONTHS)
            .map(|_| u8::from(rng.gen_bool(ON_TIME_PROBABILITY)))
            .collect();
        registry.add(BorrowerDraft {
            name: None,
            income,
            debts,
            debt_details: vec![],
            loan_amount: None,
            payment: PaymentSignal::History(history),
        })?;
    }

    Ok(config.count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RANKED;
    use rust_decimal::Decimal;

    fn seeded(count: u32, seed: u64) -> BorrowerRegistry {
        let mut registry = BorrowerRegistry::new(RANKED);
        let config = GeneratorConfig {
            count,
            seed: Some(seed),
        };
        generate_into(&mut registry, &config).unwrap();
        registry
    }

    #[test]
    fn test_generates_requested_count() {
        let registry = seeded(30, 7);
        assert_eq!(registry.len(), 30);
    }

    #[test]
    fn test_values_inside_sampling_ranges() {
        let registry = seeded(50, 11);
        for record in registry.iter() {
            assert!(record.income >= Decimal::from(INCOME_MIN));
            assert!(record.income <= Decimal::from(INCOME_MAX));
            assert!(record.debts >= Decimal::from(DEBTS_MIN));
            assert!(record.debts <= Decimal::from(DEBTS_MAX));
            assert!(record.payment_ratio >= Decimal::ZERO);
            assert!(record.payment_ratio <= Decimal::ONE);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = seeded(20, 42);
        let b = seeded(20, 42);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.income, y.income);
            assert_eq!(x.debts, y.debts);
            assert_eq!(x.score, y.score);
        }
    }

    #[test]
    fn test_generated_names_are_placeholders() {
        let registry = seeded(3, 1);
        let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Client 1", "Client 2", "Client 3"]);
    }
}
