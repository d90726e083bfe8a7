use credit_eval_core::borrower::{BorrowerDraft, DebtItem, COLUMNS};
use credit_eval_core::classify::{MANUAL_ENTRY, PRIMARY, RANKED};
use credit_eval_core::generator::{generate_into, GeneratorConfig};
use credit_eval_core::registry::BorrowerRegistry;
use credit_eval_core::scoring::PaymentSignal;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn named_draft(name: &str) -> BorrowerDraft {
    BorrowerDraft {
        name: Some(name.to_string()),
        income: dec!(50000),
        debts: dec!(15000),
        debt_details: vec![],
        loan_amount: Some(dec!(10000)),
        payment: PaymentSignal::History(vec![1; 12]),
    }
}

// ===========================================================================
// Session lifecycle
// ===========================================================================

#[test]
fn test_case_variants_stored_distinctly() {
    // "john" and "JOHN " normalize to the same name but stay separate records
    let mut registry = BorrowerRegistry::new(PRIMARY);
    registry.add(named_draft("john")).unwrap();
    registry.add(named_draft("JOHN ")).unwrap();

    assert_eq!(registry.len(), 2);
    let ids: Vec<u64> = registry.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    for record in registry.iter() {
        assert_eq!(record.name, "John");
    }

    // Deletion matches on the normalized name and takes both
    assert_eq!(registry.remove_by_name("john"), 2);
    assert!(registry.is_empty());
}

#[test]
fn test_list_length_tracks_adds_and_removes() {
    let mut registry = BorrowerRegistry::new(PRIMARY);
    registry.add(named_draft("ana")).unwrap();
    registry.add(named_draft("bob")).unwrap();
    registry.add(named_draft("carol")).unwrap();
    registry.remove_by_name("bob");
    assert_eq!(registry.len(), 2);
    let names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Carol"]);
}

#[test]
fn test_itemized_debts_flow_through_session() {
    let mut registry = BorrowerRegistry::new(MANUAL_ENTRY);
    let draft = BorrowerDraft {
        name: Some("dana".into()),
        income: dec!(4000),
        debts: Decimal::ZERO,
        debt_details: vec![
            DebtItem {
                name: "car loan".into(),
                amount: dec!(900),
            },
            DebtItem {
                name: "credit card".into(),
                amount: dec!(300),
            },
        ],
        loan_amount: Some(dec!(20000)),
        payment: PaymentSignal::Percent(dec!(90)),
    };
    registry.add(draft).unwrap();

    let record = registry.find_by_name("Dana").unwrap();
    assert_eq!(record.debts, dec!(1200));
    assert_eq!(record.dti, dec!(0.3));

    // Tabular view carries the itemized details
    let cols = record.columns();
    let headers: Vec<&str> = cols.iter().map(|(h, _)| *h).collect();
    assert_eq!(headers, COLUMNS);
    let details = &cols[8].1;
    assert!(details.contains("Car Loan: 900"));
    assert!(details.contains("Credit Card: 300"));
}

// ===========================================================================
// Generated demo batches
// ===========================================================================

#[test]
fn test_generated_batch_ranks_descending() {
    let mut registry = BorrowerRegistry::new(RANKED);
    let config = GeneratorConfig {
        count: 30,
        seed: Some(99),
    };
    generate_into(&mut registry, &config).unwrap();
    assert_eq!(registry.len(), 30);

    let ranked = registry.ranked();
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Ranking is a view; insertion order is untouched
    let ids: Vec<u64> = registry.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<u64>>());
}

#[test]
fn test_generated_batch_summary_consistent() {
    let mut registry = BorrowerRegistry::new(RANKED);
    let config = GeneratorConfig {
        count: 40,
        seed: Some(5),
    };
    generate_into(&mut registry, &config).unwrap();

    let summary = registry.summary();
    assert_eq!(summary.count, 40);
    assert!(summary.approval_rate >= Decimal::ZERO && summary.approval_rate <= Decimal::ONE);
    assert!(summary.average_income >= dec!(30000));
    assert!(summary.average_income <= dec!(100000));
    assert!(summary.high_risk_count <= 40);
}
