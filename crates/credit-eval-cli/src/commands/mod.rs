pub mod batch;
pub mod evaluate;
pub mod generate;

use credit_eval_core::borrower::{BorrowerRecord, COLUMNS};
use credit_eval_core::classify::ThresholdProfile;
use serde_json::Value;

/// Resolve a profile flag to a built-in threshold profile.
pub(crate) fn lookup_profile(
    name: &str,
) -> Result<&'static ThresholdProfile, Box<dyn std::error::Error>> {
    ThresholdProfile::by_name(name).ok_or_else(|| {
        format!("Unknown profile '{name}' (expected primary, ranked, or manual-entry)").into()
    })
}

/// Render records as ordered column/value row objects for the formatters.
pub(crate) fn record_rows<'a, I>(records: I) -> Vec<Value>
where
    I: IntoIterator<Item = &'a BorrowerRecord>,
{
    records
        .into_iter()
        .map(|record| {
            let mut row = serde_json::Map::new();
            for (column, value) in record.columns() {
                row.insert(column.to_string(), Value::String(value));
            }
            Value::Object(row)
        })
        .collect()
}

/// Column order shared by the table and csv formatters.
pub(crate) fn column_header() -> Vec<Value> {
    COLUMNS
        .iter()
        .map(|c| Value::String((*c).to_string()))
        .collect()
}
