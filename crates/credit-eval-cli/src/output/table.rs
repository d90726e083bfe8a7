use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, session_columns};

/// Format output as a table using the tabled crate.
///
/// Two payload shapes exist: the evaluation envelope (a "result" object plus
/// warnings and methodology) and the session payload (a "records" array plus
/// a "summary" object).
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("records") => print_session_table(value),
        Value::Object(map) if map.contains_key("result") => print_envelope_table(map),
        _ => print_field_value(value),
    }
}

fn print_session_table(payload: &Value) {
    let columns = session_columns(payload);
    if let Some(Value::Array(records)) = payload.get("records") {
        if records.is_empty() {
            println!("(empty)");
        } else {
            let mut builder = Builder::default();
            builder.push_record(&columns);
            for record in records {
                if let Value::Object(row) = record {
                    let cells: Vec<String> = columns
                        .iter()
                        .map(|c| row.get(c.as_str()).map(format_value).unwrap_or_default())
                        .collect();
                    builder.push_record(cells);
                }
            }
            println!("{}", Table::from(builder));
        }
    }

    if let Some(summary) = payload.get("summary") {
        println!("\nSummary:");
        print_field_value(summary);
    }
}

fn print_envelope_table(envelope: &serde_json::Map<String, Value>) {
    if let Some(result) = envelope.get("result") {
        print_field_value(result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_field_value(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", format_value(value));
    }
}
