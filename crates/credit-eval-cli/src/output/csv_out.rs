use serde_json::Value;
use std::io;

use super::{format_value, session_columns};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) if map.contains_key("records") => {
            let columns = session_columns(value);
            let _ = wtr.write_record(&columns);
            if let Some(Value::Array(records)) = map.get("records") {
                for record in records {
                    if let Value::Object(row) = record {
                        let cells: Vec<String> = columns
                            .iter()
                            .map(|c| row.get(c.as_str()).map(format_value).unwrap_or_default())
                            .collect();
                        let _ = wtr.write_record(&cells);
                    }
                }
            }
        }
        Value::Object(map) => {
            // Envelope or flat object: two-column field/value rows
            let flat = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in flat {
                let _ = wtr.write_record([key.as_str(), &format_value(val)]);
            }
        }
        _ => {
            let _ = wtr.write_record([&format_value(value)]);
        }
    }

    let _ = wtr.flush();
}
