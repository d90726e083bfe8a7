use serde_json::Value;

use super::format_value;

/// Print just the key answer value from the output.
///
/// For an evaluation envelope that is the verdict and the score; for a
/// session payload, the summary's approval rate.
pub fn print_minimal(value: &Value) {
    if let Some(result) = value.get("result") {
        let verdict = result.get("verdict").map(format_value);
        let score = result.get("score").map(format_value);
        match (verdict, score) {
            (Some(v), Some(s)) => println!("{} ({})", v, s),
            (Some(v), None) => println!("{}", v),
            _ => println!("{}", format_value(result)),
        }
        return;
    }

    if let Some(summary) = value.get("summary") {
        for key in ["approval_rate", "count"] {
            if let Some(val) = summary.get(key) {
                if !val.is_null() {
                    println!("{}: {}", key, format_value(val));
                    return;
                }
            }
        }
    }

    println!("{}", format_value(value));
}
