use clap::Args;
use serde_json::{json, Value};

use credit_eval_core::borrower::BorrowerDraft;
use credit_eval_core::registry::BorrowerRegistry;

use crate::input;

/// Arguments for a batch evaluation session
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON file holding an array of borrower drafts
    #[arg(long)]
    pub input: Option<String>,

    /// Threshold profile: primary, ranked, or manual-entry
    #[arg(long, default_value = "primary")]
    pub profile: String,
}

pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = super::lookup_profile(&args.profile)?;

    let drafts: Vec<BorrowerDraft> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };

    if drafts.is_empty() {
        return Err("At least one borrower draft required".into());
    }

    let mut registry = BorrowerRegistry::new(profile.clone());
    for draft in drafts {
        registry.add(draft)?;
    }

    Ok(json!({
        "columns": super::column_header(),
        "records": super::record_rows(registry.iter()),
        "summary": registry.summary(),
    }))
}
