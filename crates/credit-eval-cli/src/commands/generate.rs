use clap::Args;
use serde_json::{json, Value};

use credit_eval_core::generator::{self, GeneratorConfig};
use credit_eval_core::registry::BorrowerRegistry;

/// Arguments for synthetic batch generation
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of synthetic borrowers
    #[arg(long, default_value_t = generator::DEFAULT_COUNT)]
    pub count: u32,

    /// RNG seed for reproducible batches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Threshold profile: primary, ranked, or manual-entry
    #[arg(long, default_value = "ranked")]
    pub profile: String,
}

pub fn run_generate(args: GenerateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = super::lookup_profile(&args.profile)?;

    let mut registry = BorrowerRegistry::new(profile.clone());
    let config = GeneratorConfig {
        count: args.count,
        seed: args.seed,
    };
    generator::generate_into(&mut registry, &config)?;

    // Demo batches are presented highest score first
    Ok(json!({
        "columns": super::column_header(),
        "records": super::record_rows(registry.ranked()),
        "summary": registry.summary(),
    }))
}
