use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use credit_eval_core::evaluate::{self, EvaluationInput};
use credit_eval_core::scoring::PaymentSignal;

use crate::input;

/// Arguments for single-borrower evaluation
#[derive(Args)]
pub struct EvaluateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Total outstanding debts
    #[arg(long)]
    pub debts: Option<Decimal>,

    /// Twelve comma-separated on-time markers, e.g. 1,1,0,1,1,1,1,1,1,1,0,1
    #[arg(long, value_delimiter = ',')]
    pub payment_history: Option<Vec<u8>>,

    /// On-time payment share in [0, 100], alternative to --payment-history
    #[arg(long)]
    pub payment_percent: Option<Decimal>,

    /// Threshold profile: primary, ranked, or manual-entry
    #[arg(long, default_value = "primary")]
    pub profile: String,
}

pub fn run_evaluate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = super::lookup_profile(&args.profile)?;

    let eval_input: EvaluationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let payment = match (args.payment_history, args.payment_percent) {
            (Some(history), None) => PaymentSignal::History(history),
            (None, Some(percent)) => PaymentSignal::Percent(percent),
            (Some(_), Some(_)) => {
                return Err("--payment-history and --payment-percent are mutually exclusive".into())
            }
            (None, None) => {
                return Err(
                    "--payment-history or --payment-percent is required (or provide --input)"
                        .into(),
                )
            }
        };
        EvaluationInput {
            income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            debts: args
                .debts
                .ok_or("--debts is required (or provide --input)")?,
            payment,
        }
    };

    let result = evaluate::evaluate(&eval_input, profile)?;
    Ok(serde_json::to_value(result)?)
}
