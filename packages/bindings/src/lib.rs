use napi::Result as NapiResult;
use napi_derive::napi;

use credit_eval_core::borrower::BorrowerDraft;
use credit_eval_core::classify::ThresholdProfile;
use credit_eval_core::evaluate::{self, EvaluationInput};
use credit_eval_core::generator::{self, GeneratorConfig};
use credit_eval_core::registry::BorrowerRegistry;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn resolve_profile(name: &str) -> NapiResult<&'static ThresholdProfile> {
    ThresholdProfile::by_name(name)
        .ok_or_else(|| napi::Error::from_reason(format!("Unknown profile '{name}'")))
}

/// Serialized session payload: records plus summary.
fn session_json(registry: &BorrowerRegistry) -> NapiResult<String> {
    let payload = serde_json::json!({
        "records": registry.records(),
        "summary": registry.summary(),
    });
    serde_json::to_string(&payload).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_borrower(input_json: String, profile: Option<String>) -> NapiResult<String> {
    let profile = resolve_profile(profile.as_deref().unwrap_or("primary"))?;
    let input: EvaluationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = evaluate::evaluate(&input, profile).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn batch_evaluate(drafts_json: String, profile: Option<String>) -> NapiResult<String> {
    let profile = resolve_profile(profile.as_deref().unwrap_or("primary"))?;
    let drafts: Vec<BorrowerDraft> = serde_json::from_str(&drafts_json).map_err(to_napi_error)?;
    let mut registry = BorrowerRegistry::new(profile.clone());
    for draft in drafts {
        registry.add(draft).map_err(to_napi_error)?;
    }
    session_json(&registry)
}

// ---------------------------------------------------------------------------
// Demo batches
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_clients(config_json: String, profile: Option<String>) -> NapiResult<String> {
    let profile = resolve_profile(profile.as_deref().unwrap_or("ranked"))?;
    let config: GeneratorConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let mut registry = BorrowerRegistry::new(profile.clone());
    generator::generate_into(&mut registry, &config).map_err(to_napi_error)?;
    session_json(&registry)
}
