// JSON API for score entry and standings clients
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{default_catalog, FormatCatalog};
use crate::error::{Result, ScoringError};
use crate::evaluator::{can_add_unit, evaluate, unit_labels};
use crate::models::{Evaluation, Outcome, RawUnitScore, SportScoringProfile, UnitScore};
use crate::SCHEMA_VERSION;

/// Evaluation request - one score sheet for one sport/format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateRequest {
    pub schema_version: u8,
    /// Free-text sport name; missing or unknown names use the default sport
    #[serde(default)]
    pub sport: Option<String>,
    /// Format id within the sport; missing or unknown ids use the sport's first format
    #[serde(default)]
    pub format_id: Option<String>,
    /// Recorded units of play in order (sets or periods)
    #[serde(default)]
    pub scores: Vec<RawUnitScore>,
}

impl EvaluateRequest {
    pub fn new(sport: Option<&str>, format_id: Option<&str>, scores: Vec<RawUnitScore>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            sport: sport.map(str::to_string),
            format_id: format_id.map(str::to_string),
            scores,
        }
    }
}

/// Evaluation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateResponse {
    pub schema_version: u8,
    /// Resolved sport key (after fallback)
    pub sport: String,
    pub format_id: String,
    pub format_name: String,
    /// "set_based" or "period_based"
    pub kind: String,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_won_by_us: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_won_by_them: Option<u32>,
    pub total_points_us: u64,
    pub total_points_them: u64,
    pub point_differential: i64,
    pub unit_labels: Vec<String>,
    /// Whether another set/period may be recorded
    pub can_add_unit: bool,
}

/// Resolved profile listing
#[derive(Debug, Clone, Serialize)]
pub struct FormatsResponse<'a> {
    pub schema_version: u8,
    pub requested_sport: &'a str,
    /// True when the requested sport was not found and the default was used
    pub is_fallback: bool,
    pub profile: &'a SportScoringProfile,
}

/// Evaluate a typed request against a catalog
pub fn evaluate_request(
    catalog: &FormatCatalog,
    request: &EvaluateRequest,
) -> Result<EvaluateResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ScoringError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let sport_name = request.sport.as_deref().unwrap_or_default();
    let (profile, format) = catalog.resolve(sport_name, request.format_id.as_deref());
    let scores = UnitScore::try_from_raw_list(&request.scores)?;

    let evaluation = evaluate(format, &scores);
    let (total_points_us, total_points_them) = evaluation.totals();
    let (units_won_by_us, units_won_by_them) = match &evaluation {
        Evaluation::Match(r) => (Some(r.units_won_by_us), Some(r.units_won_by_them)),
        Evaluation::Period(_) => (None, None),
    };

    debug!(
        sport = %profile.key,
        format_id = format.id(),
        units = scores.len(),
        outcome = ?evaluation.outcome(),
        "evaluated score sheet"
    );

    Ok(EvaluateResponse {
        schema_version: SCHEMA_VERSION,
        sport: profile.key.clone(),
        format_id: format.id().to_string(),
        format_name: format.name().to_string(),
        kind: format.kind().as_str().to_string(),
        outcome: evaluation.outcome(),
        units_won_by_us,
        units_won_by_them,
        total_points_us,
        total_points_them,
        point_differential: evaluation.point_differential(),
        unit_labels: unit_labels(format, scores.len()),
        can_add_unit: can_add_unit(format, &scores),
    })
}

/// JSON API - evaluate a score sheet using the given catalog
pub fn evaluate_scores_json_with(catalog: &FormatCatalog, request_json: &str) -> Result<String> {
    let request: EvaluateRequest = serde_json::from_str(request_json)?;
    let response = evaluate_request(catalog, &request)?;
    Ok(serde_json::to_string(&response)?)
}

/// JSON API - evaluate a score sheet using the process-wide catalog
pub fn evaluate_scores_json(request_json: &str) -> Result<String> {
    evaluate_scores_json_with(default_catalog()?, request_json)
}

/// JSON API - the resolved profile for a sport name
pub fn list_formats_json_with(catalog: &FormatCatalog, sport: &str) -> Result<String> {
    let response = FormatsResponse {
        schema_version: SCHEMA_VERSION,
        requested_sport: sport,
        is_fallback: catalog.lookup(sport).is_none(),
        profile: catalog.resolve_profile(sport),
    };
    Ok(serde_json::to_string(&response)?)
}

pub fn list_formats_json(sport: &str) -> Result<String> {
    list_formats_json_with(default_catalog()?, sport)
}

/// JSON Schema for `EvaluateRequest`
pub fn request_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(EvaluateRequest);
    Ok(serde_json::to_string_pretty(&schema)?)
}
