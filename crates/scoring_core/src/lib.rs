//! # scoring_core - Multi-Sport Scoring Rules
//!
//! Decides, for any supported sport and format, whether a set or period is
//! complete, who won it, and what the overall match result is.
//!
//! ## Features
//! - Set-based formats with per-set targets, win-by-two and score caps
//! - Period-based formats with optional ties, overtime and extra periods
//! - Built-in sport catalog (embedded YAML), replaceable from a file
//! - Pure, deterministic evaluation; safe to call from any thread
//! - JSON API for score entry and standings clients
//!
//! ```rust
//! use scoring_core::{compute_match_result, FormatCatalog, MatchOutcome, UnitScore};
//!
//! let catalog = FormatCatalog::builtin().unwrap();
//! let format = catalog.resolve_format("volleyball", Some("best_of_3"));
//! let sets = [UnitScore::new(25, 21), UnitScore::new(25, 23)];
//! let result = compute_match_result(&sets, format.as_set_based().unwrap());
//! assert_eq!(result.outcome, MatchOutcome::Win);
//! ```

pub mod api;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod models;

pub use api::{
    evaluate_request, evaluate_scores_json, evaluate_scores_json_with, list_formats_json,
    list_formats_json_with, request_schema_json, EvaluateRequest, EvaluateResponse,
};
pub use catalog::{default_catalog, FormatCatalog, DEFAULT_SPORT, SCORING_FORMATS_PATH_ENV};
pub use error::{Result, ScoreField, ScoringError};
pub use evaluator::{
    can_add_unit, compute_match_result, compute_period_result, evaluate, is_set_complete,
    set_winner, unit_label, unit_labels, SetRule,
};
pub use models::{
    value_at_or_last, Evaluation, FormatKind, MatchOutcome, MatchResult, Outcome,
    PeriodBasedFormat, PeriodOutcome, PeriodResult, RawUnitScore, ScoringFormat, SetBasedFormat,
    Side, SportScoringProfile, UnitScore,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
