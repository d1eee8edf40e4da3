use std::path::PathBuf;

use thiserror::Error;

/// Which side of a recorded score a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Ours,
    Theirs,
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreField::Ours => write!(f, "ours"),
            ScoreField::Theirs => write!(f, "theirs"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid score in unit {unit} ({field}): {value}")]
    InvalidScore { unit: usize, field: ScoreField, value: i64 },

    #[error("Invalid format '{format_id}' for sport '{sport}': {reason}")]
    InvalidFormat { sport: String, format_id: String, reason: String },

    #[error("Sport '{sport}' is {expected} but format '{format_id}' is not")]
    ProfileMismatch { sport: String, format_id: String, expected: &'static str },

    #[error("Sport '{sport}' has no formats")]
    EmptyProfile { sport: String },

    #[error("Duplicate sport key: {sport}")]
    DuplicateSport { sport: String },

    #[error("Duplicate format id '{format_id}' in sport '{sport}'")]
    DuplicateFormat { sport: String, format_id: String },

    #[error("Sport key must be lower-case: {sport}")]
    SportKeyNotLowercase { sport: String },

    #[error("Default sport '{sport}' is not in the catalog")]
    UnknownDefaultSport { sport: String },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScoringError {
    /// True for errors caused by the caller's request rather than catalog configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidScore { .. }
                | ScoringError::UnsupportedSchema { .. }
                | ScoringError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
