//! Catalog loading
//!
//! The built-in catalog is YAML embedded at compile time. Operators can
//! replace it with their own file through `SCORING_FORMATS_PATH`.
//!
//! ```rust
//! use scoring_core::catalog::FormatCatalog;
//!
//! let catalog = FormatCatalog::builtin().unwrap();
//! let profile = catalog.resolve_profile("Basketball");
//! assert!(!profile.is_set_based);
//! ```

use std::env;
use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::registry::{FormatCatalog, DEFAULT_SPORT};
use crate::error::{Result, ScoringError};
use crate::models::SportScoringProfile;

/// Built-in formats (compile-time embedded)
pub const SCORING_FORMATS_YAML: &str = include_str!("../../../../data/scoring_formats.yaml");

/// Env var naming a catalog file to use instead of the built-in one
pub const SCORING_FORMATS_PATH_ENV: &str = "SCORING_FORMATS_PATH";

static DEFAULT_CATALOG: OnceCell<FormatCatalog> = OnceCell::new();

/// On-disk catalog layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "default_sport")]
    pub default_sport: String,
    pub sports: Vec<SportScoringProfile>,
}

fn default_sport() -> String {
    DEFAULT_SPORT.to_string()
}

impl FormatCatalog {
    /// Catalog from the embedded YAML
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(SCORING_FORMATS_YAML)
    }

    /// Parse a YAML (or JSON) catalog document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = serde_yaml::from_str(content)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        Self::new(document.sports, &document.default_sport)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| ScoringError::Io { path: path.to_path_buf(), source })?;
        let catalog = Self::from_yaml_str(&content)?;
        info!(path = %path.display(), sports = catalog.len(), "loaded scoring formats");
        Ok(catalog)
    }

    /// Catalog from `SCORING_FORMATS_PATH`, or the built-in one when unset or blank
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(SCORING_FORMATS_PATH_ENV)
    }

    pub(crate) fn from_env_var(name: &str) -> Result<Self> {
        let Ok(path) = env::var(name) else {
            debug!("using built-in scoring formats");
            return Self::builtin();
        };

        let path = path.trim();
        if path.is_empty() {
            return Self::builtin();
        }

        Self::from_path(Path::new(path))
    }
}

/// Process-wide catalog, loaded on first use and read-only afterwards.
///
/// Prefer building a `FormatCatalog` and passing it by reference where the
/// caller controls construction; this exists for the string-in/string-out API.
pub fn default_catalog() -> Result<&'static FormatCatalog> {
    DEFAULT_CATALOG.get_or_try_init(FormatCatalog::from_env)
}
