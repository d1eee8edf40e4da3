use serde::{Deserialize, Serialize};

use super::format::ScoringFormat;

/// One sport's display metadata and its scoring formats, in preference order.
///
/// `is_set_based` must agree with every format in `formats`; `FormatCatalog`
/// checks this when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportScoringProfile {
    /// Lower-case lookup key ("volleyball")
    pub key: String,
    /// Display name ("Volleyball")
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub is_set_based: bool,
    pub formats: Vec<ScoringFormat>,
}

impl SportScoringProfile {
    /// First listed format
    pub fn default_format(&self) -> Option<&ScoringFormat> {
        self.formats.first()
    }

    pub fn find_format(&self, format_id: &str) -> Option<&ScoringFormat> {
        self.formats.iter().find(|f| f.id() == format_id)
    }
}
