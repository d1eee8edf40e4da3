//! Scoring format definitions
//!
//! A format is either set-based (volleyball: each set is scored to a
//! target, the match is decided by sets won) or period-based (basketball,
//! soccer, baseball: points accumulate across periods). The two shapes
//! share no rule fields, so they are kept as separate structs behind an
//! explicitly tagged enum.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Element at `index`, or the last element when the list is shorter.
///
/// Formats list explicit values only for the early sets and let the final
/// entry stand for every later set. Returns `None` only for an empty list.
pub fn value_at_or_last<T: Copy>(list: &[T], index: usize) -> Option<T> {
    list.get(index).or_else(|| list.last()).copied()
}

/// Set-based format (volleyball and similar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SetBasedFormat {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Sets needed to take the match. `None` means no match winner is declared.
    #[serde(default)]
    pub sets_to_win: Option<u32>,
    #[validate(range(min = 1))]
    pub max_sets: u32,
    /// Target score per set index; the last entry repeats.
    #[validate(length(min = 1))]
    pub point_targets_per_set: Vec<u32>,
    pub win_by_two_required: bool,
    /// Hard score ceiling per set index; the last entry repeats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caps_per_set: Option<Vec<u32>>,
    #[serde(default)]
    pub suppress_match_winner: bool,
}

impl SetBasedFormat {
    /// Target score for the set at `index` (0-based)
    pub fn target_for_set(&self, index: usize) -> Option<u32> {
        value_at_or_last(&self.point_targets_per_set, index)
    }

    /// Cap for the set at `index` (0-based), `None` when the format has no caps
    pub fn cap_for_set(&self, index: usize) -> Option<u32> {
        self.caps_per_set.as_deref().and_then(|caps| value_at_or_last(caps, index))
    }

    /// Whether this format ever declares a match winner
    pub fn declares_winner(&self) -> bool {
        !self.suppress_match_winner && self.sets_to_win.is_some()
    }
}

/// Period-based format (basketball, soccer, baseball, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PeriodBasedFormat {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1))]
    pub period_count: u32,
    pub period_label: String,
    pub period_abbreviation: String,
    #[serde(default)]
    pub has_overtime: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_label: Option<String>,
    /// Additional regulation-style periods (extra innings)
    #[serde(default)]
    pub has_extra_periods: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_periods_label: Option<String>,
    #[serde(default)]
    pub ties_allowed: bool,
}

impl PeriodBasedFormat {
    /// Whether a level score after regulation can be broken by playing on
    pub fn can_play_past_regulation(&self) -> bool {
        self.has_overtime || self.has_extra_periods
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    SetBased,
    PeriodBased,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::SetBased => "set_based",
            FormatKind::PeriodBased => "period_based",
        }
    }
}

/// A scoring format, tagged by `kind` in serialized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringFormat {
    SetBased(SetBasedFormat),
    PeriodBased(PeriodBasedFormat),
}

impl ScoringFormat {
    pub fn kind(&self) -> FormatKind {
        match self {
            ScoringFormat::SetBased(_) => FormatKind::SetBased,
            ScoringFormat::PeriodBased(_) => FormatKind::PeriodBased,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ScoringFormat::SetBased(f) => &f.id,
            ScoringFormat::PeriodBased(f) => &f.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScoringFormat::SetBased(f) => &f.name,
            ScoringFormat::PeriodBased(f) => &f.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ScoringFormat::SetBased(f) => &f.description,
            ScoringFormat::PeriodBased(f) => &f.description,
        }
    }

    pub fn is_set_based(&self) -> bool {
        matches!(self, ScoringFormat::SetBased(_))
    }

    pub fn as_set_based(&self) -> Option<&SetBasedFormat> {
        match self {
            ScoringFormat::SetBased(f) => Some(f),
            ScoringFormat::PeriodBased(_) => None,
        }
    }

    pub fn as_period_based(&self) -> Option<&PeriodBasedFormat> {
        match self {
            ScoringFormat::PeriodBased(f) => Some(f),
            ScoringFormat::SetBased(_) => None,
        }
    }
}

impl From<SetBasedFormat> for ScoringFormat {
    fn from(format: SetBasedFormat) -> Self {
        ScoringFormat::SetBased(format)
    }
}

impl From<PeriodBasedFormat> for ScoringFormat {
    fn from(format: PeriodBasedFormat) -> Self {
        ScoringFormat::PeriodBased(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indoor_best_of_5() -> SetBasedFormat {
        SetBasedFormat {
            id: "best_of_5".to_string(),
            name: "Best of 5".to_string(),
            description: String::new(),
            sets_to_win: Some(3),
            max_sets: 5,
            point_targets_per_set: vec![25, 25, 15],
            win_by_two_required: true,
            caps_per_set: Some(vec![30, 30, 20]),
            suppress_match_winner: false,
        }
    }

    #[test]
    fn test_value_at_or_last() {
        assert_eq!(value_at_or_last(&[25, 25, 15], 0), Some(25));
        assert_eq!(value_at_or_last(&[25, 25, 15], 2), Some(15));
        assert_eq!(value_at_or_last(&[25, 25, 15], 7), Some(15));
        assert_eq!(value_at_or_last::<u32>(&[], 0), None);
    }

    #[test]
    fn test_target_and_cap_reuse_last_entry() {
        let format = indoor_best_of_5();
        assert_eq!(format.target_for_set(3), Some(15));
        assert_eq!(format.cap_for_set(4), Some(20));
    }

    #[test]
    fn test_declares_winner() {
        let mut format = indoor_best_of_5();
        assert!(format.declares_winner());

        format.suppress_match_winner = true;
        assert!(!format.declares_winner());

        format.suppress_match_winner = false;
        format.sets_to_win = None;
        assert!(!format.declares_winner());
    }

    #[test]
    fn test_no_caps_means_no_cap() {
        let mut format = indoor_best_of_5();
        format.caps_per_set = None;
        assert_eq!(format.cap_for_set(0), None);
    }

    #[test]
    fn test_kind_tag_round_trip_shape() {
        let format = ScoringFormat::from(indoor_best_of_5());
        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["kind"], "set_based");
        assert_eq!(value["max_sets"], 5);

        let parsed: ScoringFormat = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.kind(), FormatKind::SetBased);
        assert!(parsed.as_period_based().is_none());
    }

    #[test]
    fn test_validator_rejects_zero_max_sets() {
        let mut format = indoor_best_of_5();
        format.max_sets = 0;
        assert!(format.validate().is_err());

        format.max_sets = 5;
        format.point_targets_per_set.clear();
        assert!(format.validate().is_err());
    }

    #[test]
    fn test_period_format_defaults() {
        let format: ScoringFormat = serde_json::from_str(
            r#"{
                "kind": "period_based",
                "id": "two_halves",
                "name": "2 Halves",
                "period_count": 2,
                "period_label": "Half",
                "period_abbreviation": "H"
            }"#,
        )
        .unwrap();
        let period = format.as_period_based().unwrap();
        assert!(!period.ties_allowed);
        assert!(!period.can_play_past_regulation());
        assert_eq!(period.overtime_label, None);
    }
}
