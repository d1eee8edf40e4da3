//! Live score entry helpers
//!
//! Labels for each unit of play and whether another unit may be recorded.
//! Overtime and extra periods are appended by the caller while
//! `can_add_unit` allows it; the result is then recomputed from the full
//! score sheet.

use crate::models::{
    MatchOutcome, PeriodBasedFormat, PeriodOutcome, ScoringFormat, SetBasedFormat, UnitScore,
};

use super::period_based::compute_period_result;
use super::set_based::{compute_match_result, SetRule};

const DEFAULT_OVERTIME_LABEL: &str = "OT";

/// Display label for the unit at `index` (0-based), `None` if the format has no such unit
pub fn unit_label(format: &ScoringFormat, index: usize) -> Option<String> {
    match format {
        ScoringFormat::SetBased(f) => set_label(f, index),
        ScoringFormat::PeriodBased(f) => period_label(f, index),
    }
}

/// Labels for every recorded unit
pub fn unit_labels(format: &ScoringFormat, count: usize) -> Vec<String> {
    (0..count)
        .map(|index| unit_label(format, index).unwrap_or_else(|| format!("#{}", index + 1)))
        .collect()
}

/// Whether the score sheet can take another unit of play
pub fn can_add_unit(format: &ScoringFormat, scores: &[UnitScore]) -> bool {
    match format {
        ScoringFormat::SetBased(f) => can_add_set(f, scores),
        ScoringFormat::PeriodBased(f) => can_add_period(f, scores),
    }
}

fn set_label(format: &SetBasedFormat, index: usize) -> Option<String> {
    (index < format.max_sets as usize).then(|| format!("Set {}", index + 1))
}

fn period_label(format: &PeriodBasedFormat, index: usize) -> Option<String> {
    let regulation = format.period_count as usize;

    if index < regulation || (format.has_extra_periods && !format.has_overtime) {
        return Some(numbered(&format.period_abbreviation, index + 1));
    }

    if format.has_overtime {
        let label = format.overtime_label.as_deref().unwrap_or(DEFAULT_OVERTIME_LABEL);
        let overtime = index - regulation;
        return Some(if overtime == 0 {
            label.to_string()
        } else {
            format!("{label}{}", overtime + 1)
        });
    }

    None
}

fn numbered(abbreviation: &str, number: usize) -> String {
    if abbreviation.chars().count() > 1 {
        format!("{abbreviation} {number}")
    } else {
        format!("{abbreviation}{number}")
    }
}

fn can_add_set(format: &SetBasedFormat, scores: &[UnitScore]) -> bool {
    if scores.len() >= format.max_sets as usize {
        return false;
    }

    if let Some((last_index, last)) = scores.iter().enumerate().last() {
        let finished =
            SetRule::for_set(format, last_index).is_some_and(|rule| rule.is_complete(*last));
        if !finished {
            return false;
        }
    }

    !matches!(compute_match_result(scores, format).outcome, MatchOutcome::Win | MatchOutcome::Loss)
}

fn can_add_period(format: &PeriodBasedFormat, scores: &[UnitScore]) -> bool {
    if scores.len() < format.period_count as usize {
        return true;
    }

    format.can_play_past_regulation()
        && compute_period_result(scores, format).outcome == PeriodOutcome::InProgress
}
