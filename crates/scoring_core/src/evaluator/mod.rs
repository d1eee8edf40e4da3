// Outcome evaluation: pure functions over a format and a score sheet

pub mod period_based;
pub mod progress;
pub mod set_based;

pub use period_based::compute_period_result;
pub use progress::{can_add_unit, unit_label, unit_labels};
pub use set_based::{compute_match_result, is_set_complete, set_winner, SetRule};

use crate::models::{Evaluation, ScoringFormat, UnitScore};

/// Evaluate a score sheet under any format
pub fn evaluate(format: &ScoringFormat, scores: &[UnitScore]) -> Evaluation {
    match format {
        ScoringFormat::SetBased(f) => Evaluation::Match(compute_match_result(scores, f)),
        ScoringFormat::PeriodBased(f) => Evaluation::Period(compute_period_result(scores, f)),
    }
}
