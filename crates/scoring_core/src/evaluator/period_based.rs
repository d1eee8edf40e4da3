use std::cmp::Ordering;

use crate::models::result::differential;
use crate::models::{PeriodBasedFormat, PeriodOutcome, PeriodResult, UnitScore};

/// Total the periods played so far and decide the game.
///
/// A level score is a tie only where the format allows ties. Otherwise it
/// stays in progress until overtime or extra periods are appended.
pub fn compute_period_result(
    period_scores: &[UnitScore],
    format: &PeriodBasedFormat,
) -> PeriodResult {
    let total_points_us: u64 = period_scores.iter().map(|s| u64::from(s.ours)).sum();
    let total_points_them: u64 = period_scores.iter().map(|s| u64::from(s.theirs)).sum();

    let outcome = match total_points_us.cmp(&total_points_them) {
        Ordering::Greater => PeriodOutcome::Win,
        Ordering::Less => PeriodOutcome::Loss,
        Ordering::Equal if format.ties_allowed => PeriodOutcome::Tie,
        Ordering::Equal => PeriodOutcome::InProgress,
    };

    PeriodResult {
        outcome,
        total_points_us,
        total_points_them,
        point_differential: differential(total_points_us, total_points_them),
    }
}
