//! Set completion and match aggregation for set-based formats
//!
//! ## Completion rules
//! - Nothing is complete until one side reaches the set target.
//! - Without win-by-two, reaching the target ends the set.
//! - With win-by-two, a lead of 2 is needed, unless a cap is set and one
//!   side has reached it, in which case any lead ends the set.

use tracing::warn;

use crate::models::result::differential;
use crate::models::{MatchOutcome, MatchResult, SetBasedFormat, Side, UnitScore};

/// Rules for a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRule {
    pub target: u32,
    pub cap: Option<u32>,
    pub win_by_two: bool,
}

impl SetRule {
    /// Rule for the set at `index` (0-based). `None` when the format lists no targets.
    pub fn for_set(format: &SetBasedFormat, index: usize) -> Option<Self> {
        Some(Self {
            target: format.target_for_set(index)?,
            cap: format.cap_for_set(index),
            win_by_two: format.win_by_two_required,
        })
    }

    pub fn is_complete(&self, score: UnitScore) -> bool {
        is_set_complete(score.ours, score.theirs, self.target, self.cap, self.win_by_two)
    }

    pub fn winner(&self, score: UnitScore) -> Option<Side> {
        set_winner(score.ours, score.theirs, self.target, self.cap, self.win_by_two)
    }
}

/// Whether a set with the given score is over.
///
/// `cap`, when present, is expected to be at least `target`.
pub fn is_set_complete(
    our_score: u32,
    their_score: u32,
    target_score: u32,
    cap: Option<u32>,
    win_by_two_required: bool,
) -> bool {
    if our_score < target_score && their_score < target_score {
        return false;
    }

    if !win_by_two_required {
        return true;
    }

    let margin = UnitScore::new(our_score, their_score).margin();

    if let Some(cap) = cap {
        if our_score >= cap || their_score >= cap {
            return margin >= 1;
        }
    }

    margin >= 2
}

/// Winner of a set, `None` while the set is still in play.
pub fn set_winner(
    our_score: u32,
    their_score: u32,
    target_score: u32,
    cap: Option<u32>,
    win_by_two_required: bool,
) -> Option<Side> {
    if !is_set_complete(our_score, their_score, target_score, cap, win_by_two_required) {
        return None;
    }

    if our_score == their_score {
        // Only reachable with win-by-two off and both sides at or past target.
        warn!(our_score, their_score, target_score, "set marked complete with level score");
    }

    if our_score > their_score {
        Some(Side::Us)
    } else {
        Some(Side::Them)
    }
}

/// Count sets won and points scored, and decide the match.
pub fn compute_match_result(unit_scores: &[UnitScore], format: &SetBasedFormat) -> MatchResult {
    let total_points_us: u64 = unit_scores.iter().map(|s| u64::from(s.ours)).sum();
    let total_points_them: u64 = unit_scores.iter().map(|s| u64::from(s.theirs)).sum();
    let point_differential = differential(total_points_us, total_points_them);

    if format.suppress_match_winner {
        return MatchResult {
            outcome: MatchOutcome::NoWinner,
            units_won_by_us: 0,
            units_won_by_them: 0,
            total_points_us,
            total_points_them,
            point_differential,
        };
    }

    let mut units_won_by_us = 0;
    let mut units_won_by_them = 0;

    for (index, score) in unit_scores.iter().enumerate() {
        let winner = SetRule::for_set(format, index).and_then(|rule| rule.winner(*score));
        match winner {
            Some(Side::Us) => units_won_by_us += 1,
            Some(Side::Them) => units_won_by_them += 1,
            None => {}
        }
    }

    let outcome = match format.sets_to_win {
        Some(needed) if units_won_by_us >= needed => MatchOutcome::Win,
        Some(needed) if units_won_by_them >= needed => MatchOutcome::Loss,
        _ => MatchOutcome::InProgress,
    };

    MatchResult {
        outcome,
        units_won_by_us,
        units_won_by_them,
        total_points_us,
        total_points_them,
        point_differential,
    }
}
