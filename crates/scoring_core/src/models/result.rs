use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate outcome of a set-based match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Loss,
    InProgress,
    /// Format declares no match winner; only points are tallied
    NoWinner,
}

/// Aggregate outcome of a period-based game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodOutcome {
    Win,
    Loss,
    Tie,
    InProgress,
}

/// Outcome of either kind, for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
    InProgress,
    NoWinner,
}

impl From<MatchOutcome> for Outcome {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => Outcome::Win,
            MatchOutcome::Loss => Outcome::Loss,
            MatchOutcome::InProgress => Outcome::InProgress,
            MatchOutcome::NoWinner => Outcome::NoWinner,
        }
    }
}

impl From<PeriodOutcome> for Outcome {
    fn from(outcome: PeriodOutcome) -> Self {
        match outcome {
            PeriodOutcome::Win => Outcome::Win,
            PeriodOutcome::Loss => Outcome::Loss,
            PeriodOutcome::Tie => Outcome::Tie,
            PeriodOutcome::InProgress => Outcome::InProgress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub units_won_by_us: u32,
    pub units_won_by_them: u32,
    pub total_points_us: u64,
    pub total_points_them: u64,
    pub point_differential: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    pub outcome: PeriodOutcome,
    pub total_points_us: u64,
    pub total_points_them: u64,
    pub point_differential: i64,
}

/// Result of evaluating any format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evaluation {
    Match(MatchResult),
    Period(PeriodResult),
}

impl Evaluation {
    pub fn outcome(&self) -> Outcome {
        match self {
            Evaluation::Match(r) => r.outcome.into(),
            Evaluation::Period(r) => r.outcome.into(),
        }
    }

    pub fn point_differential(&self) -> i64 {
        match self {
            Evaluation::Match(r) => r.point_differential,
            Evaluation::Period(r) => r.point_differential,
        }
    }

    pub fn totals(&self) -> (u64, u64) {
        match self {
            Evaluation::Match(r) => (r.total_points_us, r.total_points_them),
            Evaluation::Period(r) => (r.total_points_us, r.total_points_them),
        }
    }
}

/// Difference between two point totals
pub(crate) fn differential(us: u64, them: u64) -> i64 {
    // Totals are sums of u32 values over a bounded list, far below i64::MAX.
    us as i64 - them as i64
}
