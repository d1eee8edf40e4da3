use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreField, ScoringError};

/// Winner of a single set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Us,
    Them,
}

/// Score of one set or one period, from our team's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitScore {
    pub ours: u32,
    pub theirs: u32,
}

impl UnitScore {
    pub const fn new(ours: u32, theirs: u32) -> Self {
        Self { ours, theirs }
    }

    /// Absolute point margin between the two sides
    pub fn margin(&self) -> u32 {
        self.ours.abs_diff(self.theirs)
    }

    /// Convert caller input into a score.
    ///
    /// Missing values count as zero. Negative values and values that do not
    /// fit in `u32` are rejected here so the evaluator only ever sees
    /// well-formed scores.
    pub fn try_from_raw(unit: usize, raw: &RawUnitScore) -> Result<Self> {
        Ok(Self {
            ours: checked_points(unit, ScoreField::Ours, raw.ours)?,
            theirs: checked_points(unit, ScoreField::Theirs, raw.theirs)?,
        })
    }

    /// Convert a whole score sheet, reporting the first bad unit.
    pub fn try_from_raw_list(raw: &[RawUnitScore]) -> Result<Vec<Self>> {
        raw.iter()
            .enumerate()
            .map(|(unit, score)| Self::try_from_raw(unit, score))
            .collect()
    }
}

impl From<(u32, u32)> for UnitScore {
    fn from((ours, theirs): (u32, u32)) -> Self {
        Self { ours, theirs }
    }
}

/// Score as submitted by a client, before sanitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawUnitScore {
    #[serde(default)]
    pub ours: Option<i64>,
    #[serde(default)]
    pub theirs: Option<i64>,
}

impl RawUnitScore {
    pub fn new(ours: Option<i64>, theirs: Option<i64>) -> Self {
        Self { ours, theirs }
    }
}

fn checked_points(unit: usize, field: ScoreField, value: Option<i64>) -> Result<u32> {
    match value {
        None => Ok(0),
        Some(points) => {
            u32::try_from(points)
                .map_err(|_| ScoringError::InvalidScore { unit, field, value: points })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_points_count_as_zero() {
        let raw = RawUnitScore::new(None, Some(12));
        let score = UnitScore::try_from_raw(0, &raw).unwrap();
        assert_eq!(score, UnitScore::new(0, 12));
    }

    #[test]
    fn test_negative_points_rejected() {
        let raw = vec![RawUnitScore::new(Some(25), Some(20)), RawUnitScore::new(Some(-1), Some(3))];
        let err = UnitScore::try_from_raw_list(&raw).unwrap_err();
        match err {
            ScoringError::InvalidScore { unit, field, value } => {
                assert_eq!(unit, 1);
                assert_eq!(field, ScoreField::Ours);
                assert_eq!(value, -1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_points_rejected() {
        let raw = RawUnitScore::new(Some(1), Some(i64::from(u32::MAX) + 1));
        assert!(UnitScore::try_from_raw(4, &raw).is_err());
    }

    #[test]
    fn test_raw_score_accepts_null_and_missing_fields() {
        let raw: Vec<RawUnitScore> =
            serde_json::from_str(r#"[{"ours": 10, "theirs": null}, {"theirs": 4}]"#).unwrap();
        let scores = UnitScore::try_from_raw_list(&raw).unwrap();
        assert_eq!(scores, vec![UnitScore::new(10, 0), UnitScore::new(0, 4)]);
    }

    #[test]
    fn test_margin() {
        assert_eq!(UnitScore::new(25, 27).margin(), 2);
        assert_eq!(UnitScore::new(u32::MAX, 0).margin(), u32::MAX);
    }
}
