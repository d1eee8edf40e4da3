// Scoring data model: formats, profiles, recorded scores, results

pub mod format;
pub mod profile;
pub mod result;
pub mod score;

pub use format::{value_at_or_last, FormatKind, PeriodBasedFormat, ScoringFormat, SetBasedFormat};
pub use profile::SportScoringProfile;
pub use result::{Evaluation, MatchOutcome, MatchResult, Outcome, PeriodOutcome, PeriodResult};
pub use score::{RawUnitScore, Side, UnitScore};
