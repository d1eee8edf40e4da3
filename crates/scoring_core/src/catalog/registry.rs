//! Sport → scoring profile registry
//!
//! The catalog is built once, checked for internal consistency, and then
//! only read. Lookups lower-case the caller's sport name and fall back to
//! the default sport when nothing matches.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};
use validator::Validate;

use crate::error::{Result, ScoringError};
use crate::models::{ScoringFormat, SetBasedFormat, SportScoringProfile};

/// Sport used when a lookup finds nothing
pub const DEFAULT_SPORT: &str = "volleyball";

#[derive(Debug, Clone)]
pub struct FormatCatalog {
    profiles: HashMap<String, SportScoringProfile>,
    default_profile: SportScoringProfile,
}

impl FormatCatalog {
    /// Build a catalog, rejecting inconsistent profiles.
    pub fn new(profiles: Vec<SportScoringProfile>, default_sport: &str) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(profiles.len());

        for profile in profiles {
            validate_profile(&profile)?;
            if by_key.contains_key(&profile.key) {
                return Err(ScoringError::DuplicateSport { sport: profile.key });
            }
            by_key.insert(profile.key.clone(), profile);
        }

        let default_profile = by_key
            .get(default_sport)
            .cloned()
            .ok_or_else(|| ScoringError::UnknownDefaultSport { sport: default_sport.to_string() })?;

        debug!(sports = by_key.len(), default_sport, "format catalog built");

        Ok(Self { profiles: by_key, default_profile })
    }

    /// Profile for a sport name, falling back to the default sport.
    ///
    /// Matching is case-insensitive and otherwise exact. Empty and unknown
    /// names both resolve to the default profile; this never fails.
    pub fn resolve_profile(&self, sport_name: &str) -> &SportScoringProfile {
        if let Some(profile) = self.lookup(sport_name) {
            return profile;
        }

        if !sport_name.is_empty() {
            warn!(
                sport = sport_name,
                fallback = %self.default_profile.key,
                "unknown sport, using default scoring profile"
            );
        }
        &self.default_profile
    }

    /// Profile for a sport name without fallback
    pub fn lookup(&self, sport_name: &str) -> Option<&SportScoringProfile> {
        self.profiles.get(&sport_name.to_lowercase())
    }

    /// Format by id within the resolved profile, else the profile's first format.
    pub fn resolve_format(&self, sport_name: &str, format_id: Option<&str>) -> &ScoringFormat {
        self.resolve(sport_name, format_id).1
    }

    /// Resolved profile together with the resolved format
    pub fn resolve(
        &self,
        sport_name: &str,
        format_id: Option<&str>,
    ) -> (&SportScoringProfile, &ScoringFormat) {
        let profile = self.resolve_profile(sport_name);

        if let Some(id) = format_id {
            if let Some(format) = profile.find_format(id) {
                return (profile, format);
            }
            warn!(sport = %profile.key, format_id = id, "unknown format, using default format");
        }

        // Profiles are never empty once the catalog is built.
        (profile, &profile.formats[0])
    }

    pub fn default_profile(&self) -> &SportScoringProfile {
        &self.default_profile
    }

    /// All profiles, ordered by key
    pub fn sports(&self) -> Vec<&SportScoringProfile> {
        let mut sports: Vec<_> = self.profiles.values().collect();
        sports.sort_by(|a, b| a.key.cmp(&b.key));
        sports
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_profile(profile: &SportScoringProfile) -> Result<()> {
    if profile.key != profile.key.to_lowercase() {
        return Err(ScoringError::SportKeyNotLowercase { sport: profile.key.clone() });
    }
    if profile.formats.is_empty() {
        return Err(ScoringError::EmptyProfile { sport: profile.key.clone() });
    }

    let mut seen = HashSet::new();
    for format in &profile.formats {
        if !seen.insert(format.id()) {
            return Err(ScoringError::DuplicateFormat {
                sport: profile.key.clone(),
                format_id: format.id().to_string(),
            });
        }

        if format.is_set_based() != profile.is_set_based {
            return Err(ScoringError::ProfileMismatch {
                sport: profile.key.clone(),
                format_id: format.id().to_string(),
                expected: if profile.is_set_based { "set-based" } else { "period-based" },
            });
        }

        match format {
            ScoringFormat::SetBased(f) => {
                f.validate()?;
                validate_set_rules(&profile.key, f)?;
            }
            ScoringFormat::PeriodBased(f) => f.validate()?,
        }
    }

    Ok(())
}

fn validate_set_rules(sport: &str, format: &SetBasedFormat) -> Result<()> {
    let invalid = |reason: String| ScoringError::InvalidFormat {
        sport: sport.to_string(),
        format_id: format.id.clone(),
        reason,
    };

    if format.point_targets_per_set.contains(&0) {
        return Err(invalid("point targets must be at least 1".to_string()));
    }

    if let Some(needed) = format.sets_to_win {
        if needed == 0 || needed > format.max_sets {
            return Err(invalid(format!(
                "sets_to_win {needed} must be between 1 and max_sets {}",
                format.max_sets
            )));
        }
    }

    if let Some(caps) = &format.caps_per_set {
        if caps.is_empty() {
            return Err(invalid("caps_per_set must not be empty when present".to_string()));
        }
        // Past both lists the last target and cap repeat, so every distinct pair is covered here.
        let distinct_sets = format.point_targets_per_set.len().max(caps.len());
        for index in 0..distinct_sets {
            let (Some(target), Some(cap)) = (format.target_for_set(index), format.cap_for_set(index))
            else {
                continue;
            };
            if cap < target {
                let set = index + 1;
                return Err(invalid(format!("cap {cap} below target {target} in set {set}")));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodBasedFormat;
    use std::time::{Duration, Instant};

    fn set_format(id: &str) -> ScoringFormat {
        ScoringFormat::SetBased(SetBasedFormat {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            sets_to_win: Some(2),
            max_sets: 3,
            point_targets_per_set: vec![25, 25, 15],
            win_by_two_required: true,
            caps_per_set: None,
            suppress_match_winner: false,
        })
    }

    fn period_format(id: &str) -> ScoringFormat {
        ScoringFormat::PeriodBased(PeriodBasedFormat {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            period_count: 4,
            period_label: "Quarter".to_string(),
            period_abbreviation: "Q".to_string(),
            has_overtime: true,
            overtime_label: Some("OT".to_string()),
            has_extra_periods: false,
            extra_periods_label: None,
            ties_allowed: false,
        })
    }

    fn profile(key: &str, is_set_based: bool, formats: Vec<ScoringFormat>) -> SportScoringProfile {
        SportScoringProfile {
            key: key.to_string(),
            name: key.to_string(),
            icon: String::new(),
            is_set_based,
            formats,
        }
    }

    fn small_catalog() -> FormatCatalog {
        FormatCatalog::new(
            vec![
                profile("volleyball", true, vec![set_format("best_of_3")]),
                profile("basketball", false, vec![period_format("four_quarters")]),
            ],
            DEFAULT_SPORT,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve_profile("BasketBall").key, "basketball");
        assert!(catalog.lookup("BASKETBALL").is_some());
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_default() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve_profile("lacrosse"), catalog.resolve_profile("volleyball"));
        assert_eq!(catalog.resolve_profile("").key, "volleyball");
        assert!(catalog.lookup("lacrosse").is_none());
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let catalog = small_catalog();
        assert!(catalog.lookup(" basketball").is_none());
        assert_eq!(catalog.resolve_profile(" basketball").key, "volleyball");
    }

    #[test]
    fn test_resolve_format_falls_back_to_first() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve_format("basketball", Some("nope")).id(), "four_quarters");
        assert_eq!(catalog.resolve_format("basketball", None).id(), "four_quarters");
        assert_eq!(catalog.resolve_format("lacrosse", Some("best_of_3")).id(), "best_of_3");
    }

    #[test]
    fn test_rejects_mismatched_variant() {
        let err = FormatCatalog::new(
            vec![profile("volleyball", true, vec![set_format("a"), period_format("b")])],
            DEFAULT_SPORT,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::ProfileMismatch { ref format_id, .. } if format_id == "b"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = FormatCatalog::new(
            vec![profile("volleyball", true, vec![set_format("a"), set_format("a")])],
            DEFAULT_SPORT,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::DuplicateFormat { .. }));

        let err = FormatCatalog::new(
            vec![
                profile("volleyball", true, vec![set_format("a")]),
                profile("volleyball", true, vec![set_format("b")]),
            ],
            DEFAULT_SPORT,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::DuplicateSport { .. }));
    }

    #[test]
    fn test_rejects_uppercase_key_and_empty_profile() {
        let err = FormatCatalog::new(vec![profile("Volleyball", true, vec![set_format("a")])], "Volleyball")
            .unwrap_err();
        assert!(matches!(err, ScoringError::SportKeyNotLowercase { .. }));

        let err = FormatCatalog::new(vec![profile("volleyball", true, vec![])], DEFAULT_SPORT).unwrap_err();
        assert!(matches!(err, ScoringError::EmptyProfile { .. }));
    }

    #[test]
    fn test_rejects_missing_default() {
        let err = FormatCatalog::new(
            vec![profile("basketball", false, vec![period_format("q")])],
            DEFAULT_SPORT,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::UnknownDefaultSport { .. }));
    }

    #[test]
    fn test_rejects_cap_below_target() {
        let mut format = set_format("capped");
        if let ScoringFormat::SetBased(f) = &mut format {
            f.caps_per_set = Some(vec![27, 27, 14]);
        }
        let err = FormatCatalog::new(vec![profile("volleyball", true, vec![format])], DEFAULT_SPORT)
            .unwrap_err();
        match err {
            ScoringError::InvalidFormat { reason, .. } => assert!(reason.contains("set 3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cap_check_ignores_huge_max_sets() {
        let mut format = set_format("marathon");
        if let ScoringFormat::SetBased(f) = &mut format {
            f.sets_to_win = Some(1);
            f.max_sets = u32::MAX;
            f.point_targets_per_set = vec![25];
            f.caps_per_set = Some(vec![30]);
        }

        let started = Instant::now();
        let catalog = FormatCatalog::new(vec![profile("volleyball", true, vec![format])], DEFAULT_SPORT);
        assert!(catalog.is_ok());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_cap_below_last_target_past_cap_list() {
        let mut format = set_format("short_caps");
        if let ScoringFormat::SetBased(f) = &mut format {
            f.max_sets = u32::MAX;
            f.caps_per_set = Some(vec![27]);
        }
        // caps repeat 27, targets are 25/25/15: every pair is valid
        assert!(FormatCatalog::new(vec![profile("volleyball", true, vec![format.clone()])], DEFAULT_SPORT)
            .is_ok());

        if let ScoringFormat::SetBased(f) = &mut format {
            f.point_targets_per_set = vec![25, 25, 28];
        }
        let err = FormatCatalog::new(vec![profile("volleyball", true, vec![format])], DEFAULT_SPORT)
            .unwrap_err();
        match err {
            ScoringError::InvalidFormat { reason, .. } => assert!(reason.contains("set 3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_sets_to_win_above_max() {
        let mut format = set_format("odd");
        if let ScoringFormat::SetBased(f) = &mut format {
            f.sets_to_win = Some(4);
        }
        let err = FormatCatalog::new(vec![profile("volleyball", true, vec![format])], DEFAULT_SPORT)
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidFormat { .. }));
    }

    #[test]
    fn test_rejects_zero_period_count_via_validator() {
        let mut format = period_format("none");
        if let ScoringFormat::PeriodBased(f) = &mut format {
            f.period_count = 0;
        }
        let err = FormatCatalog::new(
            vec![
                profile("volleyball", true, vec![set_format("a")]),
                profile("basketball", false, vec![format]),
            ],
            DEFAULT_SPORT,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::Validation(_)));
    }

    #[test]
    fn test_sports_sorted() {
        let catalog = small_catalog();
        let keys: Vec<_> = catalog.sports().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["basketball", "volleyball"]);
        assert_eq!(catalog.len(), 2);
    }
}
