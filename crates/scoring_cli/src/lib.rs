//! Scoring CLI Library
//!
//! Score-sheet parsing, catalog selection and report formatting used by the
//! `scoring` binary.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use scoring_core::{EvaluateRequest, FormatCatalog, RawUnitScore, ScoringFormat};
use tracing::debug;

/// Parse a score sheet like `"25-20, 22-25, 15-"`.
///
/// Each entry is `ours-theirs`; a blank side counts as zero. Negative values
/// are passed through so that the core rejects them with its own error.
pub fn parse_score_list(input: &str) -> Result<Vec<RawUnitScore>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim();
            parse_score(entry).with_context(|| format!("Invalid score #{}: '{entry}'", index + 1))
        })
        .collect()
}

fn parse_score(entry: &str) -> Result<RawUnitScore> {
    // Split on the separating dash, not a leading minus sign.
    let Some(split) = entry.char_indices().skip(1).find(|&(_, c)| c == '-').map(|(i, _)| i) else {
        bail!("expected 'ours-theirs'");
    };

    let (ours, theirs) = (&entry[..split], &entry[split + 1..]);
    Ok(RawUnitScore::new(parse_side(ours)?, parse_side(theirs)?))
}

fn parse_side(value: &str) -> Result<Option<i64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let points = value.parse::<i64>().with_context(|| format!("'{value}' is not a number"))?;
    Ok(Some(points))
}

/// Catalog from an explicit file, else `SCORING_FORMATS_PATH`, else built-in
pub fn load_catalog(path: Option<&Path>) -> Result<FormatCatalog> {
    debug!(path = ?path, "loading scoring formats");
    match path {
        Some(path) => FormatCatalog::from_path(path)
            .with_context(|| format!("Failed to load scoring formats from {}", path.display())),
        None => FormatCatalog::from_env().context("Failed to load scoring formats"),
    }
}

/// Read an `EvaluateRequest` from a JSON file
pub fn read_request(path: &Path) -> Result<EvaluateRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request JSON: {}", path.display()))
}

/// One line per sport: key, name, kind and format ids
pub fn render_sports(catalog: &FormatCatalog) -> String {
    let mut out = String::new();
    for profile in catalog.sports() {
        let kind = if profile.is_set_based { "sets" } else { "periods" };
        let is_default = profile.key == catalog.default_profile().key;
        let default_marker = if is_default { " (default)" } else { "" };
        let _ = writeln!(out, "{} {}{}", profile.icon, profile.name, default_marker);
        let _ = writeln!(out, "   key: {}  [{}]", profile.key, kind);
        for format in &profile.formats {
            let _ = writeln!(out, "   - {:<24} {}", format.id(), describe(format));
        }
    }
    out
}

fn describe(format: &ScoringFormat) -> String {
    match format {
        ScoringFormat::SetBased(f) => {
            let winner = match f.sets_to_win {
                Some(n) if f.declares_winner() => format!("first to {n} of {}", f.max_sets),
                _ => format!("{} sets, no winner", f.max_sets),
            };
            let targets: Vec<String> = f.point_targets_per_set.iter().map(u32::to_string).collect();
            let mut text = format!("{winner}, to {}", targets.join("/"));
            if f.win_by_two_required {
                text.push_str(", win by 2");
            }
            if let Some(caps) = &f.caps_per_set {
                let caps: Vec<String> = caps.iter().map(u32::to_string).collect();
                let _ = write!(text, ", cap {}", caps.join("/"));
            }
            text
        }
        ScoringFormat::PeriodBased(f) => {
            let mut text = format!("{} x {}", f.period_count, f.period_label);
            if f.has_overtime {
                text.push_str(", overtime");
            }
            if f.has_extra_periods {
                let label = f.extra_periods_label.as_deref().unwrap_or("extra periods");
                let _ = write!(text, ", {label}");
            }
            text.push_str(if f.ties_allowed { ", ties allowed" } else { ", no ties" });
            text
        }
    }
}
