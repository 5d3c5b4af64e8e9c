use crate::config::RulesConfig;
use serde::{Deserialize, Serialize};
use starsdata::defines::{DEFAULT_SMART_DEFENSE_FACTOR, MAX_DEFENSES};
use starsdata::TechDefense;

/// `1 - (1 - per_unit)^count`, with count clamped to `0..=max_defenses`.
fn stacked_coverage(per_unit: f64, count: i32, max_defenses: i32) -> f64 {
    let count = count.clamp(0, max_defenses.max(0));
    1.0 - (1.0 - per_unit).powf(count as f64)
}

/// Fraction (0..=1) of regular bomb damage stopped by `defense_count`
/// installations of `defense`.
///
/// Counts outside `0..=100` are clamped.
pub fn defense_coverage(defense: &TechDefense, defense_count: i32) -> f64 {
    stacked_coverage(defense.defense_coverage / 100.0, defense_count, MAX_DEFENSES)
}

/// Fraction (0..=1) of smart bomb damage stopped. Each installation counts
/// for `smart_factor` of its normal coverage (0.5 when `None`).
pub fn smart_defense_coverage(
    defense: &TechDefense,
    defense_count: i32,
    smart_factor: Option<f64>,
) -> f64 {
    let factor = smart_factor.unwrap_or(DEFAULT_SMART_DEFENSE_FACTOR);
    stacked_coverage(
        defense.defense_coverage / 100.0 * factor,
        defense_count,
        MAX_DEFENSES,
    )
}

/// Coverage of one planet's defenses against both bomb kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseSummary {
    pub coverage: f64,
    pub smart_coverage: f64,
}

/// Summarize a planet's defenses under `config`.
pub fn summarize_defenses(
    defense: &TechDefense,
    defense_count: i32,
    config: &RulesConfig,
) -> DefenseSummary {
    let per_unit = defense.defense_coverage / 100.0;
    DefenseSummary {
        coverage: stacked_coverage(per_unit, defense_count, config.max_defenses),
        smart_coverage: stacked_coverage(
            per_unit * config.smart_defense_factor,
            defense_count,
            config.max_defenses,
        ),
    }
}
