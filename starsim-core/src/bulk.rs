//! Defense evaluation over many planets at once.

use crate::config::RulesConfig;
use crate::formulas::{defense_coverage, summarize_defenses, DefenseSummary};
use rayon::prelude::*;
use starsdata::TechDefense;
use tracing::instrument;

/// [`defense_coverage`] for each count, in input order.
#[instrument(skip_all, name = "defense_coverage_many")]
pub fn defense_coverage_many(defense: &TechDefense, counts: &[i32]) -> Vec<f64> {
    log::debug!(
        "Evaluating {} coverage for {} planets",
        defense.tech.name,
        counts.len()
    );
    counts
        .par_iter()
        .map(|&count| defense_coverage(defense, count))
        .collect()
}

/// One [`DefenseSummary`] per `(defense, count)` planet, in input order.
#[instrument(skip_all, name = "summarize_planets")]
pub fn summarize_planets(
    planets: &[(&TechDefense, i32)],
    config: &RulesConfig,
) -> Vec<DefenseSummary> {
    let _span = tracing::info_span!("planets_parallel", count = planets.len()).entered();
    planets
        .par_iter()
        .map(|&(defense, count)| summarize_defenses(defense, count, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::defense;

    #[test]
    fn test_coverage_many_matches_sequential() {
        let sdi = defense(0.99);
        let counts: Vec<i32> = (-5..150).collect();
        let expected: Vec<f64> = counts.iter().map(|&c| defense_coverage(&sdi, c)).collect();
        assert_eq!(defense_coverage_many(&sdi, &counts), expected);
    }

    #[test]
    fn test_summarize_planets_preserves_order() {
        let battery = defense(1.99);
        let shield = defense(2.99);
        let config = RulesConfig::default();
        let planets: Vec<(&TechDefense, i32)> = (0..64)
            .map(|i| (if i % 2 == 0 { &battery } else { &shield }, i))
            .collect();

        let summaries = summarize_planets(&planets, &config);
        assert_eq!(summaries.len(), planets.len());
        for (summary, &(d, count)) in summaries.iter().zip(&planets) {
            assert_eq!(*summary, summarize_defenses(d, count, &config));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(defense_coverage_many(&defense(1.0), &[]).is_empty());
        assert!(summarize_planets(&[], &RulesConfig::default()).is_empty());
    }
}
