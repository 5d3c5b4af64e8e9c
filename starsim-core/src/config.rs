use serde::{Deserialize, Serialize};
use starsdata::defines::defense;

/// Rules configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Fraction of a defense's coverage that applies against smart bombs.
    ///
    /// - `1.0`: smart bombs are stopped like regular bombs
    /// - `0.5`: standard rules
    /// - `0.0`: smart bombs ignore planetary defenses
    pub smart_defense_factor: f64,

    /// Defense count at which the coverage curve saturates.
    pub max_defenses: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            smart_defense_factor: defense::DEFAULT_SMART_DEFENSE_FACTOR,
            max_defenses: defense::MAX_DEFENSES,
        }
    }
}
