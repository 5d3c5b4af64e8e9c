//! Numeric game formulas.
//!
//! Pure and deterministic over `f64`. Out-of-range inputs are clamped or
//! saturate; nothing here can fail.

pub mod cloak;
pub mod defense;
pub mod terraform;

pub use cloak::cloak_percent_for_cloak_units;
pub use defense::{
    defense_coverage, smart_defense_coverage, summarize_defenses, DefenseSummary,
};
pub use terraform::best_terraform;
