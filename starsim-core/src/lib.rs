//! # Stars Rules Core
//!
//! Pure rules and formulas over a [`starsdata`] tech catalog: slot
//! compatibility, hull eligibility, planetary defense coverage, cloaking
//! and best-tech selection.
//!
//! Everything here is synchronous and infallible. The catalog is passed in
//! explicitly and never mutated, so any function may run from any thread.
//!
//! ## Key Types
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`can_fill_slot`] | Does a component fit a slot kind |
//! | [`hull_allowed`] | Hull allow/deny gating |
//! | [`defense_coverage`] | Bomb damage stopped by planetary defenses |
//! | [`cloak_percent_for_cloak_units`] | Cloak units to cloaking percent |
//! | [`TechHolder`] | "Does this player have this tech?" |
//! | [`PlayerTechs`] | Reference holder: levels plus racial traits |
//! | [`RulesConfig`] | Tunable rule constants |
//!
//! ## Best-tech selection
//!
//! [`best_terraform`] and the [`finder`] functions all pick the held tech
//! with the highest ranking; the earlier catalog entry wins ties.

pub mod bulk;
pub mod config;
pub mod eligibility;
pub mod finder;
pub mod formulas;
pub mod player;
pub mod slots;
pub mod testing;

pub use bulk::{defense_coverage_many, summarize_planets};
pub use config::RulesConfig;
pub use eligibility::hull_allowed;
pub use finder::techs_just_gained;
pub use formulas::{
    best_terraform, cloak_percent_for_cloak_units, defense_coverage, smart_defense_coverage,
    summarize_defenses, DefenseSummary,
};
pub use player::{PlayerTechs, TechHolder};
pub use slots::{can_fill_slot, can_mount, matching_slots, slot_accepts};
pub use starsdata::is_hull_component;
