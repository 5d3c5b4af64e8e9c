//! # Stars Tech Catalog
//!
//! Data model for a Stars-style technology catalog: hulls and their slots,
//! hull components, engines, planetary scanners, defenses, terraforms and
//! planetaries.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Tech`] | Base record every catalog entry embeds |
//! | [`TechStore`] | One ruleset's catalog with a name index |
//! | [`HullSlotType`] | Bitmask of component kinds a slot accepts |
//! | [`TechRequirements`] | Levels, racial traits and hull gates |
//!
//! Rulesets load from JSON via [`load_tech_store`]; the standard one is
//! built in as [`default_tech_store`].

pub mod components;
pub mod defaults;
pub mod defines;
pub mod hulls;
pub mod levels;
pub mod loader;
pub mod planetary;
pub mod race;
pub mod requirements;
pub mod slots;
pub mod store;
pub mod tech;

pub use components::{Engine, MineFieldType, TechEngine, TechHullComponent};
pub use defaults::default_tech_store;
pub use hulls::{TechHull, TechHullType};
pub use levels::{TechField, TechLevel};
pub use loader::{CatalogError, CatalogIssue, load_tech_store, tech_store_from_reader, validate};
pub use planetary::{
    TechDefense, TechPlanetary, TechPlanetaryScanner, TechTerraform, TerraformHabType,
};
pub use race::{LrtSet, Prt};
pub use requirements::TechRequirements;
pub use slots::{HullSlot, HullSlotType, Vector};
pub use store::{TechRef, TechStore, TechStoreData, normalize_tech_name};
pub use tech::{Cost, Tech, TechCategory, is_hull_component};
