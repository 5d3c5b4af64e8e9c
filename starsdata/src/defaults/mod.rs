//! Built-in standard ruleset.
//!
//! [`default_tech_store`] builds a fresh catalog on each call. Callers that
//! need it repeatedly should build it once and share it by reference.

mod components;
mod engines;
mod hulls;
mod planetary;

use crate::levels::TechLevel;
use crate::requirements::TechRequirements;
use crate::store::{TechStore, TechStoreData};
use crate::tech::{Cost, Tech, TechCategory};

/// The standard catalog.
pub fn default_tech_store() -> TechStore {
    let store = TechStore::new(TechStoreData {
        engines: engines::engines(),
        planetary_scanners: planetary::planetary_scanners(),
        terraforms: planetary::terraforms(),
        defenses: planetary::defenses(),
        planetaries: planetary::planetaries(),
        hull_components: components::hull_components(),
        hulls: hulls::hulls(),
    });
    log::trace!("Built default tech store with {} techs", store.len());
    store
}

// Shorthand used by the catalog tables.

fn tech(
    name: &str,
    cost: (i32, i32, i32, i32),
    requirements: TechRequirements,
    ranking: i32,
    category: TechCategory,
) -> Tech {
    let (ironium, boranium, germanium, resources) = cost;
    Tech::new(
        name,
        Cost::new(ironium, boranium, germanium, resources),
        requirements,
        ranking,
        category,
    )
}

/// Requirements from levels in field order:
/// energy, weapons, propulsion, construction, electronics, biotechnology.
fn levels(en: i32, wea: i32, prop: i32, con: i32, el: i32, bio: i32) -> TechRequirements {
    TechRequirements::new(TechLevel::new(en, wea, prop, con, el, bio))
}

fn none() -> TechRequirements {
    TechRequirements::default()
}
