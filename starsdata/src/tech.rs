//! Base technology record shared by every catalog entry.
//!
//! Each specialized tech (engines, hulls, terraforms, ...) embeds a [`Tech`]
//! and is serialized flattened, so every catalog entry carries the same
//! `name`, `cost`, `requirements`, `ranking` and `category` keys.

use crate::requirements::TechRequirements;
use serde::{Deserialize, Serialize};

/// Mineral and resource price of a tech.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cost {
    pub ironium: i32,
    pub boranium: i32,
    pub germanium: i32,
    pub resources: i32,
}

impl Cost {
    pub const fn new(ironium: i32, boranium: i32, germanium: i32, resources: i32) -> Self {
        Self {
            ironium,
            boranium,
            germanium,
            resources,
        }
    }

    /// Total minerals (excluding resources).
    pub fn minerals(&self) -> i32 {
        self.ironium + self.boranium + self.germanium
    }
}

/// Kind of technology. Determines which catalog list a tech lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechCategory {
    Armor,
    BeamWeapon,
    Bomb,
    Electrical,
    Engine,
    Mechanical,
    MineLayer,
    MineRobot,
    Orbital,
    Planetary,
    PlanetaryScanner,
    PlanetaryDefense,
    Scanner,
    Shield,
    ShipHull,
    StarbaseHull,
    Terraforming,
    Torpedo,
    /// Any category string this ruleset version does not recognize.
    #[serde(other)]
    Unknown,
}

impl TechCategory {
    /// Every declared category, in declaration order.
    pub const ALL: [TechCategory; 19] = [
        TechCategory::Armor,
        TechCategory::BeamWeapon,
        TechCategory::Bomb,
        TechCategory::Electrical,
        TechCategory::Engine,
        TechCategory::Mechanical,
        TechCategory::MineLayer,
        TechCategory::MineRobot,
        TechCategory::Orbital,
        TechCategory::Planetary,
        TechCategory::PlanetaryScanner,
        TechCategory::PlanetaryDefense,
        TechCategory::Scanner,
        TechCategory::Shield,
        TechCategory::ShipHull,
        TechCategory::StarbaseHull,
        TechCategory::Terraforming,
        TechCategory::Torpedo,
        TechCategory::Unknown,
    ];

    /// True if techs of this category are mounted into hull slots.
    ///
    /// No wildcard arm: a new category must be classified here.
    pub fn is_hull_component(self) -> bool {
        match self {
            TechCategory::Armor
            | TechCategory::BeamWeapon
            | TechCategory::Bomb
            | TechCategory::Electrical
            | TechCategory::Engine
            | TechCategory::Mechanical
            | TechCategory::MineLayer
            | TechCategory::MineRobot
            | TechCategory::Orbital
            | TechCategory::Scanner
            | TechCategory::Torpedo
            | TechCategory::Shield => true,
            TechCategory::Planetary
            | TechCategory::PlanetaryScanner
            | TechCategory::PlanetaryDefense
            | TechCategory::ShipHull
            | TechCategory::StarbaseHull
            | TechCategory::Terraforming => false,
            TechCategory::Unknown => false,
        }
    }

    /// True for ship and starbase hulls.
    pub fn is_hull(self) -> bool {
        matches!(self, TechCategory::ShipHull | TechCategory::StarbaseHull)
    }
}

/// Free-function form of [`TechCategory::is_hull_component`].
pub fn is_hull_component(category: TechCategory) -> bool {
    category.is_hull_component()
}

/// Base technology record.
///
/// `category` is fixed at construction; use [`Tech::new`] to build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tech {
    /// Persistence identity, owned by the storage layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_store_id: Option<i64>,

    pub name: String,
    #[serde(default)]
    pub cost: Cost,
    #[serde(default)]
    pub requirements: TechRequirements,
    /// Ordering hint, higher is better. Missing counts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
    category: TechCategory,
    /// Provenance tag, e.g. [`crate::defines::ORIGIN_MYSTERY_TRADER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl Tech {
    pub fn new(
        name: impl Into<String>,
        cost: Cost,
        requirements: TechRequirements,
        ranking: i32,
        category: TechCategory,
    ) -> Self {
        Self {
            id: None,
            created_at: None,
            updated_at: None,
            tech_store_id: None,
            name: name.into(),
            cost,
            requirements,
            ranking: Some(ranking),
            category,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn category(&self) -> TechCategory {
        self.category
    }

    /// Ranking with the missing-means-zero default applied.
    pub fn ranking_or_default(&self) -> i32 {
        self.ranking.unwrap_or(0)
    }

    pub fn is_hull_component(&self) -> bool {
        self.category.is_hull_component()
    }
}

impl AsRef<Tech> for Tech {
    fn as_ref(&self) -> &Tech {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_component_partition() {
        let components: Vec<_> = TechCategory::ALL
            .iter()
            .filter(|c| c.is_hull_component())
            .collect();
        assert_eq!(components.len(), 12);

        for category in [
            TechCategory::Planetary,
            TechCategory::PlanetaryScanner,
            TechCategory::PlanetaryDefense,
            TechCategory::ShipHull,
            TechCategory::StarbaseHull,
            TechCategory::Terraforming,
            TechCategory::Unknown,
        ] {
            assert!(!is_hull_component(category), "{:?}", category);
        }
    }

    #[test]
    fn test_unknown_category_deserializes() {
        let category: TechCategory = serde_json::from_str("\"Wormhole\"").unwrap();
        assert_eq!(category, TechCategory::Unknown);
        assert!(!category.is_hull_component());

        let category: TechCategory = serde_json::from_str("\"BeamWeapon\"").unwrap();
        assert_eq!(category, TechCategory::BeamWeapon);
    }

    #[test]
    fn test_missing_ranking_defaults_to_zero() {
        let json = r#"{"name": "Widget", "category": "Mechanical"}"#;
        let tech: Tech = serde_json::from_str(json).unwrap();
        assert_eq!(tech.ranking, None);
        assert_eq!(tech.ranking_or_default(), 0);
        assert_eq!(tech.category(), TechCategory::Mechanical);
        assert_eq!(tech.cost, Cost::default());
    }

    #[test]
    fn test_cost_minerals() {
        let cost = Cost::new(5, 5, 5, 15);
        assert_eq!(cost.minerals(), 15);
    }
}
