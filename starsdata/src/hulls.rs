//! Ship and starbase hulls.

use crate::defines::UNLIMITED_SPACE_DOCK;
use crate::slots::{HullSlot, Vector};
use crate::tech::Tech;
use serde::{Deserialize, Serialize};

/// Role a hull is designed for. Used by design tooling and the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechHullType {
    Freighter,
    Scout,
    Fighter,
    Bomber,
    Colonizer,
    Miner,
    FuelTransport,
    MultiPurposeFreighter,
    MineLayer,
    Starbase,
    OrbitalFort,
}

/// A chassis defining available slots and innate stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechHull {
    #[serde(flatten)]
    pub tech: Tech,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hull_type: Option<TechHullType>,
    #[serde(default)]
    pub mass: i32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_in_scanner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innate_scan_range_pen_factor: Option<f64>,

    // Cargo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_slot_position: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_slot_size: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_slot_circle: Option<bool>,

    // Fuel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_generation: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_laying_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immune_to_own_detonation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_construction_hull: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_bonus: Option<f64>,

    // Starbases
    /// Largest hull mass buildable here, or [`UNLIMITED_SPACE_DOCK`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_dock: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_dock_slot_position: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_dock_slot_size: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_dock_slot_circle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starbase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_population: Option<i32>,

    #[serde(default)]
    pub slots: Vec<HullSlot>,
}

impl TechHull {
    /// A bare hull with the given mass, armor and slots.
    pub fn new(
        tech: Tech,
        hull_type: TechHullType,
        mass: i32,
        armor: i32,
        slots: Vec<HullSlot>,
    ) -> Self {
        Self {
            tech,
            hull_type: Some(hull_type),
            mass,
            armor,
            built_in_scanner: None,
            innate_scan_range_pen_factor: None,
            cargo_capacity: None,
            cargo_slot_position: None,
            cargo_slot_size: None,
            cargo_slot_circle: None,
            fuel_capacity: None,
            fuel_generation: None,
            initiative: None,
            mine_laying_bonus: None,
            immune_to_own_detonation: None,
            orbital_construction_hull: None,
            range_bonus: None,
            repair_bonus: None,
            space_dock: None,
            space_dock_slot_position: None,
            space_dock_slot_size: None,
            space_dock_slot_circle: None,
            starbase: None,
            max_population: None,
            slots,
        }
    }

    pub fn is_starbase(&self) -> bool {
        self.starbase.unwrap_or(false)
    }

    pub fn has_unlimited_space_dock(&self) -> bool {
        self.space_dock == Some(UNLIMITED_SPACE_DOCK)
    }

    /// Slots that must be filled for a design to be valid.
    pub fn required_slots(&self) -> impl Iterator<Item = &HullSlot> {
        self.slots.iter().filter(|slot| slot.required)
    }

    /// Total number of components this hull can carry.
    pub fn total_slot_capacity(&self) -> i32 {
        self.slots.iter().map(|slot| slot.capacity).sum()
    }
}

impl AsRef<Tech> for TechHull {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}
