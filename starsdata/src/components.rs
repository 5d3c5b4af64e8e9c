//! Hull components and engines.
//!
//! A component is a tech that mounts into a hull slot. Its capabilities are a
//! sparse bag: every stat is optional and presence signals the capability.

use crate::defines::FUEL_USAGE_WARP_LEVELS;
use crate::slots::HullSlotType;
use crate::tech::Tech;
use serde::{Deserialize, Serialize};

/// Kind of minefield a mine layer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MineFieldType {
    Standard,
    Heavy,
    SpeedBump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechHullComponent {
    #[serde(flatten)]
    pub tech: Tech,
    pub hull_slot_type: HullSlotType,
    #[serde(default)]
    pub mass: i32,

    // Scanning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_range_pen: Option<i32>,

    // Stargates and mass drivers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_hull_mass: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hull_mass: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_speed: Option<i32>,

    // Robots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mining_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terraform_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unterraform_rate: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloak_units: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloak_unarmed_only: Option<bool>,

    // Bombs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_kill_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_destroy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart: Option<bool>,

    /// Engine leaks radiation; unsafe for non rad-immune colonists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_steal_fleet_cargo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_steal_planet_cargo: Option<bool>,

    // Defense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torpedo_jamming: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_defense: Option<f64>,

    // Electrical bonuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torpedo_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_movement: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_cloaking: Option<bool>,

    // Mechanical bonuses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_regeneration_rate: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colonization_module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_construction_module: Option<bool>,

    // Mine layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_field_type: Option<MineFieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_laying_rate: Option<i32>,

    // Weapons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gattling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_all_targets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_shields_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_ship_missile: Option<bool>,
}

impl TechHullComponent {
    /// A component with no capabilities beyond its slot and mass.
    pub fn new(tech: Tech, hull_slot_type: HullSlotType, mass: i32) -> Self {
        Self {
            tech,
            hull_slot_type,
            mass,
            scanner: None,
            scan_range: None,
            scan_range_pen: None,
            safe_hull_mass: None,
            safe_range: None,
            max_hull_mass: None,
            max_range: None,
            packet_speed: None,
            mining_rate: None,
            terraform_rate: None,
            unterraform_rate: None,
            cloak_units: None,
            cloak_unarmed_only: None,
            kill_rate: None,
            min_kill_rate: None,
            structure_destroy_rate: None,
            smart: None,
            radiating: None,
            can_steal_fleet_cargo: None,
            can_steal_planet_cargo: None,
            armor: None,
            shield: None,
            torpedo_jamming: None,
            beam_defense: None,
            torpedo_bonus: None,
            initiative_bonus: None,
            beam_bonus: None,
            reduce_movement: None,
            reduce_cloaking: None,
            fuel_bonus: None,
            fuel_regeneration_rate: None,
            cargo_bonus: None,
            movement_bonus: None,
            colonization_module: None,
            orbital_construction_module: None,
            mine_field_type: None,
            mine_laying_rate: None,
            power: None,
            range: None,
            initiative: None,
            gattling: None,
            hits_all_targets: None,
            damage_shields_only: None,
            accuracy: None,
            capital_ship_missile: None,
        }
    }

    pub fn is_scanner(&self) -> bool {
        self.scanner.unwrap_or(false)
    }

    pub fn is_radiating(&self) -> bool {
        self.radiating.unwrap_or(false)
    }

    pub fn is_smart(&self) -> bool {
        self.smart.unwrap_or(false)
    }
}

impl AsRef<Tech> for TechHullComponent {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}

/// Engine performance characteristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Engine {
    pub ideal_speed: i32,
    /// Highest warp that burns no fuel.
    pub free_speed: i32,
    pub max_safe_speed: i32,
    /// mg of fuel per 100 mass per light year, indexed by warp 0..=10.
    pub fuel_usage: Vec<i32>,
}

impl Engine {
    /// Fuel usage at `warp`, or `None` outside the table.
    pub fn fuel_usage_at(&self, warp: usize) -> Option<i32> {
        self.fuel_usage.get(warp).copied()
    }

    /// True if the table has one entry per warp level.
    pub fn has_complete_fuel_table(&self) -> bool {
        self.fuel_usage.len() == FUEL_USAGE_WARP_LEVELS
    }
}

/// An engine: a hull component plus its drive characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechEngine {
    #[serde(flatten)]
    pub component: TechHullComponent,
    #[serde(flatten)]
    pub engine: Engine,
}

impl TechEngine {
    pub fn tech(&self) -> &Tech {
        &self.component.tech
    }
}

impl AsRef<Tech> for TechEngine {
    fn as_ref(&self) -> &Tech {
        &self.component.tech
    }
}

impl AsRef<TechHullComponent> for TechEngine {
    fn as_ref(&self) -> &TechHullComponent {
        &self.component
    }
}
