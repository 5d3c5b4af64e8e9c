//! Hull slot typing.
//!
//! A slot's type is a bitmask of component kinds it accepts; a component's
//! slot type is the bitmask of kinds it is. The two fit when they share a bit.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask of hull slot kinds.
///
/// Zero-allocation, O(1) operations. Serialized as the raw integer so the
/// persisted catalog format is unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HullSlotType(pub u32);

impl HullSlotType {
    pub const NONE: HullSlotType = HullSlotType(0);
    pub const ENGINE: HullSlotType = HullSlotType(1 << 1);
    pub const SCANNER: HullSlotType = HullSlotType(1 << 2);
    pub const MECHANICAL: HullSlotType = HullSlotType(1 << 3);
    pub const BOMB: HullSlotType = HullSlotType(1 << 4);
    pub const MINING: HullSlotType = HullSlotType(1 << 5);
    pub const ELECTRICAL: HullSlotType = HullSlotType(1 << 6);
    pub const SHIELD: HullSlotType = HullSlotType(1 << 7);
    pub const ARMOR: HullSlotType = HullSlotType(1 << 8);
    pub const CARGO: HullSlotType = HullSlotType(1 << 9);
    pub const SPACE_DOCK: HullSlotType = HullSlotType(1 << 10);
    pub const WEAPON: HullSlotType = HullSlotType(1 << 11);
    pub const ORBITAL: HullSlotType = HullSlotType(1 << 12);
    pub const MINE_LAYER: HullSlotType = HullSlotType(1 << 13);

    // Composite slots
    pub const ORBITAL_ELECTRICAL: HullSlotType = Self::ORBITAL.union(Self::ELECTRICAL);
    pub const SHIELD_ELECTRICAL_MECHANICAL: HullSlotType = Self::SHIELD
        .union(Self::ELECTRICAL)
        .union(Self::MECHANICAL);
    pub const SCANNER_ELECTRICAL_MECHANICAL: HullSlotType = Self::SCANNER
        .union(Self::ELECTRICAL)
        .union(Self::MECHANICAL);
    pub const ARMOR_SCANNER_ELECTRICAL_MECHANICAL: HullSlotType =
        Self::ARMOR.union(Self::SCANNER_ELECTRICAL_MECHANICAL);
    pub const MINE_ELECTRICAL_MECHANICAL: HullSlotType = Self::MINE_LAYER
        .union(Self::ELECTRICAL)
        .union(Self::MECHANICAL);
    pub const SHIELD_ARMOR: HullSlotType = Self::SHIELD.union(Self::ARMOR);
    pub const WEAPON_SHIELD: HullSlotType = Self::WEAPON.union(Self::SHIELD);
    pub const GENERAL: HullSlotType = Self::SCANNER
        .union(Self::MECHANICAL)
        .union(Self::ELECTRICAL)
        .union(Self::SHIELD)
        .union(Self::ARMOR)
        .union(Self::WEAPON)
        .union(Self::MINE_LAYER);

    /// Elemental kinds with their display names, in bit order.
    const ELEMENTS: [(HullSlotType, &'static str); 13] = [
        (Self::ENGINE, "Engine"),
        (Self::SCANNER, "Scanner"),
        (Self::MECHANICAL, "Mechanical"),
        (Self::BOMB, "Bomb"),
        (Self::MINING, "Mining"),
        (Self::ELECTRICAL, "Electrical"),
        (Self::SHIELD, "Shield"),
        (Self::ARMOR, "Armor"),
        (Self::CARGO, "Cargo"),
        (Self::SPACE_DOCK, "SpaceDock"),
        (Self::WEAPON, "Weapon"),
        (Self::ORBITAL, "Orbital"),
        (Self::MINE_LAYER, "MineLayer"),
    ];

    pub const fn union(self, other: HullSlotType) -> HullSlotType {
        HullSlotType(self.0 | other.0)
    }

    /// True if every bit of `other` is set here.
    #[inline]
    pub fn contains(&self, other: HullSlotType) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the two masks share at least one kind.
    #[inline]
    pub fn intersects(&self, other: HullSlotType) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the elemental kinds in this mask, in bit order.
    pub fn elements(&self) -> impl Iterator<Item = HullSlotType> + '_ {
        Self::ELEMENTS
            .iter()
            .map(|(kind, _)| *kind)
            .filter(move |kind| self.intersects(*kind))
    }

    /// Display names of the elemental kinds in this mask.
    pub fn element_names(&self) -> Vec<&'static str> {
        Self::ELEMENTS
            .iter()
            .filter(|(kind, _)| self.intersects(*kind))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for HullSlotType {
    type Output = HullSlotType;

    fn bitor(self, rhs: HullSlotType) -> HullSlotType {
        self.union(rhs)
    }
}

impl BitOrAssign for HullSlotType {
    fn bitor_assign(&mut self, rhs: HullSlotType) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for HullSlotType {
    type Output = HullSlotType;

    fn bitand(self, rhs: HullSlotType) -> HullSlotType {
        HullSlotType(self.0 & rhs.0)
    }
}

impl std::fmt::Display for HullSlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        write!(f, "{}", self.element_names().join("|"))
    }
}

/// 2D position used for hull layout geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A mount point on a hull.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HullSlot {
    #[serde(rename = "type")]
    pub slot_type: HullSlotType,
    pub capacity: i32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default)]
    pub position: Vector,
}

impl HullSlot {
    pub fn new(slot_type: HullSlotType, capacity: i32, position: Vector) -> Self {
        Self {
            slot_type,
            capacity,
            required: false,
            position,
        }
    }

    /// A slot that must be filled for the design to be valid.
    pub fn required(slot_type: HullSlotType, capacity: i32, position: Vector) -> Self {
        Self {
            required: true,
            ..Self::new(slot_type, capacity, position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_values() {
        assert_eq!(HullSlotType::GENERAL.0, 4 | 8 | 64 | 128 | 256 | 2048 | 8192);
        assert_eq!(HullSlotType::SHIELD_ARMOR.0, 128 | 256);
        assert_eq!(HullSlotType::ORBITAL_ELECTRICAL.0, 4096 | 64);
        assert!(HullSlotType::ARMOR_SCANNER_ELECTRICAL_MECHANICAL
            .contains(HullSlotType::SCANNER_ELECTRICAL_MECHANICAL));
        assert!(!HullSlotType::GENERAL.intersects(HullSlotType::ENGINE));
        assert!(!HullSlotType::GENERAL.intersects(HullSlotType::BOMB));
    }

    #[test]
    fn test_elements_iteration() {
        let kinds: Vec<_> = HullSlotType::SHIELD_ARMOR.elements().collect();
        assert_eq!(kinds, vec![HullSlotType::SHIELD, HullSlotType::ARMOR]);
        assert_eq!(HullSlotType::NONE.elements().count(), 0);
        assert_eq!(HullSlotType::GENERAL.elements().count(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(HullSlotType::NONE.to_string(), "None");
        assert_eq!(HullSlotType::WEAPON_SHIELD.to_string(), "Shield|Weapon");
    }

    #[test]
    fn test_slot_serializes_type_as_integer() {
        let slot = HullSlot::required(HullSlotType::ENGINE, 1, Vector::new(-1.0, 0.0));
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["type"], 2);
        assert_eq!(json["required"], true);

        let back: HullSlot = serde_json::from_value(json).unwrap();
        assert_eq!(back, slot);
    }
}
