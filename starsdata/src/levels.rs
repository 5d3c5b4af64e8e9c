//! Research levels across the six tech fields.

use serde::{Deserialize, Serialize};

/// One of the six research fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechField {
    Energy,
    Weapons,
    Propulsion,
    Construction,
    Electronics,
    Biotechnology,
}

impl TechField {
    pub const ALL: [TechField; 6] = [
        TechField::Energy,
        TechField::Weapons,
        TechField::Propulsion,
        TechField::Construction,
        TechField::Electronics,
        TechField::Biotechnology,
    ];
}

/// A level in each field. Used both for a player's progress and for a
/// tech's minimum requirement (missing fields deserialize as 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechLevel {
    pub energy: i32,
    pub weapons: i32,
    pub propulsion: i32,
    pub construction: i32,
    pub electronics: i32,
    pub biotechnology: i32,
}

impl TechLevel {
    pub const fn new(
        energy: i32,
        weapons: i32,
        propulsion: i32,
        construction: i32,
        electronics: i32,
        biotechnology: i32,
    ) -> Self {
        Self {
            energy,
            weapons,
            propulsion,
            construction,
            electronics,
            biotechnology,
        }
    }

    /// Same level in every field.
    pub const fn uniform(level: i32) -> Self {
        Self::new(level, level, level, level, level, level)
    }

    pub fn get(&self, field: TechField) -> i32 {
        match field {
            TechField::Energy => self.energy,
            TechField::Weapons => self.weapons,
            TechField::Propulsion => self.propulsion,
            TechField::Construction => self.construction,
            TechField::Electronics => self.electronics,
            TechField::Biotechnology => self.biotechnology,
        }
    }

    pub fn set(&mut self, field: TechField, level: i32) {
        match field {
            TechField::Energy => self.energy = level,
            TechField::Weapons => self.weapons = level,
            TechField::Propulsion => self.propulsion = level,
            TechField::Construction => self.construction = level,
            TechField::Electronics => self.electronics = level,
            TechField::Biotechnology => self.biotechnology = level,
        }
    }

    /// True if every field is at or above `required`.
    pub fn has_required_levels(&self, required: &TechLevel) -> bool {
        TechField::ALL
            .iter()
            .all(|&field| self.get(field) >= required.get(field))
    }

    /// How far this level exceeds `required` in `field` (negative if short).
    pub fn levels_above_field(&self, required: &TechLevel, field: TechField) -> i32 {
        self.get(field) - required.get(field)
    }

    pub fn sum(&self) -> i32 {
        TechField::ALL.iter().map(|&field| self.get(field)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_required_levels() {
        let player = TechLevel::new(5, 3, 0, 0, 10, 2);
        assert!(player.has_required_levels(&TechLevel::default()));
        assert!(player.has_required_levels(&TechLevel::new(5, 0, 0, 0, 10, 0)));
        assert!(!player.has_required_levels(&TechLevel::new(6, 0, 0, 0, 0, 0)));
        assert!(!player.has_required_levels(&TechLevel::new(0, 0, 1, 0, 0, 0)));
    }

    #[test]
    fn test_levels_above_field() {
        let player = TechLevel::new(5, 0, 0, 0, 0, 0);
        let required = TechLevel::new(3, 2, 0, 0, 0, 0);
        assert_eq!(player.levels_above_field(&required, TechField::Energy), 2);
        assert_eq!(player.levels_above_field(&required, TechField::Weapons), -2);
    }

    #[test]
    fn test_get_set_sum() {
        let mut level = TechLevel::uniform(1);
        assert_eq!(level.sum(), 6);
        level.set(TechField::Biotechnology, 7);
        assert_eq!(level.get(TechField::Biotechnology), 7);
        assert_eq!(level.sum(), 12);
    }
}
