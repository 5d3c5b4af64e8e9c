//! Racial traits that gate tech availability.

use serde::{Deserialize, Serialize};

/// Primary racial trait. A race has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prt {
    HE,
    SS,
    WM,
    CA,
    IS,
    SD,
    PP,
    IT,
    AR,
    JoaT,
}

/// Lesser racial traits as a bitmask. A race may have any combination.
///
/// Serialized as the raw integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LrtSet(pub u32);

impl LrtSet {
    pub const NONE: LrtSet = LrtSet(0);
    /// Improved Fuel Efficiency
    pub const IFE: LrtSet = LrtSet(1 << 0);
    /// Total Terraforming
    pub const TT: LrtSet = LrtSet(1 << 1);
    /// Advanced Remote Mining
    pub const ARM: LrtSet = LrtSet(1 << 2);
    /// Improved Starbases
    pub const ISB: LrtSet = LrtSet(1 << 3);
    /// Generalized Research
    pub const GR: LrtSet = LrtSet(1 << 4);
    /// Ultimate Recycling
    pub const UR: LrtSet = LrtSet(1 << 5);
    /// Mineral Alchemy
    pub const MA: LrtSet = LrtSet(1 << 6);
    /// No Ram Scoop Engines
    pub const NRSE: LrtSet = LrtSet(1 << 7);
    /// Cheap Engines
    pub const CE: LrtSet = LrtSet(1 << 8);
    /// Only Basic Remote Mining
    pub const OBRM: LrtSet = LrtSet(1 << 9);
    /// No Advanced Scanners
    pub const NAS: LrtSet = LrtSet(1 << 10);
    /// Low Starting Population
    pub const LSP: LrtSet = LrtSet(1 << 11);
    /// Bleeding Edge Technology
    pub const BET: LrtSet = LrtSet(1 << 12);
    /// Regenerating Shields
    pub const RS: LrtSet = LrtSet(1 << 13);
    /// Mystery Trader
    pub const MT: LrtSet = LrtSet(1 << 14);

    #[inline]
    pub fn contains(&self, other: LrtSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the two sets share at least one trait.
    #[inline]
    pub fn intersects(&self, other: LrtSet) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: LrtSet) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl std::ops::BitOr for LrtSet {
    type Output = LrtSet;

    fn bitor(self, rhs: LrtSet) -> LrtSet {
        LrtSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for LrtSet {
    fn bitor_assign(&mut self, rhs: LrtSet) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lrt_set_ops() {
        let mut set = LrtSet::default();
        assert!(set.is_empty());

        set.insert(LrtSet::IFE);
        set |= LrtSet::TT;
        assert!(set.contains(LrtSet::IFE | LrtSet::TT));
        assert!(!set.contains(LrtSet::IFE | LrtSet::NAS));
        assert!(set.intersects(LrtSet::IFE | LrtSet::NAS));
        assert!(!set.intersects(LrtSet::NAS));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_lrt_set_serializes_as_integer() {
        let json = serde_json::to_string(&(LrtSet::IFE | LrtSet::TT)).unwrap();
        assert_eq!(json, "3");
        let set: LrtSet = serde_json::from_str("1024").unwrap();
        assert_eq!(set, LrtSet::NAS);
    }

    #[test]
    fn test_prt_names() {
        assert_eq!(serde_json::to_string(&Prt::JoaT).unwrap(), "\"JoaT\"");
        let prt: Prt = serde_json::from_str("\"AR\"").unwrap();
        assert_eq!(prt, Prt::AR);
    }
}
