//! Slot capability matching.
//!
//! A component fits a slot when their slot-type masks share at least one
//! kind. A General slot takes a scanner; an Engine slot never takes armor.

use crate::eligibility::hull_allowed;
use starsdata::{HullSlot, HullSlotType, TechHull, TechHullComponent};

/// True if a component of `component_slot_type` may go in a slot of
/// `target_slot_type`. Symmetric; `NONE` on either side never fits.
#[inline]
pub fn can_fill_slot(component_slot_type: HullSlotType, target_slot_type: HullSlotType) -> bool {
    component_slot_type.intersects(target_slot_type)
}

#[inline]
pub fn slot_accepts(slot: &HullSlot, component: &TechHullComponent) -> bool {
    can_fill_slot(component.hull_slot_type, slot.slot_type)
}

/// Indices of the hull's slots that accept `component`, in hull order.
pub fn matching_slots(hull: &TechHull, component: &TechHullComponent) -> Vec<usize> {
    hull.slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot_accepts(slot, component))
        .map(|(i, _)| i)
        .collect()
}

/// True if `component` fits at least one slot and the hull is not excluded
/// by the component's hull allow/deny lists.
pub fn can_mount(hull: &TechHull, component: &TechHullComponent) -> bool {
    hull.slots.iter().any(|slot| slot_accepts(slot, component))
        && hull_allowed(&hull.tech.name, &component.tech)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{component, hull};
    use starsdata::{TechCategory, TechHullType, Vector};

    #[test]
    fn test_can_fill_slot() {
        assert!(can_fill_slot(HullSlotType::SCANNER, HullSlotType::GENERAL));
        assert!(can_fill_slot(HullSlotType::ARMOR, HullSlotType::SHIELD_ARMOR));
        assert!(can_fill_slot(HullSlotType::ENGINE, HullSlotType::ENGINE));
        assert!(!can_fill_slot(HullSlotType::ENGINE, HullSlotType::GENERAL));
        assert!(!can_fill_slot(HullSlotType::BOMB, HullSlotType::GENERAL));
        assert!(!can_fill_slot(HullSlotType::NONE, HullSlotType::NONE));
        assert!(!can_fill_slot(HullSlotType::NONE, HullSlotType::GENERAL));
    }

    #[test]
    fn test_matching_slots_in_hull_order() {
        let scout = hull(
            "Scout",
            TechHullType::Scout,
            vec![
                HullSlot::required(HullSlotType::ENGINE, 1, Vector::default()),
                HullSlot::new(HullSlotType::SCANNER, 1, Vector::default()),
                HullSlot::new(HullSlotType::GENERAL, 1, Vector::default()),
            ],
        );
        let scanner = component("Bat Scanner", TechCategory::Scanner, HullSlotType::SCANNER);
        let bomb = component("Lady Finger Bomb", TechCategory::Bomb, HullSlotType::BOMB);

        assert_eq!(matching_slots(&scout, &scanner), vec![1, 2]);
        assert!(matching_slots(&scout, &bomb).is_empty());
        assert!(can_mount(&scout, &scanner));
        assert!(!can_mount(&scout, &bomb));
    }

    #[test]
    fn test_can_mount_respects_hull_lists() {
        let colony = hull(
            "Colony Ship",
            TechHullType::Colonizer,
            vec![HullSlot::new(HullSlotType::MECHANICAL, 1, Vector::default())],
        );
        let mut module = component(
            "Orbital Construction Module",
            TechCategory::Mechanical,
            HullSlotType::MECHANICAL,
        );
        assert!(can_mount(&colony, &module));

        module.tech.requirements.hulls_allowed = Some(vec!["Mini-Colony Ship".to_string()]);
        assert!(!can_mount(&colony, &module));

        module.tech.requirements.hulls_allowed = Some(vec!["Colony Ship".to_string()]);
        module.tech.requirements.hulls_denied = Some(vec!["Colony Ship".to_string()]);
        assert!(!can_mount(&colony, &module));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_can_fill_slot_is_symmetric(a in 0u32..(1 << 14), b in 0u32..(1 << 14)) {
            let (a, b) = (HullSlotType(a), HullSlotType(b));
            prop_assert_eq!(can_fill_slot(a, b), can_fill_slot(b, a));
        }

        #[test]
        fn prop_none_never_fits(a in any::<u32>()) {
            prop_assert!(!can_fill_slot(HullSlotType::NONE, HullSlotType(a)));
            prop_assert!(!can_fill_slot(HullSlotType(a), HullSlotType::NONE));
        }

        #[test]
        fn prop_nonempty_mask_fits_itself(a in 1u32..(1 << 14)) {
            prop_assert!(can_fill_slot(HullSlotType(a), HullSlotType(a)));
        }
    }
}
