//! Requirement and eligibility checks that need no player state.

use starsdata::Tech;

/// True if `tech` may be used on the hull named `hull_name`.
///
/// An absent allow list permits every hull. A deny entry always wins over an
/// allow entry for the same hull.
pub fn hull_allowed(hull_name: &str, tech: &Tech) -> bool {
    let requirements = &tech.requirements;
    let allowed = requirements
        .hulls_allowed
        .as_ref()
        .is_none_or(|hulls| hulls.iter().any(|h| h == hull_name));
    let denied = requirements
        .hulls_denied
        .as_ref()
        .is_some_and(|hulls| hulls.iter().any(|h| h == hull_name));

    allowed && !denied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::tech;
    use starsdata::TechCategory;

    #[test]
    fn test_absent_lists_allow_everything() {
        let laser = tech("Laser", TechCategory::BeamWeapon);
        assert!(hull_allowed("Scout", &laser));
        assert!(hull_allowed("", &laser));
    }

    #[test]
    fn test_allow_list_restricts() {
        let mut engine = tech("Settler's Delight", TechCategory::Engine);
        engine.requirements.hulls_allowed = Some(vec!["Mini-Colony Ship".to_string()]);
        assert!(hull_allowed("Mini-Colony Ship", &engine));
        assert!(!hull_allowed("Colony Ship", &engine));
    }

    #[test]
    fn test_empty_allow_list_allows_nothing() {
        let mut engine = tech("Nowhere Drive", TechCategory::Engine);
        engine.requirements.hulls_allowed = Some(vec![]);
        assert!(!hull_allowed("Scout", &engine));
    }

    #[test]
    fn test_deny_overrides_allow() {
        let mut part = tech("Widget", TechCategory::Mechanical);
        part.requirements.hulls_allowed = Some(vec!["Scout".to_string()]);
        part.requirements.hulls_denied = Some(vec!["Scout".to_string()]);
        assert!(!hull_allowed("Scout", &part));

        part.requirements.hulls_allowed = None;
        assert!(!hull_allowed("Scout", &part));
        assert!(hull_allowed("Frigate", &part));
    }
}
