//! Best-tech selection for a player.
//!
//! Every finder applies the same rule: among the techs the player holds that
//! pass the finder's filter, pick the highest ranking (missing = 0), with the
//! earlier catalog entry winning ties. `None` means nothing qualified.

use crate::eligibility::hull_allowed;
use crate::player::{PlayerTechs, TechHolder};
use starsdata::{
    MineFieldType, Tech, TechCategory, TechDefense, TechEngine, TechField, TechHull,
    TechHullComponent, TechPlanetaryScanner, TechRef, TechStore,
};

fn ranking<T: AsRef<Tech>>(tech: &T) -> i32 {
    tech.as_ref().ranking_or_default()
}

/// Highest-ranked item; the first one seen wins ties.
pub(crate) fn highest_ranked<'a, T, I>(items: I) -> Option<&'a T>
where
    T: AsRef<Tech> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(b) if ranking(item) <= ranking(b) => Some(b),
        _ => Some(item),
    })
}

/// Like [`highest_ranked`], but starts from `first` (the starting tech)
/// and only moves off it for something strictly better.
fn highest_ranked_or_first<'a, T: AsRef<Tech>>(
    list: &'a [T],
    player: &impl TechHolder,
) -> Option<&'a T> {
    let first = list.first()?;
    let better = list
        .iter()
        .filter(|&t| player.has_tech(t.as_ref()) && ranking(t) > ranking(first));
    highest_ranked(better).or(Some(first))
}

fn positive<T: Default + PartialOrd>(value: Option<T>) -> bool {
    value.is_some_and(|v| v > T::default())
}

fn is_zero<T: Default + PartialOrd>(value: Option<T>) -> bool {
    !positive(value)
}

fn best_component<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
    filter: impl Fn(&TechHullComponent) -> bool,
) -> Option<&'a TechHullComponent> {
    highest_ranked(
        store
            .hull_components()
            .iter()
            .filter(|c| filter(c) && player.has_tech(&c.tech)),
    )
}

/// Best planetary scanner, or the catalog's first (starting) scanner.
pub fn best_planetary_scanner<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechPlanetaryScanner> {
    highest_ranked_or_first(store.planetary_scanners(), player)
}

/// Best planetary defense, or the catalog's first (starting) defense.
pub fn best_defense<'a>(store: &'a TechStore, player: &impl TechHolder) -> Option<&'a TechDefense> {
    highest_ranked_or_first(store.defenses(), player)
}

/// Best engine `hull` may mount.
///
/// With `avoid_radiating`, radiating engines are skipped (colony ships whose
/// colonists are not radiation immune).
pub fn best_engine<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
    hull: &TechHull,
    avoid_radiating: bool,
) -> Option<&'a TechEngine> {
    highest_ranked(store.engines().iter().filter(|e| {
        player.has_tech(e.tech())
            && hull_allowed(&hull.tech.name, e.tech())
            && !(avoid_radiating && e.component.is_radiating())
    }))
}

/// Fastest engine `hull` may mount: highest ideal speed, then ranking.
pub fn best_battle_engine<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
    hull: &TechHull,
) -> Option<&'a TechEngine> {
    store
        .engines()
        .iter()
        .filter(|e| player.has_tech(e.tech()) && hull_allowed(&hull.tech.name, e.tech()))
        .fold(None, |best: Option<&TechEngine>, e| match best {
            Some(b)
                if (e.engine.ideal_speed, ranking(e)) <= (b.engine.ideal_speed, ranking(b)) =>
            {
                Some(b)
            }
            _ => Some(e),
        })
}

pub fn best_scanner<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.is_scanner() && (c.scan_range.unwrap_or(0) >= 0 || c.scan_range_pen.unwrap_or(0) >= 0)
    })
}

pub fn best_armor<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| c.tech.category() == TechCategory::Armor)
}

pub fn best_shield<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| c.tech.category() == TechCategory::Shield)
}

/// Best beam weapon that can damage armor.
pub fn best_beam_weapon<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::BeamWeapon
            && positive(c.power)
            && !c.damage_shields_only.unwrap_or(false)
    })
}

/// Best shield-only beam weapon. A regular beam replaces it when the beam
/// is at least as strong, cheap and long-ranged.
pub fn best_sapper<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    let sapper = best_component(store, player, |c| {
        c.tech.category() == TechCategory::BeamWeapon
            && positive(c.power)
            && c.damage_shields_only.unwrap_or(false)
    });
    let beam = best_beam_weapon(store, player);

    match (sapper, beam) {
        (Some(s), Some(b))
            if b.power >= s.power
                && b.tech.cost.resources <= s.tech.cost.resources
                && b.range.unwrap_or(0) >= s.range.unwrap_or(0) =>
        {
            Some(b)
        }
        (Some(s), _) => Some(s),
        (None, b) => b,
    }
}

pub fn best_torpedo<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Torpedo && positive(c.power)
    })
}

/// Best regular bomb: kills population and destroys installations.
pub fn best_bomb<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Bomb
            && positive(c.min_kill_rate)
            && positive(c.structure_destroy_rate)
    })
}

/// Best bomb that only destroys installations.
pub fn best_structure_bomb<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Bomb
            && is_zero(c.min_kill_rate)
            && positive(c.structure_destroy_rate)
    })
}

/// Best bomb that only kills population.
pub fn best_smart_bomb<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Bomb
            && is_zero(c.min_kill_rate)
            && is_zero(c.structure_destroy_rate)
            && positive(c.kill_rate)
    })
}

pub fn best_fuel_tank<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| positive(c.fuel_bonus))
}

pub fn best_cargo_pod<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| positive(c.cargo_bonus))
}

/// Best colonization or orbital construction module.
pub fn best_colonization_module<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.colonization_module.unwrap_or(false) || c.orbital_construction_module.unwrap_or(false)
    })
}

pub fn best_battle_computer<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        positive(c.initiative_bonus) && positive(c.torpedo_bonus)
    })
}

pub fn best_beam_capacitor<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| positive(c.beam_bonus))
}

pub fn best_beam_deflector<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| positive(c.beam_defense))
}

pub fn best_mining_robot<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::MineRobot && positive(c.mining_rate)
    })
}

pub fn best_terraform_robot<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::MineRobot && positive(c.terraform_rate)
    })
}

pub fn best_mine_layer<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
    mine_field_type: MineFieldType,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::MineLayer && c.mine_field_type == Some(mine_field_type)
    })
}

pub fn best_packet_thrower<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Orbital && positive(c.packet_speed)
    })
}

pub fn best_stargate<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
) -> Option<&'a TechHullComponent> {
    best_component(store, player, |c| {
        c.tech.category() == TechCategory::Orbital && c.safe_range.is_some_and(|r| r != 0)
    })
}

/// Held techs whose requirement in `field` equals the player's current
/// level there, i.e. the ones the latest level in `field` unlocked.
pub fn techs_just_gained<'a>(
    store: &'a TechStore,
    player: &PlayerTechs,
    field: TechField,
) -> Vec<TechRef<'a>> {
    store
        .iter()
        .filter(|t| {
            let tech = t.tech();
            player
                .tech_levels
                .levels_above_field(&tech.requirements.levels, field)
                == 0
                && player.has_tech(tech)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{component, hull, ranked, PlayerBuilder};
    use starsdata::{Engine, HullSlotType, TechHullType, TechStoreData};

    struct HoldsAll;
    impl TechHolder for HoldsAll {
        fn has_tech(&self, _tech: &Tech) -> bool {
            true
        }
    }

    struct HoldsNone;
    impl TechHolder for HoldsNone {
        fn has_tech(&self, _tech: &Tech) -> bool {
            false
        }
    }

    fn armor(name: &str, ranking: i32) -> TechHullComponent {
        TechHullComponent {
            armor: Some(50),
            ..TechHullComponent::new(
                ranked(name, TechCategory::Armor, ranking),
                HullSlotType::ARMOR,
                10,
            )
        }
    }

    fn engine(name: &str, ranking: i32, ideal_speed: i32) -> TechEngine {
        TechEngine {
            component: TechHullComponent::new(
                ranked(name, TechCategory::Engine, ranking),
                HullSlotType::ENGINE,
                5,
            ),
            engine: Engine {
                ideal_speed,
                ..Engine::default()
            },
        }
    }

    fn components(components: Vec<TechHullComponent>) -> TechStore {
        TechStore::new(TechStoreData {
            hull_components: components,
            ..TechStoreData::default()
        })
    }

    #[test]
    fn test_highest_ranked_tie_goes_first() {
        let store = components(vec![armor("A", 10), armor("B", 20), armor("C", 20)]);
        assert_eq!(best_armor(&store, &HoldsAll).unwrap().tech.name, "B");
        assert!(best_armor(&store, &HoldsNone).is_none());
        assert!(best_shield(&store, &HoldsAll).is_none());
    }

    #[test]
    fn test_starting_tech_fallback() {
        let scanner = |name: &str, ranking| TechPlanetaryScanner {
            tech: ranked(name, TechCategory::PlanetaryScanner, ranking),
            scan_range: 50,
            scan_range_pen: 0,
        };
        let store = TechStore::new(TechStoreData {
            planetary_scanners: vec![scanner("Viewer 50", 0), scanner("Viewer 90", 1)],
            ..TechStoreData::default()
        });
        assert_eq!(
            best_planetary_scanner(&store, &HoldsNone).unwrap().tech.name,
            "Viewer 50"
        );
        assert_eq!(
            best_planetary_scanner(&store, &HoldsAll).unwrap().tech.name,
            "Viewer 90"
        );
        assert!(best_defense(&store, &HoldsAll).is_none());
    }

    #[test]
    fn test_best_engine_respects_hull_and_radiation() {
        let mut settlers = engine("Settler's Delight", 69, 6);
        settlers.component.tech.requirements.hulls_allowed =
            Some(vec!["Mini-Colony Ship".to_string()]);
        let mut ramscoop = engine("Radiating Hydro-Ram Scoop", 61, 6);
        ramscoop.component.radiating = Some(true);
        let quick_jump = engine("Quick Jump 5", 10, 5);

        let store = TechStore::new(TechStoreData {
            engines: vec![settlers, quick_jump, ramscoop],
            ..TechStoreData::default()
        });
        let mini = hull("Mini-Colony Ship", TechHullType::Colonizer, vec![]);
        let colony = hull("Colony Ship", TechHullType::Colonizer, vec![]);

        let pick = |h: &TechHull, avoid| {
            best_engine(&store, &HoldsAll, h, avoid).map(|e| e.tech().name.as_str())
        };
        assert_eq!(pick(&mini, false), Some("Settler's Delight"));
        assert_eq!(pick(&colony, false), Some("Radiating Hydro-Ram Scoop"));
        assert_eq!(pick(&colony, true), Some("Quick Jump 5"));
    }

    #[test]
    fn test_best_battle_engine_prefers_speed_then_ranking() {
        let store = TechStore::new(TechStoreData {
            engines: vec![
                engine("Slow But Fancy", 100, 5),
                engine("Fast", 10, 9),
                engine("Fast And Fancy", 20, 9),
                engine("Fast Again", 20, 9),
            ],
            ..TechStoreData::default()
        });
        let scout = hull("Scout", TechHullType::Scout, vec![]);
        let best = best_battle_engine(&store, &HoldsAll, &scout).unwrap();
        assert_eq!(best.tech().name, "Fast And Fancy");
    }

    #[test]
    fn test_bomb_kinds() {
        let bomb = |name: &str, min_kill, structure, kill| TechHullComponent {
            min_kill_rate: min_kill,
            structure_destroy_rate: structure,
            kill_rate: kill,
            ..component(name, TechCategory::Bomb, HullSlotType::BOMB)
        };
        let store = components(vec![
            bomb("Regular", Some(300), Some(2.0), Some(0.6)),
            bomb("Structure", None, Some(10.0), None),
            bomb("Smart", Some(0), Some(0.0), Some(1.3)),
        ]);
        assert_eq!(best_bomb(&store, &HoldsAll).unwrap().tech.name, "Regular");
        assert_eq!(best_structure_bomb(&store, &HoldsAll).unwrap().tech.name, "Structure");
        assert_eq!(best_smart_bomb(&store, &HoldsAll).unwrap().tech.name, "Smart");
    }

    #[test]
    fn test_sapper_falls_back_to_beam() {
        let beam = |name: &str, power, shields_only| TechHullComponent {
            power: Some(power),
            range: Some(1),
            damage_shields_only: shields_only,
            ..component(name, TechCategory::BeamWeapon, HullSlotType::WEAPON)
        };
        let store = components(vec![
            beam("Laser", 10, None),
            beam("Pulsed Sapper", 82, Some(true)),
        ]);
        assert_eq!(best_beam_weapon(&store, &HoldsAll).unwrap().tech.name, "Laser");
        assert_eq!(best_sapper(&store, &HoldsAll).unwrap().tech.name, "Pulsed Sapper");

        let store = components(vec![beam("Laser", 10, None)]);
        assert_eq!(best_sapper(&store, &HoldsAll).unwrap().tech.name, "Laser");
    }

    #[test]
    fn test_single_field_finders() {
        let store = components(vec![
            TechHullComponent {
                fuel_bonus: Some(250),
                ..component("Fuel Tank", TechCategory::Mechanical, HullSlotType::MECHANICAL)
            },
            TechHullComponent {
                mine_field_type: Some(MineFieldType::Heavy),
                ..component("Heavy Dispenser 50", TechCategory::MineLayer, HullSlotType::MINE_LAYER)
            },
            TechHullComponent {
                safe_range: Some(250),
                ..component("Stargate 100-250", TechCategory::Orbital, HullSlotType::ORBITAL)
            },
        ]);
        assert!(best_fuel_tank(&store, &HoldsAll).is_some());
        assert!(best_cargo_pod(&store, &HoldsAll).is_none());
        assert!(best_mine_layer(&store, &HoldsAll, MineFieldType::Heavy).is_some());
        assert!(best_mine_layer(&store, &HoldsAll, MineFieldType::SpeedBump).is_none());
        assert!(best_stargate(&store, &HoldsAll).is_some());
        assert!(best_packet_thrower(&store, &HoldsAll).is_none());
    }

    #[test]
    fn test_techs_just_gained() {
        let mut crobmnium = armor("Crobmnium", 20);
        crobmnium.tech.requirements.levels.construction = 3;
        let mut strobnium = armor("Strobnium", 40);
        strobnium.tech.requirements.levels.construction = 6;
        let store = components(vec![armor("Tritanium", 10), crobmnium, strobnium]);

        let player = PlayerBuilder::new().level(TechField::Construction, 3).build();
        let gained: Vec<_> = techs_just_gained(&store, &player, TechField::Construction)
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(gained, vec!["Crobmnium"]);
    }
}
