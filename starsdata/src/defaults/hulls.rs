use super::{levels, none, tech};
use crate::defines::UNLIMITED_SPACE_DOCK;
use crate::hulls::{TechHull, TechHullType};
use crate::race::{LrtSet, Prt};
use crate::slots::{HullSlot, HullSlotType, Vector};
use crate::tech::TechCategory;

fn slot(slot_type: HullSlotType, capacity: i32, x: f64, y: f64) -> HullSlot {
    HullSlot::new(slot_type, capacity, Vector::new(x, y))
}

fn engine_slot(capacity: i32, x: f64, y: f64) -> HullSlot {
    HullSlot::required(HullSlotType::ENGINE, capacity, Vector::new(x, y))
}

pub(super) fn hulls() -> Vec<TechHull> {
    vec![
        small_freighter(),
        medium_freighter(),
        large_freighter(),
        scout(),
        frigate(),
        destroyer(),
        battleship(),
        mini_colony_ship(),
        colony_ship(),
        orbital_fort(),
        space_dock(),
        space_station(),
    ]
}

fn freighter(
    name: &str,
    cost: (i32, i32, i32, i32),
    construction: i32,
    ranking: i32,
    stats: (i32, i32, i32, i32),
    cargo_geometry: (Vector, Vector),
    slots: Vec<HullSlot>,
) -> TechHull {
    let (mass, armor, fuel, cargo) = stats;
    let (cargo_position, cargo_size) = cargo_geometry;
    TechHull {
        fuel_capacity: Some(fuel),
        cargo_capacity: Some(cargo),
        cargo_slot_position: Some(cargo_position),
        cargo_slot_size: Some(cargo_size),
        ..TechHull::new(
            tech(
                name,
                cost,
                levels(0, 0, 0, construction, 0, 0),
                ranking,
                TechCategory::ShipHull,
            ),
            TechHullType::Freighter,
            mass,
            armor,
            slots,
        )
    }
}

fn small_freighter() -> TechHull {
    freighter(
        "Small Freighter",
        (12, 0, 17, 20),
        0,
        10,
        (25, 25, 130, 70),
        (Vector::new(-0.5, 0.0), Vector::new(1.0, 1.0)),
        vec![
            engine_slot(1, -1.5, 0.0),
            slot(HullSlotType::SCANNER_ELECTRICAL_MECHANICAL, 1, 1.5, 0.0),
            slot(HullSlotType::SHIELD_ARMOR, 1, 0.5, 0.0),
        ],
    )
}

fn medium_freighter() -> TechHull {
    freighter(
        "Medium Freighter",
        (20, 0, 19, 40),
        3,
        20,
        (60, 50, 450, 210),
        (Vector::new(-1.0, 0.0), Vector::new(2.0, 1.0)),
        vec![
            engine_slot(1, -2.0, 0.0),
            slot(HullSlotType::SCANNER_ELECTRICAL_MECHANICAL, 1, 2.0, 0.0),
            slot(HullSlotType::SHIELD_ARMOR, 1, 1.0, 0.0),
        ],
    )
}

fn large_freighter() -> TechHull {
    freighter(
        "Large Freighter",
        (35, 0, 21, 100),
        8,
        30,
        (125, 150, 2600, 1200),
        (Vector::new(-0.5, -0.5), Vector::new(2.0, 2.0)),
        vec![
            engine_slot(2, -2.0, 0.0),
            slot(HullSlotType::SCANNER_ELECTRICAL_MECHANICAL, 2, 1.5, -0.5),
            slot(HullSlotType::SHIELD_ARMOR, 2, 1.5, 0.5),
        ],
    )
}

fn scout() -> TechHull {
    TechHull {
        built_in_scanner: Some(true),
        initiative: Some(1),
        fuel_capacity: Some(50),
        ..TechHull::new(
            tech("Scout", (4, 2, 4, 10), none(), 50, TechCategory::ShipHull),
            TechHullType::Scout,
            8,
            20,
            vec![
                engine_slot(1, -1.0, 0.0),
                slot(HullSlotType::SCANNER, 1, 1.0, 0.0),
                slot(HullSlotType::GENERAL, 1, 0.0, 0.0),
            ],
        )
    }
}

fn frigate() -> TechHull {
    TechHull {
        built_in_scanner: Some(true),
        initiative: Some(4),
        fuel_capacity: Some(125),
        ..TechHull::new(
            tech(
                "Frigate",
                (4, 2, 4, 12),
                levels(0, 0, 0, 6, 0, 0),
                60,
                TechCategory::ShipHull,
            ),
            TechHullType::Fighter,
            8,
            45,
            vec![
                engine_slot(1, -1.5, 0.0),
                slot(HullSlotType::SCANNER, 1, 1.5, 0.0),
                slot(HullSlotType::GENERAL, 3, 0.5, 0.0),
                slot(HullSlotType::SHIELD_ARMOR, 2, -0.5, 0.0),
            ],
        )
    }
}

fn destroyer() -> TechHull {
    TechHull {
        built_in_scanner: Some(true),
        initiative: Some(3),
        fuel_capacity: Some(280),
        ..TechHull::new(
            tech(
                "Destroyer",
                (15, 3, 5, 35),
                levels(0, 0, 0, 3, 0, 0),
                70,
                TechCategory::ShipHull,
            ),
            TechHullType::Fighter,
            30,
            200,
            vec![
                engine_slot(1, -1.0, 0.0),
                slot(HullSlotType::WEAPON, 1, 0.5, -1.5),
                slot(HullSlotType::WEAPON, 1, 0.5, 1.5),
                slot(HullSlotType::GENERAL, 1, 1.0, 0.0),
                slot(HullSlotType::ARMOR, 2, 0.0, 0.0),
                slot(HullSlotType::MECHANICAL, 1, -0.5, -1.0),
                slot(HullSlotType::ELECTRICAL, 1, -0.5, 1.0),
            ],
        )
    }
}

fn battleship() -> TechHull {
    TechHull {
        initiative: Some(10),
        fuel_capacity: Some(2800),
        ..TechHull::new(
            tech(
                "Battleship",
                (120, 25, 20, 225),
                levels(0, 0, 0, 13, 0, 0),
                100,
                TechCategory::ShipHull,
            ),
            TechHullType::Fighter,
            222,
            2000,
            vec![
                engine_slot(4, -2.0, 0.0),
                slot(HullSlotType::SCANNER_ELECTRICAL_MECHANICAL, 1, 2.0, 0.0),
                slot(HullSlotType::SHIELD, 8, 1.0, -0.5),
                slot(HullSlotType::WEAPON, 6, 0.0, -1.0),
                slot(HullSlotType::WEAPON, 6, 0.0, 1.0),
                slot(HullSlotType::WEAPON, 2, -1.0, -1.5),
                slot(HullSlotType::WEAPON, 2, -1.0, 1.5),
                slot(HullSlotType::WEAPON, 4, 1.0, 0.5),
                slot(HullSlotType::ARMOR, 6, 0.0, 0.0),
                slot(HullSlotType::ELECTRICAL, 3, -1.0, -0.5),
                slot(HullSlotType::ELECTRICAL, 3, -1.0, 0.5),
            ],
        )
    }
}

fn colony_slots() -> Vec<HullSlot> {
    vec![
        engine_slot(1, -1.0, 0.0),
        slot(HullSlotType::MECHANICAL, 1, 1.0, 0.0),
    ]
}

fn mini_colony_ship() -> TechHull {
    TechHull {
        fuel_capacity: Some(150),
        cargo_capacity: Some(10),
        ..TechHull::new(
            tech(
                "Mini-Colony Ship",
                (2, 0, 2, 3),
                none().prt_required(Prt::HE),
                150,
                TechCategory::ShipHull,
            ),
            TechHullType::Colonizer,
            8,
            10,
            colony_slots(),
        )
    }
}

fn colony_ship() -> TechHull {
    TechHull {
        fuel_capacity: Some(200),
        cargo_capacity: Some(25),
        ..TechHull::new(
            tech("Colony Ship", (10, 0, 15, 20), none(), 160, TechCategory::ShipHull),
            TechHullType::Colonizer,
            20,
            20,
            colony_slots(),
        )
    }
}

fn orbital_fort() -> TechHull {
    TechHull {
        space_dock: Some(0),
        initiative: Some(10),
        range_bonus: Some(1),
        starbase: Some(true),
        orbital_construction_hull: Some(true),
        repair_bonus: Some(0.03),
        max_population: Some(250_000),
        ..TechHull::new(
            tech("Orbital Fort", (12, 0, 17, 40), none(), 10, TechCategory::StarbaseHull),
            TechHullType::OrbitalFort,
            0,
            100,
            vec![
                slot(HullSlotType::ORBITAL_ELECTRICAL, 1, 0.0, 0.0),
                slot(HullSlotType::WEAPON, 12, 0.0, -1.0),
                slot(HullSlotType::SHIELD_ARMOR, 12, 1.0, 0.0),
                slot(HullSlotType::WEAPON, 12, 0.0, 1.0),
                slot(HullSlotType::SHIELD_ARMOR, 12, -1.0, 0.0),
            ],
        )
    }
}

fn space_dock() -> TechHull {
    TechHull {
        space_dock: Some(200),
        initiative: Some(12),
        starbase: Some(true),
        repair_bonus: Some(0.15),
        max_population: Some(500_000),
        ..TechHull::new(
            tech(
                "Space Dock",
                (20, 5, 25, 100),
                levels(0, 0, 0, 4, 0, 0).lrts_required(LrtSet::ISB),
                20,
                TechCategory::StarbaseHull,
            ),
            TechHullType::Starbase,
            0,
            250,
            vec![
                slot(HullSlotType::ORBITAL_ELECTRICAL, 1, -1.5, 0.0),
                slot(HullSlotType::WEAPON, 16, 0.0, -1.5),
                slot(HullSlotType::SHIELD_ARMOR, 24, 1.5, 0.0),
                slot(HullSlotType::WEAPON, 16, 0.0, 1.5),
                slot(HullSlotType::SHIELD, 24, -0.5, 0.0),
                slot(HullSlotType::ELECTRICAL, 2, 0.5, -1.0),
                slot(HullSlotType::ELECTRICAL, 2, 0.5, 1.0),
                slot(HullSlotType::WEAPON, 16, 1.5, 1.5),
            ],
        )
    }
}

fn space_station() -> TechHull {
    TechHull {
        space_dock: Some(UNLIMITED_SPACE_DOCK),
        initiative: Some(14),
        starbase: Some(true),
        max_population: Some(1_000_000),
        ..TechHull::new(
            tech("Space Station", (120, 80, 250, 600), none(), 30, TechCategory::StarbaseHull),
            TechHullType::Starbase,
            0,
            500,
            vec![
                slot(HullSlotType::ORBITAL_ELECTRICAL, 1, -1.0, 0.0),
                slot(HullSlotType::WEAPON, 16, 0.5, -2.0),
                slot(HullSlotType::SHIELD, 16, -0.5, -2.0),
                slot(HullSlotType::WEAPON, 16, 2.0, 0.5),
                slot(HullSlotType::SHIELD_ARMOR, 16, -2.0, 0.5),
                slot(HullSlotType::SHIELD, 16, 0.5, 2.0),
                slot(HullSlotType::ELECTRICAL, 3, 0.0, 1.0),
                slot(HullSlotType::WEAPON, 16, -0.5, 2.0),
                slot(HullSlotType::ELECTRICAL, 3, 0.0, -1.0),
                slot(HullSlotType::WEAPON, 16, -2.0, -0.5),
                slot(HullSlotType::ORBITAL_ELECTRICAL, 1, 1.0, 0.0),
                slot(HullSlotType::SHIELD_ARMOR, 16, 2.0, -0.5),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ship_hull_requires_an_engine() {
        for hull in hulls().iter().filter(|h| !h.is_starbase()) {
            assert!(
                hull.required_slots()
                    .any(|s| s.slot_type == HullSlotType::ENGINE),
                "{} has no required engine slot",
                hull.tech.name
            );
        }
    }

    #[test]
    fn test_starbases_have_no_engines() {
        for hull in hulls().iter().filter(|h| h.is_starbase()) {
            assert!(hull
                .slots
                .iter()
                .all(|s| !s.slot_type.intersects(HullSlotType::ENGINE)));
        }
    }

    #[test]
    fn test_space_station_layout() {
        let station = space_station();
        assert!(station.has_unlimited_space_dock());
        assert_eq!(station.slots.len(), 12);
        assert_eq!(station.total_slot_capacity(), 1 + 16 * 8 + 3 * 2 + 1);
    }
}
