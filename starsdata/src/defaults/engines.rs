use super::{levels, none, tech};
use crate::components::{Engine, TechEngine, TechHullComponent};
use crate::race::{LrtSet, Prt};
use crate::requirements::TechRequirements;
use crate::slots::HullSlotType;
use crate::tech::TechCategory;

/// Engine row: name, cost, requirements, ranking, mass,
/// (ideal, free, max safe) speeds and the fuel table for warp 0..=10.
fn engine(
    name: &str,
    cost: (i32, i32, i32, i32),
    requirements: TechRequirements,
    ranking: i32,
    mass: i32,
    speeds: (i32, i32, i32),
    fuel_usage: [i32; 11],
) -> TechEngine {
    let (ideal_speed, free_speed, max_safe_speed) = speeds;
    TechEngine {
        component: TechHullComponent::new(
            tech(name, cost, requirements, ranking, TechCategory::Engine),
            HullSlotType::ENGINE,
            mass,
        ),
        engine: Engine {
            ideal_speed,
            free_speed,
            max_safe_speed,
            fuel_usage: fuel_usage.to_vec(),
        },
    }
}

fn prop(level: i32) -> TechRequirements {
    levels(0, 0, level, 0, 0, 0)
}

/// Ram scoops are unavailable to races without ram scoop engines.
fn scoop(en: i32, prop: i32) -> TechRequirements {
    levels(en, 0, prop, 0, 0, 0).lrts_denied(LrtSet::NRSE)
}

pub(super) fn engines() -> Vec<TechEngine> {
    let mut radiating_hydro_ram_scoop = engine(
        "Radiating Hydro-Ram Scoop",
        (3, 2, 9, 8),
        scoop(2, 6),
        61,
        10,
        (6, 6, 9),
        [0, 0, 0, 0, 0, 0, 0, 165, 375, 600, 720],
    );
    radiating_hydro_ram_scoop.component.radiating = Some(true);

    vec![
        engine(
            "Settler's Delight",
            (1, 0, 1, 2),
            none().prt_required(Prt::HE).hull_allowed("Mini-Colony Ship"),
            69,
            2,
            (6, 6, 9),
            [0, 0, 0, 0, 0, 0, 0, 150, 275, 480, 576],
        ),
        engine(
            "Quick Jump 5",
            (3, 0, 1, 3),
            none(),
            10,
            4,
            (5, 1, 9),
            [0, 0, 25, 100, 100, 100, 180, 500, 800, 900, 1080],
        ),
        engine(
            "Long Hump 6",
            (5, 0, 1, 6),
            prop(3),
            30,
            9,
            (6, 1, 9),
            [0, 0, 20, 60, 100, 100, 105, 450, 750, 900, 1080],
        ),
        engine(
            "Fuel Mizer",
            (8, 0, 0, 11),
            prop(2).lrts_required(LrtSet::IFE),
            65,
            6,
            (6, 4, 9),
            [0, 0, 0, 0, 0, 35, 120, 175, 235, 360, 420],
        ),
        engine(
            "Daddy Long Legs 7",
            (11, 0, 3, 12),
            prop(5),
            50,
            13,
            (7, 1, 9),
            [0, 0, 20, 60, 70, 100, 100, 110, 600, 750, 900],
        ),
        engine(
            "Alpha Drive 8",
            (16, 0, 3, 28),
            prop(7),
            60,
            17,
            (8, 1, 9),
            [0, 0, 15, 50, 60, 70, 100, 100, 115, 700, 840],
        ),
        engine(
            "Trans-Galactic Drive",
            (20, 20, 9, 50),
            prop(9),
            70,
            25,
            (9, 1, 9),
            [0, 0, 15, 35, 45, 55, 70, 80, 90, 100, 120],
        ),
        engine(
            "Interspace-10",
            (18, 25, 10, 60),
            prop(11).lrts_required(LrtSet::NRSE),
            80,
            25,
            (10, 1, 10),
            [0, 0, 10, 30, 40, 50, 60, 70, 80, 90, 100],
        ),
        engine(
            "Trans-Star 10",
            (3, 0, 3, 10),
            prop(23),
            130,
            5,
            (10, 1, 10),
            [0, 0, 5, 15, 20, 25, 30, 35, 40, 45, 50],
        ),
        radiating_hydro_ram_scoop,
        engine(
            "Sub-Galactic Fuel Scoop",
            (4, 4, 7, 12),
            scoop(2, 8),
            90,
            20,
            (7, 5, 9),
            [0, 0, 0, 0, 0, 0, 85, 105, 210, 380, 456],
        ),
        engine(
            "Trans-Galactic Fuel Scoop",
            (5, 4, 12, 18),
            scoop(3, 9),
            100,
            19,
            (8, 6, 9),
            [0, 0, 0, 0, 0, 0, 0, 88, 100, 145, 174],
        ),
        engine(
            "Trans-Galactic Super Scoop",
            (6, 4, 16, 24),
            scoop(4, 12),
            130,
            18,
            (9, 7, 9),
            [0, 0, 0, 0, 0, 0, 0, 0, 65, 90, 108],
        ),
        engine(
            "Trans-Galactic Mizer Scoop",
            (5, 2, 13, 11),
            scoop(4, 16),
            140,
            11,
            (10, 8, 10),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 70, 84],
        ),
        engine(
            "Galaxy Scoop",
            (4, 2, 9, 12),
            scoop(5, 20).lrts_required(LrtSet::IFE),
            150,
            8,
            (10, 9, 10),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 60],
        ),
    ]
}
