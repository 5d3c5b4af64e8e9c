use super::{levels, none, tech};
use crate::components::{MineFieldType, TechHullComponent};
use crate::race::{LrtSet, Prt};
use crate::requirements::TechRequirements;
use crate::slots::HullSlotType;
use crate::tech::TechCategory;

fn component(
    name: &str,
    cost: (i32, i32, i32, i32),
    requirements: TechRequirements,
    ranking: i32,
    category: TechCategory,
    slot: HullSlotType,
    mass: i32,
) -> TechHullComponent {
    TechHullComponent::new(tech(name, cost, requirements, ranking, category), slot, mass)
}

pub(super) fn hull_components() -> Vec<TechHullComponent> {
    let mut all = Vec::new();
    all.extend(scanners());
    all.extend(armor());
    all.extend(shields());
    all.extend(electricals());
    all.extend(bombs());
    all.extend(mine_robots());
    all.extend(orbitals());
    all.extend(mechanicals());
    all.extend(beam_weapons());
    all.extend(torpedoes());
    all.extend(mine_layers());
    all
}

fn scanners() -> Vec<TechHullComponent> {
    let scanner = |name: &str, cost, requirements, ranking, mass, range| TechHullComponent {
        scanner: Some(true),
        scan_range: Some(range),
        ..component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Scanner,
            HullSlotType::SCANNER,
            mass,
        )
    };

    let mut bat = scanner("Bat Scanner", (1, 0, 1, 1), none(), 10, 2, 0);
    bat.scan_range_pen = Some(0);

    vec![
        bat,
        scanner("Rhino Scanner", (3, 0, 2, 3), levels(0, 0, 0, 0, 1, 0), 20, 5, 50),
        scanner("Mole Scanner", (2, 0, 2, 9), levels(0, 0, 0, 0, 4, 0), 30, 2, 100),
        scanner("DNA Scanner", (1, 1, 1, 5), levels(0, 0, 3, 0, 0, 6), 40, 2, 125),
        scanner("Possum Scanner", (3, 0, 3, 18), levels(0, 0, 0, 0, 5, 0), 50, 3, 150),
    ]
}

fn armor() -> Vec<TechHullComponent> {
    let armor = |name: &str, cost, requirements, ranking, mass, armor| TechHullComponent {
        armor: Some(armor),
        ..component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Armor,
            HullSlotType::ARMOR,
            mass,
        )
    };

    vec![
        armor("Tritanium", (5, 0, 0, 10), none(), 10, 60, 50),
        armor("Crobmnium", (6, 0, 0, 13), levels(0, 0, 0, 3, 0, 0), 20, 56, 75),
        armor("Carbonic Armor", (5, 0, 0, 15), levels(0, 0, 0, 0, 0, 4), 30, 25, 100),
        armor("Strobnium", (8, 0, 0, 18), levels(0, 0, 0, 6, 0, 0), 40, 54, 120),
    ]
}

fn shields() -> Vec<TechHullComponent> {
    let shield = |name: &str, cost, requirements, ranking, mass, shield| TechHullComponent {
        shield: Some(shield),
        ..component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Shield,
            HullSlotType::SHIELD,
            mass,
        )
    };

    vec![
        shield("Mole-skin Shield", (1, 0, 1, 4), none(), 10, 1, 25),
        shield("Cow-hide Shield", (2, 0, 2, 5), levels(3, 0, 0, 0, 0, 0), 20, 1, 40),
    ]
}

fn electricals() -> Vec<TechHullComponent> {
    let electrical = |name: &str, cost, requirements, ranking, mass| {
        component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Electrical,
            HullSlotType::ELECTRICAL,
            mass,
        )
    };

    vec![
        TechHullComponent {
            cloak_units: Some(300),
            cloak_unarmed_only: Some(true),
            ..electrical(
                "Transport Cloaking",
                (2, 0, 2, 3),
                none().prt_required(Prt::SS),
                0,
                1,
            )
        },
        TechHullComponent {
            cloak_units: Some(70),
            ..electrical("Stealth Cloak", (2, 0, 2, 5), levels(2, 0, 0, 0, 5, 0), 10, 2)
        },
        TechHullComponent {
            cloak_units: Some(140),
            ..electrical(
                "Super-Stealth Cloak",
                (8, 0, 8, 15),
                levels(4, 0, 0, 0, 10, 0),
                20,
                3,
            )
        },
        TechHullComponent {
            cloak_units: Some(540),
            ..electrical(
                "Ultra-Stealth Cloak",
                (10, 0, 10, 25),
                levels(10, 0, 0, 0, 12, 0).prt_required(Prt::SS),
                30,
                5,
            )
        },
        TechHullComponent {
            initiative_bonus: Some(1),
            torpedo_bonus: Some(0.2),
            ..electrical("Battle Computer", (0, 0, 15, 6), none(), 40, 1)
        },
        TechHullComponent {
            beam_bonus: Some(0.1),
            ..electrical(
                "Energy Capacitor",
                (0, 0, 8, 5),
                levels(7, 0, 0, 0, 4, 0),
                110,
                1,
            )
        },
    ]
}

fn bombs() -> Vec<TechHullComponent> {
    let bomb = |name: &str, cost, requirements, ranking, mass| {
        component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Bomb,
            HullSlotType::BOMB,
            mass,
        )
    };

    vec![
        TechHullComponent {
            min_kill_rate: Some(300),
            structure_destroy_rate: Some(2.0),
            kill_rate: Some(0.6),
            ..bomb("Lady Finger Bomb", (1, 20, 0, 5), levels(0, 2, 0, 0, 0, 0), 0, 40)
        },
        TechHullComponent {
            min_kill_rate: Some(300),
            structure_destroy_rate: Some(4.0),
            kill_rate: Some(0.9),
            ..bomb("Black Cat Bomb", (1, 22, 0, 7), levels(0, 5, 0, 0, 0, 0), 10, 45)
        },
        TechHullComponent {
            smart: Some(true),
            kill_rate: Some(1.3),
            ..bomb(
                "Smart Bomb",
                (1, 22, 0, 27),
                levels(0, 5, 0, 0, 0, 7).prt_denied(Prt::IS),
                90,
                50,
            )
        },
        TechHullComponent {
            smart: Some(true),
            kill_rate: Some(2.2),
            ..bomb(
                "Neutron Bomb",
                (1, 30, 0, 30),
                levels(0, 10, 0, 0, 0, 10).prt_denied(Prt::IS),
                110,
                57,
            )
        },
    ]
}

fn mine_robots() -> Vec<TechHullComponent> {
    let robot = |name: &str, cost, requirements, ranking, mass, rate| TechHullComponent {
        mining_rate: Some(rate),
        ..component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::MineRobot,
            HullSlotType::MINING,
            mass,
        )
    };
    let advanced = |con, el| levels(0, 0, 0, con, el, 0).lrts_denied(LrtSet::OBRM);

    let mut orbital_adjuster = component(
        "Orbital Adjuster",
        (25, 25, 25, 50),
        levels(0, 0, 0, 0, 0, 6).prt_required(Prt::CA),
        0,
        TechCategory::MineRobot,
        HullSlotType::MINING,
        80,
    );
    orbital_adjuster.cloak_units = Some(25);
    orbital_adjuster.terraform_rate = Some(1);

    vec![
        robot(
            "Robo-Midget-Miner",
            (14, 0, 4, 50),
            none().lrts_required(LrtSet::ARM),
            10,
            80,
            5,
        ),
        robot("Robo-Mini-Miner", (30, 0, 7, 100), levels(0, 0, 0, 2, 1, 0), 20, 240, 4),
        robot("Robo-Miner", (30, 0, 7, 100), advanced(4, 2), 30, 240, 12),
        robot("Robo-Maxi-Miner", (30, 0, 7, 100), advanced(7, 4), 40, 240, 18),
        orbital_adjuster,
    ]
}

fn orbitals() -> Vec<TechHullComponent> {
    let orbital = |name: &str, cost, requirements, ranking| {
        component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Orbital,
            HullSlotType::ORBITAL,
            0,
        )
    };

    vec![
        TechHullComponent {
            safe_hull_mass: Some(100),
            max_hull_mass: Some(500),
            safe_range: Some(250),
            max_range: Some(1250),
            ..orbital(
                "Stargate 100-250",
                (50, 20, 20, 200),
                levels(0, 0, 5, 5, 0, 0).prt_denied(Prt::HE),
                0,
            )
        },
        TechHullComponent {
            packet_speed: Some(5),
            ..orbital(
                "Mass Driver 5",
                (24, 20, 20, 70),
                levels(4, 0, 0, 0, 0, 0).prt_required(Prt::PP),
                70,
            )
        },
    ]
}

fn mechanicals() -> Vec<TechHullComponent> {
    let mechanical = |name: &str, cost, requirements, ranking, mass| {
        component(
            name,
            cost,
            requirements,
            ranking,
            TechCategory::Mechanical,
            HullSlotType::MECHANICAL,
            mass,
        )
    };

    vec![
        TechHullComponent {
            colonization_module: Some(true),
            ..mechanical(
                "Colonization Module",
                (12, 10, 10, 10),
                none().prt_denied(Prt::AR),
                0,
                32,
            )
        },
        TechHullComponent {
            min_kill_rate: Some(2000),
            orbital_construction_module: Some(true),
            ..mechanical(
                "Orbital Construction Module",
                (20, 15, 15, 20),
                none().prt_required(Prt::AR).hull_allowed("Colony Ship"),
                10,
                50,
            )
        },
        TechHullComponent {
            cargo_bonus: Some(50),
            ..mechanical("Cargo Pod", (5, 0, 2, 10), levels(0, 0, 0, 3, 0, 0), 20, 5)
        },
        TechHullComponent {
            fuel_bonus: Some(250),
            ..mechanical("Fuel Tank", (6, 0, 0, 4), none(), 40, 3)
        },
        TechHullComponent {
            movement_bonus: Some(1),
            ..mechanical(
                "Maneuvering Jet",
                (5, 0, 5, 10),
                levels(2, 0, 3, 0, 0, 0),
                60,
                5,
            )
        },
        TechHullComponent {
            beam_defense: Some(0.1),
            ..mechanical(
                "Beam Deflector",
                (0, 0, 10, 8),
                levels(6, 6, 0, 6, 6, 0),
                80,
                1,
            )
        },
    ]
}

fn beam_weapons() -> Vec<TechHullComponent> {
    let beam = |name: &str, cost, requirements, ranking, mass, initiative, power, range| {
        TechHullComponent {
            initiative: Some(initiative),
            power: Some(power),
            range: Some(range),
            ..component(
                name,
                cost,
                requirements,
                ranking,
                TechCategory::BeamWeapon,
                HullSlotType::WEAPON,
                mass,
            )
        }
    };

    let mut mini_gun = beam(
        "Mini Gun",
        (0, 6, 0, 6),
        levels(0, 5, 0, 0, 0, 0).prt_required(Prt::IS),
        20,
        3,
        12,
        16,
        2,
    );
    mini_gun.gattling = Some(true);
    mini_gun.hits_all_targets = Some(true);

    vec![
        beam("Laser", (0, 6, 0, 5), none(), 0, 1, 9, 10, 1),
        beam("X-Ray Laser", (0, 6, 0, 6), levels(0, 3, 0, 0, 0, 0), 10, 1, 9, 16, 1),
        mini_gun,
    ]
}

fn torpedoes() -> Vec<TechHullComponent> {
    let torpedo = |name: &str, cost, requirements, ranking, initiative, accuracy, power| {
        TechHullComponent {
            initiative: Some(initiative),
            accuracy: Some(accuracy),
            power: Some(power),
            range: Some(4),
            ..component(
                name,
                cost,
                requirements,
                ranking,
                TechCategory::Torpedo,
                HullSlotType::WEAPON,
                25,
            )
        }
    };

    vec![
        torpedo("Alpha Torpedo", (9, 3, 3, 5), none(), 0, 0, 35, 5),
        torpedo("Beta Torpedo", (18, 6, 4, 6), levels(0, 5, 1, 0, 0, 0), 10, 1, 45, 12),
    ]
}

fn mine_layers() -> Vec<TechHullComponent> {
    vec![TechHullComponent {
        mine_field_type: Some(MineFieldType::Standard),
        mine_laying_rate: Some(40),
        ..component(
            "Mine Dispenser 40",
            (2, 10, 8, 45),
            none().prt_required(Prt::SD),
            0,
            TechCategory::MineLayer,
            HullSlotType::MINE_LAYER,
            25,
        )
    }]
}
