use super::{levels, none, tech};
use crate::defines::{GENESIS_DEVICE, ORIGIN_MYSTERY_TRADER};
use crate::planetary::{
    TechDefense, TechPlanetary, TechPlanetaryScanner, TechTerraform, TerraformHabType,
};
use crate::race::{LrtSet, Prt};
use crate::requirements::TechRequirements;
use crate::tech::TechCategory;

pub(super) fn terraforms() -> Vec<TechTerraform> {
    let terraform = |name: &str, requirements: TechRequirements, ranking, ability, hab_type| {
        TechTerraform {
            tech: tech(
                name,
                (0, 0, 0, 100),
                requirements,
                ranking,
                TechCategory::Terraforming,
            ),
            ability,
            hab_type,
        }
    };
    let total = |bio| levels(0, 0, 0, 0, 0, bio).lrts_required(LrtSet::TT);

    use TerraformHabType::{All, Gravity, Radiation, Temperature};
    vec![
        terraform("Total Terraform ±3", none().lrts_required(LrtSet::TT), 0, 3, All),
        terraform("Total Terraform ±5", total(3), 10, 5, All),
        terraform("Total Terraform ±7", total(6), 20, 7, All),
        terraform("Total Terraform ±10", total(9), 30, 10, All),
        terraform("Total Terraform ±15", total(13), 40, 15, All),
        terraform("Total Terraform ±20", total(17), 50, 20, All),
        terraform("Total Terraform ±25", total(22), 60, 25, All),
        terraform("Total Terraform ±30", total(25), 70, 30, All),
        terraform("Gravity Terraform ±3", levels(0, 0, 1, 0, 0, 1), 80, 3, Gravity),
        terraform("Gravity Terraform ±7", levels(0, 0, 5, 0, 0, 2), 90, 7, Gravity),
        terraform("Gravity Terraform ±11", levels(0, 0, 10, 0, 0, 3), 100, 11, Gravity),
        terraform("Gravity Terraform ±15", levels(0, 0, 16, 0, 0, 4), 110, 15, Gravity),
        terraform("Temp Terraform ±3", levels(1, 0, 0, 0, 0, 1), 120, 3, Temperature),
        terraform("Temp Terraform ±7", levels(5, 0, 0, 0, 0, 2), 130, 7, Temperature),
        terraform("Temp Terraform ±11", levels(10, 0, 0, 0, 0, 3), 140, 11, Temperature),
        terraform("Temp Terraform ±15", levels(16, 0, 0, 0, 0, 4), 150, 15, Temperature),
        terraform("Radiation Terraform ±3", levels(0, 1, 0, 0, 0, 1), 160, 3, Radiation),
        terraform("Radiation Terraform ±7", levels(0, 5, 0, 0, 0, 2), 170, 7, Radiation),
        terraform("Radiation Terraform ±11", levels(0, 10, 0, 0, 0, 3), 180, 11, Radiation),
        terraform("Radiation Terraform ±15", levels(0, 16, 0, 0, 0, 4), 190, 15, Radiation),
    ]
}

pub(super) fn planetary_scanners() -> Vec<TechPlanetaryScanner> {
    let scanner = |name: &str, requirements: TechRequirements, ranking, range, pen| {
        TechPlanetaryScanner {
            tech: tech(
                name,
                (10, 10, 70, 100),
                requirements.prt_denied(Prt::AR),
                ranking,
                TechCategory::PlanetaryScanner,
            ),
            scan_range: range,
            scan_range_pen: pen,
        }
    };
    let snooper = |en, el, bio| levels(en, 0, 0, 0, el, bio).lrts_denied(LrtSet::NAS);

    vec![
        scanner("Viewer 50", none(), 0, 50, 0),
        scanner("Viewer 90", levels(0, 0, 0, 0, 1, 0), 1, 90, 0),
        scanner("Scoper 150", levels(0, 0, 0, 0, 3, 0), 30, 150, 0),
        scanner("Scoper 220", levels(0, 0, 0, 0, 6, 0), 40, 220, 0),
        scanner("Scoper 280", levels(0, 0, 0, 0, 8, 0), 50, 280, 0),
        scanner("Snooper 320X", snooper(3, 10, 3), 60, 320, 160),
        scanner("Snooper 400X", snooper(4, 13, 6), 70, 400, 200),
        scanner("Snooper 500X", snooper(5, 16, 7), 80, 500, 250),
        scanner("Snooper 620X", snooper(7, 23, 9), 90, 620, 310),
    ]
}

pub(super) fn defenses() -> Vec<TechDefense> {
    let defense = |name: &str, requirements: TechRequirements, ranking, coverage| TechDefense {
        tech: tech(
            name,
            (5, 5, 5, 15),
            requirements.prt_denied(Prt::AR),
            ranking,
            TechCategory::PlanetaryDefense,
        ),
        defense_coverage: coverage,
    };

    vec![
        defense("SDI", none(), 0, 0.99),
        defense("Missile Battery", levels(5, 0, 0, 0, 0, 0), 10, 1.99),
        defense("Laser Battery", levels(10, 0, 0, 0, 0, 0), 20, 2.39),
        defense("Planetary Shield", levels(16, 0, 0, 0, 0, 0), 30, 2.99),
        defense("Neutron Shield", levels(23, 0, 0, 0, 0, 0), 40, 3.79),
    ]
}

pub(super) fn planetaries() -> Vec<TechPlanetary> {
    vec![TechPlanetary {
        tech: tech(
            GENESIS_DEVICE,
            (0, 0, 0, 5000),
            levels(20, 10, 10, 20, 10, 20).acquirable(),
            0,
            TechCategory::Planetary,
        )
        .with_origin(ORIGIN_MYSTERY_TRADER),
        reset_planet: Some(true),
    }]
}
