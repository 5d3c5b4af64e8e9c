use crate::player::PlayerTechs;
use starsdata::{
    Cost, HullSlot, HullSlotType, LrtSet, Prt, Tech, TechCategory, TechDefense, TechField, TechHull,
    TechHullComponent, TechHullType, TechLevel, TechRequirements, TechTerraform, TerraformHabType,
};

pub struct PlayerBuilder {
    player: PlayerTechs,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self {
            player: PlayerTechs::new(TechLevel::default(), Prt::JoaT, LrtSet::NONE),
        }
    }

    pub fn levels(mut self, levels: TechLevel) -> Self {
        self.player.tech_levels = levels;
        self
    }

    pub fn all_levels(mut self, level: i32) -> Self {
        self.player.tech_levels = TechLevel::uniform(level);
        self
    }

    pub fn level(mut self, field: TechField, level: i32) -> Self {
        self.player.tech_levels.set(field, level);
        self
    }

    pub fn energy(self, level: i32) -> Self {
        self.level(TechField::Energy, level)
    }

    pub fn biotechnology(self, level: i32) -> Self {
        self.level(TechField::Biotechnology, level)
    }

    pub fn prt(mut self, prt: Prt) -> Self {
        self.player.prt = prt;
        self
    }

    pub fn lrt(mut self, lrt: LrtSet) -> Self {
        self.player.lrts |= lrt;
        self
    }

    pub fn acquired(mut self, name: &str) -> Self {
        self.player.acquired.push(name.to_string());
        self
    }

    pub fn build(self) -> PlayerTechs {
        self.player
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A free tech with no requirements and ranking 0.
pub fn tech(name: &str, category: TechCategory) -> Tech {
    Tech::new(name, Cost::default(), TechRequirements::default(), 0, category)
}

pub fn ranked(name: &str, category: TechCategory, ranking: i32) -> Tech {
    Tech::new(name, Cost::default(), TechRequirements::default(), ranking, category)
}

pub fn component(name: &str, category: TechCategory, slot: HullSlotType) -> TechHullComponent {
    TechHullComponent::new(tech(name, category), slot, 1)
}

pub fn hull(name: &str, hull_type: TechHullType, slots: Vec<HullSlot>) -> TechHull {
    TechHull::new(tech(name, TechCategory::ShipHull), hull_type, 10, 10, slots)
}

pub fn defense(coverage: f64) -> TechDefense {
    TechDefense {
        tech: tech("Test Defense", TechCategory::PlanetaryDefense),
        defense_coverage: coverage,
    }
}

pub fn terraform(
    name: &str,
    ranking: i32,
    ability: i32,
    hab_type: TerraformHabType,
) -> TechTerraform {
    TechTerraform {
        tech: ranked(name, TechCategory::Terraforming, ranking),
        ability,
        hab_type,
    }
}
