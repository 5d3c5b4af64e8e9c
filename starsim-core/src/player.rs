//! Player capability: which techs a player holds.

use serde::{Deserialize, Serialize};
use starsdata::defines::ORIGIN_MYSTERY_TRADER;
use starsdata::{LrtSet, Prt, Tech, TechLevel};

/// Answers "does this player have this tech?".
///
/// The finder and terraform ranking only need this one question, so game
/// code can back it with whatever research model it uses.
pub trait TechHolder {
    fn has_tech(&self, tech: &Tech) -> bool;
}

/// Reference player: research levels, racial traits and techs obtained
/// outside research.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTechs {
    pub tech_levels: TechLevel,
    pub prt: Prt,
    #[serde(default)]
    pub lrts: LrtSet,
    /// Names of techs acquired by trade or salvage.
    #[serde(default)]
    pub acquired: Vec<String>,
}

impl PlayerTechs {
    pub fn new(tech_levels: TechLevel, prt: Prt, lrts: LrtSet) -> Self {
        Self {
            tech_levels,
            prt,
            lrts,
            acquired: Vec::new(),
        }
    }

    /// True if this player's racial traits permit `tech`. Ignores levels.
    pub fn can_learn_tech(&self, tech: &Tech) -> bool {
        let requirements = &tech.requirements;

        if let Some(required) = &requirements.prts_required {
            if !required.is_empty() && !required.contains(&self.prt) {
                return false;
            }
        }
        if let Some(denied) = &requirements.prts_denied {
            if denied.contains(&self.prt) {
                return false;
            }
        }
        if let Some(required) = requirements.lrts_required {
            if !required.is_empty() && !self.lrts.intersects(required) {
                return false;
            }
        }
        if let Some(denied) = requirements.lrts_denied {
            if self.lrts.intersects(denied) {
                return false;
            }
        }
        true
    }

    pub fn has_acquired(&self, name: &str) -> bool {
        self.acquired.iter().any(|n| n == name)
    }
}

impl TechHolder for PlayerTechs {
    fn has_tech(&self, tech: &Tech) -> bool {
        if tech.origin.as_deref() == Some(ORIGIN_MYSTERY_TRADER) {
            return self.has_acquired(&tech.name);
        }
        self.can_learn_tech(tech)
            && self
                .tech_levels
                .has_required_levels(&tech.requirements.levels)
    }
}

impl<T: TechHolder + ?Sized> TechHolder for &T {
    fn has_tech(&self, tech: &Tech) -> bool {
        (**self).has_tech(tech)
    }
}
