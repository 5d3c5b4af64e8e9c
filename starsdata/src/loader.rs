//! Ruleset loading and validation.
//!
//! Rulesets are JSON documents in the persisted catalog shape (camelCase
//! keys, one array per tech list). Parse and I/O failures are errors;
//! content problems are reported as [`CatalogIssue`]s and logged, and the
//! caller decides whether they matter.

use crate::defines::FUEL_USAGE_WARP_LEVELS;
use crate::store::{TechStore, normalize_tech_name};
use crate::tech::{Tech, TechCategory};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Ruleset not found: {0}")]
    NotFound(PathBuf),
}

/// A content problem found in a loaded catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogIssue {
    /// Tech sits in a list its category does not belong to.
    MisplacedCategory {
        name: String,
        category: TechCategory,
        list: &'static str,
    },
    UnknownCategory { name: String, list: &'static str },
    /// Two techs normalize to the same lookup key.
    DuplicateName { name: String, key: String },
    FuelTableLength { name: String, len: usize },
    ZeroCapacitySlot { hull: String, slot: usize },
    UntypedSlot { hull: String, slot: usize },
    CoverageOutOfRange { name: String, coverage: f64 },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MisplacedCategory {
                name,
                category,
                list,
            } => write!(f, "{} has category {:?} but is listed in {}", name, category, list),
            CatalogIssue::UnknownCategory { name, list } => {
                write!(f, "{} in {} has an unrecognized category", name, list)
            }
            CatalogIssue::DuplicateName { name, key } => {
                write!(f, "{} duplicates an earlier tech (key '{}')", name, key)
            }
            CatalogIssue::FuelTableLength { name, len } => write!(
                f,
                "{} has {} fuel usage entries, expected {}",
                name, len, FUEL_USAGE_WARP_LEVELS
            ),
            CatalogIssue::ZeroCapacitySlot { hull, slot } => {
                write!(f, "{} slot {} has zero capacity", hull, slot)
            }
            CatalogIssue::UntypedSlot { hull, slot } => {
                write!(f, "{} slot {} accepts no component kind", hull, slot)
            }
            CatalogIssue::CoverageOutOfRange { name, coverage } => {
                write!(f, "{} has defense coverage {} outside 0..=100", name, coverage)
            }
        }
    }
}

/// Load a ruleset from a JSON file and log any validation issues.
pub fn load_tech_store(path: &Path) -> Result<TechStore, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    log::debug!("Loading tech store from {}", path.display());
    let file = File::open(path)?;
    tech_store_from_reader(BufReader::new(file))
}

/// Parse a ruleset from any reader and log any validation issues.
pub fn tech_store_from_reader<R: Read>(reader: R) -> Result<TechStore, CatalogError> {
    let store: TechStore = serde_json::from_reader(reader)?;

    let issues = validate(&store);
    for issue in &issues {
        log::warn!("Tech store: {}", issue);
    }
    log::info!(
        "Loaded tech store: {} techs ({} engines, {} components, {} hulls), {} issues",
        store.len(),
        store.engines().len(),
        store.hull_components().len(),
        store.hulls().len(),
        issues.len()
    );
    Ok(store)
}

/// Check a catalog for content problems. Returns issues in catalog order.
pub fn validate(store: &TechStore) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    let mut check = |tech: &Tech, list: &'static str, belongs: fn(TechCategory) -> bool| {
        let category = tech.category();
        if category == TechCategory::Unknown {
            issues.push(CatalogIssue::UnknownCategory {
                name: tech.name.clone(),
                list,
            });
        } else if !belongs(category) {
            issues.push(CatalogIssue::MisplacedCategory {
                name: tech.name.clone(),
                category,
                list,
            });
        }

        let key = normalize_tech_name(&tech.name);
        if !seen.insert(key.clone()) {
            issues.push(CatalogIssue::DuplicateName {
                name: tech.name.clone(),
                key,
            });
        }
    };

    for engine in store.engines() {
        check(engine.tech(), "engines", |c| c == TechCategory::Engine);
    }
    for scanner in store.planetary_scanners() {
        check(&scanner.tech, "planetaryScanners", |c| {
            c == TechCategory::PlanetaryScanner
        });
    }
    for terraform in store.terraforms() {
        check(&terraform.tech, "terraforms", |c| c == TechCategory::Terraforming);
    }
    for defense in store.defenses() {
        check(&defense.tech, "defenses", |c| c == TechCategory::PlanetaryDefense);
    }
    for planetary in store.planetaries() {
        check(&planetary.tech, "planetaries", |c| c == TechCategory::Planetary);
    }
    for component in store.hull_components() {
        check(&component.tech, "hullComponents", TechCategory::is_hull_component);
    }
    for hull in store.hulls() {
        check(&hull.tech, "hulls", TechCategory::is_hull);
    }

    for engine in store.engines() {
        if !engine.engine.has_complete_fuel_table() {
            issues.push(CatalogIssue::FuelTableLength {
                name: engine.tech().name.clone(),
                len: engine.engine.fuel_usage.len(),
            });
        }
    }

    for hull in store.hulls() {
        for (slot, hull_slot) in hull.slots.iter().enumerate() {
            if hull_slot.capacity == 0 {
                issues.push(CatalogIssue::ZeroCapacitySlot {
                    hull: hull.tech.name.clone(),
                    slot,
                });
            }
            if hull_slot.slot_type.is_empty() {
                issues.push(CatalogIssue::UntypedSlot {
                    hull: hull.tech.name.clone(),
                    slot,
                });
            }
        }
    }

    for defense in store.defenses() {
        if !(0.0..=100.0).contains(&defense.defense_coverage) {
            issues.push(CatalogIssue::CoverageOutOfRange {
                name: defense.tech.name.clone(),
                coverage: defense.defense_coverage,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Engine, TechEngine, TechHullComponent};
    use crate::hulls::{TechHull, TechHullType};
    use crate::planetary::TechDefense;
    use crate::requirements::TechRequirements;
    use crate::slots::{HullSlot, HullSlotType, Vector};
    use crate::store::TechStoreData;
    use crate::tech::Cost;

    fn tech(name: &str, category: TechCategory) -> Tech {
        Tech::new(name, Cost::default(), TechRequirements::default(), 0, category)
    }

    #[test]
    fn test_clean_store_has_no_issues() {
        let store = TechStore::new(TechStoreData {
            defenses: vec![TechDefense {
                tech: tech("SDI", TechCategory::PlanetaryDefense),
                defense_coverage: 0.99,
            }],
            ..TechStoreData::default()
        });
        assert!(validate(&store).is_empty());
    }

    #[test]
    fn test_reports_each_issue_kind() {
        let store = TechStore::new(TechStoreData {
            engines: vec![TechEngine {
                component: TechHullComponent::new(
                    tech("Short Table", TechCategory::Engine),
                    HullSlotType::ENGINE,
                    1,
                ),
                engine: Engine {
                    fuel_usage: vec![0, 0, 0],
                    ..Engine::default()
                },
            }],
            defenses: vec![
                TechDefense {
                    tech: tech("Overcharged", TechCategory::PlanetaryDefense),
                    defense_coverage: 150.0,
                },
                TechDefense {
                    tech: tech("Wrong List", TechCategory::Armor),
                    defense_coverage: 1.0,
                },
            ],
            hull_components: vec![
                TechHullComponent::new(
                    tech("Mystery", TechCategory::Unknown),
                    HullSlotType::NONE,
                    0,
                ),
                TechHullComponent::new(
                    tech("short table", TechCategory::Armor),
                    HullSlotType::ARMOR,
                    0,
                ),
            ],
            hulls: vec![TechHull::new(
                tech("Broken Hull", TechCategory::ShipHull),
                TechHullType::Scout,
                1,
                1,
                vec![
                    HullSlot::new(HullSlotType::ENGINE, 0, Vector::default()),
                    HullSlot::new(HullSlotType::NONE, 1, Vector::default()),
                ],
            )],
            ..TechStoreData::default()
        });

        let issues = validate(&store);
        assert!(issues.contains(&CatalogIssue::FuelTableLength {
            name: "Short Table".to_string(),
            len: 3
        }));
        assert!(issues.contains(&CatalogIssue::CoverageOutOfRange {
            name: "Overcharged".to_string(),
            coverage: 150.0
        }));
        assert!(issues.contains(&CatalogIssue::MisplacedCategory {
            name: "Wrong List".to_string(),
            category: TechCategory::Armor,
            list: "defenses"
        }));
        assert!(issues.contains(&CatalogIssue::UnknownCategory {
            name: "Mystery".to_string(),
            list: "hullComponents"
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateName {
            name: "short table".to_string(),
            key: "short-table".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::ZeroCapacitySlot {
            hull: "Broken Hull".to_string(),
            slot: 0
        }));
        assert!(issues.contains(&CatalogIssue::UntypedSlot {
            hull: "Broken Hull".to_string(),
            slot: 1
        }));
        assert_eq!(issues.len(), 7);
    }

    #[test]
    fn test_from_reader_parse_error() {
        let result = tech_store_from_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(CatalogError::Serialization(_))));
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue::ZeroCapacitySlot {
            hull: "Scout".to_string(),
            slot: 2,
        };
        assert_eq!(issue.to_string(), "Scout slot 2 has zero capacity");
    }
}
