//! The technology catalog for one ruleset.
//!
//! A [`TechStore`] is built once from its raw lists ([`TechStoreData`]) and is
//! read-only afterwards. Construction builds a name index so lookups by
//! display name or slug are O(1).

use crate::components::{TechEngine, TechHullComponent};
use crate::hulls::{TechHull, TechHullType};
use crate::planetary::{TechDefense, TechPlanetary, TechPlanetaryScanner, TechTerraform};
use crate::tech::{Tech, TechCategory};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Normalize a tech name for lookup: lowercase, spaces become `-`,
/// apostrophes are dropped. "Settler's Delight" -> "settlers-delight".
pub fn normalize_tech_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == ' ' { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Raw catalog lists, exactly as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechStoreData {
    pub engines: Vec<TechEngine>,
    pub planetary_scanners: Vec<TechPlanetaryScanner>,
    pub terraforms: Vec<TechTerraform>,
    pub defenses: Vec<TechDefense>,
    pub planetaries: Vec<TechPlanetary>,
    pub hull_components: Vec<TechHullComponent>,
    pub hulls: Vec<TechHull>,
}

/// Which list an indexed tech lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TechList {
    Engine,
    PlanetaryScanner,
    Terraform,
    Defense,
    Planetary,
    HullComponent,
    Hull,
}

/// A borrowed tech of any specialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TechRef<'a> {
    Engine(&'a TechEngine),
    PlanetaryScanner(&'a TechPlanetaryScanner),
    Terraform(&'a TechTerraform),
    Defense(&'a TechDefense),
    Planetary(&'a TechPlanetary),
    HullComponent(&'a TechHullComponent),
    Hull(&'a TechHull),
}

impl<'a> TechRef<'a> {
    pub fn tech(&self) -> &'a Tech {
        match *self {
            TechRef::Engine(t) => &t.component.tech,
            TechRef::PlanetaryScanner(t) => &t.tech,
            TechRef::Terraform(t) => &t.tech,
            TechRef::Defense(t) => &t.tech,
            TechRef::Planetary(t) => &t.tech,
            TechRef::HullComponent(t) => &t.tech,
            TechRef::Hull(t) => &t.tech,
        }
    }

    pub fn name(&self) -> &'a str {
        &self.tech().name
    }

    pub fn category(&self) -> TechCategory {
        self.tech().category()
    }

    /// The mountable view of this tech, if it is a component or engine.
    pub fn as_hull_component(&self) -> Option<&'a TechHullComponent> {
        match *self {
            TechRef::Engine(t) => Some(&t.component),
            TechRef::HullComponent(t) => Some(t),
            _ => None,
        }
    }
}

/// Read-only technology catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechStore {
    engines: Vec<TechEngine>,
    planetary_scanners: Vec<TechPlanetaryScanner>,
    terraforms: Vec<TechTerraform>,
    defenses: Vec<TechDefense>,
    planetaries: Vec<TechPlanetary>,
    hull_components: Vec<TechHullComponent>,
    hulls: Vec<TechHull>,

    /// Normalized name -> location. First declaration wins on duplicates.
    by_name: FxHashMap<String, (TechList, usize)>,
    /// Category -> indices into `hull_components`.
    components_by_category: FxHashMap<TechCategory, Vec<usize>>,
    /// Hull type -> indices into `hulls`.
    hulls_by_type: FxHashMap<TechHullType, Vec<usize>>,
}

impl TechStore {
    pub fn new(data: TechStoreData) -> Self {
        let TechStoreData {
            engines,
            planetary_scanners,
            terraforms,
            defenses,
            planetaries,
            hull_components,
            hulls,
        } = data;

        let mut store = Self {
            engines,
            planetary_scanners,
            terraforms,
            defenses,
            planetaries,
            hull_components,
            hulls,
            ..Self::default()
        };
        store.build_indices();
        store
    }

    fn build_indices(&mut self) {
        let mut by_name = FxHashMap::default();
        let mut insert = |name: &str, location: (TechList, usize)| {
            let key = normalize_tech_name(name);
            if by_name.contains_key(&key) {
                log::debug!("Duplicate tech name '{}', keeping first", name);
            } else {
                by_name.insert(key, location);
            }
        };

        for (i, t) in self.engines.iter().enumerate() {
            insert(&t.component.tech.name, (TechList::Engine, i));
        }
        for (i, t) in self.planetary_scanners.iter().enumerate() {
            insert(&t.tech.name, (TechList::PlanetaryScanner, i));
        }
        for (i, t) in self.terraforms.iter().enumerate() {
            insert(&t.tech.name, (TechList::Terraform, i));
        }
        for (i, t) in self.defenses.iter().enumerate() {
            insert(&t.tech.name, (TechList::Defense, i));
        }
        for (i, t) in self.planetaries.iter().enumerate() {
            insert(&t.tech.name, (TechList::Planetary, i));
        }
        for (i, t) in self.hull_components.iter().enumerate() {
            insert(&t.tech.name, (TechList::HullComponent, i));
        }
        for (i, t) in self.hulls.iter().enumerate() {
            insert(&t.tech.name, (TechList::Hull, i));
        }
        self.by_name = by_name;

        let mut components_by_category: FxHashMap<TechCategory, Vec<usize>> =
            FxHashMap::default();
        for (i, component) in self.hull_components.iter().enumerate() {
            components_by_category
                .entry(component.tech.category())
                .or_default()
                .push(i);
        }
        self.components_by_category = components_by_category;

        let mut hulls_by_type: FxHashMap<TechHullType, Vec<usize>> = FxHashMap::default();
        for (i, hull) in self.hulls.iter().enumerate() {
            if let Some(hull_type) = hull.hull_type {
                hulls_by_type.entry(hull_type).or_default().push(i);
            }
        }
        self.hulls_by_type = hulls_by_type;

        log::debug!(
            "Indexed tech store: {} techs, {} unique names",
            self.len(),
            self.by_name.len()
        );
    }

    pub fn engines(&self) -> &[TechEngine] {
        &self.engines
    }

    pub fn planetary_scanners(&self) -> &[TechPlanetaryScanner] {
        &self.planetary_scanners
    }

    pub fn terraforms(&self) -> &[TechTerraform] {
        &self.terraforms
    }

    pub fn defenses(&self) -> &[TechDefense] {
        &self.defenses
    }

    pub fn planetaries(&self) -> &[TechPlanetary] {
        &self.planetaries
    }

    pub fn hull_components(&self) -> &[TechHullComponent] {
        &self.hull_components
    }

    pub fn hulls(&self) -> &[TechHull] {
        &self.hulls
    }

    /// Look up any tech by display name or slug.
    pub fn get_tech(&self, name: &str) -> Option<TechRef<'_>> {
        let &(list, i) = self.by_name.get(&normalize_tech_name(name))?;
        let tech = match list {
            TechList::Engine => TechRef::Engine(&self.engines[i]),
            TechList::PlanetaryScanner => TechRef::PlanetaryScanner(&self.planetary_scanners[i]),
            TechList::Terraform => TechRef::Terraform(&self.terraforms[i]),
            TechList::Defense => TechRef::Defense(&self.defenses[i]),
            TechList::Planetary => TechRef::Planetary(&self.planetaries[i]),
            TechList::HullComponent => TechRef::HullComponent(&self.hull_components[i]),
            TechList::Hull => TechRef::Hull(&self.hulls[i]),
        };
        Some(tech)
    }

    pub fn get_engine(&self, name: &str) -> Option<&TechEngine> {
        match self.get_tech(name)? {
            TechRef::Engine(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn get_hull(&self, name: &str) -> Option<&TechHull> {
        match self.get_tech(name)? {
            TechRef::Hull(hull) => Some(hull),
            _ => None,
        }
    }

    /// Look up a mountable component. Engines are included.
    pub fn get_hull_component(&self, name: &str) -> Option<&TechHullComponent> {
        self.get_tech(name)?.as_hull_component()
    }

    /// Hulls of the given type, in catalog order.
    pub fn hulls_by_type(&self, hull_type: TechHullType) -> impl Iterator<Item = &TechHull> {
        self.hulls_by_type
            .get(&hull_type)
            .into_iter()
            .flatten()
            .map(move |&i| &self.hulls[i])
    }

    /// Non-engine components of the given category, in catalog order.
    pub fn hull_components_by_category(
        &self,
        category: TechCategory,
    ) -> impl Iterator<Item = &TechHullComponent> {
        self.components_by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(move |&i| &self.hull_components[i])
    }

    /// Every tech in catalog order: engines, planetary scanners, terraforms,
    /// defenses, planetaries, hull components, hulls.
    pub fn iter(&self) -> impl Iterator<Item = TechRef<'_>> {
        self.engines
            .iter()
            .map(TechRef::Engine)
            .chain(self.planetary_scanners.iter().map(TechRef::PlanetaryScanner))
            .chain(self.terraforms.iter().map(TechRef::Terraform))
            .chain(self.defenses.iter().map(TechRef::Defense))
            .chain(self.planetaries.iter().map(TechRef::Planetary))
            .chain(self.hull_components.iter().map(TechRef::HullComponent))
            .chain(self.hulls.iter().map(TechRef::Hull))
    }

    pub fn len(&self) -> usize {
        self.engines.len()
            + self.planetary_scanners.len()
            + self.terraforms.len()
            + self.defenses.len()
            + self.planetaries.len()
            + self.hull_components.len()
            + self.hulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the lists back out into their persisted shape.
    pub fn to_data(&self) -> TechStoreData {
        TechStoreData {
            engines: self.engines.clone(),
            planetary_scanners: self.planetary_scanners.clone(),
            terraforms: self.terraforms.clone(),
            defenses: self.defenses.clone(),
            planetaries: self.planetaries.clone(),
            hull_components: self.hull_components.clone(),
            hulls: self.hulls.clone(),
        }
    }
}

impl From<TechStoreData> for TechStore {
    fn from(data: TechStoreData) -> Self {
        Self::new(data)
    }
}

impl Serialize for TechStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TechStore {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TechStoreData::deserialize(deserializer).map(TechStore::new)
    }
}
