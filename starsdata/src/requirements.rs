//! Prerequisites a player must meet to obtain a tech.

use crate::levels::TechLevel;
use crate::race::{LrtSet, Prt};
use serde::{Deserialize, Serialize};

/// Research levels plus racial and hull gates.
///
/// Allow and deny lists are independent; a deny entry always wins.
/// Absent lists place no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechRequirements {
    #[serde(flatten)]
    pub levels: TechLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lrts_required: Option<LrtSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lrts_denied: Option<LrtSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prts_required: Option<Vec<Prt>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prts_denied: Option<Vec<Prt>>,
    /// Hull names this tech may be mounted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hulls_allowed: Option<Vec<String>>,
    /// Hull names this tech may never be mounted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hulls_denied: Option<Vec<String>>,
    /// Obtainable by means other than research.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub acquirable: bool,
}

impl TechRequirements {
    pub fn new(levels: TechLevel) -> Self {
        Self {
            levels,
            ..Self::default()
        }
    }

    pub fn lrts_required(mut self, lrts: LrtSet) -> Self {
        self.lrts_required = Some(lrts);
        self
    }

    pub fn lrts_denied(mut self, lrts: LrtSet) -> Self {
        self.lrts_denied = Some(lrts);
        self
    }

    pub fn prt_required(mut self, prt: Prt) -> Self {
        self.prts_required.get_or_insert_with(Vec::new).push(prt);
        self
    }

    pub fn prt_denied(mut self, prt: Prt) -> Self {
        self.prts_denied.get_or_insert_with(Vec::new).push(prt);
        self
    }

    pub fn hull_allowed(mut self, hull: impl Into<String>) -> Self {
        self.hulls_allowed
            .get_or_insert_with(Vec::new)
            .push(hull.into());
        self
    }

    pub fn hull_denied(mut self, hull: impl Into<String>) -> Self {
        self.hulls_denied
            .get_or_insert_with(Vec::new)
            .push(hull.into());
        self
    }

    pub fn acquirable(mut self) -> Self {
        self.acquirable = true;
        self
    }
}

impl From<TechLevel> for TechRequirements {
    fn from(levels: TechLevel) -> Self {
        Self::new(levels)
    }
}
