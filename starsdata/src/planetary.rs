//! Planet-side techs: planetaries, planetary scanners, defenses and terraforms.

use crate::tech::Tech;
use serde::{Deserialize, Serialize};

/// A planet-wide installation such as the Genesis Device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechPlanetary {
    #[serde(flatten)]
    pub tech: Tech,
    /// Using this tech re-rolls the planet's environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_planet: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechPlanetaryScanner {
    #[serde(flatten)]
    pub tech: Tech,
    #[serde(default)]
    pub scan_range: i32,
    /// Penetrating range, sees through cloaks and into fleets.
    #[serde(default)]
    pub scan_range_pen: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechDefense {
    #[serde(flatten)]
    pub tech: Tech,
    /// Per-installation coverage, in percent (0.99 means 0.99%).
    #[serde(default)]
    pub defense_coverage: f64,
}

/// Which habitability axis a terraform tech adjusts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerraformHabType {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "Grav")]
    Gravity,
    #[serde(rename = "Temp")]
    Temperature,
    #[serde(rename = "Rad")]
    Radiation,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechTerraform {
    #[serde(flatten)]
    pub tech: Tech,
    /// Clicks of adjustment in either direction.
    #[serde(default)]
    pub ability: i32,
    #[serde(default)]
    pub hab_type: TerraformHabType,
}

impl AsRef<Tech> for TechPlanetary {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}

impl AsRef<Tech> for TechPlanetaryScanner {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}

impl AsRef<Tech> for TechDefense {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}

impl AsRef<Tech> for TechTerraform {
    fn as_ref(&self) -> &Tech {
        &self.tech
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech::TechCategory;

    #[test]
    fn test_hab_type_names() {
        let cases = [
            (TerraformHabType::None, "\"\""),
            (TerraformHabType::Gravity, "\"Grav\""),
            (TerraformHabType::Temperature, "\"Temp\""),
            (TerraformHabType::Radiation, "\"Rad\""),
            (TerraformHabType::All, "\"All\""),
        ];
        for (hab_type, json) in cases {
            assert_eq!(serde_json::to_string(&hab_type).unwrap(), json);
        }
    }

    #[test]
    fn test_terraform_flattened_shape() {
        let json = r#"{
            "name": "Gravity Terraform ±3",
            "cost": {"resources": 100},
            "requirements": {"propulsion": 1, "biotechnology": 1},
            "ranking": 80,
            "category": "Terraforming",
            "ability": 3,
            "habType": "Grav"
        }"#;
        let terraform: TechTerraform = serde_json::from_str(json).unwrap();
        assert_eq!(terraform.tech.category(), TechCategory::Terraforming);
        assert_eq!(terraform.tech.cost.resources, 100);
        assert_eq!(terraform.tech.requirements.levels.propulsion, 1);
        assert_eq!(terraform.ability, 3);
        assert_eq!(terraform.hab_type, TerraformHabType::Gravity);

        let value = serde_json::to_value(&terraform).unwrap();
        assert_eq!(value["habType"], "Grav");
        assert_eq!(value["name"], "Gravity Terraform ±3");
    }
}
