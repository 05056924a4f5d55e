use crate::model::Pollutant;
use serde::{Deserialize, Serialize};

/// A threshold table as written in a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Concentration unit the thresholds are expressed in, for display.
    #[serde(default)]
    pub unit: Option<String>,
    pub rules: Vec<PollutantRuleDef>,
}

/// Band edges for one pollutant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutantRuleDef {
    pub pollutant: Pollutant,
    /// Ascending upper bounds (exclusive) of bands 1 through 4.
    pub thresholds: [f64; 4],
    #[serde(default)]
    pub note: Option<String>,
}
