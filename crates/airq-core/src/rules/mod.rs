pub mod builtin;
pub mod schema;

use crate::error::AirqError;
use crate::model::Pollutant;
use schema::{PollutantRuleDef, ThresholdTableDef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Four ascending band edges `[t1, t2, t3, t4]` for one pollutant.
///
/// Each edge is the exclusive upper bound of the band below it, so a value
/// equal to `t1` already belongs to band 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds(pub [f64; 4]);

impl Thresholds {
    pub const fn new(t1: f64, t2: f64, t3: f64, t4: f64) -> Self {
        Thresholds([t1, t2, t3, t4])
    }

    pub fn bounds(&self) -> &[f64; 4] {
        &self.0
    }
}

/// A validated threshold table covering every [`Pollutant`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub unit: String,
    /// Indexed by `Pollutant as usize`, which follows [`Pollutant::ALL`].
    thresholds: [Thresholds; 6],
}

impl ThresholdTable {
    pub fn thresholds(&self, pollutant: Pollutant) -> &Thresholds {
        &self.thresholds[pollutant as usize]
    }

    /// Convert back to the file representation.
    pub fn to_def(&self) -> ThresholdTableDef {
        ThresholdTableDef {
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            unit: Some(self.unit.clone()),
            rules: Pollutant::ALL
                .iter()
                .map(|&p| PollutantRuleDef {
                    pollutant: p,
                    thresholds: self.thresholds(p).0,
                    note: None,
                })
                .collect(),
        }
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        builtin::openweather()
    }
}

impl TryFrom<ThresholdTableDef> for ThresholdTable {
    type Error = AirqError;

    fn try_from(def: ThresholdTableDef) -> Result<Self, Self::Error> {
        validate_table(&def)?;

        let mut slots: [Option<Thresholds>; 6] = [None; 6];
        for rule in &def.rules {
            slots[rule.pollutant as usize] = Some(Thresholds(rule.thresholds));
        }

        let mut thresholds = [Thresholds([0.0; 4]); 6];
        for (&pollutant, slot) in Pollutant::ALL.iter().zip(slots) {
            thresholds[pollutant as usize] = slot.ok_or_else(|| {
                AirqError::TableInvalid(format!("missing thresholds for '{}'", pollutant.key()))
            })?;
        }

        Ok(ThresholdTable {
            name: def.name,
            version: def.version,
            description: def.description,
            unit: def.unit.unwrap_or_else(|| "µg/m³".to_string()),
            thresholds,
        })
    }
}

/// Load a threshold table from a JSON file.
pub fn load_table(path: &Path) -> Result<ThresholdTable, AirqError> {
    let content = std::fs::read_to_string(path).map_err(|e| AirqError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a threshold table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<ThresholdTable, AirqError> {
    let def: ThresholdTableDef = serde_json::from_str(json).map_err(|e| AirqError::TableLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    ThresholdTable::try_from(def)
}

/// Parse a threshold table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<ThresholdTable, AirqError> {
    let def: ThresholdTableDef = serde_json::from_str(json).map_err(AirqError::Json)?;
    ThresholdTable::try_from(def)
}

/// Validate that a threshold table is well-formed.
pub fn validate_table(def: &ThresholdTableDef) -> Result<(), AirqError> {
    if def.name.trim().is_empty() {
        return Err(AirqError::TableInvalid("name must not be empty".into()));
    }

    let mut seen: Vec<Pollutant> = Vec::new();
    for rule in &def.rules {
        let key = rule.pollutant.key();

        if seen.contains(&rule.pollutant) {
            return Err(AirqError::TableInvalid(format!(
                "pollutant '{}' is listed more than once",
                key
            )));
        }
        seen.push(rule.pollutant);

        if let Some(bad) = rule.thresholds.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(AirqError::TableInvalid(format!(
                "pollutant '{}' has invalid threshold {} (expected a finite, non-negative number)",
                key, bad
            )));
        }

        if rule.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AirqError::TableInvalid(format!(
                "thresholds for '{}' must be strictly ascending, got {:?}",
                key, rule.thresholds
            )));
        }
    }

    let missing: Vec<&str> = Pollutant::ALL
        .iter()
        .filter(|p| !seen.contains(*p))
        .map(|p| p.key())
        .collect();
    if !missing.is_empty() {
        return Err(AirqError::TableInvalid(format!(
            "missing thresholds for: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}
