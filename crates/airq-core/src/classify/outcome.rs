use crate::model::{CurrentPollution, Location, Pollutant, PollutantReading};
use crate::rules::Thresholds;
use crate::severity::{SeverityIndex, SeverityLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification result for a single pollutant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantResult {
    pub pollutant: Pollutant,
    /// Concentration as measured.
    pub value: f64,
    pub index: SeverityIndex,
    pub label: SeverityLabel,
    /// Band edges the value was compared against.
    pub thresholds: Thresholds,
    /// Human-readable explanation of the band.
    pub reason: String,
}

/// Overall verdict for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityVerdict {
    /// Worst index across all pollutants.
    pub worst_index: SeverityIndex,
    pub label: SeverityLabel,
    /// Pollutant(s) at the worst index.
    pub determining_pollutants: Vec<Pollutant>,
    pub reason: String,
    /// Per-pollutant results in display order.
    pub pollutant_results: Vec<PollutantResult>,
}

/// Everything a renderer needs for one lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReport {
    pub location: Location,
    pub reading: PollutantReading,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<DateTime<Utc>>,
    /// Name of the threshold table used.
    pub table: String,
    pub verdict: AirQualityVerdict,
}

impl AirQualityReport {
    pub fn new(
        location: Location,
        pollution: CurrentPollution,
        table: &str,
        verdict: AirQualityVerdict,
    ) -> Self {
        AirQualityReport {
            location,
            reading: pollution.reading,
            measured_at: pollution.measured_at,
            table: table.to_string(),
            verdict,
        }
    }
}
