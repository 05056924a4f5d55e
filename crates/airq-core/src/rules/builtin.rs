use super::{parse_table_str, ThresholdTable, Thresholds};
use crate::error::AirqError;

const OPENWEATHER_JSON: &str = include_str!("../../../../rules/openweather.json");

/// Available predefined threshold tables.
pub const PRESETS: &[&str] = &["openweather"];

pub const SO2: Thresholds = Thresholds::new(20.0, 80.0, 250.0, 350.0);
pub const NO2: Thresholds = Thresholds::new(40.0, 70.0, 150.0, 200.0);
pub const PM10: Thresholds = Thresholds::new(20.0, 50.0, 100.0, 200.0);
pub const PM2_5: Thresholds = Thresholds::new(10.0, 25.0, 50.0, 75.0);
pub const O3: Thresholds = Thresholds::new(60.0, 100.0, 140.0, 180.0);
pub const CO: Thresholds = Thresholds::new(4400.0, 9400.0, 12400.0, 15400.0);

/// The fixed OpenWeatherMap table, built without parsing.
pub fn openweather() -> ThresholdTable {
    ThresholdTable {
        name: "OpenWeather Air Quality Index".to_string(),
        version: "1.0".to_string(),
        description: Some(
            "Per-pollutant bands used by the OpenWeatherMap air pollution API. Index 1 (Good) to 5 (Very Poor)."
                .to_string(),
        ),
        unit: "µg/m³".to_string(),
        thresholds: [SO2, NO2, PM10, PM2_5, O3, CO],
    }
}

/// Load a predefined threshold table by name.
pub fn load_preset(name: &str) -> Result<ThresholdTable, AirqError> {
    match name {
        "openweather" => parse_table_str(OPENWEATHER_JSON),
        _ => Err(AirqError::TableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
