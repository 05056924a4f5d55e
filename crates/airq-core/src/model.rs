use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six pollutants reported by the air pollution endpoint that feed the
/// severity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "so2")]
    So2,
    #[serde(rename = "no2")]
    No2,
    #[serde(rename = "pm10")]
    Pm10,
    #[serde(rename = "pm2_5")]
    Pm25,
    #[serde(rename = "o3")]
    O3,
    #[serde(rename = "co")]
    Co,
}

impl Pollutant {
    /// All pollutants in display order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::O3,
        Pollutant::Co,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Pm10 => "PM10",
            Pollutant::Pm25 => "PM25",
            Pollutant::O3 => "O3",
            Pollutant::Co => "CO",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::So2 => "Sulfur Dioxide",
            Pollutant::No2 => "Nitrogen Dioxide",
            Pollutant::Pm10 => "Particulate Matter",
            Pollutant::Pm25 => "Fine Particles",
            Pollutant::O3 => "Ozone",
            Pollutant::Co => "Carbon Monoxide",
        }
    }

    /// Key used by the provider and by threshold table files.
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::So2 => "so2",
            Pollutant::No2 => "no2",
            Pollutant::Pm10 => "pm10",
            Pollutant::Pm25 => "pm2_5",
            Pollutant::O3 => "o3",
            Pollutant::Co => "co",
        }
    }

    /// Accepts the provider key or the display symbol, case-insensitively.
    pub fn from_str_loose(s: &str) -> Option<Pollutant> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "so2" => Some(Pollutant::So2),
            "no2" => Some(Pollutant::No2),
            "pm10" => Some(Pollutant::Pm10),
            "pm2_5" | "pm25" | "pm2.5" => Some(Pollutant::Pm25),
            "o3" => Some(Pollutant::O3),
            "co" => Some(Pollutant::Co),
            _ => None,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One snapshot of pollutant concentrations for a location, in µg/m³.
///
/// Carbon monoxide is kept in whatever unit the provider reports it in
/// (µg/m³ for OpenWeatherMap), even though other standards quote it in mg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub so2: f64,
    pub no2: f64,
    pub pm10: f64,
    pub pm2_5: f64,
    pub o3: f64,
    pub co: f64,
}

impl PollutantReading {
    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::O3 => self.o3,
            Pollutant::Co => self.co,
        }
    }

    /// Iterate `(pollutant, concentration)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.iter().map(move |&p| (p, self.value(p)))
    }
}

/// Render a concentration the way reports show it: two decimal places.
///
/// `{:.2}` rounds an exact half to even (0.125 -> "0.12"). Exact halves are
/// rounded away from zero here instead, so 0.125 -> "0.13". Values that only
/// look like halves in decimal (1.005 is stored as 1.00499...) round down.
pub fn format_concentration(value: f64) -> String {
    let doubled = (value * 200.0).round();
    // Exact only when value * 200 has no rounding error at all.
    let is_half = value.abs() < 1e13
        && doubled % 2.0 != 0.0
        && value.mul_add(200.0, -doubled) == 0.0;

    if is_half {
        let hundredths = (doubled + doubled.signum()) / 2.0;
        return format!("{:.2}", hundredths / 100.0);
    }
    format!("{value:.2}")
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// ISO 3166 country code as returned by the geocoder.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// Current pollution at a location as delivered by a [`crate::source::PollutionSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPollution {
    pub reading: PollutantReading,
    /// Measurement time, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<DateTime<Utc>>,
}
