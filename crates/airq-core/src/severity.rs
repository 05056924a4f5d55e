//! Severity scale shared by every pollutant: an index from 1 (best) to 5
//! (worst) and the label that goes with it.

use crate::error::AirqError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity index in `1..=5`, higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeverityIndex(u8);

impl SeverityIndex {
    pub const MIN: SeverityIndex = SeverityIndex(1);
    pub const MAX: SeverityIndex = SeverityIndex(5);

    /// Zero-based band position to index; anything past the last band is 5.
    pub(crate) fn from_band(band: usize) -> SeverityIndex {
        SeverityIndex(band.min(4) as u8 + 1)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> SeverityLabel {
        match self.0 {
            1 => SeverityLabel::Good,
            2 => SeverityLabel::Fair,
            3 => SeverityLabel::Moderate,
            4 => SeverityLabel::Poor,
            _ => SeverityLabel::VeryPoor,
        }
    }

    /// All indices from best to worst.
    pub fn all() -> impl Iterator<Item = SeverityIndex> {
        (Self::MIN.0..=Self::MAX.0).map(SeverityIndex)
    }
}

impl TryFrom<u8> for SeverityIndex {
    type Error = AirqError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(SeverityIndex(value))
        } else {
            Err(AirqError::InvalidSeverity(value))
        }
    }
}

impl From<SeverityIndex> for u8 {
    fn from(index: SeverityIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for SeverityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeverityLabel {
    Good,
    Fair,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl SeverityLabel {
    pub fn index(self) -> SeverityIndex {
        match self {
            SeverityLabel::Good => SeverityIndex(1),
            SeverityLabel::Fair => SeverityIndex(2),
            SeverityLabel::Moderate => SeverityIndex(3),
            SeverityLabel::Poor => SeverityIndex(4),
            SeverityLabel::VeryPoor => SeverityIndex(5),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLabel::Good => "Good",
            SeverityLabel::Fair => "Fair",
            SeverityLabel::Moderate => "Moderate",
            SeverityLabel::Poor => "Poor",
            SeverityLabel::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SeverityLabel {
    type Err = AirqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "good" => Ok(SeverityLabel::Good),
            "fair" => Ok(SeverityLabel::Fair),
            "moderate" => Ok(SeverityLabel::Moderate),
            "poor" => Ok(SeverityLabel::Poor),
            "very poor" => Ok(SeverityLabel::VeryPoor),
            _ => Err(AirqError::InvalidSeverityLabel(s.to_string())),
        }
    }
}
