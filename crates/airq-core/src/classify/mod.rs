pub mod engine;
pub mod outcome;

pub use engine::{classify_pollutant, classify_reading, classify_reading_with};
pub use outcome::{AirQualityReport, AirQualityVerdict, PollutantResult};
