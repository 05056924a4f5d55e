use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AirqError {
    #[error("Please enter a city name")]
    EmptyCity,

    #[error("location not found: '{city}'. Please try another location.")]
    LocationNotFound { city: String },

    #[error("error finding city: {0}. Please try again.")]
    Geocoding(String),

    #[error("error getting air quality data: {0}. Please try again.")]
    PollutionFetch(String),

    #[error("no API key configured. Pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("severity index {0} is out of range (expected 1-5)")]
    InvalidSeverity(u8),

    #[error("unknown severity label '{0}'")]
    InvalidSeverityLabel(String),

    #[error("failed to load threshold table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid threshold table: {0}")]
    TableInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
