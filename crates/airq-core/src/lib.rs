pub mod classify;
pub mod error;
pub mod model;
pub mod rules;
pub mod severity;
pub mod source;

use classify::outcome::AirQualityReport;
use error::AirqError;
use rules::ThresholdTable;
use source::{Geocoder, PollutionSource};
use tracing::info;

pub use classify::{classify_pollutant, classify_reading, classify_reading_with};

/// Main API entry point: look up a city and classify its current air quality.
///
/// The city is trimmed first; an empty name is rejected before any request is
/// made. The geocoder's first match is used to query the pollution source.
pub async fn check_air_quality(
    city: &str,
    geocoder: &dyn Geocoder,
    source: &dyn PollutionSource,
    table: &ThresholdTable,
) -> Result<AirQualityReport, AirqError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(AirqError::EmptyCity);
    }

    let location = geocoder.locate(city).await?;
    let pollution = source.current(&location).await?;
    let verdict = classify_reading_with(&pollution.reading, table);

    info!(
        location = %location,
        index = verdict.worst_index.value(),
        label = %verdict.label,
        geocoder = geocoder.backend_name(),
        source = source.backend_name(),
        "classified air quality"
    );

    Ok(AirQualityReport::new(location, pollution, &table.name, verdict))
}
