pub mod openweather;

use crate::error::AirqError;
use crate::model::{CurrentPollution, Location};
use async_trait::async_trait;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up `city`, returning the best match.
    ///
    /// Returns [`AirqError::LocationNotFound`] when the lookup succeeded but
    /// matched nothing, and [`AirqError::Geocoding`] when it failed.
    async fn locate(&self, city: &str) -> Result<Location, AirqError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Supplies current pollutant concentrations for a location.
#[async_trait]
pub trait PollutionSource: Send + Sync {
    /// Fetch the latest reading at `location`.
    ///
    /// Failures are reported as [`AirqError::PollutionFetch`].
    async fn current(&self, location: &Location) -> Result<CurrentPollution, AirqError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
