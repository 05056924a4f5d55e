//! Integration tests for check_air_quality() end-to-end pipeline.
//!
//! Uses mock Geocoder and PollutionSource implementations so these tests run
//! without network access or an API key.

use airq_core::check_air_quality;
use airq_core::error::AirqError;
use airq_core::model::{CurrentPollution, Location, Pollutant, PollutantReading};
use airq_core::rules::builtin::{load_preset, openweather};
use airq_core::rules::parse_table_str;
use airq_core::severity::SeverityLabel;
use airq_core::source::{Geocoder, PollutionSource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockGeocoder {
    hit: Option<Location>,
    fail: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn locate(&self, city: &str) -> Result<Location, AirqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AirqError::Geocoding("connection refused".into()));
        }
        self.hit.clone().ok_or_else(|| AirqError::LocationNotFound {
            city: city.to_string(),
        })
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MockSource {
    reading: Option<PollutantReading>,
    calls: AtomicUsize,
}

#[async_trait]
impl PollutionSource for MockSource {
    async fn current(&self, _location: &Location) -> Result<CurrentPollution, AirqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reading {
            Some(reading) => Ok(CurrentPollution {
                reading,
                measured_at: None,
            }),
            None => Err(AirqError::PollutionFetch("HTTP 500: upstream".into())),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn delhi() -> Location {
    Location {
        name: "Delhi".into(),
        country: "IN".into(),
        state: None,
        lat: 28.65,
        lon: 77.23,
    }
}

fn geocoder(hit: Option<Location>) -> MockGeocoder {
    MockGeocoder {
        hit,
        fail: false,
        calls: AtomicUsize::new(0),
    }
}

fn source(reading: Option<PollutantReading>) -> MockSource {
    MockSource {
        reading,
        calls: AtomicUsize::new(0),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Fine particles alone drive the verdict to Very Poor
// ---------------------------------------------------------------------------
#[tokio::test]
async fn pm25_drives_very_poor() {
    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading {
        so2: 10.0,
        no2: 10.0,
        pm10: 10.0,
        pm2_5: 80.0,
        o3: 10.0,
        co: 10.0,
    }));

    let report = check_air_quality("Delhi", &geo, &src, &openweather())
        .await
        .unwrap();

    assert_eq!(report.location.to_string(), "Delhi, IN");
    assert_eq!(report.verdict.worst_index.value(), 5);
    assert_eq!(report.verdict.label, SeverityLabel::VeryPoor);
    assert_eq!(report.verdict.determining_pollutants, vec![Pollutant::Pm25]);
    assert_eq!(report.table, "OpenWeather Air Quality Index");
}

// ---------------------------------------------------------------------------
// Test 2: Clean air
// ---------------------------------------------------------------------------
#[tokio::test]
async fn all_zero_is_good() {
    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading::default()));

    let report = check_air_quality("Delhi", &geo, &src, &openweather())
        .await
        .unwrap();

    assert_eq!(report.verdict.worst_index.value(), 1);
    assert_eq!(report.verdict.label.to_string(), "Good");
}

// ---------------------------------------------------------------------------
// Test 3: Empty input never reaches the network
// ---------------------------------------------------------------------------
#[tokio::test]
async fn empty_city_rejected_before_lookup() {
    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading::default()));

    let err = check_air_quality("   ", &geo, &src, &openweather())
        .await
        .unwrap_err();

    assert!(matches!(err, AirqError::EmptyCity));
    assert_eq!(geo.calls.load(Ordering::SeqCst), 0);
    assert_eq!(src.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test 4: Unknown city is distinct from a fetch failure
// ---------------------------------------------------------------------------
#[tokio::test]
async fn unknown_city_is_location_not_found() {
    let geo = geocoder(None);
    let src = source(Some(PollutantReading::default()));

    let err = check_air_quality("Atlantis", &geo, &src, &openweather())
        .await
        .unwrap_err();

    assert!(matches!(err, AirqError::LocationNotFound { .. }));
    assert!(err.to_string().contains("Atlantis"));
    assert_eq!(src.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn geocoder_failure_is_reported_as_geocoding() {
    let geo = MockGeocoder {
        hit: None,
        fail: true,
        calls: AtomicUsize::new(0),
    };
    let src = source(Some(PollutantReading::default()));

    let err = check_air_quality("Delhi", &geo, &src, &openweather())
        .await
        .unwrap_err();

    assert!(matches!(err, AirqError::Geocoding(_)));
    assert!(err.to_string().contains("error finding city"));
}

#[tokio::test]
async fn pollution_failure_is_data_fetch_error() {
    let geo = geocoder(Some(delhi()));
    let src = source(None);

    let err = check_air_quality("Delhi", &geo, &src, &openweather())
        .await
        .unwrap_err();

    assert!(matches!(err, AirqError::PollutionFetch(_)));
    assert!(err.to_string().contains("error getting air quality data"));
}

// ---------------------------------------------------------------------------
// Test 5: City name is trimmed and retrying gives the same verdict
// ---------------------------------------------------------------------------
#[tokio::test]
async fn repeated_lookup_is_stable() {
    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading {
        so2: 30.0,
        no2: 75.0,
        pm10: 40.0,
        pm2_5: 20.0,
        o3: 90.0,
        co: 5000.0,
    }));
    let table = load_preset("openweather").unwrap();

    let first = check_air_quality("  Delhi ", &geo, &src, &table)
        .await
        .unwrap();
    let second = check_air_quality("Delhi", &geo, &src, &table)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.verdict.worst_index.value(), 3);
    assert_eq!(first.verdict.determining_pollutants, vec![Pollutant::No2]);
}

// ---------------------------------------------------------------------------
// Test 6: A custom table changes the verdict
// ---------------------------------------------------------------------------
#[tokio::test]
async fn custom_table_is_applied() {
    let strict = parse_table_str(
        r#"{
            "name": "Strict",
            "version": "0.1",
            "rules": [
                { "pollutant": "so2",   "thresholds": [1, 2, 3, 4] },
                { "pollutant": "no2",   "thresholds": [40, 70, 150, 200] },
                { "pollutant": "pm10",  "thresholds": [20, 50, 100, 200] },
                { "pollutant": "pm2_5", "thresholds": [10, 25, 50, 75] },
                { "pollutant": "o3",    "thresholds": [60, 100, 140, 180] },
                { "pollutant": "co",    "thresholds": [4400, 9400, 12400, 15400] }
            ]
        }"#,
    )
    .unwrap();

    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading {
        so2: 3.5,
        ..Default::default()
    }));

    let report = check_air_quality("Delhi", &geo, &src, &strict)
        .await
        .unwrap();

    assert_eq!(report.table, "Strict");
    assert_eq!(report.verdict.worst_index.value(), 4);
    assert_eq!(report.verdict.label, SeverityLabel::Poor);
}

// ---------------------------------------------------------------------------
// Test 7: Report JSON carries the fields a renderer needs
// ---------------------------------------------------------------------------
#[tokio::test]
async fn report_serializes_for_rendering() {
    let geo = geocoder(Some(delhi()));
    let src = source(Some(PollutantReading {
        pm10: 55.0,
        ..Default::default()
    }));

    let report = check_air_quality("Delhi", &geo, &src, &openweather())
        .await
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["location"]["name"], "Delhi");
    assert_eq!(json["verdict"]["worst_index"], 3);
    assert_eq!(json["verdict"]["label"], "Moderate");
    assert_eq!(json["reading"]["pm10"], 55.0);
    assert!(json.get("measured_at").is_none());
}
