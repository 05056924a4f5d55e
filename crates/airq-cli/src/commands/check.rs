use airq_core::error::AirqError;
use airq_core::source::openweather::{OpenWeatherClient, OpenWeatherConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::output;

pub struct CheckArgs {
    pub city: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: u64,
    pub thresholds: Option<PathBuf>,
}

pub async fn run(args: CheckArgs, output_format: &str, explain: bool) -> Result<(), AirqError> {
    let table = super::resolve_table(args.thresholds.as_deref())?;

    let api_key = args.api_key.ok_or(AirqError::MissingApiKey)?;
    let mut config =
        OpenWeatherConfig::new(&api_key).with_timeout(Duration::from_secs(args.timeout));
    if let Some(base_url) = args.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    debug!(base_url = %config.base_url, table = %table.name, "checking air quality");

    let client = OpenWeatherClient::new(config)?;
    let report = airq_core::check_air_quality(&args.city, &client, &client, &table).await?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report, explain),
    }

    Ok(())
}
