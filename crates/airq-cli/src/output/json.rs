use airq_core::error::AirqError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), AirqError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
