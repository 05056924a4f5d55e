use airq_core::error::AirqError;
use airq_core::model::Pollutant;
use airq_core::rules::{builtin, load_table};
use std::path::Path;

use crate::output;

pub fn list() -> Result<(), AirqError> {
    println!("Available threshold tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!("  {:<12} {} (v{})", name, table.name, table.version);
        if let Some(ref desc) = table.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str, output_format: &str) -> Result<(), AirqError> {
    let table = builtin::load_preset(preset)?;
    match output_format {
        "json" => output::json::print(&table.to_def())?,
        _ => output::table::print_thresholds(&table),
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), AirqError> {
    let table = load_table(file)?;
    println!("Valid threshold table: {} (v{})", table.name, table.version);
    println!("  Pollutants: {}", Pollutant::ALL.len());
    println!("  Unit: {}", table.unit);
    Ok(())
}
