use airq_core::classify::outcome::{AirQualityReport, AirQualityVerdict};
use airq_core::model::{format_concentration, PollutantReading};
use airq_core::rules::ThresholdTable;
use std::fmt::Write;

pub fn print_report(report: &AirQualityReport, explain: bool) {
    print!("{}", render_report(report, explain));
}

pub fn print_verdict(reading: &PollutantReading, verdict: &AirQualityVerdict, explain: bool) {
    print!("{}", render_verdict(reading, verdict, explain));
}

pub fn print_thresholds(table: &ThresholdTable) {
    print!("{}", render_thresholds(table));
}

fn render_report(report: &AirQualityReport, explain: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location: {}", report.location);
    if let Some(ref state) = report.location.state {
        let _ = writeln!(out, "  Region: {}", state);
    }
    if let Some(measured_at) = report.measured_at {
        let _ = writeln!(out, "  Measured: {}", measured_at.format("%Y-%m-%d %H:%M UTC"));
    }
    out.push('\n');
    out.push_str(&render_verdict(&report.reading, &report.verdict, explain));
    out
}

fn render_verdict(reading: &PollutantReading, verdict: &AirQualityVerdict, explain: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Air Quality: {} (Index: {})",
        verdict.label, verdict.worst_index
    );
    if explain {
        let _ = writeln!(out, "  {}", verdict.reason);
    }
    out.push('\n');

    let _ = writeln!(out, "Pollutant Concentrations (µg/m³)");
    for (pollutant, value) in reading.iter() {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            pollutant.symbol(),
            pollutant.name(),
            format_concentration(value)
        );
    }

    if explain {
        out.push('\n');
        let _ = writeln!(out, "Per-pollutant index:");
        for result in &verdict.pollutant_results {
            let marker = if verdict.determining_pollutants.contains(&result.pollutant) {
                " *"
            } else {
                ""
            };
            let _ = writeln!(out, "  {}{}", result.reason, marker);
        }
    }
    out
}

fn render_thresholds(table: &ThresholdTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (version {})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        let _ = writeln!(out, "{}\n", desc);
    }
    let _ = writeln!(
        out,
        "A value equal to a threshold falls into the higher band. Unit: {}\n",
        table.unit
    );

    let _ = write!(out, "  {:<10}", "Pollutant");
    for index in airq_core::severity::SeverityIndex::all() {
        let _ = write!(out, "  {:<10}", index.label());
    }
    out.push('\n');

    for pollutant in airq_core::model::Pollutant::ALL {
        let [t1, t2, t3, t4] = *table.thresholds(pollutant).bounds();
        let bands = [
            format!("< {t1}"),
            format!("< {t2}"),
            format!("< {t3}"),
            format!("< {t4}"),
            format!(">= {t4}"),
        ];
        let _ = write!(out, "  {:<10}", pollutant.symbol());
        for band in &bands {
            let _ = write!(out, "  {:<10}", band);
        }
        out.push('\n');
    }
    out
}
