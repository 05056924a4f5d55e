mod commands;
mod output;
mod telemetry;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "airq",
    version,
    about = "Air quality lookup: geocode a city and rate its current pollution from Good to Very Poor"
)]
struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace); see --explain for rating details
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose_logs: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a city and classify its current air quality
    Check {
        /// City name, e.g. "London" or "Paris,FR"
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// OpenWeatherMap API key
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Provider base URL
        #[arg(long, env = "OPENWEATHER_BASE_URL")]
        base_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// Custom threshold table (JSON); defaults to the built-in preset
        #[arg(short, long = "thresholds", value_name = "FILE")]
        thresholds: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Explain the rating: per-pollutant index and the band each value fell in
        #[arg(long)]
        explain: bool,
    },
    /// Classify a stored reading (JSON with so2, no2, pm10, pm2_5, o3, co)
    Classify {
        /// Path to reading JSON file
        input_file: PathBuf,

        /// Custom threshold table (JSON); defaults to the built-in preset
        #[arg(short, long = "thresholds", value_name = "FILE")]
        thresholds: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Explain the rating: per-pollutant index and the band each value fell in
        #[arg(long)]
        explain: bool,
    },
    /// Inspect threshold tables
    Thresholds {
        #[command(subcommand)]
        action: ThresholdsAction,
    },
}

#[derive(Subcommand)]
enum ThresholdsAction {
    /// List predefined threshold tables
    List,
    /// Print a threshold table
    Show {
        /// Preset name (e.g., "openweather")
        #[arg(default_value = "openweather")]
        preset: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate a custom threshold table file
    Validate {
        /// Path to JSON threshold table
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json, cli.verbose_logs);

    let result = match cli.command {
        Commands::Check {
            city,
            api_key,
            base_url,
            timeout,
            thresholds,
            output,
            explain,
        } => {
            let args = commands::check::CheckArgs {
                city: city.join(" "),
                api_key,
                base_url,
                timeout,
                thresholds,
            };
            commands::check::run(args, &output, explain).await
        }
        Commands::Classify {
            input_file,
            thresholds,
            output,
            explain,
        } => commands::classify::run(input_file, thresholds, &output, explain),
        Commands::Thresholds { action } => match action {
            ThresholdsAction::List => commands::thresholds::list(),
            ThresholdsAction::Show { preset, output } => {
                commands::thresholds::show(&preset, &output)
            }
            ThresholdsAction::Validate { file } => commands::thresholds::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
