//! Scoring CLI
//!
//! Inspect the scoring format catalog and evaluate score sheets from the
//! command line.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
const LOG_ENV: &str = "SCORING_LOG";

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "scoring")]
#[command(about = "Multi-sport scoring formats and match results", long_about = None)]
struct Cli {
    /// Scoring formats file (YAML or JSON); overrides SCORING_FORMATS_PATH
    #[arg(long, global = true)]
    formats: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List sports and their formats
    Sports,

    /// Show the resolved profile for a sport as JSON
    Formats {
        /// Sport name (case-insensitive; unknown names use the default sport)
        #[arg(long)]
        sport: String,
    },

    /// Evaluate a score sheet
    Evaluate {
        /// Sport name
        #[arg(long, conflicts_with = "request")]
        sport: Option<String>,

        /// Format id within the sport
        #[arg(long, conflicts_with = "request")]
        format: Option<String>,

        /// Scores as "ours-theirs" pairs, comma separated (e.g. "25-20,22-25")
        #[arg(long, conflicts_with = "request", allow_hyphen_values = true)]
        scores: Option<String>,

        /// Request JSON file (EvaluateRequest)
        #[arg(long)]
        request: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print the JSON Schema of the evaluate request
    Schema,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = scoring_cli::load_catalog(cli.formats.as_deref())?;

    match cli.command {
        Commands::Sports => {
            print!("{}", scoring_cli::render_sports(&catalog));
        }

        Commands::Formats { sport } => {
            let json = scoring_core::list_formats_json_with(&catalog, &sport)?;
            println!("{json}");
        }

        Commands::Evaluate { sport, format, scores, request, pretty } => {
            let request = match request {
                Some(path) => scoring_cli::read_request(&path)?,
                None => {
                    let scores =
                        scoring_cli::parse_score_list(scores.as_deref().unwrap_or_default())?;
                    scoring_core::EvaluateRequest::new(sport.as_deref(), format.as_deref(), scores)
                }
            };

            let response = scoring_core::evaluate_request(&catalog, &request)
                .context("Failed to evaluate score sheet")?;

            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
        }

        Commands::Schema => {
            println!("{}", scoring_core::request_schema_json()?);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("scoring CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
