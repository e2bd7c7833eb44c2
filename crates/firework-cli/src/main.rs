use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use firework_core::{AppConfig, Point};

mod commands;
mod overrides;

use overrides::{parse_point, OverrideArgs};

#[derive(Parser)]
#[command(name = "firework")]
#[command(
    author,
    version,
    about = "Firework bursts in your terminal, shaped by cubic-bezier easing"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    overrides: OverrideArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal animation
    Run,
    /// List the named easing curves
    Easings,
    /// Print an easing curve at evenly spaced points
    Sample {
        /// Preset name or control points `x1,y1,x2,y2`
        name: String,
        /// Number of intervals between 0 and 1
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
    /// Run the animation headless and report every tick
    Simulate {
        /// Burst origin as `x,y`; repeat for several bursts
        #[arg(long = "at", value_parser = parse_point)]
        at: Vec<Point>,
        /// Ticks to run (defaults to the burst duration)
        #[arg(long)]
        ticks: Option<u32>,
        /// Random seed for particle directions and colours
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and apply command-line overrides
    let mut config = AppConfig::load()?;
    cli.overrides.apply(&mut config);
    let config = Arc::new(config);

    // The TUI owns the terminal, so its logs go to a file
    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Easings) => commands::easings::run(&config).await,
        Some(Commands::Sample { name, steps }) => commands::sample::run(&name, steps).await,
        Some(Commands::Simulate {
            at,
            ticks,
            seed,
            json,
        }) => commands::simulate::run(&config, &at, ticks, seed, json).await,
        Some(Commands::Config { save }) => commands::config::run(&config, save).await,
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}
