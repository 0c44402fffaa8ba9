//! PhiKit command-line interface
//!
//! Usage:
//!   phikit spiral                      # golden spiral with configured defaults
//!   phikit vesica --config my.toml     # read parameters from a file
//!   phikit layout --compact            # spacing table on one line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phikit::{init_logging, render_shape, LayoutReport, ShapeType};
use phikit_settings::{Config, SettingsManager};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phikit")]
#[command(version = phikit::VERSION)]
#[command(about = "Golden-ratio geometry generator. Prints path commands as JSON.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.json or .toml). Defaults to the user config, if present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Golden spiral on a Fibonacci tiling
    Spiral,
    /// Single leaf with midrib and veins
    Leaf,
    /// Curved stem carrying leaves and fruit
    Branch,
    /// Two-circle lens with golden guides
    Vesica,
    /// Golden rectangle and spacing scale
    Layout,
}

impl Commands {
    fn shape_type(self) -> Option<ShapeType> {
        match self {
            Commands::Spiral => Some(ShapeType::Spiral),
            Commands::Leaf => Some(ShapeType::Leaf),
            Commands::Branch => Some(ShapeType::Branch),
            Commands::Vesica => Some(ShapeType::Vesica),
            Commands::Layout => None,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => match SettingsManager::load_default() {
            Ok(manager) => Ok(manager.config().clone()),
            Err(e) => {
                tracing::warn!("Ignoring user configuration: {}", e);
                Ok(Config::default())
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::debug!("phikit {} (built {})", phikit::VERSION, phikit::BUILD_DATE);

    let config = load_config(cli.config.as_ref())?;

    match cli.command.shape_type() {
        Some(shape_type) => print_json(&render_shape(&config, shape_type)?, cli.compact),
        None => print_json(&LayoutReport::from_settings(&config.layout)?, cli.compact),
    }
}
