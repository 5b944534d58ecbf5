use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dddmap")]
#[command(about = "Domain-Driven Design fitness and package coupling analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to colour terminal output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a model and report DDD fitness and coupling metrics
    Analyze {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Analyze and fail when global fitness is below a threshold
    Validate {
        #[command(flatten)]
        run: RunArgs,

        /// Minimum global fitness percentage (overrides the config file)
        #[arg(long = "min-fitness")]
        min_fitness: Option<f64>,
    },

    /// Write a default .dddmap.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Model snapshot (JSON) to analyze
    pub model: PathBuf,

    /// Configuration file (default: nearest .dddmap.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (default: from config, else terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0", env = "DDDMAP_JOBS")]
    pub jobs: usize,

    /// Skip tagging controllers, repositories, factories and application
    /// services by name
    #[arg(long = "no-structural-tagging")]
    pub no_structural_tagging: bool,

    /// Show only the first N hotspots
    #[arg(long = "top", visible_alias = "head")]
    pub top: Option<usize>,
}
