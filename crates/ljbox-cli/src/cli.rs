use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "LJ-Box Developers",
    version,
    about = "LJ-Box CLI - Headless driver for bounded Lennard-Jones cluster dynamics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulation and optionally write its trajectory and energy log.
    Run(RunArgs),
    /// Print the built-in default configuration as TOML.
    Config,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Output ---
    /// Write recorded frames to a multi-frame XYZ trajectory file.
    #[arg(short, long, value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Write per-frame energies to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub energy_log: Option<PathBuf>,

    // --- Overrides ---
    /// Override the number of frames to simulate.
    #[arg(short, long, value_name = "INT")]
    pub frames: Option<u64>,

    /// Override the random seed used for the initial state.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the number of particles.
    #[arg(short = 'n', long, value_name = "INT")]
    pub particles: Option<usize>,

    /// Override the number of integration steps per frame.
    #[arg(long, value_name = "INT")]
    pub steps_per_frame: Option<usize>,

    /// Override the integration time step.
    #[arg(long, value_name = "FLOAT")]
    pub dt: Option<f64>,

    /// Record every K-th frame to the output files.
    #[arg(short, long, value_name = "INT")]
    pub record_every: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S potential.max-force=100
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
