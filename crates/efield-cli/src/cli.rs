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
    version,
    about = "efield - compute the electric field and potential of 2D charge configurations described in a scene file.",
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
    /// Evaluate the field and potential at individual points.
    Probe(ProbeArgs),
    /// Sample the field over a rectangular grid and export it as CSV.
    Map(MapArgs),
}

/// Arguments for the `probe` subcommand.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Path to the TOML scene file describing the charged bodies.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub scene: PathBuf,

    /// Query point as 'x,y'. Can be given multiple times.
    #[arg(short, long = "at", required = true, value_name = "X,Y")]
    pub at: Vec<String>,
}

/// Arguments for the `map` subcommand.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Path to the TOML scene file describing the charged bodies.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub scene: PathBuf,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Lower-left corner of the sampled rectangle, as 'x,y'.
    #[arg(long, required = true, value_name = "X,Y")]
    pub min: String,

    /// Upper-right corner of the sampled rectangle, as 'x,y'.
    #[arg(long, required = true, value_name = "X,Y")]
    pub max: String,

    /// Samples per axis, as 'nx' or 'nx,ny' (minimum 2 each).
    #[arg(short, long, default_value = "50", value_name = "NX[,NY]")]
    pub resolution: String,
}
