use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use qualplot::chart::OutputFormat;

mod config;
mod render;
mod summary;

pub use config::Config;

/// Default image path when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "sugar_acid_vc.png";

/// qualplot - Sugar-acid ratio vs. ascorbic acid charts for treatment trials
#[derive(Parser)]
#[command(name = "qualplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Image format override.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Raster PNG image
    Png,
    /// Vector SVG image
    Svg,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Svg => OutputFormat::Svg,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the scatter chart to an image file
    Render {
        /// Output image path (.png or .svg, defaults to sugar_acid_vc.png)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load chart settings and visual encoding from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Load replicate measurements from a TOML dataset file
        #[arg(long, value_name = "FILE")]
        dataset: Option<PathBuf>,

        /// Image format (inferred from the output extension when omitted)
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        /// Font family for all chart text
        #[arg(long, value_name = "NAME")]
        font_family: Option<String>,

        /// Figure width in pixels
        #[arg(long, value_name = "PX")]
        width: Option<u32>,

        /// Figure height in pixels
        #[arg(long, value_name = "PX")]
        height: Option<u32>,
    },

    /// Print the per-treatment summary statistics
    Summary {
        /// Load the visual encoding from a TOML config file (checked against the data)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Load replicate measurements from a TOML dataset file
        #[arg(long, value_name = "FILE")]
        dataset: Option<PathBuf>,

        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            output,
            config,
            dataset,
            format,
            font_family,
            width,
            height,
        } => render::run(render::RenderArgs {
            output,
            config,
            dataset,
            format: format.map(OutputFormat::from),
            font_family,
            width,
            height,
        }),
        Commands::Summary {
            config,
            dataset,
            json,
        } => summary::run(config, dataset, json),
    }
}

/// Load the dataset file, or the built-in reference trial
fn load_dataset(path: Option<&std::path::Path>) -> Result<qualplot::dataset::Dataset> {
    use anyhow::Context;
    use qualplot::dataset::Dataset;

    match path {
        Some(path) => Dataset::from_file(path)
            .with_context(|| format!("Failed to load dataset: {}", path.display())),
        None => Ok(Dataset::reference()),
    }
}

/// Load the config file, or an empty config
fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}
