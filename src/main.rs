//! # qualplot
//!
//! Command-line front end for rendering fruit quality scatter charts.
//!
//! ## Usage
//!
//! ```bash
//! # Render the reference trial to sugar_acid_vc.png
//! qualplot render
//!
//! # SVG output with a custom dataset and config
//! qualplot render figure.svg --dataset trial.toml --config qualplot.toml
//!
//! # Print the summary statistics
//! qualplot summary --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
