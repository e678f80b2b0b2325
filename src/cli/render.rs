use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use qualplot::chart::{render_with_format, ChartStyle, OutputFormat};
use qualplot::stats::SummaryTable;

use super::{load_config, load_dataset, DEFAULT_OUTPUT};

/// Command-line options of `qualplot render`
pub struct RenderArgs {
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub dataset: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub font_family: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Render the chart; flags override the config file, which overrides the defaults
pub fn run(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.config {
        info!("Loaded config from {}", path.display());
    }

    let dataset = load_dataset(args.dataset.as_deref())?;
    info!(
        "Dataset: {} entries, {} replicate values",
        dataset.entries().len(),
        dataset.value_count()
    );

    let mut style = ChartStyle::default();
    config.apply_to(&mut style);
    if let Some(family) = args.font_family {
        style.font_family = family;
    }
    if let Some(width) = args.width {
        style.width = width;
    }
    if let Some(height) = args.height {
        style.height = height;
    }
    if style.width == 0 || style.height == 0 {
        anyhow::bail!(
            "Figure dimensions must be positive (got {}x{})",
            style.width,
            style.height
        );
    }

    let output = args
        .output
        .or_else(|| config.chart.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_path(&output)?,
    };

    let table = SummaryTable::from_dataset(&dataset).context("Failed to summarize dataset")?;
    let encoding = config.encoding();

    let stats = render_with_format(&output, format, &table, &encoding, &style)
        .with_context(|| format!("Failed to render chart to {}", output.display()))?;

    info!("{}", stats);
    println!("Chart written to {}", stats.path.display());

    Ok(())
}
