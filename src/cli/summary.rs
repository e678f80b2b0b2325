use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use qualplot::stats::SummaryTable;

use super::{load_config, load_dataset};

/// Print the summary table as text or JSON
pub fn run(config: Option<PathBuf>, dataset: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let dataset = load_dataset(dataset.as_deref())?;

    let table = SummaryTable::from_dataset(&dataset).context("Failed to summarize dataset")?;
    info!("Summarized {} records", table.len());

    // Catch encoding gaps here rather than at render time
    config
        .encoding()
        .check_table(&table)
        .context("Visual encoding does not cover the dataset")?;

    if json {
        let text = serde_json::to_string_pretty(&table).context("Failed to serialize summary")?;
        println!("{}", text);
    } else {
        print!("{}", table.format_colored());
    }

    Ok(())
}
