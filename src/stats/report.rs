use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::{SummaryRecord, SummaryTable};

const HEADER: [&str; 6] = ["Time", "Group", "VC", "Sugar", "Acid", "Sugar/Acid"];

fn row_cells(record: &SummaryRecord) -> [String; 6] {
    [
        record.time().to_string(),
        record.group().to_string(),
        format!("{:.3} ± {:.3}", record.vc().mean, record.vc().std),
        format!("{:.4} ± {:.4}", record.sugar().mean, record.sugar().std),
        format!("{:.4} ± {:.4}", record.acid().mean, record.acid().std),
        format!("{:.4} ± {:.4}", record.ratio().mean, record.ratio().std),
    ]
}

fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = HEADER.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

impl SummaryTable {
    /// Format the table with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let rows: Vec<[String; 6]> = self.records().iter().map(row_cells).collect();
            let widths = column_widths(&rows);

            let mut output = String::new();
            output.push_str(&format!("{}\n", style("Treatment Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("=================").cyan()));

            let header: Vec<String> = HEADER
                .iter()
                .zip(widths.iter())
                .map(|(h, w)| style(pad(h, *w)).bold().to_string())
                .collect();
            output.push_str(&header.join("  "));
            output.push('\n');

            for row in &rows {
                let cells: Vec<String> = row
                    .iter()
                    .zip(widths.iter())
                    .enumerate()
                    .map(|(i, (cell, w))| match i {
                        0 => style(pad(cell, *w)).dim().to_string(),
                        1 => style(pad(cell, *w)).green().to_string(),
                        5 => style(pad(cell, *w)).yellow().to_string(),
                        _ => pad(cell, *w),
                    })
                    .collect();
                output.push_str(cells.join("  ").trim_end());
                output.push('\n');
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 6]> = self.records().iter().map(row_cells).collect();
        let widths = column_widths(&rows);

        writeln!(f, "Treatment Summary")?;
        writeln!(f, "=================")?;

        let header: Vec<String> = HEADER
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| pad(h, *w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| pad(cell, *w))
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }

        Ok(())
    }
}
