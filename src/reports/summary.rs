//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage: the
//! display table, the top-1 breakdown (or top-N list), and the
//! sustainability split.

use std::fmt::Write as _;

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::engine::{PresentationData, Ranking, Recomputation};
use crate::table::DisplayTable;

/// Summary reporter for shell output
pub struct SummaryReporter;

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        outcome: &Recomputation,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        write_header(&mut out, "Order Recommendations", metadata)?;

        match outcome {
            Recomputation::Empty { title_suffix } => {
                writeln!(out, "No matching records found {title_suffix}.")?;
            }
            Recomputation::Unscored {
                table,
                presentation,
                weight_sum,
            } => {
                writeln!(
                    out,
                    "Weights must sum to 1.00 to apply scoring (current sum: {weight_sum:.2})."
                )?;
                writeln!(out, "Showing the unscored table.")?;
                writeln!(out)?;
                write_table(&mut out, table)?;
                write_split(&mut out, presentation)?;
            }
            Recomputation::Scored {
                table,
                ranking,
                presentation,
            } => {
                write_table(&mut out, table)?;
                write_ranking(&mut out, ranking)?;
                write_split(&mut out, presentation)?;
            }
        }

        Ok(out)
    }

    fn generate_view(
        &self,
        table: &DisplayTable,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        write_header(&mut out, "Order Records", metadata)?;
        write_table(&mut out, table)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

fn write_header(
    out: &mut String,
    title: &str,
    metadata: &ReportMetadata,
) -> Result<(), ReportError> {
    writeln!(out, "{title} {}", metadata.title_suffix)?;
    writeln!(out, "{}", "─".repeat(48))?;
    match metadata.weights {
        Some(weights) => writeln!(
            out,
            "Mode: {} | Weights: demand {:.2}, delay {:.2}, sustainability {:.2}",
            metadata.mode, weights.demand, weights.delay, weights.sustainability
        )?,
        None => writeln!(out, "Mode: {}", metadata.mode)?,
    }
    writeln!(out)?;
    Ok(())
}

/// Render the display table with aligned columns.
fn write_table(out: &mut String, table: &DisplayTable) -> Result<(), ReportError> {
    let headers = table.headers();
    let mut cells: Vec<Vec<String>> = vec![headers.iter().map(ToString::to_string).collect()];
    for row in &table.rows {
        let mut line = vec![
            row.product.clone(),
            row.factory.clone(),
            row.warehouse.clone(),
            format!("{:.1}", row.demand),
            format!("{:.1}", row.delay),
            format!("{:.1}", row.sustainability),
        ];
        if let Some(score) = row.score {
            line.push(format!("{score:.2}"));
        }
        cells.push(line);
    }

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_ranking(out: &mut String, ranking: &Ranking) -> Result<(), ReportError> {
    if ranking.effective_n == 1 {
        let winner = ranking.winner();
        let record = &winner.record.record;
        writeln!(out, "Top recommendation:")?;
        writeln!(
            out,
            "  Factory {} | Product {} | Warehouse {}",
            record.key.factory, record.key.product, record.key.warehouse
        )?;
        writeln!(
            out,
            "  Score {:.2} | Demand {:.0} | Delay {:.1} days | Sustainability {:.1}%",
            winner.display_score,
            record.demand,
            record.delay,
            winner.display_sustainability
        )?;
        writeln!(out, "  Score breakdown:")?;
        writeln!(out, "    Demand component:         {:.2}", ranking.breakdown.demand)?;
        writeln!(out, "    Delay component:          {:.2}", ranking.breakdown.delay)?;
        writeln!(
            out,
            "    Sustainability component: {:.2}",
            ranking.breakdown.sustainability
        )?;
    } else {
        writeln!(out, "Top {} recommendations:", ranking.effective_n)?;
        for entry in &ranking.entries {
            let record = &entry.record.record;
            writeln!(
                out,
                "  {}. {} (score {:.2}, demand {:.0}, delay {:.1}d, sustainability {:.1}%)",
                entry.rank,
                record.key,
                entry.display_score,
                record.demand,
                record.delay,
                entry.display_sustainability
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_split(out: &mut String, presentation: &PresentationData) -> Result<(), ReportError> {
    writeln!(
        out,
        "Sustainability split: {} sustainable / {} not sustainable",
        presentation.split.sustainable, presentation.split.not_sustainable
    )?;
    Ok(())
}
