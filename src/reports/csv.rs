//! CSV report generator.
//!
//! Emits the display table as comma-separated values with the
//! human-readable column labels, suitable for spreadsheet import and data
//! analysis pipelines.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::engine::Recomputation;
use crate::table::DisplayTable;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        outcome: &Recomputation,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        match outcome.table() {
            None => Ok(format!(
                "# No matching records {}\n",
                metadata.title_suffix
            )),
            Some(table) => Ok(render_table(table)),
        }
    }

    fn generate_view(
        &self,
        table: &DisplayTable,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        Ok(render_table(table))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn render_table(table: &DisplayTable) -> String {
    let mut content = String::new();

    content.push_str(&table.headers().join(","));
    content.push('\n');

    for row in &table.rows {
        content.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",{},{},{}",
            escape_csv(&row.product),
            escape_csv(&row.factory),
            escape_csv(&row.warehouse),
            row.demand,
            row.delay,
            row.sustainability,
        ));
        if let Some(score) = row.score {
            content.push_str(&format!(",{score}"));
        }
        content.push('\n');
    }

    content
}

/// Escape a string for CSV embedding: double-quote escaping per RFC 4180,
/// plus newline flattening since fields are already wrapped in double quotes.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}
