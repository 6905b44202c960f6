//! Report generation for recompute outcomes.
//!
//! This module provides multiple output formats for one recompute cycle:
//! - JSON: structured data for programmatic integration
//! - CSV: the display table, suitable for spreadsheet import
//! - Summary: compact shell-friendly output with the top-1 breakdown

mod csv;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use std::path::PathBuf;

use crate::engine::Recomputation;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::OrderAdvisorError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::IoError(e) => Self::from(e),
            ReportError::SerializationError(msg) => Self::report(
                "rendering report",
                crate::error::ReportErrorKind::JsonSerializationError(msg),
            ),
            other => Self::report(
                "rendering report",
                crate::error::ReportErrorKind::Render(other.to_string()),
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one recompute outcome (recommendation mode).
    fn generate(
        &self,
        outcome: &Recomputation,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Render a plain display table (view mode, no scoring).
    fn generate_view(
        &self,
        table: &crate::table::DisplayTable,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// The format this generator produces.
    fn format(&self) -> ReportFormat;
}

/// Build the generator for a format.
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

/// Render one outcome in the requested format.
pub fn generate_report(
    format: ReportFormat,
    outcome: &Recomputation,
    metadata: &ReportMetadata,
) -> Result<String, ReportError> {
    reporter_for(format).generate(outcome, metadata)
}

/// Render a plain table view in the requested format.
pub fn generate_view_report(
    format: ReportFormat,
    table: &crate::table::DisplayTable,
    metadata: &ReportMetadata,
) -> Result<String, ReportError> {
    reporter_for(format).generate_view(table, metadata)
}

/// Where report output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to standard output
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Target for an optional file path: `File` when given, else `Stdout`.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Write rendered report content to its target.
pub fn write_output(content: &str, target: &OutputTarget) -> Result<(), ReportError> {
    use std::io::Write;
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "report written");
        }
    }
    Ok(())
}
