//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::RecomputeParams;
use crate::model::{AggregationMode, WeightConfig};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Brief human-readable summary output
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Metadata attached to every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Generating tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339 in JSON output)
    pub generated_at: DateTime<Utc>,
    /// Human description of the active filter ("for all records" when none)
    pub title_suffix: String,
    /// Aggregation mode the cycle ran with
    pub mode: AggregationMode,
    /// Weights the cycle ran with; `None` for plain (unscored) views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightConfig>,
}

impl ReportMetadata {
    /// Build metadata for one recompute cycle.
    #[must_use]
    pub fn for_cycle(params: &RecomputeParams) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            title_suffix: params.filter.title_suffix(),
            mode: params.mode,
            weights: Some(params.weights),
        }
    }

    /// Build metadata for a plain table view (no scoring involved).
    #[must_use]
    pub fn for_view(mode: AggregationMode, filter: Option<&crate::engine::FilterSelection>) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            title_suffix: filter
                .map_or_else(|| "for all records".to_string(), |f| f.title_suffix()),
            mode,
            weights: None,
        }
    }
}
