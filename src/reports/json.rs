//! JSON report generator.
//!
//! Structured output for programmatic integration: metadata, outcome
//! status, the display table, the ranking, and the presentation data.

use serde::Serialize;

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::engine::{PresentationData, Ranking, Recomputation};
use crate::table::DisplayTable;

/// JSON report generator.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// The serialized report shape.
#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<&'a DisplayTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<&'a Ranking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presentation: Option<&'a PresentationData>,
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        outcome: &Recomputation,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata,
            status: match outcome {
                Recomputation::Empty { .. } => "empty",
                Recomputation::Unscored { .. } => "unscored",
                Recomputation::Scored { .. } => "scored",
            },
            weight_sum: match outcome {
                Recomputation::Unscored { weight_sum, .. } => Some(*weight_sum),
                _ => None,
            },
            table: outcome.table(),
            ranking: outcome.ranking(),
            presentation: outcome.presentation(),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn generate_view(
        &self,
        table: &DisplayTable,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata,
            status: "view",
            weight_sum: None,
            table: Some(table),
            ranking: None,
            presentation: None,
        };
        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
