//! Configuration types for order-advisor operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::FilterSelection;
use crate::model::{AggregationMode, WeightConfig};
use crate::reports::ReportFormat;
use crate::table::{SortColumn, SortDirection};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
///
/// This is the top-level configuration struct aggregating all options. It
/// can be constructed from CLI arguments, config files, or both (with CLI
/// overriding file settings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Control-surface parameters consumed per recompute
    pub controls: ControlConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        super::file::load_config_file(path)
    }
}

/// The control-surface parameters the engine reads on every recompute.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ControlConfig {
    /// Aggregation mode
    pub mode: AggregationMode,
    /// Dimension filter; `None` means no recompute can run (a filter is
    /// required for recommendations, optional for plain views)
    pub filter: Option<FilterSelection>,
    /// Number of top recommendations to select
    pub top_n: usize,
    /// Scoring weights
    pub weights: WeightConfig,
    /// Display sort column, if the caller wants one
    pub sort_column: Option<SortColumn>,
    /// Explicit sort direction; `None` uses the column's default
    pub sort_direction: Option<SortDirection>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Grouped,
            filter: None,
            top_n: 1,
            weights: WeightConfig::default(),
            sort_column: None,
            sort_direction: None,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with a fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the aggregation mode.
    pub const fn mode(mut self, mode: AggregationMode) -> Self {
        self.config.controls.mode = mode;
        self
    }

    /// Set the dimension filter.
    pub fn filter(mut self, filter: FilterSelection) -> Self {
        self.config.controls.filter = Some(filter);
        self
    }

    /// Set the number of top recommendations.
    pub const fn top_n(mut self, top_n: usize) -> Self {
        self.config.controls.top_n = top_n;
        self
    }

    /// Set the scoring weights.
    pub const fn weights(mut self, weights: WeightConfig) -> Self {
        self.config.controls.weights = weights;
        self
    }

    /// Set the display sort column.
    pub const fn sort_column(mut self, column: SortColumn) -> Self {
        self.config.controls.sort_column = Some(column);
        self
    }

    /// Set an explicit sort direction.
    pub const fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.config.controls.sort_direction = Some(direction);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Build the final configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_controls() {
        let config = AppConfig::default();
        assert_eq!(config.controls.mode, AggregationMode::Grouped);
        assert_eq!(config.controls.top_n, 1);
        assert!(config.controls.filter.is_none());
        assert!(config.controls.weights.is_valid());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = AppConfig::builder()
            .mode(AggregationMode::Raw)
            .filter(FilterSelection::Product("P1".to_string()))
            .top_n(5)
            .weights(WeightConfig::new(0.4, 0.4, 0.2))
            .sort_column(SortColumn::Delay)
            .output_format(ReportFormat::Json)
            .build();

        assert_eq!(config.controls.mode, AggregationMode::Raw);
        assert_eq!(config.controls.top_n, 5);
        assert_eq!(
            config.controls.filter,
            Some(FilterSelection::Product("P1".to_string()))
        );
        assert_eq!(config.controls.sort_column, Some(SortColumn::Delay));
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = AppConfig::builder()
            .filter(FilterSelection::ProductWarehouse {
                product: "P1".to_string(),
                warehouse: "W2".to_string(),
            })
            .top_n(3)
            .build();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.controls.top_n, 3);
        assert_eq!(back.controls.filter, config.controls.filter);
    }
}
