//! Configuration validation for order-advisor.
//!
//! Provides validation traits and implementations for all configuration
//! types. Note the split of responsibilities: validation here rejects
//! configurations that are *structurally* out of range (a weight of 1.3, a
//! `top_n` of 0). Weights that are in range but do not sum to 1.00 are a
//! *scoring-time* condition the engine reports as `InvalidWeights`; the
//! raw table must still render for them, so they pass validation.

use super::types::{AppConfig, ControlConfig, OutputConfig};
use crate::model::WeightConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.controls.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ControlConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.top_n == 0 {
            errors.push(ConfigError {
                field: "controls.top_n".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        errors.extend(self.weights.validate());

        if let Some(filter) = &self.filter {
            for (name, value) in filter_values(filter) {
                if value.is_empty() {
                    errors.push(ConfigError {
                        field: format!("controls.filter.{name}"),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for WeightConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (name, value) in [
            ("demand", self.demand),
            ("delay", self.delay),
            ("sustainability", self.sustainability),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                errors.push(ConfigError {
                    field: format!("weights.{name}"),
                    message: format!("must be between 0.0 and 1.0, got {value}"),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

fn filter_values(filter: &crate::engine::FilterSelection) -> Vec<(&'static str, &str)> {
    use crate::engine::FilterSelection;
    match filter {
        FilterSelection::Product(product) => vec![("product", product.as_str())],
        FilterSelection::Warehouse(warehouse) => vec![("warehouse", warehouse.as_str())],
        FilterSelection::Factory(factory) => vec![("factory", factory.as_str())],
        FilterSelection::ProductWarehouse { product, warehouse } => vec![
            ("product", product.as_str()),
            ("warehouse", warehouse.as_str()),
        ],
    }
}
