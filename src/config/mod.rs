//! Configuration module for order-advisor.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - JSON config file loading
//! - A builder for programmatic construction
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use order_advisor::config::AppConfig;
//! use order_advisor::engine::FilterSelection;
//!
//! // Use defaults plus a filter
//! let config = AppConfig::builder()
//!     .filter(FilterSelection::Product("P-100".to_string()))
//!     .top_n(3)
//!     .build();
//!
//! // Load from file
//! let config = AppConfig::from_file("advisor.json".as_ref())?;
//! ```

mod file;
mod types;
mod validation;

pub use file::load_config_file;
pub use types::{AppConfig, AppConfigBuilder, ControlConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};
