//! Unified error types for order-advisor.
//!
//! This module covers the recoverable *failure* side of the crate: IO,
//! malformed input, bad configuration, report generation. Engine-level
//! conditions (invalid weights, empty filter result) are deliberately not
//! errors; they are explicit status values on [`crate::engine::Recomputation`]
//! and never cross the engine boundary as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for order-advisor operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OrderAdvisorError {
    /// Errors while loading the input dataset
    #[error("Failed to load order records: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid field value for '{field}' in row {row}: {message}")]
    InvalidValue {
        row: usize,
        field: String,
        message: String,
    },

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Dataset contains no rows")]
    EmptyDataset,

    #[error("Record store has no source path to reload from")]
    NoSourcePath,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Report rendering failed: {0}")]
    Render(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for order-advisor operations
pub type Result<T> = std::result::Result<T, OrderAdvisorError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OrderAdvisorError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for an invalid field value
    pub fn invalid_value(
        row: usize,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::load(
            "invalid field value",
            LoadErrorKind::InvalidValue {
                row,
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create a load error for a missing column
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::load(
            "missing required column",
            LoadErrorKind::MissingColumn {
                column: column.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for OrderAdvisorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<csv::Error> for OrderAdvisorError {
    fn from(err: csv::Error) -> Self {
        Self::load("CSV deserialization", LoadErrorKind::Csv(err.to_string()))
    }
}

impl From<serde_json::Error> for OrderAdvisorError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error,
    /// which is more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<OrderAdvisorError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: OrderAdvisorError, new_ctx: &str) -> OrderAdvisorError {
    match err {
        OrderAdvisorError::Load {
            context: existing,
            source,
        } => OrderAdvisorError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OrderAdvisorError::Report {
            context: existing,
            source,
        } => OrderAdvisorError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OrderAdvisorError::Io {
            path,
            message,
            source,
        } => OrderAdvisorError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        OrderAdvisorError::Config(msg) => OrderAdvisorError::Config(chain_context(new_ctx, &msg)),
        OrderAdvisorError::Validation(msg) => {
            OrderAdvisorError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| OrderAdvisorError::Validation(context.into()))
    }
}
