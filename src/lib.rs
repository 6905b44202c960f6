//! **A library for smart, sustainability-aware product ordering decisions.**
//!
//! `order-advisor` takes predicted per-row metrics for (factory, product,
//! warehouse) combinations (demand, shipping delay, and a sustainability
//! flag) and aggregates, filters, scores, and ranks them to recommend
//! which combinations to order. It powers both a command-line interface and
//! a Rust library for programmatic integration.
//!
//! ## Key Features
//!
//! - **Aggregation**: collapses raw prediction rows into one record per
//!   (Factory, Product, Warehouse) key (demand summed, delay averaged,
//!   sustainability as the share of sustainable member rows) or passes
//!   rows through untouched in raw mode.
//! - **Subset-relative scoring**: normalizes each metric onto [0,1] against
//!   the maxima of the *currently filtered subset* and combines them with
//!   user-adjustable weights that must sum to 1.00.
//! - **Deterministic ranking**: top-N selection by score with stable
//!   tie-breaking, plus a per-term breakdown of the winning record.
//! - **Presentation data**: sustainability split counts and chart-ready
//!   demand/delay series, computed in the core so renderers stay dumb.
//! - **Flexible reporting**: summary, JSON, and CSV output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the record types: raw [`OrderRecord`] rows, aggregated
//!   [`model::SummaryRecord`] rows, and the [`model::Sustainability`]
//!   flag-or-ratio variant.
//! - **[`store`]**: the session-scoped [`RecordStore`] repository with an
//!   explicit `reload()` and no hidden caches.
//! - **[`engine`]**: the pipeline stages (aggregate → filter → score →
//!   rank) and [`engine::recompute`], which runs a full cycle and reports
//!   empty subsets and invalid weights as explicit status values.
//! - **[`table`]**: the human-labeled display projection and its column
//!   sort (delay columns sort worst-first by default).
//! - **[`reports`]**: report generators for every supported format.
//!
//! ## Getting Started
//!
//! ```no_run
//! use order_advisor::engine::{FilterSelection, RecomputeParams, recompute};
//! use order_advisor::model::{AggregationMode, WeightConfig};
//! use order_advisor::store::RecordStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RecordStore::load("predictions.csv")?;
//!
//!     let params = RecomputeParams {
//!         mode: AggregationMode::Grouped,
//!         filter: FilterSelection::Product("P-100".to_string()),
//!         weights: WeightConfig::new(0.2, 0.3, 0.5),
//!         top_n: 3,
//!     };
//!     let outcome = recompute(&store, &params);
//!
//!     if let Some(ranking) = outcome.ranking() {
//!         for entry in &ranking.entries {
//!             println!("{}. {} (score {:.2})",
//!                 entry.rank, entry.record.record.key, entry.display_score);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64 casts appear in aggregation means and table
    // layout math; all values are bounded in practice
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `min`/`max` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod reports;
pub mod store;
pub mod table;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use engine::{
    FilterSelection, Ranking, Recomputation, RecomputeParams, SustainabilitySplit, recompute,
};
pub use error::{ErrorContext, OptionContext, OrderAdvisorError, Result};
pub use model::{
    AggregationMode, OrderRecord, RecordKey, ScoredRecord, SummaryRecord, Sustainability,
    WeightConfig,
};
pub use reports::{ReportFormat, ReportGenerator, ReportMetadata};
pub use store::{DimensionValues, RecordStore};
pub use table::{DisplayTable, SortColumn, SortDirection};
