//! Core order-record data structures.
//!
//! Everything downstream of the loader works on these types: raw
//! [`OrderRecord`] rows, the [`SummaryRecord`] rows the aggregator emits,
//! and the [`ScoredRecord`] parallel sequence the score engine produces.

mod record;
mod scored;

pub use record::{AggregationMode, OrderRecord, RecordKey, SummaryRecord, Sustainability};
pub use scored::{ScoreBreakdown, ScoredRecord, SubScores, WeightConfig};
