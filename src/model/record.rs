//! Raw and aggregated order records.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The (Factory, Product, Warehouse) grouping key.
///
/// Ordering is lexical over the three fields, which makes key order
/// deterministic wherever keys are sorted for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    /// Factory identifier
    pub factory: String,
    /// Product identifier
    pub product: String,
    /// Warehouse identifier
    pub warehouse: String,
}

impl RecordKey {
    /// Build a key from its three parts.
    pub fn new(
        factory: impl Into<String>,
        product: impl Into<String>,
        warehouse: impl Into<String>,
    ) -> Self {
        Self {
            factory: factory.into(),
            product: product.into(),
            warehouse: warehouse.into(),
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.factory, self.product, self.warehouse)
    }
}

/// One raw input row: a single (factory, product, warehouse) observation
/// with its predicted metrics. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Factory identifier
    pub factory: String,
    /// Product identifier
    pub product: String,
    /// Warehouse identifier
    pub warehouse: String,
    /// Predicted demand, non-negative
    pub demand: f64,
    /// Predicted shipping delay in days, non-negative
    pub delay: f64,
    /// Whether this order was predicted sustainable
    pub sustainable: bool,
}

impl OrderRecord {
    /// The record's grouping key.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(
            self.factory.clone(),
            self.product.clone(),
            self.warehouse.clone(),
        )
    }
}

/// Whether raw rows are grouped by key before scoring, or used individually.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Collapse rows sharing a (factory, product, warehouse) key into one
    /// summary record: demand summed, delay averaged, sustainability as the
    /// mean of the raw flags.
    #[default]
    Grouped,
    /// Pass rows through unchanged; each row's 0/1 flag is used directly.
    Raw,
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Grouped => write!(f, "grouped"),
            AggregationMode::Raw => write!(f, "raw"),
        }
    }
}

/// Sustainability carried by a summary record.
///
/// The raw input encodes sustainability as a 0/1 flag, while grouped
/// aggregation turns it into a ratio in [0,1]. Modeling both as one tagged
/// type keeps the flag-vs-percentage distinction out of every call site:
/// scoring only ever sees [`Sustainability::as_score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sustainability {
    /// A single row's 0/1 flag (raw mode)
    RawFlag(bool),
    /// Mean of member flags, in [0,1] (grouped mode)
    AggregatedRatio(f64),
}

impl Sustainability {
    /// The sub-score this value contributes, always in [0,1].
    #[must_use]
    pub fn as_score(&self) -> f64 {
        match self {
            Sustainability::RawFlag(true) => 1.0,
            Sustainability::RawFlag(false) => 0.0,
            Sustainability::AggregatedRatio(ratio) => ratio.clamp(0.0, 1.0),
        }
    }

    /// The value as a percentage in [0,100], for display.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.as_score() * 100.0
    }

    /// True for the aggregated-ratio variant.
    #[must_use]
    pub const fn is_ratio(&self) -> bool {
        matches!(self, Sustainability::AggregatedRatio(_))
    }
}

/// One record per distinct key (grouped mode) or per input row (raw mode).
///
/// This is the unit the filter, score engine, and ranker operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Grouping key
    pub key: RecordKey,
    /// Total predicted demand (sum of member rows in grouped mode)
    pub demand: f64,
    /// Predicted shipping delay in days (mean of member rows in grouped mode)
    pub delay: f64,
    /// Sustainability flag or ratio, depending on aggregation mode
    pub sustainability: Sustainability,
    /// Number of raw rows this record summarizes (1 in raw mode)
    pub row_count: usize,
}

impl SummaryRecord {
    /// Build a summary record standing for a single raw row.
    #[must_use]
    pub fn from_raw(record: &OrderRecord) -> Self {
        Self {
            key: record.key(),
            demand: record.demand,
            delay: record.delay,
            sustainability: Sustainability::RawFlag(record.sustainable),
            row_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(factory: &str, product: &str, warehouse: &str) -> OrderRecord {
        OrderRecord {
            factory: factory.to_string(),
            product: product.to_string(),
            warehouse: warehouse.to_string(),
            demand: 10.0,
            delay: 2.0,
            sustainable: true,
        }
    }

    #[test]
    fn test_key_display() {
        let key = RecordKey::new("F1", "P-100", "W2");
        assert_eq!(key.to_string(), "F1/P-100/W2");
    }

    #[test]
    fn test_key_ordering_is_lexical() {
        let a = RecordKey::new("F1", "P1", "W1");
        let b = RecordKey::new("F1", "P2", "W1");
        let c = RecordKey::new("F2", "P1", "W1");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_sustainability_as_score() {
        assert_eq!(Sustainability::RawFlag(true).as_score(), 1.0);
        assert_eq!(Sustainability::RawFlag(false).as_score(), 0.0);
        assert!((Sustainability::AggregatedRatio(0.5).as_score() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sustainability_ratio_clamped() {
        // A ratio outside [0,1] cannot come from aggregation, but as_score
        // still keeps the bounded-score invariant if one is constructed.
        assert_eq!(Sustainability::AggregatedRatio(1.5).as_score(), 1.0);
        assert_eq!(Sustainability::AggregatedRatio(-0.5).as_score(), 0.0);
    }

    #[test]
    fn test_sustainability_percent() {
        assert!((Sustainability::AggregatedRatio(0.667).percent() - 66.7).abs() < 1e-9);
        assert_eq!(Sustainability::RawFlag(true).percent(), 100.0);
    }

    #[test]
    fn test_summary_from_raw_preserves_metrics() {
        let raw = record("F1", "P1", "W1");
        let summary = SummaryRecord::from_raw(&raw);
        assert_eq!(summary.key, raw.key());
        assert_eq!(summary.demand, raw.demand);
        assert_eq!(summary.delay, raw.delay);
        assert_eq!(summary.sustainability, Sustainability::RawFlag(true));
        assert_eq!(summary.row_count, 1);
    }
}
