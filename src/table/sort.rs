//! General-purpose column sort for the display table.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::display::DisplayRow;

/// A sortable column of the display table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Product identifier
    Product,
    /// Factory identifier
    Factory,
    /// Warehouse identifier
    Warehouse,
    /// Predicted demand
    Demand,
    /// Shipping delay (days)
    Delay,
    /// Sustainability percentage or flag
    Sustainability,
    /// Composite score
    Score,
}

/// Sort direction for the display table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest values first
    Ascending,
    /// Largest values first
    Descending,
}

impl SortColumn {
    /// Default direction: ascending, except delay-like columns which sort
    /// descending so the worst shipping delays surface first. This is a
    /// presentation convention only, independent of the Ranker's
    /// score-descending order.
    #[must_use]
    pub const fn default_direction(&self) -> SortDirection {
        match self {
            SortColumn::Delay => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Stable-sort rows by this column in the given direction.
    ///
    /// Ties keep their current order in either direction (the comparator
    /// is flipped rather than the sorted slice reversed).
    pub(super) fn sort_rows(&self, rows: &mut [DisplayRow], direction: SortDirection) {
        match self {
            SortColumn::Product => {
                rows.sort_by(|a, b| apply_direction(a.product.cmp(&b.product), direction));
            }
            SortColumn::Factory => {
                rows.sort_by(|a, b| apply_direction(a.factory.cmp(&b.factory), direction));
            }
            SortColumn::Warehouse => {
                rows.sort_by(|a, b| apply_direction(a.warehouse.cmp(&b.warehouse), direction));
            }
            SortColumn::Demand => sort_by_f64(rows, direction, |r| r.demand),
            SortColumn::Delay => sort_by_f64(rows, direction, |r| r.delay),
            SortColumn::Sustainability => sort_by_f64(rows, direction, |r| r.sustainability),
            SortColumn::Score => {
                sort_by_f64(rows, direction, |r| r.score.unwrap_or(f64::NEG_INFINITY));
            }
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortColumn::Product => "Product",
            SortColumn::Factory => "Factory",
            SortColumn::Warehouse => "Warehouse",
            SortColumn::Demand => "Predicted Demand",
            SortColumn::Delay => "Shipping Delay (days)",
            SortColumn::Sustainability => "Sustainability",
            SortColumn::Score => "Score",
        };
        write!(f, "{label}")
    }
}

fn apply_direction(ord: std::cmp::Ordering, direction: SortDirection) -> std::cmp::Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn sort_by_f64(
    rows: &mut [DisplayRow],
    direction: SortDirection,
    field: impl Fn(&DisplayRow) -> f64,
) {
    rows.sort_by(|a, b| {
        apply_direction(
            field(a)
                .partial_cmp(&field(b))
                .unwrap_or(std::cmp::Ordering::Equal),
            direction,
        )
    });
}
