//! The display table itself.

use serde::{Deserialize, Serialize};

use super::{SortColumn, SortDirection};
use crate::model::{AggregationMode, ScoredRecord, SummaryRecord};
use crate::utils::{round1, round2};

/// One row of the display table, values already rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Product identifier
    pub product: String,
    /// Factory identifier
    pub factory: String,
    /// Warehouse identifier
    pub warehouse: String,
    /// Predicted demand
    pub demand: f64,
    /// Shipping delay in days
    pub delay: f64,
    /// Sustainability display value: percentage (grouped) or 0/1 (raw)
    pub sustainability: f64,
    /// Composite score rounded to two decimals, when weights were valid
    pub score: Option<f64>,
}

/// The display projection of the working subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayTable {
    /// Rows in their current presentation order
    pub rows: Vec<DisplayRow>,
    /// Aggregation mode, which decides the sustainability column label
    pub mode: AggregationMode,
    /// Whether the `Score` column is present
    pub has_scores: bool,
}

impl DisplayTable {
    /// Project an unscored subset (weights invalid, or a plain view).
    #[must_use]
    pub fn from_summaries(records: &[SummaryRecord], mode: AggregationMode) -> Self {
        let rows = records
            .iter()
            .map(|record| summary_row(record, mode, None))
            .collect();
        Self {
            rows,
            mode,
            has_scores: false,
        }
    }

    /// Project a scored subset; every row carries its rounded score.
    #[must_use]
    pub fn from_scored(records: &[ScoredRecord], mode: AggregationMode) -> Self {
        let rows = records
            .iter()
            .map(|scored| summary_row(&scored.record, mode, Some(round2(scored.score))))
            .collect();
        Self {
            rows,
            mode,
            has_scores: true,
        }
    }

    /// Column headers in display order.
    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec![
            "Product",
            "Factory",
            "Warehouse",
            "Predicted Demand",
            "Shipping Delay (days)",
            self.sustainability_label(),
        ];
        if self.has_scores {
            headers.push("Score");
        }
        headers
    }

    /// The sustainability column label for the current aggregation mode.
    #[must_use]
    pub const fn sustainability_label(&self) -> &'static str {
        match self.mode {
            AggregationMode::Grouped => "Sustainability (%)",
            AggregationMode::Raw => "Sustainable Order (1=Yes)",
        }
    }

    /// Columns a caller may sort this table by.
    #[must_use]
    pub fn sortable_columns(&self) -> Vec<SortColumn> {
        let mut columns = vec![
            SortColumn::Product,
            SortColumn::Factory,
            SortColumn::Warehouse,
            SortColumn::Demand,
            SortColumn::Delay,
            SortColumn::Sustainability,
        ];
        if self.has_scores {
            columns.push(SortColumn::Score);
        }
        columns
    }

    /// Sort rows by the chosen column.
    ///
    /// Without an explicit direction the column's default applies:
    /// ascending, except delay-like columns which sort descending
    /// (worst delay first). The sort is stable.
    pub fn sort_by(&mut self, column: SortColumn, direction: Option<SortDirection>) {
        let direction = direction.unwrap_or_else(|| column.default_direction());
        column.sort_rows(&mut self.rows, direction);
    }
}

fn summary_row(record: &SummaryRecord, mode: AggregationMode, score: Option<f64>) -> DisplayRow {
    let sustainability = match mode {
        AggregationMode::Grouped => round1(record.sustainability.percent()),
        AggregationMode::Raw => record.sustainability.as_score(),
    };
    DisplayRow {
        product: record.key.product.clone(),
        factory: record.key.factory.clone(),
        warehouse: record.key.warehouse.clone(),
        demand: record.demand,
        delay: record.delay,
        sustainability,
        score,
    }
}
