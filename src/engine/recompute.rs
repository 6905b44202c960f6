//! Full recompute cycle: Aggregate → Filter → Score → Rank.
//!
//! Every control change triggers one synchronous pass over the in-memory
//! record set. The outcome is a single [`Recomputation`] status value:
//! an empty filter result or invalid weights are reported as variants,
//! never as errors, and nothing downstream of a halted stage is computed.

use serde::{Deserialize, Serialize};

use super::aggregate::aggregate;
use super::filter::FilterSelection;
use super::rank::{Ranking, rank};
use super::score::{ScoreOutcome, score_records};
use crate::model::{AggregationMode, SummaryRecord, WeightConfig};
use crate::store::RecordStore;
use crate::table::DisplayTable;

/// Control parameters for one recompute cycle, read fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecomputeParams {
    /// Aggregation mode
    pub mode: AggregationMode,
    /// Dimension filter producing the working subset
    pub filter: FilterSelection,
    /// Scoring weights
    pub weights: WeightConfig,
    /// How many top recommendations to select
    pub top_n: usize,
}

/// `Sustainable` vs `Not Sustainable` counts over the raw rows of the
/// current filtered subset. Chart data, computed in the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilitySplit {
    /// Raw rows flagged sustainable
    pub sustainable: usize,
    /// Raw rows not flagged sustainable
    pub not_sustainable: usize,
}

impl SustainabilitySplit {
    /// Total raw rows counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.sustainable + self.not_sustainable
    }
}

/// One bar of a per-product chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Product identifier
    pub product: String,
    /// Factory identifier
    pub factory: String,
    /// Warehouse identifier
    pub warehouse: String,
    /// The plotted value (demand or delay)
    pub value: f64,
}

/// Core-computed data for an external presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationData {
    /// Human description of the active filter ("for Product P-100")
    pub title_suffix: String,
    /// Sustainable / not-sustainable raw-row counts
    pub split: SustainabilitySplit,
    /// Demand per record, sorted descending by demand
    pub demand_series: Vec<SeriesEntry>,
    /// Delay per record, sorted ascending by delay
    pub delay_series: Vec<SeriesEntry>,
}

/// Outcome of one recompute cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recomputation {
    /// The filter matched no records; the cycle halted. No table, no
    /// scores, no presentation data.
    Empty {
        /// Description of the filter that matched nothing
        title_suffix: String,
    },
    /// Weights do not sum to 1.00; the raw (unscored) table and
    /// presentation data are still available.
    Unscored {
        /// Display projection without a `Score` column
        table: DisplayTable,
        /// Chart data for the filtered subset
        presentation: PresentationData,
        /// The offending weight sum
        weight_sum: f64,
    },
    /// Weights valid: scored table plus ranking.
    Scored {
        /// Display projection including the `Score` column
        table: DisplayTable,
        /// Top-N ranking with the winner's breakdown
        ranking: Ranking,
        /// Chart data for the filtered subset
        presentation: PresentationData,
    },
}

impl Recomputation {
    /// The display table, when one was produced.
    #[must_use]
    pub fn table(&self) -> Option<&DisplayTable> {
        match self {
            Recomputation::Empty { .. } => None,
            Recomputation::Unscored { table, .. } | Recomputation::Scored { table, .. } => {
                Some(table)
            }
        }
    }

    /// Mutable access to the display table, for presentation sorting.
    #[must_use]
    pub fn table_mut(&mut self) -> Option<&mut DisplayTable> {
        match self {
            Recomputation::Empty { .. } => None,
            Recomputation::Unscored { table, .. } | Recomputation::Scored { table, .. } => {
                Some(table)
            }
        }
    }

    /// The ranking, when scoring proceeded.
    #[must_use]
    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            Recomputation::Scored { ranking, .. } => Some(ranking),
            _ => None,
        }
    }

    /// The presentation data, when the subset was non-empty.
    #[must_use]
    pub fn presentation(&self) -> Option<&PresentationData> {
        match self {
            Recomputation::Empty { .. } => None,
            Recomputation::Unscored { presentation, .. }
            | Recomputation::Scored { presentation, .. } => Some(presentation),
        }
    }
}

/// Run one full cycle against the store with the given parameters.
pub fn recompute(store: &RecordStore, params: &RecomputeParams) -> Recomputation {
    let summaries = aggregate(store.records(), params.mode);
    let subset = params.filter.apply(&summaries);
    tracing::debug!(
        filter = %params.filter,
        mode = %params.mode,
        subset_size = subset.len(),
        "recompute cycle"
    );

    if subset.is_empty() {
        return Recomputation::Empty {
            title_suffix: params.filter.title_suffix(),
        };
    }

    let presentation = presentation_data(store, &params.filter, &subset);

    match score_records(&subset, &params.weights) {
        ScoreOutcome::InvalidWeights { sum } => Recomputation::Unscored {
            table: DisplayTable::from_summaries(&subset, params.mode),
            presentation,
            weight_sum: sum,
        },
        ScoreOutcome::Scored { records, .. } => {
            let table = DisplayTable::from_scored(&records, params.mode);
            // The subset is non-empty here, so ranking always succeeds.
            let Some(ranking) = rank(&records, &params.weights, params.top_n) else {
                unreachable!("ranking a non-empty scored subset cannot fail");
            };
            Recomputation::Scored {
                table,
                ranking,
                presentation,
            }
        }
    }
}

/// Chart data over the filtered subset.
///
/// The sustainability split counts *raw* rows whose key matches the filter,
/// not aggregated ratios: a three-row key with ratio 2/3 contributes two
/// sustainable and one not-sustainable.
fn presentation_data(
    store: &RecordStore,
    filter: &FilterSelection,
    subset: &[SummaryRecord],
) -> PresentationData {
    let mut split = SustainabilitySplit::default();
    for record in store.records() {
        if filter.matches(&record.key()) {
            if record.sustainable {
                split.sustainable += 1;
            } else {
                split.not_sustainable += 1;
            }
        }
    }

    let mut demand_series: Vec<SeriesEntry> = subset
        .iter()
        .map(|r| SeriesEntry {
            product: r.key.product.clone(),
            factory: r.key.factory.clone(),
            warehouse: r.key.warehouse.clone(),
            value: r.demand,
        })
        .collect();
    demand_series.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut delay_series: Vec<SeriesEntry> = subset
        .iter()
        .map(|r| SeriesEntry {
            product: r.key.product.clone(),
            factory: r.key.factory.clone(),
            warehouse: r.key.warehouse.clone(),
            value: r.delay,
        })
        .collect();
    delay_series.sort_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    PresentationData {
        title_suffix: filter.title_suffix(),
        split,
        demand_series,
        delay_series,
    }
}
