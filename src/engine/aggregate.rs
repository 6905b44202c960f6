//! Aggregation of raw rows into one summary record per key.

use indexmap::IndexMap;

use crate::model::{AggregationMode, OrderRecord, RecordKey, SummaryRecord, Sustainability};

/// Running totals for one (factory, product, warehouse) group.
#[derive(Debug, Default)]
struct GroupAccumulator {
    demand_sum: f64,
    delay_sum: f64,
    sustainable_count: usize,
    row_count: usize,
}

impl GroupAccumulator {
    fn push(&mut self, record: &OrderRecord) {
        self.demand_sum += record.demand;
        self.delay_sum += record.delay;
        if record.sustainable {
            self.sustainable_count += 1;
        }
        self.row_count += 1;
    }

    fn into_summary(self, key: RecordKey) -> SummaryRecord {
        // row_count >= 1: a group only exists because at least one row hit it
        let count = self.row_count as f64;
        SummaryRecord {
            key,
            demand: self.demand_sum,
            delay: self.delay_sum / count,
            sustainability: Sustainability::AggregatedRatio(self.sustainable_count as f64 / count),
            row_count: self.row_count,
        }
    }
}

/// Collapse raw rows into summary records according to the aggregation mode.
///
/// Grouped mode emits exactly one record per distinct key, in first-seen key
/// order: demand summed, delay averaged, sustainability as the mean of the
/// member flags. Because output keys are unique, aggregating already-grouped
/// data again changes nothing. Raw mode passes each row through unchanged.
#[must_use]
pub fn aggregate(records: &[OrderRecord], mode: AggregationMode) -> Vec<SummaryRecord> {
    match mode {
        AggregationMode::Grouped => {
            let mut groups: IndexMap<RecordKey, GroupAccumulator> = IndexMap::new();
            for record in records {
                groups.entry(record.key()).or_default().push(record);
            }
            groups
                .into_iter()
                .map(|(key, acc)| acc.into_summary(key))
                .collect()
        }
        AggregationMode::Raw => records.iter().map(SummaryRecord::from_raw).collect(),
    }
}
