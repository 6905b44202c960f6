//! Engine integration tests.
//!
//! These tests exercise the aggregate → filter → score → rank pipeline
//! end-to-end over the CSV fixture and hand-built record sets, checking
//! the documented numeric properties.

use order_advisor::engine::{
    FilterSelection, RecomputeParams, Recomputation, recompute,
};
use order_advisor::model::{AggregationMode, OrderRecord, WeightConfig};
use order_advisor::store::RecordStore;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_store() -> RecordStore {
    RecordStore::load(fixture_path("predictions.csv")).expect("fixture should load")
}

fn record(
    factory: &str,
    product: &str,
    warehouse: &str,
    demand: f64,
    delay: f64,
    sustainable: bool,
) -> OrderRecord {
    OrderRecord {
        factory: factory.to_string(),
        product: product.to_string(),
        warehouse: warehouse.to_string(),
        demand,
        delay,
        sustainable,
    }
}

fn params(filter: FilterSelection) -> RecomputeParams {
    RecomputeParams {
        mode: AggregationMode::Grouped,
        filter,
        weights: WeightConfig::new(0.2, 0.3, 0.5),
        top_n: 1,
    }
}

// ============================================================================
// Reference Scenario
// ============================================================================

mod reference_scenario {
    use super::*;

    /// The worked scoring example: two records, weights (0.2, 0.3, 0.5),
    /// expected scores 0.88 and 0.10 with breakdown (0.20, 0.18, 0.50).
    #[test]
    fn scores_and_breakdown_match() {
        let store = RecordStore::from_records(vec![
            record("F1", "P1", "W1", 100.0, 2.0, true),
            record("F1", "P2", "W1", 50.0, 5.0, false),
        ]);
        let outcome = recompute(&store, &params(FilterSelection::Warehouse("W1".to_string())));

        let Recomputation::Scored { ranking, table, .. } = outcome else {
            panic!("expected scored outcome");
        };

        let winner = ranking.winner();
        assert_eq!(winner.record.record.key.product, "P1");
        assert_eq!(winner.display_score, 0.88);
        assert!((ranking.breakdown.demand - 0.20).abs() < 1e-9);
        assert!((ranking.breakdown.delay - 0.18).abs() < 1e-9);
        assert!((ranking.breakdown.sustainability - 0.50).abs() < 1e-9);

        // The loser scores 0.10
        let loser = table
            .rows
            .iter()
            .find(|r| r.product == "P2")
            .expect("P2 in table");
        assert_eq!(loser.score, Some(0.10));
    }

    #[test]
    fn breakdown_sums_to_displayed_total() {
        let store = fixture_store();
        let outcome = recompute(&store, &params(FilterSelection::Factory("F2".to_string())));
        let ranking = outcome.ranking().expect("scored outcome");
        let total = ranking.breakdown.total();
        assert!(
            (total - ranking.winner().record.score).abs() < 1e-9,
            "breakdown {total} != score {}",
            ranking.winner().record.score
        );
    }
}

// ============================================================================
// Aggregation Properties
// ============================================================================

mod aggregation {
    use super::*;
    use order_advisor::engine::aggregate;
    use order_advisor::model::Sustainability;

    #[test]
    fn demand_sums_and_delay_means_match_raw_rows() {
        let store = fixture_store();
        let summaries = aggregate::aggregate(store.records(), AggregationMode::Grouped);

        for summary in &summaries {
            let members: Vec<&OrderRecord> = store
                .records()
                .iter()
                .filter(|r| r.key() == summary.key)
                .collect();
            let demand_sum: f64 = members.iter().map(|r| r.demand).sum();
            let delay_mean: f64 =
                members.iter().map(|r| r.delay).sum::<f64>() / members.len() as f64;
            let sustain_mean: f64 = members.iter().filter(|r| r.sustainable).count() as f64
                / members.len() as f64;

            assert!((summary.demand - demand_sum).abs() < 1e-9);
            assert!((summary.delay - delay_mean).abs() < 1e-9);
            let Sustainability::AggregatedRatio(ratio) = summary.sustainability else {
                panic!("grouped mode must yield ratios");
            };
            assert!((ratio - sustain_mean).abs() < 1e-9);
            assert_eq!(summary.row_count, members.len());
        }
    }

    #[test]
    fn one_summary_per_distinct_key() {
        let store = fixture_store();
        let summaries = aggregate::aggregate(store.records(), AggregationMode::Grouped);

        let mut keys: Vec<String> = summaries.iter().map(|s| s.key.to_string()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate keys in aggregated output");

        // The fixture has 10 rows over 8 distinct keys
        assert_eq!(store.len(), 10);
        assert_eq!(total, 8);
    }

    #[test]
    fn raw_mode_keeps_every_row() {
        let store = fixture_store();
        let summaries = aggregate::aggregate(store.records(), AggregationMode::Raw);
        assert_eq!(summaries.len(), store.len());
    }
}

// ============================================================================
// Filter Contracts
// ============================================================================

mod filtering {
    use super::*;

    #[test]
    fn compound_filter_matches_both_fields_only() {
        let store = fixture_store();
        let mut p = params(FilterSelection::ProductWarehouse {
            product: "P100".to_string(),
            warehouse: "W1".to_string(),
        });
        p.top_n = 10;
        let outcome = recompute(&store, &p);
        let table = outcome.table().expect("non-empty subset");
        assert!(!table.rows.is_empty());
        for row in &table.rows {
            assert_eq!(row.product, "P100");
            assert_eq!(row.warehouse, "W1");
        }
    }

    #[test]
    fn empty_result_halts_everything() {
        let store = fixture_store();
        let outcome = recompute(&store, &params(FilterSelection::Factory("F9".to_string())));
        assert!(matches!(outcome, Recomputation::Empty { .. }));
        assert!(outcome.table().is_none());
        assert!(outcome.ranking().is_none());
        assert!(outcome.presentation().is_none());
    }
}

// ============================================================================
// Scoring and Ranking Invariants
// ============================================================================

mod scoring {
    use super::*;

    #[test]
    fn all_scores_bounded_for_valid_weights() {
        let store = fixture_store();
        for filter in [
            FilterSelection::Factory("F1".to_string()),
            FilterSelection::Factory("F2".to_string()),
            FilterSelection::Product("P100".to_string()),
            FilterSelection::Warehouse("W2".to_string()),
        ] {
            let mut p = params(filter);
            p.top_n = 100;
            let outcome = recompute(&store, &p);
            let ranking = outcome.ranking().expect("scored outcome");
            for entry in &ranking.entries {
                assert!(
                    (0.0..=1.0).contains(&entry.record.score),
                    "score {} out of [0,1]",
                    entry.record.score
                );
            }
        }
    }

    #[test]
    fn invalid_weights_attach_no_scores() {
        let store = fixture_store();
        let mut p = params(FilterSelection::Factory("F1".to_string()));
        p.weights = WeightConfig::new(0.5, 0.5, 0.5);
        let outcome = recompute(&store, &p);
        let Recomputation::Unscored { table, .. } = outcome else {
            panic!("expected unscored outcome");
        };
        assert!(table.rows.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn ranking_is_descending() {
        let store = fixture_store();
        let mut p = params(FilterSelection::Warehouse("W1".to_string()));
        p.top_n = 100;
        let outcome = recompute(&store, &p);
        let ranking = outcome.ranking().expect("scored outcome");
        for pair in ranking.entries.windows(2) {
            assert!(
                pair[0].record.score >= pair[1].record.score,
                "ranking not descending"
            );
        }
    }

    #[test]
    fn top_n_clamped_to_subset_size() {
        let store = fixture_store();
        let mut p = params(FilterSelection::Factory("F1".to_string()));
        p.top_n = 999;
        let outcome = recompute(&store, &p);
        let ranking = outcome.ranking().expect("scored outcome");
        assert_eq!(ranking.requested_n, 999);
        assert_eq!(ranking.effective_n, ranking.entries.len());
        assert!(ranking.effective_n <= store.len());
    }

    #[test]
    fn single_record_subset_with_zero_delay_scores() {
        // max(delay) == 0 over the subset: the degenerate guard must keep
        // the score defined and bounded.
        let store = RecordStore::from_records(vec![record("F1", "P1", "W1", 10.0, 0.0, true)]);
        let outcome = recompute(&store, &params(FilterSelection::Product("P1".to_string())));
        let ranking = outcome.ranking().expect("scored outcome");
        let score = ranking.winner().record.score;
        assert!(score.is_finite());
        assert!((0.0..=1.0).contains(&score));
        // delay term 1.0, demand term 1.0, sustainability 1.0 -> score 1.0
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_demand_subset_scores() {
        let store = RecordStore::from_records(vec![
            record("F1", "P1", "W1", 0.0, 2.0, true),
            record("F1", "P2", "W1", 0.0, 4.0, false),
        ]);
        let outcome = recompute(&store, &params(FilterSelection::Factory("F1".to_string())));
        let ranking = outcome.ranking().expect("scored outcome");
        for entry in &ranking.entries {
            assert!(entry.record.score.is_finite());
            assert!((0.0..=1.0).contains(&entry.record.score));
            assert_eq!(entry.record.sub_scores.demand, 0.0);
        }
    }

    #[test]
    fn recompute_is_deterministic() {
        let store = fixture_store();
        let mut p = params(FilterSelection::Warehouse("W1".to_string()));
        p.top_n = 5;
        let first = recompute(&store, &p);
        let second = recompute(&store, &p);
        assert_eq!(first, second);
    }
}

// ============================================================================
// Presentation Data
// ============================================================================

mod presentation {
    use super::*;

    #[test]
    fn split_counts_raw_rows_not_ratios() {
        let store = fixture_store();
        let outcome = recompute(&store, &params(FilterSelection::Product("P100".to_string())));
        let split = outcome.presentation().expect("non-empty subset").split;
        // Raw P100 rows: (F1,W1,1), (F1,W1,0), (F2,W2,1), (F2,W1,1)
        assert_eq!(split.sustainable, 3);
        assert_eq!(split.not_sustainable, 1);
        assert_eq!(split.total(), 4);
    }

    #[test]
    fn series_cover_the_whole_subset() {
        let store = fixture_store();
        let outcome = recompute(&store, &params(FilterSelection::Factory("F1".to_string())));
        let table_len = outcome.table().expect("table").rows.len();
        let presentation = outcome.presentation().expect("presentation");
        assert_eq!(presentation.demand_series.len(), table_len);
        assert_eq!(presentation.delay_series.len(), table_len);
    }
}
