//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → recompute → report pipeline,
//! error handling paths, and CLI command handlers with real fixture files.

use order_advisor::cli::{exit_codes, run_recommend, run_view};
use order_advisor::config::AppConfig;
use order_advisor::engine::FilterSelection;
use order_advisor::error::OrderAdvisorError;
use order_advisor::model::WeightConfig;
use order_advisor::reports::ReportFormat;
use order_advisor::store::RecordStore;
use order_advisor::table::{SortColumn, SortDirection};
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

// ============================================================================
// Store Load and Reload
// ============================================================================

mod store_stage {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_fixture() {
        let store = fixture_store();
        assert_eq!(store.len(), 10);
        assert!(store.source().is_some());
        assert_ne!(store.content_hash(), 0);
    }

    #[test]
    fn dimension_values_from_fixture() {
        let store = fixture_store();
        let dims = store.dimension_values();
        assert_eq!(dims.factories, vec!["F1", "F2"]);
        assert_eq!(dims.products, vec!["P100", "P200", "P300"]);
        assert_eq!(dims.warehouses, vec!["W1", "W2"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = RecordStore::load(fixture_path("nope.csv")).unwrap_err();
        assert!(matches!(err, OrderAdvisorError::Io { .. }));
    }

    #[test]
    fn reload_picks_up_changes() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Factory,Product_ID,Warehouse,Demand,Delay,Sustainable_Order").unwrap();
        writeln!(file, "F1,P1,W1,10,1,1").unwrap();
        file.flush().unwrap();

        let mut store = RecordStore::load(file.path()).expect("initial load");
        let original_hash = store.content_hash();
        assert_eq!(store.len(), 1);

        // Unchanged file: reload reports no change
        assert!(!store.reload().expect("reload"));

        // Append a row and reload again
        writeln!(file, "F1,P2,W1,20,2,0").unwrap();
        file.flush().unwrap();
        assert!(store.reload().expect("reload after change"));
        assert_eq!(store.len(), 2);
        assert_ne!(store.content_hash(), original_hash);
    }
}

// ============================================================================
// Recommend Handler
// ============================================================================

mod recommend_stage {
    use super::*;

    fn base_config(dir: &tempfile::TempDir, format: ReportFormat) -> (AppConfig, PathBuf) {
        let out = dir.path().join("report.out");
        let config = AppConfig::builder()
            .filter(FilterSelection::Factory("F1".to_string()))
            .top_n(2)
            .weights(WeightConfig::new(0.2, 0.3, 0.5))
            .output_format(format)
            .output_file(Some(out.clone()))
            .build();
        (config, out)
    }

    #[test]
    fn summary_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out) = base_config(&dir, ReportFormat::Summary);
        let code = run_recommend(&fixture_store(), &config).expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let content = std::fs::read_to_string(out).unwrap();
        assert!(content.contains("Order Recommendations for Factory F1"));
        assert!(content.contains("Top 2 recommendations:"));
        assert!(content.contains("Sustainability split:"));
    }

    #[test]
    fn json_report_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out) = base_config(&dir, ReportFormat::Json);
        run_recommend(&fixture_store(), &config).expect("run");

        let content = std::fs::read_to_string(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
        assert_eq!(value["status"], "scored");
        assert_eq!(value["ranking"]["entries"].as_array().unwrap().len(), 2);
        assert_eq!(value["metadata"]["title_suffix"], "for Factory F1");
    }

    #[test]
    fn csv_report_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let (config, out) = base_config(&dir, ReportFormat::Csv);
        run_recommend(&fixture_store(), &config).expect("run");

        let content = std::fs::read_to_string(out).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Predicted Demand"));
        assert!(header.contains("Sustainability (%)"));
        assert!(header.ends_with("Score"));
        // F1 has 4 distinct keys in the fixture
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn sorted_table_respects_delay_convention() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, out) = base_config(&dir, ReportFormat::Csv);
        config.controls.sort_column = Some(SortColumn::Delay);
        run_recommend(&fixture_store(), &config).expect("run");

        let content = std::fs::read_to_string(out).unwrap();
        let delays: Vec<f64> = content
            .lines()
            .skip(1)
            .map(|line| {
                line.split(',')
                    .nth(4)
                    .and_then(|v| v.parse().ok())
                    .expect("delay column")
            })
            .collect();
        let mut expected = delays.clone();
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(delays, expected, "delay must sort descending by default");
    }

    #[test]
    fn explicit_ascending_overrides_convention() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, out) = base_config(&dir, ReportFormat::Csv);
        config.controls.sort_column = Some(SortColumn::Delay);
        config.controls.sort_direction = Some(SortDirection::Ascending);
        run_recommend(&fixture_store(), &config).expect("run");

        let content = std::fs::read_to_string(out).unwrap();
        let delays: Vec<f64> = content
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(4).unwrap().parse().unwrap())
            .collect();
        let mut expected = delays.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(delays, expected);
    }

    #[test]
    fn empty_filter_reports_and_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, out) = base_config(&dir, ReportFormat::Summary);
        config.controls.filter = Some(FilterSelection::Factory("F9".to_string()));
        let code = run_recommend(&fixture_store(), &config).expect("run");
        assert_eq!(code, exit_codes::NO_MATCHING_RECORDS);

        let content = std::fs::read_to_string(out).unwrap();
        assert!(content.contains("No matching records found for Factory F9."));
    }

    #[test]
    fn invalid_weights_still_render_table() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, out) = base_config(&dir, ReportFormat::Summary);
        config.controls.weights = WeightConfig::new(0.9, 0.9, 0.9);
        let code = run_recommend(&fixture_store(), &config).expect("run");
        assert_eq!(code, exit_codes::INVALID_WEIGHTS);

        let content = std::fs::read_to_string(out).unwrap();
        assert!(content.contains("Weights must sum to 1.00"));
        assert!(content.contains("Predicted Demand"));
    }
}

// ============================================================================
// View Handler
// ============================================================================

mod view_stage {
    use super::*;

    #[test]
    fn view_whole_dataset_grouped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("view.csv");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Csv)
            .output_file(Some(out.clone()))
            .build();
        let code = run_view(&fixture_store(), &config).expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let content = std::fs::read_to_string(out).unwrap();
        // 8 distinct keys plus header, no Score column
        assert_eq!(content.lines().count(), 9);
        assert!(!content.contains("Score"));
    }

    #[test]
    fn view_raw_mode_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("view.csv");
        let config = AppConfig::builder()
            .mode(order_advisor::model::AggregationMode::Raw)
            .output_format(ReportFormat::Csv)
            .output_file(Some(out.clone()))
            .build();
        run_view(&fixture_store(), &config).expect("run");

        let content = std::fs::read_to_string(out).unwrap();
        assert_eq!(content.lines().count(), 11);
        assert!(content.contains("Sustainable Order (1=Yes)"));
    }
}

// ============================================================================
// Config File Integration
// ============================================================================

mod config_stage {
    use super::*;

    #[test]
    fn config_file_drives_recommendation() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let config_path = dir.path().join("advisor.json");
        std::fs::write(
            &config_path,
            format!(
                r#"{{
                    "controls": {{
                        "filter": {{ "product_warehouse": {{ "product": "P100", "warehouse": "W1" }} }},
                        "top_n": 1,
                        "weights": {{ "demand": 0.4, "delay": 0.4, "sustainability": 0.2 }}
                    }},
                    "output": {{ "format": "json", "file": {:?} }}
                }}"#,
                out
            ),
        )
        .unwrap();

        let config = AppConfig::from_file(&config_path).expect("config loads");
        let code = run_recommend(&fixture_store(), &config).expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(
            value["metadata"]["title_suffix"],
            "for Product P100 in Warehouse W1"
        );
    }
}
