//! The `view` command: the (optionally filtered) table without scoring.

use crate::config::{AppConfig, Validatable};
use crate::engine::aggregate;
use crate::error::{OrderAdvisorError, Result};
use crate::reports::{OutputTarget, ReportMetadata, generate_view_report, write_output};
use crate::store::RecordStore;
use crate::table::DisplayTable;

use super::exit_codes;

/// Render the aggregated (or raw) table without scoring.
///
/// A filter is optional here; without one the whole dataset is shown.
pub fn run_view(store: &RecordStore, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(OrderAdvisorError::config(joined));
    }

    let summaries = aggregate(store.records(), config.controls.mode);
    let subset = match &config.controls.filter {
        Some(filter) => filter.apply(&summaries),
        None => summaries,
    };

    let metadata = ReportMetadata::for_view(config.controls.mode, config.controls.filter.as_ref());
    if subset.is_empty() {
        write_output(
            &format!("No matching records found {}.", metadata.title_suffix),
            &OutputTarget::from_path(config.output.file.clone()),
        )?;
        return Ok(exit_codes::NO_MATCHING_RECORDS);
    }

    let mut table = DisplayTable::from_summaries(&subset, config.controls.mode);
    if let Some(column) = config.controls.sort_column {
        table.sort_by(column, config.controls.sort_direction);
    }

    let content = generate_view_report(config.output.format, &table, &metadata)?;
    write_output(&content, &OutputTarget::from_path(config.output.file.clone()))?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FilterSelection;
    use crate::model::OrderRecord;
    use crate::reports::ReportFormat;
    use crate::table::SortColumn;

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            OrderRecord {
                factory: "F1".to_string(),
                product: "P1".to_string(),
                warehouse: "W1".to_string(),
                demand: 100.0,
                delay: 2.0,
                sustainable: true,
            },
            OrderRecord {
                factory: "F2".to_string(),
                product: "P2".to_string(),
                warehouse: "W2".to_string(),
                demand: 50.0,
                delay: 5.0,
                sustainable: false,
            },
        ])
    }

    fn config_to(dir: &tempfile::TempDir) -> (AppConfig, std::path::PathBuf) {
        let path = dir.path().join("out.csv");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Csv)
            .output_file(Some(path.clone()))
            .build();
        (config, path)
    }

    #[test]
    fn test_view_whole_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let (config, path) = config_to(&dir);
        let code = run_view(&store(), &config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        let content = std::fs::read_to_string(path).unwrap();
        // Header plus both records, no Score column
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains("Score"));
    }

    #[test]
    fn test_view_with_filter_and_sort() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, path) = config_to(&dir);
        config.controls.filter = Some(FilterSelection::Factory("F1".to_string()));
        config.controls.sort_column = Some(SortColumn::Demand);
        let code = run_view(&store(), &config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("P1"));
    }

    #[test]
    fn test_view_empty_filter_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, _path) = config_to(&dir);
        config.controls.filter = Some(FilterSelection::Product("P9".to_string()));
        let code = run_view(&store(), &config).unwrap();
        assert_eq!(code, exit_codes::NO_MATCHING_RECORDS);
    }
}
