//! The `recommend` command: the full recompute pipeline.

use crate::config::{AppConfig, Validatable};
use crate::engine::{RecomputeParams, Recomputation, recompute};
use crate::error::{OrderAdvisorError, Result};
use crate::reports::{OutputTarget, ReportMetadata, generate_report, write_output};
use crate::store::RecordStore;

use super::exit_codes;

/// Run the recommendation pipeline against a loaded store.
///
/// Renders a report in the configured format and returns the process exit
/// code: 0 for a scored outcome, 1 when the filter matched nothing, 2 when
/// the weights were invalid.
pub fn run_recommend(store: &RecordStore, config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(OrderAdvisorError::config(joined));
    }

    let Some(filter) = config.controls.filter.clone() else {
        return Err(OrderAdvisorError::config(
            "a filter is required: select a product, warehouse, or factory",
        ));
    };

    let params = RecomputeParams {
        mode: config.controls.mode,
        filter,
        weights: config.controls.weights,
        top_n: config.controls.top_n,
    };
    let metadata = ReportMetadata::for_cycle(&params);
    let mut outcome = recompute(store, &params);

    if let (Some(column), Some(table)) = (config.controls.sort_column, outcome.table_mut()) {
        table.sort_by(column, config.controls.sort_direction);
    }

    let content = generate_report(config.output.format, &outcome, &metadata)?;
    write_output(&content, &OutputTarget::from_path(config.output.file.clone()))?;

    Ok(match outcome {
        Recomputation::Scored { .. } => exit_codes::SUCCESS,
        Recomputation::Empty { .. } => exit_codes::NO_MATCHING_RECORDS,
        Recomputation::Unscored { .. } => exit_codes::INVALID_WEIGHTS,
    })
}
