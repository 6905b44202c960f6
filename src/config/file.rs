//! Configuration file loading.
//!
//! Config files are JSON with the same shape as [`AppConfig`]'s serde
//! representation. Unlike the dataset, a config file is optional: callers
//! pass an explicit path (there is no implicit discovery walk).

use std::path::Path;

use super::types::AppConfig;
use super::validation::Validatable;
use crate::error::{ErrorContext, OrderAdvisorError, Result};

/// Load and validate an [`AppConfig`] from a JSON file.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| OrderAdvisorError::io(path, e))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("parsing config file {}", path.display()))?;

    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(OrderAdvisorError::config(format!(
            "{}: {joined}",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
