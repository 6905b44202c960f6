//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns a process exit code.

mod recommend;
mod view;

pub use recommend::run_recommend;
pub use view::run_view;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - a scored recommendation (or view) was produced
    pub const SUCCESS: i32 = 0;
    /// The filter matched no records; the pipeline halted
    pub const NO_MATCHING_RECORDS: i32 = 1;
    /// Weights did not sum to 1.00; only the unscored table was produced
    pub const INVALID_WEIGHTS: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NO_MATCHING_RECORDS, 1);
        assert_eq!(exit_codes::INVALID_WEIGHTS, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
