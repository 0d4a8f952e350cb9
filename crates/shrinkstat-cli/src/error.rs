//! Error types for the shrinkstat CLI

use shrinkstat_core::{ErrorCategory, StatsError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Process exit code for a failed run.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(CliError::InvalidArgument(_)) = error.downcast_ref::<CliError>() {
        return 4;
    }

    match error.downcast_ref::<StatsError>().map(StatsError::category) {
        Some(ErrorCategory::Input) => 2,
        Some(ErrorCategory::Io) => 3,
        Some(ErrorCategory::Config) => 4,
        Some(ErrorCategory::Arithmetic) | None => 1,
    }
}
