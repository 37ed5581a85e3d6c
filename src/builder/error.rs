//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building configurations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
