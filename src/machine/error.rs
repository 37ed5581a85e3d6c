//! Errors raised by the state machine engine.

use thiserror::Error;

/// Errors returned by [`Fsm`](crate::machine::Fsm) operations.
///
/// A failed operation leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No configuration was supplied at construction.
    #[error("Finite state machine can't work without config")]
    MissingConfig,

    /// A forced state change named a state the configuration does not declare.
    #[error("State '{state}' not found")]
    StateNotFound { state: String },

    /// The current state declares no transition for the event.
    #[error("Unknown event '{event}' in state '{state}'")]
    UnknownEvent { event: String, state: String },
}
