//! Core data types for the state machine.
//!
//! This module holds the plain-data side of the machine:
//! - Declarative configuration via `Config` and `StateDef`
//! - Visited-state tracking with undo/redo via `History`
//!
//! Nothing here knows about transition rules being enforced; that lives in
//! the `machine` module.

mod config;
mod history;

pub use config::{Config, StateDef};
pub use history::History;
