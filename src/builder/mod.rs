//! Builder API for ergonomic configuration and machine construction.
//!
//! This module provides fluent builders and a macro for declaring
//! configurations in code, plus a machine builder that reports a missing
//! configuration as an error.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use machine::FsmBuilder;

use crate::core::Config;
use crate::machine::{Fsm, FsmError};

/// Create a machine over `config`, already advanced to `state`.
///
/// The jump is recorded as a regular forced transition, so it can be undone
/// back to the initial state.
///
/// # Example
///
/// ```
/// use undoable_fsm::builder::resumed_at;
/// use undoable_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published" },
///         "published" => {},
///     }
/// };
///
/// let mut fsm = resumed_at(&config, "review").unwrap();
/// assert_eq!(fsm.state(), "review");
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "draft");
/// ```
pub fn resumed_at<'a>(config: &'a Config, state: &str) -> Result<Fsm<'a>, FsmError> {
    let mut fsm = Fsm::new(config);
    if state != fsm.state() {
        fsm.change_state(state)?;
    }
    Ok(fsm)
}
