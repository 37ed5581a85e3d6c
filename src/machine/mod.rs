//! The state machine engine.
//!
//! [`Fsm`] borrows a [`Config`](crate::core::Config), enforces its transition
//! rules and layers an undo/redo history over the states it visits.
//!
//! # Key Concepts
//!
//! - **Forced transitions**: `change_state` moves to any declared state
//! - **Event transitions**: `trigger` follows the current state's rules
//! - **History**: `undo`/`redo` walk visited states; forward moves drop redo
//!
//! Failures are returned as [`FsmError`] and never partially applied.

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
