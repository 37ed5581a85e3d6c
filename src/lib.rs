//! Undoable FSM: a configuration-driven finite state machine with undo/redo
//!
//! The caller describes states and the events that move between them as a
//! plain [`Config`]. An [`Fsm`] borrows that configuration, tracks the
//! current state, enforces the declared transitions, and keeps a linear
//! undo/redo history of the states it has visited.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state plus named states, each mapping events to targets
//! - **Fsm**: The engine; forced (`change_state`) and event (`trigger`) moves
//! - **History**: Visited-state stack with undo/redo; forward moves drop redo
//!
//! # Example
//!
//! ```rust
//! use undoable_fsm::{fsm_config, Fsm, FsmError};
//!
//! let config = fsm_config! {
//!     initial: "off",
//!     states: {
//!         "off" => { "switchOn" => "on" },
//!         "on" => { "switchOff" => "off" },
//!     }
//! };
//!
//! let mut fsm = Fsm::new(&config);
//! fsm.trigger("switchOn")?;
//! assert_eq!(fsm.state(), "on");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//! assert!(fsm.redo());
//!
//! assert!(matches!(
//!     fsm.trigger("switchOn"),
//!     Err(FsmError::UnknownEvent { .. })
//! ));
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, FsmBuilder};
pub use crate::core::{Config, History, StateDef};
pub use machine::{Fsm, FsmError};
