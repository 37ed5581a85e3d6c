//! Configuration-driven state machine with undo/redo.

use crate::core::{Config, History, StateDef};
use crate::machine::error::FsmError;
use log::{debug, trace};

/// Finite state machine driven by a borrowed [`Config`].
///
/// The machine tracks the current state, applies forced and event-driven
/// transitions, and keeps a linear undo/redo history of visited states.
/// Undo and redo walk that history without consulting transition rules.
///
/// All mutating operations take `&mut self`. The machine performs no
/// internal locking; callers sharing one instance across threads must wrap
/// it themselves (e.g. in a `Mutex`).
///
/// # Example
///
/// ```rust
/// use undoable_fsm::core::{Config, StateDef};
/// use undoable_fsm::machine::Fsm;
///
/// let config = Config::new("off")
///     .with_state("off", StateDef::new().on("switchOn", "on"))
///     .with_state("on", StateDef::new().on("switchOff", "off"));
///
/// let mut fsm = Fsm::new(&config);
/// assert_eq!(fsm.state(), "off");
///
/// fsm.trigger("switchOn").unwrap();
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
///
/// fsm.trigger("switchOff").unwrap();
/// assert!(!fsm.redo());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<'a> {
    config: &'a Config,
    history: History,
}

impl<'a> Fsm<'a> {
    /// Create a machine in the configured initial state.
    ///
    /// The initial state is not checked against the declared states.
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            history: History::new(config.initial()),
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`FsmError::MissingConfig`] when `config` is `None`.
    pub fn try_new(config: Option<&'a Config>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::MissingConfig)
    }

    /// Current state (pure).
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Force a transition to `target`, bypassing event rules.
    ///
    /// Fails with [`FsmError::StateNotFound`] if `target` is not a declared
    /// state. On success the redo history is discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable_fsm::core::{Config, StateDef};
    /// use undoable_fsm::machine::{Fsm, FsmError};
    ///
    /// let config = Config::new("idle")
    ///     .with_state("idle", StateDef::new())
    ///     .with_state("busy", StateDef::new());
    /// let mut fsm = Fsm::new(&config);
    ///
    /// fsm.change_state("busy").unwrap();
    /// assert_eq!(fsm.state(), "busy");
    ///
    /// let err = fsm.change_state("sleeping").unwrap_err();
    /// assert!(matches!(err, FsmError::StateNotFound { .. }));
    /// assert_eq!(fsm.state(), "busy");
    /// ```
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            return Err(FsmError::StateNotFound {
                state: target.to_string(),
            });
        }

        debug!("changing state '{}' -> '{}'", self.state(), target);
        self.history.advance(target);
        Ok(())
    }

    /// Apply the transition the current state declares for `event`.
    ///
    /// Fails with [`FsmError::UnknownEvent`] if the current state has no
    /// such transition, including when the current state is not declared
    /// at all. On success the redo history is discarded.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.current_def().and_then(|def| def.target(event)) else {
            return Err(FsmError::UnknownEvent {
                event: event.to_string(),
                state: self.state().to_string(),
            });
        };

        debug!(
            "event '{}' moves state '{}' -> '{}'",
            event,
            self.state(),
            target
        );
        self.history.advance(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Only the visited-state history is reset; states already undone stay
    /// available to [`redo`](Fsm::redo). Use
    /// [`clear_history`](Fsm::clear_history) to drop both.
    pub fn reset(&mut self) {
        trace!("resetting to initial state '{}'", self.config.initial());
        self.history.rewind(self.config.initial());
    }

    /// Declared state names in declaration order.
    ///
    /// With `Some(event)`, only states that declare a transition for that
    /// event are returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use undoable_fsm::core::{Config, StateDef};
    /// use undoable_fsm::machine::Fsm;
    ///
    /// let config = Config::new("off")
    ///     .with_state("off", StateDef::new().on("switchOn", "on"))
    ///     .with_state("on", StateDef::new().on("switchOff", "off"));
    /// let fsm = Fsm::new(&config);
    ///
    /// assert_eq!(fsm.states(None), vec!["off", "on"]);
    /// assert_eq!(fsm.states(Some("switchOff")), vec!["on"]);
    /// assert!(fsm.states(Some("explode")).is_empty());
    /// ```
    pub fn states(&self, event: Option<&str>) -> Vec<&'a str> {
        let config = self.config;
        config
            .iter()
            .filter(|(_, def)| event.is_none_or(|event| def.has_event(event)))
            .map(|(name, _)| name)
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false`, changing nothing, when there is no earlier state.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            trace!("undo -> '{}'", self.state());
        }
        undone
    }

    /// Restore the most recently undone state.
    ///
    /// Returns `false`, changing nothing, when nothing was undone. The
    /// restored state need not be reachable from the current one.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            trace!("redo -> '{}'", self.state());
        }
        redone
    }

    /// Return to the initial state and drop all undo/redo history.
    pub fn clear_history(&mut self) {
        trace!("clearing history, back to '{}'", self.config.initial());
        self.history.clear(self.config.initial());
    }

    /// Check whether [`undo`](Fsm::undo) would succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check whether [`redo`](Fsm::redo) would succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Check whether [`trigger`](Fsm::trigger) would succeed for `event` (pure).
    pub fn can_trigger(&self, event: &str) -> bool {
        self.current_def().is_some_and(|def| def.has_event(event))
    }

    /// Events the current state declares, sorted (pure).
    pub fn events(&self) -> Vec<&'a str> {
        self.current_def().map(StateDef::events).unwrap_or_default()
    }

    /// Check if the current state declares no outgoing transitions (pure).
    pub fn is_final(&self) -> bool {
        self.current_def().is_none_or(StateDef::is_terminal)
    }

    /// Visited-state history (pure).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Visited states, oldest first, ending with the current state (pure).
    pub fn path(&self) -> Vec<&str> {
        self.history.path()
    }

    /// Name of the configured initial state.
    pub fn initial(&self) -> &'a str {
        self.config.initial()
    }

    /// The configuration this machine runs on.
    pub fn config(&self) -> &'a Config {
        self.config
    }

    fn current_def(&self) -> Option<&'a StateDef> {
        let config = self.config;
        config.state(self.state())
    }
}
