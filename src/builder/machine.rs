//! Builder for constructing state machines.

use crate::core::Config;
use crate::machine::{Fsm, FsmError};

/// Builder for constructing a [`Fsm`] whose configuration may be absent.
#[derive(Debug, Default)]
pub struct FsmBuilder<'a> {
    config: Option<&'a Config>,
}

impl<'a> FsmBuilder<'a> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: &'a Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the state machine.
    /// Returns [`FsmError::MissingConfig`] if no configuration was set.
    pub fn build(self) -> Result<Fsm<'a>, FsmError> {
        Fsm::try_new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;

    #[test]
    fn builder_validates_required_fields() {
        let result = FsmBuilder::new().build();

        assert!(matches!(result, Err(FsmError::MissingConfig)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let config = Config::new("idle").with_state("idle", StateDef::new().on("start", "busy"));

        let machine = FsmBuilder::new().config(&config).build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.state(), "idle");
        assert!(machine.can_trigger("start"));
    }
}
