//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, StateDef};

/// Builder for constructing configurations with a fluent API.
///
/// States are declared in the order they are first mentioned, whether by
/// [`state`](ConfigBuilder::state), [`terminal`](ConfigBuilder::terminal)
/// or as the source of a [`transition`](ConfigBuilder::transition).
/// Target states are not declared implicitly.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateDef)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with a complete definition, replacing any earlier one.
    pub fn state(mut self, name: impl Into<String>, def: StateDef) -> Self {
        *self.entry(name.into()) = def;
        self
    }

    /// Declare a state without outgoing transitions.
    pub fn terminal(mut self, name: impl Into<String>) -> Self {
        self.entry(name.into());
        self
    }

    /// Add a transition `from --event--> to`, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.entry(from.into()).add_transition(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let config = self
            .states
            .into_iter()
            .fold(Config::new(initial), |config, (name, def)| {
                config.with_state(name, def)
            });

        Ok(config)
    }

    fn entry(&mut self, name: String) -> &mut StateDef {
        let slot = match self.states.iter().position(|(existing, _)| *existing == name) {
            Some(slot) => slot,
            None => {
                self.states.push((name, StateDef::new()));
                self.states.len() - 1
            }
        };
        &mut self.states[slot].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().terminal("done").build();

        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn builder_accepts_config_without_states() {
        let config = ConfigBuilder::new().initial("idle").build().unwrap();

        assert_eq!(config.initial(), "idle");
        assert!(config.is_empty());
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("off")
            .transition("off", "switchOn", "on")
            .transition("on", "switchOff", "off")
            .build()
            .unwrap();

        let expected = Config::new("off")
            .with_state("off", StateDef::new().on("switchOn", "on"))
            .with_state("on", StateDef::new().on("switchOff", "off"));
        assert_eq!(config, expected);
    }

    #[test]
    fn transitions_accumulate_on_same_state() {
        let config = ConfigBuilder::new()
            .initial("review")
            .transition("review", "approve", "published")
            .transition("review", "reject", "draft")
            .build()
            .unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(
            config.state("review").map(StateDef::events),
            Some(vec!["approve", "reject"])
        );
    }

    #[test]
    fn first_mention_fixes_declaration_order() {
        let config = ConfigBuilder::new()
            .initial("a")
            .terminal("c")
            .transition("a", "next", "b")
            .state("b", StateDef::new().on("next", "c"))
            .transition("c", "restart", "a")
            .build()
            .unwrap();

        assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert!(config.state("c").is_some_and(|s| s.has_event("restart")));
    }

    #[test]
    fn state_replaces_earlier_definition() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "old", "b")
            .state("a", StateDef::new().on("new", "b"))
            .build()
            .unwrap();

        let a = config.state("a").unwrap();
        assert!(a.has_event("new"));
        assert!(!a.has_event("old"));
    }
}
