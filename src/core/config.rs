//! Declarative machine configuration.
//!
//! A [`Config`] names the initial state and maps every declared state to a
//! [`StateDef`], which in turn maps event names to target state names. The
//! configuration is plain data: the engine borrows it and never mutates it.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Transition rules of a single state.
///
/// Maps event names to the name of the state the event leads to.
///
/// # Example
///
/// ```rust
/// use undoable_fsm::core::StateDef;
///
/// let off = StateDef::new().on("switchOn", "on");
///
/// assert_eq!(off.target("switchOn"), Some("on"));
/// assert!(off.has_event("switchOn"));
/// assert!(!off.has_event("switchOff"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    transitions: HashMap<String, String>,
}

impl StateDef {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken on `event`, returning the updated definition.
    ///
    /// Declaring the same event twice keeps the last target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.add_transition(event, target);
        self
    }

    /// Add a transition in place, returning the target it replaced, if any.
    pub fn add_transition(
        &mut self,
        event: impl Into<String>,
        target: impl Into<String>,
    ) -> Option<String> {
        self.transitions.insert(event.into(), target.into())
    }

    /// Target state for `event`, if this state declares it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state declares a transition for `event`.
    pub fn has_event(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Declared event names, sorted.
    ///
    /// Transition maps carry no declaration order, so the names are sorted
    /// to keep the result deterministic.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self.transitions.keys().map(String::as_str).collect();
        events.sort_unstable();
        events
    }

    /// Raw event -> target mapping.
    pub fn transitions(&self) -> &HashMap<String, String> {
        &self.transitions
    }

    /// A terminal state declares no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Complete machine configuration: the initial state plus every declared
/// state, kept in declaration order.
///
/// The initial state is not required to be one of the declared states;
/// the configuration is taken as given.
///
/// # Example
///
/// ```rust
/// use undoable_fsm::core::{Config, StateDef};
///
/// let config = Config::new("off")
///     .with_state("off", StateDef::new().on("switchOn", "on"))
///     .with_state("on", StateDef::new().on("switchOff", "off"));
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["off", "on"]);
/// assert_eq!(config.state("on").and_then(|s| s.target("switchOff")), Some("off"));
/// ```
///
/// Configurations can also be loaded by the caller through serde:
///
/// ```rust
/// use undoable_fsm::core::Config;
///
/// let config: Config = serde_json::from_str(
///     r#"{
///         "initial": "off",
///         "states": {
///             "off": { "transitions": { "switchOn": "on" } },
///             "on": { "transitions": { "switchOff": "off" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    initial: String,
    states: StateTable,
}

impl Config {
    /// Create a configuration with the given initial state and no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: StateTable::default(),
        }
    }

    /// Declare a state, returning the updated configuration.
    pub fn with_state(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.insert_state(name, def);
        self
    }

    /// Declare a state in place.
    ///
    /// Redeclaring a name replaces its definition but keeps its original
    /// position. Returns the replaced definition, if any.
    pub fn insert_state(&mut self, name: impl Into<String>, def: StateDef) -> Option<StateDef> {
        self.states.insert(name.into(), def)
    }

    /// Name of the initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Definition of a declared state.
    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    /// Mutable definition of a declared state.
    pub fn state_mut(&mut self, name: &str) -> Option<&mut StateDef> {
        self.states.get_mut(name)
    }

    /// Check whether `name` is a declared state.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.index.contains_key(name)
    }

    /// Declared state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Declared states with their definitions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states
            .entries
            .iter()
            .map(|(name, def)| (name.as_str(), def))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.entries.len()
    }

    /// Check whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.states.entries.is_empty()
    }
}

/// State definitions in declaration order with a name index.
///
/// Serialized as a map so the wire shape stays `{ name: definition }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct StateTable {
    entries: Vec<(String, StateDef)>,
    index: HashMap<String, usize>,
}

impl StateTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, name: String, def: StateDef) -> Option<StateDef> {
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, def)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, def));
                None
            }
        }
    }

    fn get(&self, name: &str) -> Option<&StateDef> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut StateDef> {
        let slot = *self.index.get(name)?;
        Some(&mut self.entries[slot].1)
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, def) in &self.entries {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = StateTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state names to state definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StateTable, A::Error> {
                let mut table = StateTable::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, def)) = access.next_entry::<String, StateDef>()? {
                    table.insert(name, def);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
