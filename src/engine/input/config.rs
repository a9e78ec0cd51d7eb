// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons/touch) to game actions
///
/// A source may trigger several actions: a left click both starts the game
/// and places a magnet.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Vec<Action>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Create the default configuration
    pub fn with_defaults() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }

    /// Bind an input source to an action (keeps existing bindings)
    pub fn bind(&mut self, source: InputSource, action: Action) {
        let actions = self.bindings.entry(source).or_default();
        if !actions.contains(&action) {
            actions.push(action);
        }
    }

    /// Get the actions bound to an input source
    pub fn get_actions(&self, source: InputSource) -> &[Action] {
        self.bindings
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
