// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        // A source drives at most one action
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in super::action::default_bindings() {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(super::action::default_bindings())
    }
}
