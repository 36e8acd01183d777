//! Shortcut Manager for LedgerDesk.
//!
//! Keeps the action-to-chord bindings for the shell's global shortcuts,
//! detects conflicts, and resolves pressed chords back to the action
//! they trigger.

use std::collections::HashMap;

use crate::types::errors::ShortcutError;

/// Default bindings for the shell's global actions.
const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("global_search", "Ctrl+K"),
    ("recent_searches", "Ctrl+Shift+K"),
    ("go_dashboard", "Ctrl+1"),
    ("go_inventory", "Ctrl+2"),
    ("go_revenue", "Ctrl+3"),
    ("go_banking", "Ctrl+4"),
    ("go_organization", "Ctrl+5"),
    ("new_invoice", "Ctrl+Alt+I"),
    ("new_payment", "Ctrl+Alt+P"),
    ("refresh_table", "Ctrl+R"),
    ("next_page", "Alt+Right"),
    ("prev_page", "Alt+Left"),
    ("clear_filters", "Ctrl+Shift+X"),
    ("toggle_sidebar", "Ctrl+B"),
];

/// Trait defining shortcut dispatch operations.
pub trait ShortcutManagerTrait {
    fn bind(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unbind(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn dispatch(&self, keys: &str) -> Option<&str>;
    fn binding(&self, action: &str) -> Option<&str>;
    fn bindings(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self);
}

/// In-memory shortcut dispatcher with platform modifier adaptation.
pub struct ShortcutManager {
    bindings: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }

    /// The platform-adapted default binding set.
    fn default_bindings() -> HashMap<String, String> {
        DEFAULT_BINDINGS
            .iter()
            .map(|(action, keys)| (action.to_string(), Self::adapt_for_platform(keys)))
            .collect()
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    /// Returns the action already holding `keys`, if it is not `exclude_action`.
    fn conflicting_action(&self, keys: &str, exclude_action: &str) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        self.bindings
            .iter()
            .find(|(action, bound)| **bound == adapted && action.as_str() != exclude_action)
            .map(|(action, _)| action.clone())
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    /// Binds `keys` to `action`, replacing the action's previous binding.
    /// Fails if the chord is empty or already claimed by another action.
    fn bind(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys(
                "Keys cannot be empty".to_string(),
            ));
        }

        if let Some(existing) = self.conflicting_action(keys, action) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                keys, existing
            )));
        }

        let adapted = Self::adapt_for_platform(keys);
        self.bindings.insert(action.to_string(), adapted);
        Ok(())
    }

    /// Removes the binding for `action`.
    fn unbind(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.bindings
            .remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    /// Resolves a pressed chord to the action bound to it.
    fn dispatch(&self, keys: &str) -> Option<&str> {
        let adapted = Self::adapt_for_platform(keys);
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .map(|(action, _)| action.as_str())
    }

    /// The chord currently bound to `action`.
    fn binding(&self, action: &str) -> Option<&str> {
        self.bindings.get(action).map(|s| s.as_str())
    }

    fn bindings(&self) -> &HashMap<String, String> {
        &self.bindings
    }

    /// Discards all customizations and restores the default binding set.
    fn reset_to_defaults(&mut self) {
        self.bindings = Self::default_bindings();
    }
}
