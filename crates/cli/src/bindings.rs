//! The in-memory keystroke binding table.
//!
//! Responsibilities:
//! - Map single key characters to the action they trigger.
//! - Guarantee overwrite semantics: re-binding a key replaces its entry.
//!
//! Does NOT handle:
//! - Persistence; the table lives and dies with the process.
//! - Validation that an action id exists on the server (bindings are only
//!   ever created from a freshly fetched catalog).

use std::collections::HashMap;

/// One keystroke binding: the subset of an action descriptor the macro loop
/// needs to execute and display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub action_id: String,
    pub action_name: String,
}

/// Mapping from key character to binding. Keys are unique; insertion order
/// is irrelevant and listing is sorted only for stable display.
#[derive(Debug, Default)]
pub struct BindingTable {
    entries: HashMap<char, Binding>,
}

impl BindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for `key`.
    pub fn set(&mut self, key: char, binding: Binding) {
        self.entries.insert(key, binding);
    }

    /// Delete the binding for `key` if present. Returns whether a binding
    /// was removed; an absent key is a no-op, never an error.
    pub fn remove(&mut self, key: char) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Look up the binding for `key`.
    pub fn get(&self, key: char) -> Option<&Binding> {
        self.entries.get(&key)
    }

    /// All bindings, sorted by key for stable display.
    pub fn list(&self) -> Vec<(char, &Binding)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, b)| (*k, b)).collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(id: &str, name: &str) -> Binding {
        Binding {
            action_id: id.to_string(),
            action_name: name.to_string(),
        }
    }

    #[test]
    fn get_reflects_last_set() {
        let mut table = BindingTable::new();
        table.set('s', binding("x1", "Clip"));
        table.set('s', binding("x2", "Sound"));
        assert_eq!(table.get('s'), Some(&binding("x2", "Sound")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_reflects_last_operation() {
        let mut table = BindingTable::new();
        table.set('s', binding("x1", "Clip"));
        assert!(table.remove('s'));
        assert_eq!(table.get('s'), None);

        table.set('s', binding("x2", "Sound"));
        assert_eq!(table.get('s'), Some(&binding("x2", "Sound")));
    }

    #[test]
    fn remove_absent_key_is_a_noop() {
        let mut table = BindingTable::new();
        assert!(!table.remove('q'));
        table.set('a', binding("x1", "Clip"));
        assert!(!table.remove('q'));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn list_is_sorted_by_key() {
        let mut table = BindingTable::new();
        table.set('z', binding("x3", "Scene"));
        table.set('a', binding("x1", "Clip"));
        table.set('m', binding("x2", "Sound"));
        let keys: Vec<char> = table.list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!['a', 'm', 'z']);
    }

    #[test]
    fn keys_are_independent() {
        let mut table = BindingTable::new();
        table.set('a', binding("x1", "Clip"));
        table.set('b', binding("x2", "Sound"));
        table.remove('a');
        assert_eq!(table.get('a'), None);
        assert_eq!(table.get('b'), Some(&binding("x2", "Sound")));
    }
}
