//! Typed key-value store shared between services and conditions.
//!
//! A [`Blackboard`] belongs to exactly one [`Tree`](crate::Tree). Services
//! write perception facts into it; condition nodes read them. Every write that
//! actually changes what is stored bumps the [`revision`](Blackboard::revision),
//! which running nodes use to decide whether their guards need re-checking.

use std::collections::HashMap;

/// A value stored on the blackboard.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Number(f32),
    Bool(bool),
}

impl Value {
    /// Returns the numeric payload, if this is a number.
    pub fn as_number(self) -> Option<f32> {
        match self {
            Value::Number(n) => Some(n),
            Value::Bool(_) => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b),
            Value::Number(_) => None,
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value as f32)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Mutable mapping from string keys to [`Value`]s.
#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    entries: HashMap<String, Value>,
    revision: u64,
}

impl Blackboard {
    /// Creates an empty blackboard at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).copied()
    }

    /// Returns the number stored under `key`, or `None` if the key is missing
    /// or holds a boolean.
    pub fn number(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Value::as_number)
    }

    /// Returns the boolean stored under `key`, or `None` if the key is missing
    /// or holds a number.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns `true` if `key` has been written and not removed since.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key` and returns the previous value.
    ///
    /// The revision only advances when the stored value changes, so a sampler
    /// re-writing identical facts does not wake up reactive conditions.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        let previous = self.entries.insert(key, value);
        if previous != Some(value) {
            self.revision += 1;
        }
        previous
    }

    /// Removes `key`, returning the value it held.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let previous = self.entries.remove(key);
        if previous.is_some() {
            self.revision += 1;
        }
        previous
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.revision += 1;
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been written yet (or everything was removed).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter of effective mutations.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads_reject_mismatched_types() {
        let mut bb = Blackboard::new();
        bb.set("distance", 4.5);
        bb.set("visible", true);

        assert_eq!(bb.number("distance"), Some(4.5));
        assert_eq!(bb.boolean("distance"), None);
        assert_eq!(bb.boolean("visible"), Some(true));
        assert_eq!(bb.number("visible"), None);
        assert_eq!(bb.get("missing"), None);
    }

    #[test]
    fn revision_tracks_effective_changes_only() {
        let mut bb = Blackboard::new();
        assert_eq!(bb.revision(), 0);

        bb.set("offset", 0.3);
        assert_eq!(bb.revision(), 1);

        // Same value again is not a change
        bb.set("offset", 0.3);
        assert_eq!(bb.revision(), 1);

        bb.set("offset", 0.05);
        assert_eq!(bb.revision(), 2);

        bb.remove("offset");
        assert_eq!(bb.revision(), 3);

        // Removing a missing key is not a change either
        bb.remove("offset");
        assert_eq!(bb.revision(), 3);
    }

    #[test]
    fn set_returns_previous_value() {
        let mut bb = Blackboard::new();
        assert_eq!(bb.set("flag", false), None);
        assert_eq!(bb.set("flag", true), Some(Value::Bool(false)));
        assert_eq!(bb.len(), 1);

        bb.clear();
        assert!(bb.is_empty());
        assert!(!bb.contains("flag"));
    }
}
