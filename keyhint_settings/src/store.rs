// Copyright 2025 the Keyhint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-value settings store interface and an in-memory implementation.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// Failure reported by a [`SettingsStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached.
    Unavailable(String),
    /// The store refused a write.
    Rejected {
        /// Key being written.
        key: String,
        /// Reason given by the store.
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(why) => write!(f, "settings store unavailable: {why}"),
            Self::Rejected { key, reason } => {
                write!(f, "settings store rejected {key:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A stored value changed.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsChange {
    /// Key that changed.
    pub key: String,
    /// New value; `None` when the key was removed.
    pub value: Option<Value>,
}

/// Persisted key-value settings.
pub trait SettingsStore {
    /// Read `key`. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    /// Write `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

type Listener = Box<dyn FnMut(&SettingsChange)>;

/// In-process [`SettingsStore`] that notifies subscribers on every write.
#[derive(Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `listener` after every write or removal.
    pub fn subscribe(&mut self, listener: impl FnMut(&SettingsChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Remove `key`, notifying subscribers if it existed.
    pub fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.notify(SettingsChange {
                key: key.to_owned(),
                value: None,
            });
        }
    }

    fn notify(&mut self, change: SettingsChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.clone());
        self.notify(SettingsChange {
            key: key.to_owned(),
            value: Some(value),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn get_returns_what_was_set() {
        let mut s = MemoryStore::new();
        assert_eq!(s.get("a"), Ok(None));
        s.set("a", json!(true)).unwrap();
        assert_eq!(s.get("a"), Ok(Some(json!(true))));
    }

    #[test]
    fn subscribers_see_writes_and_removals() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = MemoryStore::new();
        let sink = seen.clone();
        s.subscribe(move |c| sink.borrow_mut().push(c.clone()));

        s.set("k", json!(["a"])).unwrap();
        s.remove("k");
        s.remove("k");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2, "removing a missing key is silent");
        assert_eq!(seen[0].value, Some(json!(["a"])));
        assert_eq!(seen[1].value, None);
    }

    #[test]
    fn errors_display() {
        let e = StoreError::Rejected {
            key: "disabledSites".into(),
            reason: "quota".into(),
        };
        assert_eq!(
            e.to_string(),
            "settings store rejected \"disabledSites\": quota"
        );
    }
}
