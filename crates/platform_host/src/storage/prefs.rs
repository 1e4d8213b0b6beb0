//! Lightweight preference storage contracts and adapters.
//!
//! Preference writes are synchronous end to end: browser `localStorage` is synchronous, and the
//! stores built on top of this contract publish state changes in the same call that persists them.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for lightweight preference values stored as text per key.
pub trait PrefsStore {
    /// Whether this store is backed by real host storage.
    ///
    /// Headless adapters return `false`; callers then skip reads and writes entirely.
    fn is_available(&self) -> bool {
        true
    }

    /// Loads the raw text stored under a preference key.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves raw text under a preference key, replacing any previous value.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String>;
}

impl<S: PrefsStore + ?Sized> PrefsStore for Rc<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        (**self).load_pref(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        (**self).save_pref(key, raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for headless execution.
///
/// Reports itself unavailable; reads miss and writes are discarded if issued anyway.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn is_available(&self) -> bool {
        false
    }

    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep one handle for inspection while the
/// store under test owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
    detached: bool,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with a single key.
    pub fn with_value(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().insert(key.into(), raw.into());
        store
    }

    /// Creates a recording store that reports itself unavailable, standing in for a headless
    /// host while still counting any write that reaches it.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// Returns the raw value stored under `key`, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Number of successful `save_pref` calls observed so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn is_available(&self) -> bool {
        !self.detached
    }

    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.get(key))
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
