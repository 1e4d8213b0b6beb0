//! Presentation host-service contracts: color-scheme query and root class toggling.

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// Host service exposing the environment's color-scheme preference and the document root flags
/// consumed by external styling rules.
pub trait AppearanceHost {
    /// Whether a rendered document is present to receive presentation changes.
    ///
    /// Headless adapters return `false`; callers then leave the root flags untouched.
    fn is_available(&self) -> bool {
        true
    }

    /// Returns `true` when the host environment currently prefers a dark color scheme.
    ///
    /// Read synchronously; implementations do not subscribe to later changes.
    fn prefers_dark(&self) -> bool;

    /// Adds (`enabled == true`) or removes a class on the document root element.
    ///
    /// # Errors
    ///
    /// Returns an error when the root element exists but rejects the class change.
    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), String>;
}

impl<H: AppearanceHost + ?Sized> AppearanceHost for Rc<H> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), String> {
        (**self).set_root_class(class, enabled)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op appearance host for headless execution.
pub struct NoopAppearanceHost;

impl AppearanceHost for NoopAppearanceHost {
    fn is_available(&self) -> bool {
        false
    }

    fn prefers_dark(&self) -> bool {
        false
    }

    fn set_root_class(&self, _class: &str, _enabled: bool) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryAppearanceState {
    prefers_dark: bool,
    classes: BTreeSet<String>,
    toggles: usize,
}

#[derive(Debug, Clone, Default)]
/// In-memory appearance host with a scriptable color-scheme preference.
///
/// Clones share state so tests can flip the host preference or inspect root classes after handing
/// a clone to the code under test.
pub struct MemoryAppearanceHost {
    inner: Rc<RefCell<MemoryAppearanceState>>,
    detached: bool,
}

impl MemoryAppearanceHost {
    /// Creates a host reporting the given dark-scheme preference.
    pub fn with_prefers_dark(prefers_dark: bool) -> Self {
        let host = Self::default();
        host.set_prefers_dark(prefers_dark);
        host
    }

    /// Creates a recording host that reports no rendered document, standing in for a headless
    /// host while still counting any toggle that reaches it.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// Changes the reported host preference.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.inner.borrow_mut().prefers_dark = prefers_dark;
    }

    /// Returns whether `class` is currently present on the simulated root.
    pub fn has_root_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    /// Number of `set_root_class` calls observed so far.
    pub fn toggle_count(&self) -> usize {
        self.inner.borrow().toggles
    }
}

impl AppearanceHost for MemoryAppearanceHost {
    fn is_available(&self) -> bool {
        !self.detached
    }

    fn prefers_dark(&self) -> bool {
        self.inner.borrow().prefers_dark
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        state.toggles += 1;
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
        Ok(())
    }
}
