//! Persisted theme preference store.

use std::cell::Cell;

use leptos::logging::warn;
use platform_host::{AppearanceHost, PrefsStore};

use crate::{
    preference::{resolve_dark, ThemeError, ThemePreference},
    publisher::{Publisher, Subscription},
};

/// Preference key holding the bare theme token.
pub const THEME_PREF_KEY: &str = "theme";
/// Class toggled on the document root while the dark presentation is active.
pub const DARK_CLASS: &str = "dark";

/// Holds the active [`ThemePreference`], persists it through a [`PrefsStore`], and mirrors its
/// visual effect onto an [`AppearanceHost`].
///
/// Construct one per running application and pass it by reference. For non-interactive contexts
/// inject [`platform_host::NoopPrefsStore`] and [`platform_host::NoopAppearanceHost`]: capabilities
/// that report themselves unavailable are never called, so only the published value changes.
pub struct ThemeStore<P, A> {
    prefs: P,
    appearance: A,
    current: Cell<ThemePreference>,
    dark: Cell<bool>,
    publisher: Publisher<ThemePreference>,
}

impl<P: PrefsStore, A: AppearanceHost> ThemeStore<P, A> {
    /// Builds the store from the persisted preference (`System` when absent or unreadable) and
    /// applies its visual effect. Nothing is written to storage.
    pub fn new(prefs: P, appearance: A) -> Self {
        let preference = read_persisted(&prefs);
        let store = Self {
            prefs,
            appearance,
            current: Cell::new(preference),
            dark: Cell::new(false),
            publisher: Publisher::default(),
        };
        store.apply(preference);
        store
    }

    /// Active preference.
    pub fn get(&self) -> ThemePreference {
        self.current.get()
    }

    /// Whether the dark presentation flag is currently applied to the host.
    ///
    /// Stays `false` while the appearance host is unavailable.
    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    /// Registers an observer. It is called immediately with the active preference, then on every
    /// [`Self::set`] / [`Self::init`].
    pub fn subscribe(&self, callback: impl Fn(&ThemePreference) + 'static) -> Subscription {
        callback(&self.current.get());
        self.publisher.subscribe(callback)
    }

    /// Number of live observers.
    pub fn subscriber_count(&self) -> usize {
        self.publisher.subscriber_count()
    }

    /// Persists `preference`, applies its visual effect and notifies every observer.
    ///
    /// Identical consecutive values are not collapsed. A failed storage write is logged and does
    /// not stop the update. Observers that call back into `set` are notified in order: each value
    /// reaches every observer before the next one is delivered.
    pub fn set(&self, preference: ThemePreference) {
        if self.prefs.is_available() {
            if let Err(err) = self.prefs.save_pref(THEME_PREF_KEY, preference.as_str()) {
                warn!("theme preference save failed: {err}");
            }
        }
        self.apply(preference);
        self.publish(preference);
    }

    /// Parses a storage/UI token and [`Self::set`]s it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownPreference`] without changing any state when `raw` is not a
    /// legal token.
    pub fn set_from_str(&self, raw: &str) -> Result<(), ThemeError> {
        let preference = raw.parse::<ThemePreference>()?;
        self.set(preference);
        Ok(())
    }

    /// Re-reads the persisted preference, applies it and notifies observers.
    ///
    /// Meant to run once the host environment is ready, to reconcile storage with the rendered
    /// page. Does not write storage.
    pub fn init(&self) {
        let preference = read_persisted(&self.prefs);
        self.apply(preference);
        self.publish(preference);
    }

    fn apply(&self, preference: ThemePreference) {
        if !self.appearance.is_available() {
            return;
        }
        let dark = resolve_dark(preference, self.appearance.prefers_dark());
        self.dark.set(dark);
        if let Err(err) = self.appearance.set_root_class(DARK_CLASS, dark) {
            warn!("applying theme {preference} failed: {err}");
        }
    }

    fn publish(&self, preference: ThemePreference) {
        self.current.set(preference);
        self.publisher.publish(&preference);
    }
}

fn read_persisted<P: PrefsStore + ?Sized>(prefs: &P) -> ThemePreference {
    if !prefs.is_available() {
        return ThemePreference::System;
    }
    match prefs.load_pref(THEME_PREF_KEY) {
        Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err| {
            warn!("ignoring stored theme preference: {err}");
            ThemePreference::System
        }),
        Ok(None) => ThemePreference::System,
        Err(err) => {
            warn!("theme preference load failed: {err}");
            ThemePreference::System
        }
    }
}
