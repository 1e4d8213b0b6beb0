use platform_host::{AppearanceHost, NoopAppearanceHost, NoopPrefsStore, PrefsStore};

use crate::{WebAppearanceHost, WebFetchTransport, WebPrefsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Interactive browser: `localStorage` persistence and document-root styling.
    Browser,
    /// Non-interactive context: persistence and visual effects are skipped.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    host_strategy_token(selected_host_strategy())
}

fn host_strategy_token(strategy: HostStrategy) -> &'static str {
    match strategy {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` persistence.
    Browser(WebPrefsStore),
    /// Reports unavailable; discards writes and never finds stored values.
    Headless(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn is_available(&self) -> bool {
        match self {
            Self::Browser(store) => store.is_available(),
            Self::Headless(store) => store.is_available(),
        }
    }

    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Headless(store) => store.save_pref(key, raw),
        }
    }
}

/// Adapter enum that erases the concrete presentation backend behind [`AppearanceHost`].
#[derive(Debug, Clone, Copy)]
pub enum AppearanceHostAdapter {
    /// `matchMedia` + document-root `classList`.
    Browser(WebAppearanceHost),
    /// Reports unavailable and a light preference; ignores class changes.
    Headless(NoopAppearanceHost),
}

impl AppearanceHost for AppearanceHostAdapter {
    fn is_available(&self) -> bool {
        match self {
            Self::Browser(host) => host.is_available(),
            Self::Headless(host) => host.is_available(),
        }
    }

    fn prefers_dark(&self) -> bool {
        match self {
            Self::Browser(host) => host.prefers_dark(),
            Self::Headless(host) => host.prefers_dark(),
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), String> {
        match self {
            Self::Browser(host) => host.set_root_class(class, enabled),
            Self::Headless(host) => host.set_root_class(class, enabled),
        }
    }
}

/// Builds the preferences adapter for `strategy`.
pub fn prefs_store_for(strategy: HostStrategy) -> PrefsStoreAdapter {
    match strategy {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(NoopPrefsStore),
    }
}

/// Builds the appearance adapter for `strategy`.
pub fn appearance_host_for(strategy: HostStrategy) -> AppearanceHostAdapter {
    match strategy {
        HostStrategy::Browser => AppearanceHostAdapter::Browser(WebAppearanceHost),
        HostStrategy::Headless => AppearanceHostAdapter::Headless(NoopAppearanceHost),
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    prefs_store_for(selected_host_strategy())
}

/// Builds the appearance adapter for the compile-time selected host strategy.
pub fn appearance_host() -> AppearanceHostAdapter {
    appearance_host_for(selected_host_strategy())
}

/// Builds the HTTP transport. Outbound fetches do not depend on the host strategy.
pub fn http_transport() -> WebFetchTransport {
    WebFetchTransport
}

#[derive(Debug, Clone, Copy)]
/// Bundle of every host adapter an application needs at startup.
pub struct HostServices {
    /// Strategy the adapters were built for.
    pub strategy: HostStrategy,
    /// Preference persistence.
    pub prefs: PrefsStoreAdapter,
    /// Color-scheme query and root styling.
    pub appearance: AppearanceHostAdapter,
    /// Outbound HTTP.
    pub http: WebFetchTransport,
}

/// Builds all host adapters for `strategy`.
pub fn build_host_services_for(strategy: HostStrategy) -> HostServices {
    HostServices {
        strategy,
        prefs: prefs_store_for(strategy),
        appearance: appearance_host_for(strategy),
        http: http_transport(),
    }
}

/// Builds all host adapters for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    build_host_services_for(selected_host_strategy())
}
