//! Application wiring for the country explorer.
//!
//! [`AppContext`] owns the single [`CountriesClient`] and [`ThemeStore`] of a running application.
//! Build it once at startup and hand out references; there is no process-wide instance.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use countries_api::{CountriesApiConfig, CountriesClient};
use leptos::logging::log;
use platform_host::{AppearanceHost, HttpTransport, PrefsStore};
use platform_host_web::{
    build_host_services, host_strategy_name, AppearanceHostAdapter, PrefsStoreAdapter,
    WebFetchTransport,
};
use theme_store::ThemeStore;

/// Context wired from the compile-time selected host adapters.
pub type HostAppContext = AppContext<WebFetchTransport, PrefsStoreAdapter, AppearanceHostAdapter>;

/// Long-lived application services.
pub struct AppContext<H, P, A> {
    countries: CountriesClient<H>,
    theme: ThemeStore<P, A>,
}

impl HostAppContext {
    /// Boots with the default client configuration.
    pub fn boot() -> Self {
        Self::boot_with(CountriesApiConfig::default())
    }

    /// Boots with an explicit client configuration.
    pub fn boot_with(config: CountriesApiConfig) -> Self {
        let services = build_host_services();
        log!(
            "booting country atlas (host strategy: {})",
            host_strategy_name()
        );
        Self::with_services(services.http, services.prefs, services.appearance, config)
    }
}

impl<H: HttpTransport, P: PrefsStore, A: AppearanceHost> AppContext<H, P, A> {
    /// Wires explicit host adapters, then runs the theme store's one-time [`ThemeStore::init`].
    pub fn with_services(http: H, prefs: P, appearance: A, config: CountriesApiConfig) -> Self {
        let theme = ThemeStore::new(prefs, appearance);
        theme.init();
        Self {
            countries: CountriesClient::with_config(http, config),
            theme,
        }
    }

    /// Country data client.
    pub fn countries(&self) -> &CountriesClient<H> {
        &self.countries
    }

    /// Theme preference store.
    pub fn theme(&self) -> &ThemeStore<P, A> {
        &self.theme
    }
}
