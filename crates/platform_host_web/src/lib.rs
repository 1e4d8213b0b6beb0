//! Browser (`wasm32`) implementations of [`platform_host`] capability contracts.
//!
//! This crate is the concrete browser-side wiring layer for preference persistence, document-root
//! styling and outbound `fetch`. Native builds compile inert fallbacks so the same graph links in
//! tests and headless tooling.
//!
//! Transport bindings live under `bridge/` (shared wasm/non-wasm glue).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod appearance;
mod bridge;
pub mod http;
pub mod storage;

pub use adapters::{
    appearance_host, appearance_host_for, build_host_services, build_host_services_for,
    host_strategy_name, http_transport, prefs_store, prefs_store_for, selected_host_strategy,
    AppearanceHostAdapter, HostServices, HostStrategy, PrefsStoreAdapter,
};
pub use appearance::{WebAppearanceHost, PREFERS_DARK_QUERY};
pub use http::WebFetchTransport;
pub use storage::local_prefs::WebPrefsStore;
