//! Typed host-capability contracts shared by the country client, the theme store and the browser
//! adapters.
//!
//! This crate never touches browser APIs. It defines the service traits plus `Noop*` adapters for
//! headless execution and `Memory*` adapters for tests; concrete browser implementations live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod http;
pub mod storage;

pub use appearance::{AppearanceHost, MemoryAppearanceHost, NoopAppearanceHost};
pub use http::{HttpFuture, HttpResponse, HttpTransport, MemoryHttpTransport, NoopHttpTransport};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
