//! Light/dark/system theme preference store.
//!
//! [`ThemeStore`] keeps one [`ThemePreference`], persists it under the `"theme"` key of an injected
//! [`platform_host::PrefsStore`], toggles the `dark` root class through an injected
//! [`platform_host::AppearanceHost`], and notifies observers synchronously on every change.
//!
//! The store is single-threaded: construct one at application start and share it by reference
//! or `Rc`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod preference;
pub mod publisher;
pub mod store;

pub use preference::{resolve_dark, ThemeError, ThemePreference};
pub use publisher::{Publisher, Subscription};
pub use store::{ThemeStore, DARK_CLASS, THEME_PREF_KEY};
