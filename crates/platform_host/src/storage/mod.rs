//! Storage-domain contracts.

pub mod prefs;
