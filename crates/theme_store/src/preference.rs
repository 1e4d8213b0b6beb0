//! Theme preference values and their visual resolution.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// User display-mode preference.
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the host color-scheme preference.
    #[default]
    System,
}

impl ThemePreference {
    /// Every legal preference, in menu order.
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    /// Stable storage token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised by theme preference parsing.
pub enum ThemeError {
    /// The token is not one of `light`, `dark`, `system`.
    #[error("unknown theme preference {0:?} (expected light, dark or system)")]
    UnknownPreference(String),
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::UnknownPreference(other.to_string())),
        }
    }
}

/// Resolves whether the dark presentation flag should be set.
///
/// `System` defers to the host; explicit choices ignore it.
pub fn resolve_dark(preference: ThemePreference, host_prefers_dark: bool) -> bool {
    match preference {
        ThemePreference::System => host_prefers_dark,
        ThemePreference::Dark => true,
        ThemePreference::Light => false,
    }
}
