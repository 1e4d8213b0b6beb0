//! Client configuration: service location, collection filter, and per-endpoint field selection.

use serde::{Deserialize, Serialize};

use crate::CountryApiError;

/// Base URL of the public REST Countries v3.1 service.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested for list views.
pub const SUMMARY_FIELDS: &[&str] = &[
    "name",
    "capital",
    "population",
    "region",
    "subregion",
    "flags",
    "cca2",
    "cca3",
    "languages",
    "area",
];

/// Fields requested for a single-country detail view.
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "capital",
    "population",
    "region",
    "subregion",
    "flags",
    "cca2",
    "cca3",
    "languages",
    "area",
    "borders",
    "maps",
    "timezones",
];

fn owned_fields(fields: &[&str]) -> Option<Vec<String>> {
    Some(fields.iter().map(|f| f.to_string()).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Configuration for [`crate::CountriesClient`].
///
/// `None` (or an empty list) for a field selection omits the `fields` query parameter, so the
/// service returns complete documents.
pub struct CountriesApiConfig {
    /// Service base URL; a trailing `/` is ignored.
    pub base_url: String,
    /// Restrict the collection endpoint to independent states (`status=true`).
    pub independent_only: bool,
    /// Fields requested by [`crate::CountriesClient::fetch_all_countries`].
    pub list_fields: Option<Vec<String>>,
    /// Fields requested by code lookups.
    pub detail_fields: Option<Vec<String>>,
    /// Fields requested by name lookups.
    pub name_fields: Option<Vec<String>>,
}

impl Default for CountriesApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            independent_only: true,
            list_fields: owned_fields(SUMMARY_FIELDS),
            detail_fields: owned_fields(DETAIL_FIELDS),
            name_fields: None,
        }
    }
}

impl CountriesApiConfig {
    /// Parses a JSON configuration document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CountryApiError::InvalidConfig`] for malformed JSON or mistyped values.
    pub fn from_json(raw: &str) -> Result<Self, CountryApiError> {
        serde_json::from_str(raw).map_err(|e| CountryApiError::InvalidConfig(e.to_string()))
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
