//! Read-only client for the public REST Countries service.
//!
//! [`CountriesClient`] issues single `GET` round trips through a host-provided
//! [`platform_host::HttpTransport`] and hands back the decoded JSON documents untouched:
//!
//! - [`CountriesClient::fetch_all_countries`]: every independent state.
//! - [`CountriesClient::fetch_country_by_identifier`]: by free-text name (all matches) or by
//!   two/three-letter code (single match).
//!
//! Which fields the service returns per endpoint is controlled by [`CountriesApiConfig`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod record;

pub use client::{normalize_code, CountriesClient};
pub use config::{CountriesApiConfig, DEFAULT_BASE_URL, DETAIL_FIELDS, SUMMARY_FIELDS};
pub use error::CountryApiError;
pub use record::{decode_record, decode_records, CountryLookup, CountryMatch, CountryRecord};
