//! Country documents and lookup shapes.
//!
//! Documents are not modeled: they are whatever JSON the service returns. Callers that want a
//! typed view decode on demand with [`decode_records`] / [`decode_record`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CountryApiError;

/// One country document as returned by the service.
pub type CountryRecord = Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifier accepted by [`crate::CountriesClient::fetch_country_by_identifier`].
pub enum CountryLookup {
    /// Free-text (partial) name match; may return several countries.
    Name(String),
    /// Two- or three-letter code; the service matches at most one country.
    Code(String),
}

impl CountryLookup {
    /// Builds a name lookup.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Builds a code lookup.
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Result shape of a lookup. Name and code lookups keep distinct shapes.
pub enum CountryMatch {
    /// Every country matched by a name lookup, in service order.
    Matches(Vec<CountryRecord>),
    /// The single country matched by a code lookup.
    Single(CountryRecord),
}

/// Decodes a list of documents into a caller-defined type.
///
/// # Errors
///
/// Returns [`CountryApiError::Decode`] on the first document that does not fit `T`.
pub fn decode_records<T: DeserializeOwned>(
    records: Vec<CountryRecord>,
) -> Result<Vec<T>, CountryApiError> {
    records.into_iter().map(decode_record::<T>).collect()
}

/// Decodes one document into a caller-defined type.
///
/// # Errors
///
/// Returns [`CountryApiError::Decode`] when the document does not fit `T`.
pub fn decode_record<T: DeserializeOwned>(record: CountryRecord) -> Result<T, CountryApiError> {
    serde_json::from_value(record).map_err(|e| CountryApiError::Decode(e.to_string()))
}
