//! URL builders for the three endpoint shapes the client uses.

use crate::CountriesApiConfig;

/// Collection endpoint: `{base}/independent?status=..[&fields=..]`.
pub fn collection_url(config: &CountriesApiConfig) -> String {
    let mut url = format!(
        "{}/independent?status={}",
        config.base_url(),
        config.independent_only
    );
    if let Some(fields) = fields_param(config.list_fields.as_deref()) {
        url.push('&');
        url.push_str(&fields);
    }
    url
}

/// Name endpoint: `{base}/name/{percent-encoded name}[?fields=..]`.
pub fn name_url(config: &CountriesApiConfig, name: &str) -> String {
    with_fields(
        format!("{}/name/{}", config.base_url(), encode_path_segment(name)),
        config.name_fields.as_deref(),
    )
}

/// Code endpoint: `{base}/alpha/{code}[?fields=..]`. `code` is expected to be normalized already.
pub fn code_url(config: &CountriesApiConfig, code: &str) -> String {
    with_fields(
        format!("{}/alpha/{}", config.base_url(), encode_path_segment(code)),
        config.detail_fields.as_deref(),
    )
}

fn with_fields(mut url: String, fields: Option<&[String]>) -> String {
    if let Some(fields) = fields_param(fields) {
        url.push('?');
        url.push_str(&fields);
    }
    url
}

fn fields_param(fields: Option<&[String]>) -> Option<String> {
    let fields = fields?;
    let joined = fields
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    (!joined.is_empty()).then(|| format!("fields={joined}"))
}

/// Percent-encodes one URL path segment. RFC 3986 unreserved bytes pass through.
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
