//! Read-only REST Countries client.
//!
//! Every operation is a single request/response round trip: no retry, timeout, pagination,
//! caching or de-duplication of in-flight requests. Failures are returned to the caller unchanged.

use leptos::logging::{error, log};
use platform_host::{HttpResponse, HttpTransport};
use serde_json::Value;

use crate::{
    endpoints, CountriesApiConfig, CountryApiError, CountryLookup, CountryMatch, CountryRecord,
};

/// Client for the country service, generic over the host HTTP transport.
#[derive(Debug, Clone)]
pub struct CountriesClient<T> {
    transport: T,
    config: CountriesApiConfig,
}

impl<T: HttpTransport> CountriesClient<T> {
    /// Creates a client with [`CountriesApiConfig::default`].
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, CountriesApiConfig::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(transport: T, config: CountriesApiConfig) -> Self {
        Self { transport, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &CountriesApiConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches every country from the collection endpoint.
    ///
    /// # Errors
    ///
    /// - [`CountryApiError::RemoteService`] for a non-2xx status.
    /// - [`CountryApiError::Transport`] when no response was obtained.
    /// - [`CountryApiError::Decode`] when the body is not a JSON array.
    pub async fn fetch_all_countries(&self) -> Result<Vec<CountryRecord>, CountryApiError> {
        let result = self.fetch_collection().await;
        match &result {
            Ok(records) => log!("fetched {} countries", records.len()),
            Err(err) => error!("fetching countries failed: {err}"),
        }
        result
    }

    async fn fetch_collection(&self) -> Result<Vec<CountryRecord>, CountryApiError> {
        let response = self.get(&endpoints::collection_url(&self.config)).await?;
        if !response.is_success() {
            return Err(CountryApiError::RemoteService {
                status: response.status,
            });
        }
        expect_array(parse_body(&response.body)?)
    }

    /// Looks a country up by name or code.
    ///
    /// Name lookups return every match ([`CountryMatch::Matches`]); code lookups return the single
    /// matched document ([`CountryMatch::Single`]).
    ///
    /// # Errors
    ///
    /// - [`CountryApiError::InvalidIdentifier`] for a blank name or a malformed code; no request
    ///   is issued.
    /// - [`CountryApiError::NotFound`] when a name lookup is rejected or a code lookup matches
    ///   nothing.
    /// - [`CountryApiError::RemoteService`] when a code lookup is rejected.
    /// - [`CountryApiError::Transport`] / [`CountryApiError::Decode`] as for
    ///   [`Self::fetch_all_countries`].
    pub async fn fetch_country_by_identifier(
        &self,
        lookup: &CountryLookup,
    ) -> Result<CountryMatch, CountryApiError> {
        match lookup {
            CountryLookup::Name(name) => self.lookup_name(name).await.map(CountryMatch::Matches),
            CountryLookup::Code(code) => self.lookup_code(code).await.map(CountryMatch::Single),
        }
    }

    /// Name lookup returning every match. See [`Self::fetch_country_by_identifier`].
    ///
    /// # Errors
    ///
    /// As for [`Self::fetch_country_by_identifier`].
    pub async fn fetch_countries_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<CountryRecord>, CountryApiError> {
        self.lookup_name(name).await
    }

    /// Code lookup returning the single match. See [`Self::fetch_country_by_identifier`].
    ///
    /// # Errors
    ///
    /// As for [`Self::fetch_country_by_identifier`].
    pub async fn fetch_country_by_code(
        &self,
        code: &str,
    ) -> Result<CountryRecord, CountryApiError> {
        self.lookup_code(code).await
    }

    async fn lookup_name(&self, name: &str) -> Result<Vec<CountryRecord>, CountryApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CountryApiError::InvalidIdentifier(name.to_string()));
        }

        let response = self.get(&endpoints::name_url(&self.config, name)).await?;
        if !response.is_success() {
            return Err(CountryApiError::NotFound {
                identifier: name.to_string(),
                status: Some(response.status),
            });
        }
        expect_array(parse_body(&response.body)?)
    }

    async fn lookup_code(&self, code: &str) -> Result<CountryRecord, CountryApiError> {
        let code = normalize_code(code)?;
        let response = self.get(&endpoints::code_url(&self.config, &code)).await?;
        if !response.is_success() {
            return Err(CountryApiError::RemoteService {
                status: response.status,
            });
        }

        match parse_body(&response.body)? {
            // With `fields` the service answers with a bare object instead of a one-element list.
            record @ Value::Object(_) => Ok(record),
            Value::Array(records) => records.into_iter().next().ok_or(CountryApiError::NotFound {
                identifier: code,
                status: None,
            }),
            other => Err(CountryApiError::Decode(format!(
                "expected a country object or array, got {}",
                json_kind(&other)
            ))),
        }
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, CountryApiError> {
        self.transport
            .get(url)
            .await
            .map_err(CountryApiError::Transport)
    }
}

/// Validates and upper-cases a two- or three-character country code.
///
/// # Errors
///
/// Returns [`CountryApiError::InvalidIdentifier`] for anything else.
pub fn normalize_code(code: &str) -> Result<String, CountryApiError> {
    let trimmed = code.trim();
    let valid = (2..=3).contains(&trimmed.len())
        && trimmed.bytes().all(|b| b.is_ascii_alphanumeric());
    if !valid {
        return Err(CountryApiError::InvalidIdentifier(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn parse_body(body: &str) -> Result<Value, CountryApiError> {
    serde_json::from_str(body).map_err(|e| CountryApiError::Decode(e.to_string()))
}

fn expect_array(value: Value) -> Result<Vec<CountryRecord>, CountryApiError> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(CountryApiError::Decode(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryHttpTransport, NoopHttpTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const BASE: &str = "https://countries.test/v3.1";

    fn client() -> (CountriesClient<MemoryHttpTransport>, MemoryHttpTransport) {
        let transport = MemoryHttpTransport::default();
        let config = CountriesApiConfig {
            base_url: BASE.to_string(),
            ..CountriesApiConfig::default()
        };
        (
            CountriesClient::with_config(transport.clone(), config),
            transport,
        )
    }

    fn collection_url(client: &CountriesClient<MemoryHttpTransport>) -> String {
        endpoints::collection_url(client.config())
    }

    #[test]
    fn error_statuses_on_the_collection_become_remote_service_errors() {
        let (client, transport) = client();
        for status in [400, 401, 404, 429, 500, 502, 503] {
            transport.respond(
                collection_url(&client),
                HttpResponse::new(status, r#"{"message":"nope"}"#),
            );
            let err = block_on(client.fetch_all_countries()).expect_err("error status");
            assert_eq!(err, CountryApiError::RemoteService { status });
        }
    }

    #[test]
    fn redirect_statuses_are_not_success() {
        let (client, transport) = client();
        transport.respond(collection_url(&client), HttpResponse::new(304, ""));
        assert_eq!(
            block_on(client.fetch_all_countries()),
            Err(CountryApiError::RemoteService { status: 304 })
        );
    }

    #[test]
    fn successful_collection_is_returned_unmodified() {
        let (client, transport) = client();
        let body = r#"[{"name":{"common":"Norway"},"cca2":"NO","population":5379475,"extra":[1,2]},{"name":{"common":"Chad"},"cca2":"TD","capital":[]}]"#;
        for status in [200, 203] {
            transport.respond(collection_url(&client), HttpResponse::new(status, body));
            let records = block_on(client.fetch_all_countries()).expect("fetch all");
            let expected: Value = serde_json::from_str(body).expect("fixture json");
            assert_eq!(Value::Array(records), expected);
        }
        assert_eq!(
            transport.requests(),
            vec![collection_url(&client), collection_url(&client)]
        );
    }

    #[test]
    fn non_array_collection_body_is_a_decode_error() {
        let (client, transport) = client();
        transport.respond(
            collection_url(&client),
            HttpResponse::new(200, r#"{"status":404}"#),
        );
        assert!(matches!(
            block_on(client.fetch_all_countries()),
            Err(CountryApiError::Decode(_))
        ));

        transport.respond(collection_url(&client), HttpResponse::new(200, "<html>"));
        assert!(matches!(
            block_on(client.fetch_all_countries()),
            Err(CountryApiError::Decode(_))
        ));
    }

    #[test]
    fn transport_failures_propagate_unchanged() {
        let (client, transport) = client();
        transport.fail(collection_url(&client), "connection reset by peer");
        assert_eq!(
            block_on(client.fetch_all_countries()),
            Err(CountryApiError::Transport(
                "connection reset by peer".to_string()
            ))
        );

        let offline = CountriesClient::new(NoopHttpTransport);
        assert!(matches!(
            block_on(offline.fetch_country_by_code("NO")),
            Err(CountryApiError::Transport(_))
        ));
    }

    #[test]
    fn rejected_name_lookup_is_not_found() {
        let (client, transport) = client();
        transport.respond(
            format!("{BASE}/name/Norway"),
            HttpResponse::new(404, r#"{"status":404,"message":"Not Found"}"#),
        );
        let err = block_on(client.fetch_country_by_identifier(&CountryLookup::name("Norway")))
            .expect_err("404");
        assert_eq!(
            err,
            CountryApiError::NotFound {
                identifier: "Norway".to_string(),
                status: Some(404),
            }
        );
        assert_eq!(err.to_string(), "country not found");
    }

    #[test]
    fn name_lookup_returns_every_match() {
        let (client, transport) = client();
        transport.respond(
            format!("{BASE}/name/guinea"),
            HttpResponse::new(
                200,
                r#"[{"cca2":"GN"},{"cca2":"GQ"},{"cca2":"GW"},{"cca2":"PG"}]"#,
            ),
        );
        let matched =
            block_on(client.fetch_country_by_identifier(&CountryLookup::name(" guinea ")))
                .expect("lookup");
        assert_eq!(
            matched,
            CountryMatch::Matches(vec![
                json!({"cca2": "GN"}),
                json!({"cca2": "GQ"}),
                json!({"cca2": "GW"}),
                json!({"cca2": "PG"}),
            ])
        );
    }

    #[test]
    fn code_lookup_unwraps_the_single_element() {
        let (client, transport) = client();
        let url = endpoints::code_url(client.config(), "NO");
        transport.respond(
            url.clone(),
            HttpResponse::new(200, r#"[{"cca2":"NO","capital":["Oslo"]}]"#),
        );
        let matched = block_on(client.fetch_country_by_identifier(&CountryLookup::code("no")))
            .expect("lookup");
        assert_eq!(
            matched,
            CountryMatch::Single(json!({"cca2": "NO", "capital": ["Oslo"]}))
        );
        assert_eq!(transport.requests(), vec![url]);
    }

    #[test]
    fn code_lookup_accepts_a_bare_object() {
        let (client, transport) = client();
        transport.respond(
            endpoints::code_url(client.config(), "NOR"),
            HttpResponse::new(200, r#"{"cca3":"NOR"}"#),
        );
        assert_eq!(
            block_on(client.fetch_country_by_code("nor")),
            Ok(json!({"cca3": "NOR"}))
        );
    }

    #[test]
    fn code_lookup_errors_keep_their_status() {
        let (client, transport) = client();
        transport.respond(
            endpoints::code_url(client.config(), "XX"),
            HttpResponse::new(400, "{}"),
        );
        assert_eq!(
            block_on(client.fetch_country_by_code("XX")),
            Err(CountryApiError::RemoteService { status: 400 })
        );

        transport.respond(
            endpoints::code_url(client.config(), "ZZ"),
            HttpResponse::new(200, "[]"),
        );
        assert_eq!(
            block_on(client.fetch_country_by_code("ZZ")),
            Err(CountryApiError::NotFound {
                identifier: "ZZ".to_string(),
                status: None,
            })
        );
    }

    #[test]
    fn invalid_identifiers_never_reach_the_transport() {
        let (client, transport) = client();
        for code in ["", "N", "NORW", "N/O", "ÅÄ"] {
            assert!(matches!(
                block_on(client.fetch_country_by_code(code)),
                Err(CountryApiError::InvalidIdentifier(_))
            ));
        }
        assert!(matches!(
            block_on(client.fetch_countries_by_name("   ")),
            Err(CountryApiError::InvalidIdentifier(_))
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn normalize_code_accepts_numeric_and_alpha_codes() {
        assert_eq!(normalize_code(" no ").as_deref(), Ok("NO"));
        assert_eq!(normalize_code("578").as_deref(), Ok("578"));
    }
}
