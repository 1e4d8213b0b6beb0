//! HTTP transport adapter backed by the browser `fetch` API.

use platform_host::{HttpFuture, HttpResponse, HttpTransport};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser `fetch` transport. Requests carry no body, credentials or custom headers.
pub struct WebFetchTransport;

impl HttpTransport for WebFetchTransport {
    fn get<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move { bridge::fetch_text(url).await })
    }
}
