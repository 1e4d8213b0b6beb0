//! Outbound HTTP host-service contracts.
//!
//! Only read-only `GET` requests are modeled. Transport implementations resolve a request to an
//! [`HttpResponse`] whenever the remote service answered at all; status interpretation belongs to
//! the caller.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`HttpTransport`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status line and body text of a completed HTTP exchange.
pub struct HttpResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Builds a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Host service issuing HTTP `GET` requests.
pub trait HttpTransport {
    /// Issues a `GET` for `url`.
    ///
    /// The error string describes a network-level failure (DNS, refused connection, aborted
    /// request) that happened before any status was obtained.
    fn get<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Rc<T> {
    fn get<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        (**self).get(url)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport for hosts without network access. Every request fails at the transport level.
pub struct NoopHttpTransport;

impl HttpTransport for NoopHttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move { Err(format!("network unavailable: GET {url}")) })
    }
}

#[derive(Debug, Default)]
struct MemoryHttpState {
    routes: HashMap<String, Result<HttpResponse, String>>,
    requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Scripted in-memory transport keyed by exact URL.
///
/// Requests are recorded in issue order. A URL without a scripted outcome fails at the transport
/// level.
pub struct MemoryHttpTransport {
    inner: Rc<RefCell<MemoryHttpState>>,
}

impl MemoryHttpTransport {
    /// Scripts a response for `url`, replacing any previous outcome.
    pub fn respond(&self, url: impl Into<String>, response: HttpResponse) -> &Self {
        self.inner
            .borrow_mut()
            .routes
            .insert(url.into(), Ok(response));
        self
    }

    /// Scripts a transport-level failure for `url`.
    pub fn fail(&self, url: impl Into<String>, message: impl Into<String>) -> &Self {
        self.inner
            .borrow_mut()
            .routes
            .insert(url.into(), Err(message.into()));
        self
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

impl HttpTransport for MemoryHttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.requests.push(url.to_string());
            state
                .routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("no scripted response for GET {url}")))
        })
    }
}
