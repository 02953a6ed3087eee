//! HTTP request/response types and client trait.

use super::HttpError;

/// A form-encoded POST request to be sent.
///
/// The Pushover message API takes `application/x-www-form-urlencoded`
/// parameters, so the request is modeled as a target URL plus an ordered
/// parameter list. This is a value type that can be constructed and passed
/// to any [`HttpClient`] implementation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL
    pub url: url::Url,
    /// Form parameters, in the order they were added
    pub form: Vec<(&'static str, String)>,
}

impl HttpRequest {
    /// Creates a request with an empty parameter list.
    #[must_use]
    pub const fn new(url: url::Url) -> Self {
        Self { url, form: Vec::new() }
    }

    /// Appends a form parameter.
    #[must_use]
    pub fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.form.push((name, value.into()));
        self
    }

    /// Looks up the first parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response received from a server.
///
/// Contains the status code and the fully buffered body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for making HTTP requests.
///
/// Abstracts the HTTP client implementation, enabling dependency injection
/// for testing with mock clients and swapping HTTP libraries without
/// changing calling code.
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the connection fails, the request times
    /// out, or the URL is rejected by the transport.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
