//! Message sender trait and Pushover API implementation.

use serde::Deserialize;

use super::{HttpClient, HttpRequest, HttpResponse, Message, SendError};

/// Response payload from the message API.
///
/// `status == 1` means the message was accepted; any other value is a
/// rejection described by `errors`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// 1 on success
    pub status: i64,
    /// Request id assigned by the service
    #[serde(default)]
    pub request: Option<String>,
    /// Diagnostic messages for rejected requests
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Confirmation of an accepted delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Request id assigned by the service, when provided
    pub request: Option<String>,
}

/// Trait for sending one message to the notification service.
///
/// This abstraction allows different delivery mechanisms and enables
/// testing with mocks. Implementations issue a single best-effort request;
/// retrying is the caller's concern (and deliberately not done here).
pub trait MessageSender: Send + Sync {
    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the request fails or the service rejects
    /// the message.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<Receipt, SendError>> + Send;
}

/// Pushover API client.
///
/// Issues exactly one form-encoded POST per send and decodes the JSON
/// response payload. The remote diagnostic messages are surfaced verbatim
/// in [`SendError::Rejected`].
///
/// # Example
///
/// ```
/// use pushover::api::{PushoverApi, ReqwestClient};
/// use url::Url;
///
/// let api = PushoverApi::new(
///     ReqwestClient::new(),
///     Url::parse("https://api.pushover.net/1/messages.json").unwrap(),
///     "user-key",
///     "app-token",
/// )
/// .with_devices(vec!["phone".to_owned()]);
/// ```
#[derive(Debug)]
pub struct PushoverApi<C> {
    client: C,
    url: url::Url,
    user: String,
    token: String,
    devices: Vec<String>,
}

impl<C> PushoverApi<C> {
    /// Creates an API client targeting every device registered to the user.
    #[must_use]
    pub fn new(
        client: C,
        url: url::Url,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url,
            user: user.into(),
            token: token.into(),
            devices: Vec::new(),
        }
    }

    /// Restricts delivery to the given devices. An empty list targets all
    /// devices.
    #[must_use]
    pub fn with_devices(mut self, devices: Vec<String>) -> Self {
        self.devices = devices;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    fn build_request(&self, message: &Message) -> HttpRequest {
        let mut request = HttpRequest::new(self.url.clone())
            .with_param("token", self.token.clone())
            .with_param("user", self.user.clone());

        if !self.devices.is_empty() {
            request = request.with_param("device", self.devices.join(","));
        }

        for (name, value) in message.params() {
            request = request.with_param(name, value);
        }

        request
    }
}

impl<C: HttpClient> MessageSender for PushoverApi<C> {
    async fn send(&self, message: &Message) -> Result<Receipt, SendError> {
        let request = self.build_request(message);
        let response = self.client.request(request).await?;
        interpret_response(response)
    }
}

/// Decodes the API payload and maps it to a delivery outcome.
///
/// The service answers with the same payload shape on every status code,
/// so the body is decoded regardless of HTTP status and the HTTP status is
/// only reported alongside a rejection.
fn interpret_response(response: HttpResponse) -> Result<Receipt, SendError> {
    let payload: ApiResponse =
        serde_json::from_slice(&response.body).map_err(|e| SendError::MalformedResponse {
            status: response.status,
            reason: e.to_string(),
        })?;

    if payload.status == 1 {
        return Ok(Receipt {
            request: payload.request,
        });
    }

    let errors = if payload.errors.is_empty() {
        vec!["delivery failed".to_owned()]
    } else {
        payload.errors
    };

    Err(SendError::Rejected {
        status: response.status,
        errors,
    })
}
