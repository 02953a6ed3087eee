//! Application execution logic.
//!
//! Builds the message from the validated configuration (reading standard
//! input when no message text was given on the command line) and performs
//! the single send.

use thiserror::Error;

use pushover::api::{Message, MessageSender, PushoverApi, ReqwestClient, SendError};
use pushover::config::{ValidatedConfig, defaults};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the message body from standard input.
    #[error("Failed to read message from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// There is nothing to send.
    #[error("Refusing to send an empty message")]
    EmptyMessage,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// The delivery failed.
    #[error("Delivery failed: {0}")]
    Send(#[from] SendError),
}

/// Executes the send pipeline.
///
/// 1. Resolves the message body (command line text, stdin fallback)
/// 2. Builds the API client with a bounded request timeout
/// 3. Sends exactly one request and logs the receipt
///
/// # Errors
///
/// Returns an error if the body cannot be resolved, the client cannot be
/// constructed, or the delivery fails. Nothing is retried.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let body = resolve_body(&config)?;
    let message = build_message(&config, &body)?;

    if config.dry_run {
        tracing::info!(
            "Dry-run: would send {:?} to {} (devices: {})",
            message.body,
            config.api_url,
            if config.devices.is_empty() {
                "all".to_owned()
            } else {
                config.devices.join(",")
            },
        );
        return Ok(());
    }

    let api = create_api(&config)?;
    let receipt = api.send(&message).await?;

    match receipt.request {
        Some(id) => tracing::info!("Message sent (request {id})"),
        None => tracing::info!("Message sent"),
    }

    Ok(())
}

/// Returns the message body, falling back to standard input.
fn resolve_body(config: &ValidatedConfig) -> Result<String, RunError> {
    if let Some(text) = &config.body {
        return Ok(text.clone());
    }

    tracing::debug!("no message text given, reading stdin");
    std::io::read_to_string(std::io::stdin()).map_err(RunError::Stdin)
}

/// Builds the message parameters from the configuration and body text.
fn build_message(config: &ValidatedConfig, body: &str) -> Result<Message, RunError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(RunError::EmptyMessage);
    }

    let mut message = Message::new(body).with_priority(config.priority);

    if let Some(title) = &config.title {
        message = message.with_title(title.clone());
    }
    if let Some(url) = &config.msg_url {
        message = message.with_url(url.clone());
    }
    if let Some(url_title) = &config.msg_url_title {
        message = message.with_url_title(url_title.clone());
    }

    Ok(message)
}

/// Creates the API client from configuration.
fn create_api(config: &ValidatedConfig) -> Result<PushoverApi<ReqwestClient>, RunError> {
    let client = reqwest::Client::builder()
        .timeout(defaults::request_timeout())
        .build()
        .map_err(RunError::ClientInit)?;

    Ok(PushoverApi::new(
        ReqwestClient::from_client(client),
        config.api_url.clone(),
        config.api_user.clone(),
        config.api_token.clone(),
    )
    .with_devices(config.devices.clone()))
}
