//! API layer for sending messages to the Pushover service.
//!
//! This module provides types and traits for:
//! - Message parameters ([`Message`], [`Priority`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - One-shot message delivery ([`MessageSender`], [`PushoverApi`])
//!
//! Delivery is best effort: exactly one request is issued per send, with no
//! retry or delivery confirmation. The remote response's diagnostic payload
//! is surfaced verbatim to the caller.

mod client;
mod error;
mod http;
mod message;
mod sender;

#[cfg(test)]
mod message_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::{Message, Priority};
pub use sender::{ApiResponse, MessageSender, PushoverApi, Receipt};
