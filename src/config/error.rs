//! Error types for configuration loading, parsing, and validation.

use std::path::PathBuf;

use thiserror::Error;

use super::document::ParseError;

/// Error type for configuration operations.
///
/// Covers errors from locating, parsing, merging, and validating
/// configuration sources. Every variant is fatal for the invocation;
/// nothing is recovered silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file that exists on disk.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("Malformed config file '{}', line {}: {}", path.display(), source.line, source.reason)]
    Malformed {
        /// Path to the config file
        path: PathBuf,
        /// Offending line and reason
        #[source]
        source: ParseError,
    },

    /// The selected preset does not exist in any configuration source.
    #[error("Unknown preset '{name}', known presets: [{}]", known.join(", "))]
    UnknownPreset {
        /// The requested preset name
        name: String,
        /// Preset names found across all sources, in discovery order
        known: Vec<String>,
    },

    /// Mandatory settings are still empty after merging and overrides.
    #[error("Missing required setting(s): {}. {hint}", fields.join(", "))]
    MissingRequired {
        /// Names of the missing fields
        fields: Vec<&'static str>,
        /// Hint for how to provide the values
        hint: &'static str,
    },

    /// The resolved API endpoint is not a valid URL.
    #[error("Invalid API url '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Failed to write a configuration file (for the init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The API endpoint field.
    pub const API_URL: &str = "api_url";
    /// The user key field.
    pub const API_USER: &str = "api_user";
    /// The application token field.
    pub const API_TOKEN: &str = "api_token";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for the given fields.
    #[must_use]
    pub const fn missing(fields: Vec<&'static str>, hint: &'static str) -> Self {
        Self::MissingRequired { fields, hint }
    }
}
