//! Validated configuration after merging files, preset, and CLI overrides.
//!
//! This module contains the final, validated settings record used by the
//! application. Validation runs during construction, before any network
//! I/O is attempted.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::api::Priority;

use super::cli::Cli;
use super::document::{ConfigDocument, default_config_template};
use super::error::{ConfigError, field};
use super::locate::SearchPaths;
use super::settings::Settings;

/// Fully validated configuration ready for use by the application.
///
/// All mandatory fields are present and the endpoint has parsed as a URL.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] for the full pipeline (locate, parse,
/// merge, overlay, validate) or [`ValidatedConfig::from_raw`] to validate
/// against already-parsed documents.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Message API endpoint
    pub api_url: Url,

    /// User key
    pub api_user: String,

    /// Application token
    pub api_token: String,

    /// Target devices; empty means every device registered to the user
    pub devices: Vec<String>,

    /// Message body from the command line; read from stdin when `None`
    pub body: Option<String>,

    /// Message title
    pub title: Option<String>,

    /// Supplementary URL shown with the message
    pub msg_url: Option<String>,

    /// Title of the supplementary URL
    pub msg_url_title: Option<String>,

    /// Message priority
    pub priority: Priority,

    /// Dry-run mode (log the request without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let devices = if self.devices.is_empty() {
            "all".to_owned()
        } else {
            self.devices.join(",")
        };

        write!(
            f,
            "Config {{ url: {}, user: {}, token: <redacted>, devices: {}, priority: {}, \
             dry_run: {} }}",
            self.api_url, self.api_user, devices, self.priority, self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and parsed
    /// documents given lowest to highest priority.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selected preset exists in no document
    /// - A mandatory field (`api_url`, `api_user`, `api_token`) is still
    ///   empty after every overlay
    /// - The resolved endpoint is not a valid URL
    pub fn from_raw(cli: &Cli, docs: &[ConfigDocument]) -> Result<Self, ConfigError> {
        let mut settings = Settings::merge_documents(docs, cli.preset.as_deref())?;
        settings.apply_cli(cli);
        Self::from_settings(settings, cli)
    }

    /// Loads and merges configuration from disk and the command line.
    ///
    /// With `--config FILE` only that file is loaded; otherwise every
    /// existing file from the search paths is, in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or if the
    /// merged configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let docs = load_documents(cli.config.as_deref())?;
        Self::from_raw(cli, &docs)
    }

    fn from_settings(settings: Settings, cli: &Cli) -> Result<Self, ConfigError> {
        let api_url = non_blank(settings.api_url);
        let api_user = non_blank(settings.api_user);
        let api_token = non_blank(settings.api_token);

        let mut missing = Vec::new();
        if api_url.is_none() {
            missing.push(field::API_URL);
        }
        if api_user.is_none() {
            missing.push(field::API_USER);
        }
        if api_token.is_none() {
            missing.push(field::API_TOKEN);
        }

        let (Some(api_url), Some(api_user), Some(api_token)) = (api_url, api_user, api_token)
        else {
            return Err(ConfigError::missing(
                missing,
                "Set them in a config file or pass --url/--user/--token",
            ));
        };

        let api_url = Url::parse(&api_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_url,
            api_user,
            api_token,
            devices: settings.devices.as_list().to_vec(),
            body: cli.message_text(),
            title: cli.title.clone(),
            msg_url: cli.msg_url.clone(),
            msg_url_title: cli.msg_url_title.clone(),
            priority: cli.priority.map(Into::into).unwrap_or_default(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }
}

/// Loads configuration documents in merge order, lowest to highest priority.
///
/// An explicit file bypasses the search order entirely and must be
/// readable; searched files are only loaded when present.
///
/// # Errors
///
/// Returns an error if any file cannot be read or parsed.
pub fn load_documents(explicit: Option<&Path>) -> Result<Vec<ConfigDocument>, ConfigError> {
    let paths = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => SearchPaths::from_env().existing(),
    };

    paths
        .iter()
        .map(|p| {
            tracing::debug!("loading config '{}'", p.display());
            ConfigDocument::load(p)
        })
        .collect()
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
