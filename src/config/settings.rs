//! The settings record and its merge pipeline.
//!
//! [`Settings`] is built up in three ordered overlay stages: config file
//! default sections, the selected preset section, then command line
//! overrides. Every stage replaces fields wholesale; see the module
//! documentation of [`super`] for the replacement semantics.

use std::path::Path;

use super::ConfigError;
use super::cli::Cli;
use super::document::{ConfigDocument, Section};

/// Delivery target selection for a message.
///
/// Distinguishes "not mentioned" from "explicitly emptied": both deliver to
/// all devices, but `Cleared` replaces a device list inherited from a
/// lower-priority source while `Unset` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeviceSelection {
    /// No source mentioned the device key; deliver to all devices.
    #[default]
    Unset,
    /// A source explicitly cleared the device list (bare or empty
    /// `api_device`); deliver to all devices.
    Cleared,
    /// Deliver only to the listed devices.
    Devices(Vec<String>),
}

impl DeviceSelection {
    /// Returns the targeted devices, empty meaning all devices.
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::Devices(list) => list,
            Self::Unset | Self::Cleared => &[],
        }
    }
}

/// The running settings record built up by the merge pipeline.
///
/// Fields hold raw strings until [`validation`](super::ValidatedConfig)
/// turns the record into a request-ready configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Message API endpoint
    pub api_url: Option<String>,
    /// User key
    pub api_user: Option<String>,
    /// Application token
    pub api_token: Option<String>,
    /// Target devices
    pub devices: DeviceSelection,
}

impl Settings {
    /// Merges documents given lowest to highest priority, then overlays the
    /// selected preset section in the same order.
    ///
    /// Documents without a section matching `preset` contribute nothing to
    /// the preset pass.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if a preset was selected but
    /// no document contains a section with that name.
    pub fn merge_documents(
        docs: &[ConfigDocument],
        preset: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        for doc in docs {
            settings.apply_defaults(doc);
        }

        if let Some(name) = preset {
            let mut found = false;
            for doc in docs {
                found |= settings.apply_preset(doc, name);
            }
            if !found {
                return Err(ConfigError::UnknownPreset {
                    name: name.to_owned(),
                    known: known_presets(docs),
                });
            }
        }

        Ok(settings)
    }

    /// Overlays a document's default section onto this record.
    pub fn apply_defaults(&mut self, doc: &ConfigDocument) {
        self.apply_section(doc.defaults(), doc.source());
    }

    /// Overlays a document's preset section onto this record, if the
    /// document has one. Returns whether it did.
    pub fn apply_preset(&mut self, doc: &ConfigDocument, name: &str) -> bool {
        match doc.preset(name) {
            Some(section) => {
                self.apply_section(section, doc.source());
                true
            }
            None => false,
        }
    }

    fn apply_section(&mut self, section: &Section, origin: Option<&Path>) {
        for (key, value) in section.entries() {
            self.apply_entry(key, value, origin);
        }
    }

    fn apply_entry(&mut self, key: &str, value: Option<&str>, origin: Option<&Path>) {
        match key {
            "api_url" => self.api_url = scalar(value),
            "api_user" | "user" => self.api_user = scalar(value),
            "api_token" | "token" => self.api_token = scalar(value),
            "api_device" | "device" => {
                let list = value.map(split_devices).unwrap_or_default();
                self.devices = if list.is_empty() {
                    DeviceSelection::Cleared
                } else {
                    DeviceSelection::Devices(list)
                };
            }
            other => {
                let origin = origin.map_or_else(String::new, |p| format!(" in '{}'", p.display()));
                tracing::warn!("ignoring unrecognized config key '{other}'{origin}");
            }
        }
    }

    /// Overlays the values explicitly provided on the command line.
    ///
    /// Each provided field fully replaces the merged value; fields not
    /// mentioned on the command line are left untouched. This stage has
    /// strictly higher precedence than every config file and preset.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.api_url = Some(url.clone());
        }
        if let Some(user) = &cli.user {
            self.api_user = Some(user.clone());
        }
        if let Some(token) = &cli.token {
            self.api_token = Some(token.clone());
        }
        if !cli.devices.is_empty() {
            let list: Vec<String> = cli
                .devices
                .iter()
                .flat_map(|d| split_devices(d))
                .collect();
            self.devices = if list.is_empty() {
                DeviceSelection::Cleared
            } else {
                DeviceSelection::Devices(list)
            };
        }
    }
}

/// Preset names found across the documents, in first-seen order.
#[must_use]
pub fn known_presets(docs: &[ConfigDocument]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for doc in docs {
        for name in doc.preset_names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
        }
    }
    names
}

/// A bare key or an empty value clears a scalar field back to unset.
fn scalar(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

fn split_devices(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
