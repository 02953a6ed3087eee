//! Configuration layer for the pushover client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Config file location ([`SearchPaths`])
//! - Config file parsing ([`ConfigDocument`])
//! - Merging and command line overlay ([`Settings`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Selected preset section** - The `[name]` section chosen with `--preset`,
//!    taken from every config file in file-priority order
//! 3. **Default sections** - The unnamed section of every config file, in
//!    file-priority order
//!
//! File priority follows the XDG search order: the user file
//! (`$XDG_CONFIG_HOME/pushover/pushover.conf`) overrides the system files
//! (`$XDG_CONFIG_DIRS/pushover/pushover.conf`). Passing `--config FILE`
//! bypasses the search order entirely and loads only that file.
//!
//! # Replacement semantics
//!
//! Every overlay step replaces fields wholesale. In particular the device
//! list is **replaced**, never merged: a higher-priority source that names
//! devices redirects delivery entirely rather than fanning out to devices
//! accumulated from lower-priority sources. A bare `api_device` line (no
//! value) explicitly clears an inherited device list, restoring delivery to
//! all devices.

mod cli;
pub mod defaults;
mod document;
mod error;
mod locate;
mod settings;
mod validated;

#[cfg(test)]
mod locate_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, PriorityArg};
pub use document::{ConfigDocument, ParseError, Section, default_config_template};
pub use error::ConfigError;
pub use locate::SearchPaths;
pub use settings::{DeviceSelection, Settings, known_presets};
pub use validated::{ValidatedConfig, load_documents, write_default_config};
