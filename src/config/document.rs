//! Sectioned configuration file parsing.
//!
//! The `pushover.conf` format is a flat sectioned key/value text format:
//! entries before any `[name]` header form the default section, each
//! `[name]` header opens a preset section. An entry is either `key = value`
//! or a bare `key`, the latter carrying no value at all (the explicit clear
//! marker for list-valued keys such as `api_device`).

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ConfigError;
use super::defaults;

/// Parse failure within one file, with the offending 1-based line number.
///
/// [`ConfigDocument::load`] wraps this into [`ConfigError::Malformed`]
/// together with the file path.
#[derive(Debug, Error)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number of the offending line
    pub line: usize,
    /// Human-readable description of the problem
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// One configuration section: an ordered key/value mapping.
///
/// A value of `None` records a bare `key` line. Duplicate keys keep their
/// first position; the last occurrence's value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, Option<String>)>,
}

impl Section {
    fn set(&mut self, key: &str, value: Option<String>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key.to_owned(), value));
        }
    }

    /// Looks up a key. The outer `Option` is presence, the inner one
    /// distinguishes `key = value` from a bare `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Iterates entries in their original order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns true if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The parsed contents of one configuration file.
///
/// Immutable after parsing; discarded once merged into
/// [`Settings`](super::Settings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    source: Option<PathBuf>,
    defaults: Section,
    presets: Vec<(String, Section)>,
}

impl ConfigDocument {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read and
    /// [`ConfigError::Malformed`] (with path and line number) if it cannot
    /// be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut doc = Self::parse(&content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;
        doc.source = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Parses configuration text.
    ///
    /// Leading and trailing whitespace around keys and values is
    /// insignificant. Blank lines and lines starting with `#` or `;` are
    /// skipped. A repeated `[name]` header reopens the existing section.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed section headers and invalid
    /// entry lines.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut doc = Self::default();
        // Index into `presets`; `None` targets the default section.
        let mut current: Option<usize> = None;

        for (idx, raw) in content.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = section_name(rest, lineno)?;
                current = Some(doc.open_preset(name));
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim().to_owned())),
                None => (line, None),
            };

            if key.is_empty() {
                return Err(ParseError::new(lineno, "entry with empty key"));
            }
            if key.contains('[') || key.contains(']') {
                return Err(ParseError::new(lineno, format!("invalid entry '{line}'")));
            }

            let section = match current {
                None => &mut doc.defaults,
                Some(i) => &mut doc.presets[i].1,
            };
            section.set(key, value);
        }

        Ok(doc)
    }

    fn open_preset(&mut self, name: &str) -> usize {
        if let Some(i) = self.presets.iter().position(|(n, _)| n == name) {
            i
        } else {
            self.presets.push((name.to_owned(), Section::default()));
            self.presets.len() - 1
        }
    }

    /// Returns the file this document was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the default (unnamed) section.
    #[must_use]
    pub const fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Looks up a preset section by exact name.
    #[must_use]
    pub fn preset(&self, name: &str) -> Option<&Section> {
        self.presets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Iterates preset names in declaration order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|(n, _)| n.as_str())
    }
}

fn section_name(rest: &str, line: usize) -> Result<&str, ParseError> {
    let Some(name) = rest.strip_suffix(']') else {
        let reason = if rest.contains(']') {
            "unexpected characters after ']'"
        } else {
            "unterminated section header"
        };
        return Err(ParseError::new(line, reason));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::new(line, "empty section name"));
    }
    Ok(name)
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    format!(
        r"# Pushover configuration file
#
# Entries before any [section] header apply unless overridden by a selected
# preset or by command line flags. Search locations can be listed with
# 'pushover paths'.

# Message API endpoint (required)
api_url = {api_url}

# Your user key (required)
# api_user = your-user-key

# Your application token (required)
# api_token = your-application-token

# Deliver to specific devices only, comma separated (default: all devices).
# A bare 'api_device' line with no value clears a list inherited from a
# lower priority file.
# api_device = phone,tablet

# Presets are named sections selected with --preset. A preset overrides
# individual keys, the rest keeps its defaults.
# [work]
# api_token = work-application-token
# api_device = phone
",
        api_url = defaults::API_URL
    )
}
