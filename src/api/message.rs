//! Message parameters for the Pushover API.

use std::fmt;

/// Message priority, from `lowest` (-2) to `emergency` (2).
///
/// The API consumes the integer level; the names exist for the CLI and
/// for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    /// No sound or vibration, and no banner (-2)
    Lowest,
    /// No sound or vibration (-1)
    Low,
    /// Regular notification (0)
    #[default]
    Normal,
    /// Bypasses the recipient's quiet hours (1)
    High,
    /// Repeats until acknowledged (2)
    Emergency,
}

impl Priority {
    /// Returns the integer level the API expects.
    #[must_use]
    pub const fn level(self) -> i8 {
        match self {
            Self::Lowest => -2,
            Self::Low => -1,
            Self::Normal => 0,
            Self::High => 1,
            Self::Emergency => 2,
        }
    }

    /// Returns the priority name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Container structure for one message's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message text
    pub body: String,
    /// Optional title; the service shows the application name when absent
    pub title: Option<String>,
    /// Optional supplementary URL
    pub url: Option<String>,
    /// Optional title for the supplementary URL
    pub url_title: Option<String>,
    /// Priority
    pub priority: Priority,
}

impl Message {
    /// Creates a message with the given body and default priority.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            url: None,
            url_title: None,
            priority: Priority::default(),
        }
    }

    /// Sets the message title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the supplementary URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the title of the supplementary URL.
    #[must_use]
    pub fn with_url_title(mut self, title: impl Into<String>) -> Self {
        self.url_title = Some(title.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the form parameters for this message.
    ///
    /// Optional fields are omitted when absent; the priority is always sent
    /// as its integer level.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("message", self.body.clone()),
            ("priority", self.priority.level().to_string()),
        ];

        if let Some(title) = &self.title {
            params.push(("title", title.clone()));
        }
        if let Some(url) = &self.url {
            params.push(("url", url.clone()));
        }
        if let Some(url_title) = &self.url_title {
            params.push(("url_title", url_title.clone()));
        }

        params
    }
}
