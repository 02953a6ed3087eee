//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::time::Duration;

/// Pushover message API endpoint written into generated configuration templates.
///
/// There is no built-in fallback to this value at runtime: `api_url` must be
/// set in a config file or on the command line, so that an empty
/// configuration is reported as incomplete instead of silently targeting
/// the public API with missing credentials.
pub const API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Directory name under each config base directory.
pub const CONFIG_DIR_NAME: &str = "pushover";

/// Config file basename.
pub const CONFIG_FILE_NAME: &str = "pushover.conf";

/// Environment variable naming the user config base directory.
pub const USER_DIRS_VAR: &str = "XDG_CONFIG_HOME";

/// Environment variable naming the system config base directories.
pub const SYSTEM_DIRS_VAR: &str = "XDG_CONFIG_DIRS";

/// Fallback for [`SYSTEM_DIRS_VAR`] when unset or empty.
pub const SYSTEM_DIRS_FALLBACK: &str = "/etc/xdg";

/// Bound on how long a single send request may take.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
