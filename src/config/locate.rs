//! Configuration file location.
//!
//! Resolves the XDG base directories into an ordered list of candidate
//! config file paths. Environment lookups happen once, in [`SearchPaths::from_env`];
//! the resolution logic itself takes explicit inputs so it can be tested
//! without mutating the process environment.

use std::env;
use std::path::PathBuf;

use super::defaults;

/// Ordered configuration search paths.
///
/// Base directories are held lowest to highest priority: entries later in
/// the list override earlier ones during the merge. Duplicate directories
/// keep their first (lowest-priority) position.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Resolves search paths from explicit inputs.
    ///
    /// `system_dirs` is a colon-separated directory list in XDG convention,
    /// most important directory first; it is reversed here so the merge can
    /// run lowest priority first. `user_dir` is the user config base
    /// directory and takes priority over every system directory; `None`
    /// skips the user tier.
    #[must_use]
    pub fn resolve(system_dirs: &str, user_dir: Option<PathBuf>) -> Self {
        let mut system: Vec<PathBuf> = env::split_paths(system_dirs)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        system.reverse();

        let mut dirs = system;
        if let Some(user) = user_dir {
            dirs.push(user);
        }
        dedup_keep_first(&mut dirs);

        Self { dirs }
    }

    /// Resolves search paths from the process environment.
    ///
    /// `XDG_CONFIG_DIRS` falls back to `/etc/xdg` when unset or empty;
    /// `XDG_CONFIG_HOME` falls back to the platform config directory
    /// (`~/.config` on Linux). The user tier is skipped entirely when no
    /// home directory can be determined.
    #[must_use]
    pub fn from_env() -> Self {
        let system = env::var(defaults::SYSTEM_DIRS_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::SYSTEM_DIRS_FALLBACK.to_string());

        let user = env::var(defaults::USER_DIRS_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::config_dir);

        Self::resolve(&system, user)
    }

    /// Returns the base directories, lowest to highest priority.
    #[must_use]
    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Yields every candidate config file path, lowest to highest priority.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs
            .iter()
            .map(|d| d.join(defaults::CONFIG_DIR_NAME).join(defaults::CONFIG_FILE_NAME))
    }

    /// Returns the candidate paths that exist on disk, lowest to highest
    /// priority.
    ///
    /// Finding zero files is not an error; validation of the merged result
    /// happens later.
    #[must_use]
    pub fn existing(&self) -> Vec<PathBuf> {
        self.candidates().filter(|p| p.is_file()).collect()
    }
}

/// Removes duplicate directories, keeping each first occurrence in place.
fn dedup_keep_first(dirs: &mut Vec<PathBuf>) {
    let mut seen: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    dirs.retain(|d| {
        if seen.contains(d) {
            false
        } else {
            seen.push(d.clone());
            true
        }
    });
}
