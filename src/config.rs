//! Configuration loading for the dispatcher.
//!
//! The configuration is a flat INI file, by default at `~/.notifier`. Each
//! section names a notification backend and its key/value pairs become that
//! backend's constructor arguments. The file is parsed once at startup and
//! is read-only afterwards.

use ini::{Ini, Properties};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The default configuration file name, resolved under the home directory.
pub const CONFIG_FILE_NAME: &str = ".notifier";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to load configuration from {}: {}", path.display(), source)]
    Load {
        path: PathBuf,
        source: ini::Error,
    },
}

/// The parsed configuration document.
#[derive(Debug)]
pub struct Config {
    doc: Ini,
}

impl Config {
    /// Returns the default configuration path, `~/.notifier`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Loads the configuration from the given file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = Ini::load_from_file(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { doc })
    }

    /// Parses a configuration document from a string.
    pub fn from_str(content: &str) -> Result<Self, ini::ParseError> {
        let doc = Ini::load_from_str(content)?;
        Ok(Self { doc })
    }

    /// Iterates the named sections in file order. Keys outside any section
    /// have no backend to bind to and are not yielded.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Properties)> {
        self.doc
            .iter()
            .filter_map(|(name, props)| name.map(|n| (n, props)))
    }
}
