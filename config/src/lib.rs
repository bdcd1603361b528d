//! Configuration loading for Valman.
//!
//! The config file lives at `~/.valman/config.toml`:
//!
//! ```toml
//! [editor]
//! marker = "||"
//! prompt = "> "
//! matching = "prefix"
//!
//! [registry]
//! path = "~/values.txt"
//! ```
//!
//! Every table and field is optional. A missing file means defaults.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use valman_types::EditorSettings;

#[derive(Debug, Default, Deserialize)]
pub struct ValmanConfig {
    pub editor: Option<EditorSettings>,
    pub registry: Option<RegistryConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    /// Default backing file; a leading `~/` expands to the home directory.
    pub path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ValmanConfig {
    /// Load the user config. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match valman_utils::read_text_file(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn editor_settings(&self) -> EditorSettings {
        self.editor.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn registry_path(&self) -> Option<PathBuf> {
        self.registry
            .as_ref()
            .and_then(|registry| registry.path.as_deref())
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(expand_home)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".valman").join("config.toml"))
}

/// Expand a leading `~/` to the home directory.
#[must_use]
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}
