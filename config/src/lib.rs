//! Configuration loading for Concord.
//!
//! The config file is TOML, read from `$CONCORD_CONFIG` or
//! `~/.concord/config.toml`:
//!
//! ```toml
//! [reconcile]
//! composition = "pointwise"   # or "relational"
//!
//! [output]
//! pretty = false
//! ```
//!
//! Raw structs with `Option` fields stay private to this crate and are
//! resolved into [`Settings`] at the parse boundary.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use concord_types::{CompositionMode, CompositionParseError, ReconcileOptions};
use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CONCORD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] TomlError),
    #[error("invalid [reconcile] section")]
    Composition(#[from] CompositionParseError),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    reconcile: Option<RawReconcile>,
    output: Option<RawOutput>,
}

#[derive(Debug, Default, Deserialize)]
struct RawReconcile {
    composition: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutput {
    pretty: Option<bool>,
}

/// How the result document is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub reconcile: ReconcileOptions,
    pub output: OutputStyle,
}

impl Settings {
    /// Load from the default location.
    ///
    /// A missing file yields defaults. A file that cannot be read or parsed
    /// is logged and also yields defaults.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring config file");
                Self::default()
            }
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        raw.resolve()
    }
}

impl RawConfig {
    fn resolve(self) -> Result<Settings, ConfigError> {
        let composition = match self.reconcile.and_then(|r| r.composition) {
            Some(name) => name.parse::<CompositionMode>()?,
            None => CompositionMode::default(),
        };
        let output = match self.output.and_then(|o| o.pretty) {
            Some(true) => OutputStyle::Pretty,
            Some(false) | None => OutputStyle::Compact,
        };
        Ok(Settings {
            reconcile: ReconcileOptions::default().with_composition(composition),
            output,
        })
    }
}

/// Location of the config file: `$CONCORD_CONFIG` if set, otherwise
/// `~/.concord/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".concord").join("config.toml"))
}
