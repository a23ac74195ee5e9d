//! Shared configuration loader for the gel toolchain.
//!
//! `defaults/gel.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GelConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gel_markup::{Indentation, Inserter};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/gel.default.toml");

/// Top-level configuration consumed by gel applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GelConfig {
    pub render: RenderConfig,
    pub include: IncludeConfig,
}

/// Serializer knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_string: String,
    pub increment: usize,
    pub compact: bool,
}

impl RenderConfig {
    /// The indentation the serializer should start from.
    pub fn indentation(&self) -> Indentation {
        Indentation::from(self)
    }
}

impl From<&RenderConfig> for Indentation {
    fn from(config: &RenderConfig) -> Self {
        if config.compact {
            return Indentation::none();
        }
        Indentation::new()
            .with_tab(config.indent_string.clone())
            .with_increment(config.increment)
    }
}

impl From<RenderConfig> for Indentation {
    fn from(config: RenderConfig) -> Self {
        Indentation::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludeConfig {
    pub root: PathBuf,
}

impl IncludeConfig {
    /// An inserter reading files relative to the configured root.
    pub fn inserter(&self) -> Inserter {
        Inserter::from_root(self.root.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GelConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GelConfig, ConfigError> {
    Loader::new().build()
}
