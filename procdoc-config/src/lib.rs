//! Shared configuration loader for the procdoc toolchain.
//!
//! `defaults/procdoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ProcdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use procdoc_babel::{PublishOptions, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/procdoc.default.toml");

/// Top-level configuration consumed by procdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcdocConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub render: RenderConfig,
}

/// Where records come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub namespace: String,
    pub extension: String,
}

/// What gets written per directory.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub file_name: String,
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub missing_label: String,
    pub solution_language: String,
}

impl ProcdocConfig {
    /// Options for rendering a single record.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            namespace: self.source.namespace.clone(),
            missing_label: self.render.missing_label.clone(),
            solution_language: self.render.solution_language.clone(),
        }
    }

    /// Options for discovering records and writing directory documents.
    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions {
            extension: self.source.extension.trim_start_matches('.').to_string(),
            file_name: self.output.file_name.clone(),
            separator: self.output.separator.clone(),
        }
    }
}

impl From<&ProcdocConfig> for RenderOptions {
    fn from(config: &ProcdocConfig) -> Self {
        config.render_options()
    }
}

impl From<&ProcdocConfig> for PublishOptions {
    fn from(config: &ProcdocConfig) -> Self {
        config.publish_options()
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

    /// Apply a single key/value override (e.g. `output.separator`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ProcdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProcdocConfig, ConfigError> {
    Loader::new().build()
}
