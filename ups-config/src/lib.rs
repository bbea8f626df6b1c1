//! Shared configuration loader for the ups tools.
//!
//! `defaults/ups.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`UpsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use ups_report::formats::{PageLayout, PageOptions};
use ups_report::gemini::GenerationSettings;
use ups_report::RenderOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/ups.default.toml");

/// Top-level configuration consumed by ups applications.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsConfig {
    pub render: RenderConfig,
    pub export: ExportConfig,
    pub generation: GenerationConfig,
    pub chat: ModelConfig,
    pub extraction: ExtractionConfig,
}

impl UpsConfig {
    /// Page options for the A3 export, including the render settings.
    ///
    /// `custom_css` is a path and is left for the caller to read.
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            render: RenderOptions::from(&self.render),
            ..PageOptions::from(&self.export)
        }
    }

    /// Chat requests go to the same endpoint as generation.
    pub fn endpoint(&self) -> &str {
        &self.generation.endpoint
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub escape_html: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            escape_html: config.escape_html,
        }
    }
}

/// Standalone page export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub layout: LayoutConfig,
    #[serde(default)]
    pub custom_css: Option<PathBuf>,
    /// Written as `exportVersion` into saved project files.
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LayoutConfig {
    #[serde(rename = "a3-landscape")]
    A3Landscape,
    #[serde(rename = "screen")]
    Screen,
}

impl From<LayoutConfig> for PageLayout {
    fn from(config: LayoutConfig) -> Self {
        match config {
            LayoutConfig::A3Landscape => PageLayout::A3Landscape,
            LayoutConfig::Screen => PageLayout::Screen,
        }
    }
}

impl From<&ExportConfig> for PageOptions {
    fn from(config: &ExportConfig) -> Self {
        PageOptions {
            layout: config.layout.into(),
            ..PageOptions::default()
        }
    }
}

/// Report generation requests.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl From<&GenerationConfig> for GenerationSettings {
    fn from(config: &GenerationConfig) -> Self {
        GenerationSettings {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Model knobs without an endpoint (chat).
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl From<&ModelConfig> for GenerationSettings {
    fn from(config: &ModelConfig) -> Self {
        GenerationSettings {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Document extraction requests and upload limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub max_upload_bytes: u64,
}

impl From<&ExtractionConfig> for GenerationSettings {
    fn from(config: &ExtractionConfig) -> Self {
        GenerationSettings {
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
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
    pub fn build(self) -> Result<UpsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<UpsConfig, ConfigError> {
    Loader::new().build()
}
