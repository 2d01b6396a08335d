//! User configuration: load `config.json`, validate it, and build a pipeline config.

mod validation;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::marker::Element;
use crate::core::paths;
use crate::core::pipeline::PipelineConfig;
use crate::core::wrap::{ParenMarkers, QuoteMarkers};

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// A single-marker wrap option: `true`/`false` or an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WrapEntry {
    Flag(bool),
    Marker(Element),
}

impl Default for WrapEntry {
    fn default() -> Self {
        WrapEntry::Flag(false)
    }
}

/// Quote wrapping: a flag, one element for every mark, or one element per mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteEntry {
    Flag(bool),
    Each(QuoteMarkers<Element>),
    Marker(Element),
}

impl Default for QuoteEntry {
    fn default() -> Self {
        QuoteEntry::Flag(false)
    }
}

/// Parenthesis wrapping: a flag, one element for every mark, or one element per mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParenEntry {
    Flag(bool),
    Each(ParenMarkers<Element>),
    Marker(Element),
}

impl Default for ParenEntry {
    fn default() -> Self {
        ParenEntry::Flag(false)
    }
}

/// JSON structure on disk. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub widont_non_breaking_space: bool,
    pub wrap_widont: WrapEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widont_max_last_word_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widont_max_last_two_words_length: Option<usize>,
    pub smart_quotes: bool,
    pub smart_ellipsis: bool,
    pub smart_dashes: bool,
    pub wrap_ampersand: WrapEntry,
    pub wrap_multiple_capitals: WrapEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_multiple_capitals_min_length: Option<usize>,
    pub wrap_ordinal_indicator: WrapEntry,
    pub wrap_quotes: QuoteEntry,
    pub wrap_parenthesis: ParenEntry,
}

impl ConfigFile {
    /// Turn on every feature. Custom markers already configured are kept.
    pub fn enable_all(&mut self) {
        self.widont_non_breaking_space = true;
        self.smart_quotes = true;
        self.smart_ellipsis = true;
        self.smart_dashes = true;
        for entry in [
            &mut self.wrap_widont,
            &mut self.wrap_ampersand,
            &mut self.wrap_multiple_capitals,
            &mut self.wrap_ordinal_indicator,
        ] {
            entry.enable();
        }
        self.wrap_quotes.enable();
        self.wrap_parenthesis.enable();
    }

    /// Validate markers and limits, then build the pipeline config.
    pub fn into_pipeline(self) -> Result<PipelineConfig<Element>, ConfigError> {
        validation::validate_and_convert(self)
    }
}

impl WrapEntry {
    /// Switch on with the built-in marker unless a marker is already set.
    pub fn enable(&mut self) {
        if *self == WrapEntry::Flag(false) {
            *self = WrapEntry::Flag(true);
        }
    }
}

impl QuoteEntry {
    pub fn enable(&mut self) {
        if *self == QuoteEntry::Flag(false) {
            *self = QuoteEntry::Flag(true);
        }
    }
}

impl ParenEntry {
    pub fn enable(&mut self) {
        if *self == ParenEntry::Flag(false) {
            *self = ParenEntry::Flag(true);
        }
    }
}

/// Default config file location (`~/.config/typography-hacks/config.json` on Linux).
pub fn default_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Parse a config file from its JSON text.
pub fn parse(content: &str) -> Result<ConfigFile, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse the config file at `path`. The file must exist.
pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path)?;
    let file = parse(&content)?;
    log::info!("loaded config from {}", path.display());
    Ok(file)
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the default location is tried and an absent
/// file means every feature is off.
pub fn load(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        return load_file(path);
    }
    match default_path() {
        Some(path) if path.exists() => load_file(&path),
        _ => {
            log::debug!("no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }
}
