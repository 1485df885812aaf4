use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub blocks: BlocksConfig,
    pub inline: InlineConfig,
    pub output: OutputConfig,
}

/// What a blank line produces besides ending the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlankLines {
    /// Emit an empty paragraph.
    #[default]
    Paragraph,
    /// Emit nothing.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlocksConfig {
    pub blank_lines: BlankLines,
    pub indent_width: usize,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            blank_lines: BlankLines::Paragraph,
            indent_width: 2,
        }
    }
}

impl BlocksConfig {
    /// Nesting level for a run of leading whitespace `width` characters wide.
    pub fn indent_level(&self, width: usize) -> usize {
        width / self.indent_width.max(1)
    }
}

/// Which inline delimiters the tokenizer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InlineDialect {
    /// `**bold**` only.
    #[default]
    Strong,
    /// `` `code` ``, `**bold**` and `*italic*`.
    Extended,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct InlineConfig {
    pub dialect: InlineDialect,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Config {
    /// The config embedded at build time. `build.rs` rejects an invalid file.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
