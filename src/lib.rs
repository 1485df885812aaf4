//! Convert a small line-oriented Markdown dialect into an Atlassian Document
//! Format tree.
//!
//! Conversion is a pure function of the input text: it never fails and never
//! panics. Malformed markup comes out as literal text.

mod adf;
mod classify;
mod config;
mod error;
mod inline;
mod list;
mod parser;

pub use adf::{Document, HeadingAttrs, Inline, ListItem, Mark, Node};
pub use config::{BlankLines, BlocksConfig, Config, InlineConfig, InlineDialect, OutputConfig};
pub use error::Error;

/// Convert markdown using the default config.
pub fn convert(markdown: &str) -> Document {
    convert_with_config(markdown, &Config::default())
}

/// Convert markdown with a custom config.
pub fn convert_with_config(markdown: &str, config: &Config) -> Document {
    parser::parse(markdown, config)
}

/// Holds one markdown source and converts it on demand.
#[derive(Debug, Clone)]
pub struct Converter {
    markdown: String,
    config: Config,
}

impl Converter {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self::with_config(markdown, &Config::default())
    }

    pub fn with_config(markdown: impl Into<String>, config: &Config) -> Self {
        Self {
            markdown: markdown.into(),
            config: config.clone(),
        }
    }

    pub fn convert(&self) -> Document {
        convert_with_config(&self.markdown, &self.config)
    }
}
