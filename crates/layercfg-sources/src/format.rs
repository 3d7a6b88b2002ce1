//! Format detection and the decoder trait

use std::fmt;
use std::path::Path;

use layercfg_tree::{Content, Tree};

use crate::decoders::{JsonDecoder, TomlDecoder, YamlDecoder};
use crate::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detect format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }

    pub fn decoder(&self) -> Box<dyn Decoder> {
        match self {
            Self::Json => Box::new(JsonDecoder::new()),
            Self::Yaml => Box::new(YamlDecoder::new()),
            Self::Toml => Box::new(TomlDecoder::new()),
        }
    }

    /// Decode a document whose top level must be an object.
    pub fn decode(&self, source: &str) -> Result<Content> {
        match self.decoder().decode(source)? {
            Tree::Object(map) => Ok(Content::from_object(map)),
            other => Err(Error::NotAnObject {
                format: *self,
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        };
        f.write_str(name)
    }
}

/// Turns a document into a configuration tree
pub trait Decoder: Send + Sync {
    fn format(&self) -> Format;

    fn decode(&self, source: &str) -> Result<Tree>;
}
