//! JSON decoder

use layercfg_tree::Tree;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::{Decoder, Format};

/// Decoder for JSON documents
#[derive(Debug, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn format(&self) -> Format {
        Format::Json
    }

    fn decode(&self, source: &str) -> Result<Tree> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| Error::parse(Format::Json, e.to_string()))?;
        Ok(Tree::from(value))
    }
}
