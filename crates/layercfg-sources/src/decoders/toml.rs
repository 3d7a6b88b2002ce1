//! TOML decoder

use layercfg_tree::{Scalar, Tree};
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::format::{Decoder, Format};

/// Decoder for TOML documents. Datetimes become opaque leaves.
#[derive(Debug, Default)]
pub struct TomlDecoder;

impl TomlDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for TomlDecoder {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn decode(&self, source: &str) -> Result<Tree> {
        let table: Table = source
            .parse()
            .map_err(|e: toml::de::Error| Error::parse(Format::Toml, e.to_string()))?;
        Ok(table_to_tree(table))
    }
}

fn table_to_tree(table: Table) -> Tree {
    Tree::Object(
        table
            .into_iter()
            .map(|(key, value)| (key, value_to_tree(value)))
            .collect(),
    )
}

fn value_to_tree(value: Value) -> Tree {
    match value {
        Value::String(s) => Tree::from(s),
        Value::Integer(i) => Tree::from(i),
        Value::Float(x) => Tree::from(x),
        Value::Boolean(b) => Tree::from(b),
        Value::Datetime(dt) => Tree::from(Scalar::opaque("datetime", dt.to_string())),
        Value::Array(items) => Tree::Array(items.into_iter().map(value_to_tree).collect()),
        Value::Table(table) => table_to_tree(table),
    }
}
