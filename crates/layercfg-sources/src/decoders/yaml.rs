//! YAML decoder

use layercfg_tree::{Map, Scalar, Tree};
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::format::{Decoder, Format};

/// Decoder for YAML documents.
///
/// An empty document decodes to an empty object. Tagged values decode to
/// their inner value, and scalar mapping keys are stringified.
#[derive(Debug, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for YamlDecoder {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn decode(&self, source: &str) -> Result<Tree> {
        let value: YamlValue =
            serde_yaml::from_str(source).map_err(|e| Error::parse(Format::Yaml, e.to_string()))?;

        match value {
            YamlValue::Null => Ok(Tree::object()),
            other => Ok(yaml_to_tree(other)),
        }
    }
}

fn yaml_to_tree(value: YamlValue) -> Tree {
    match value {
        YamlValue::Null => Tree::NULL,
        YamlValue::Bool(b) => Tree::from(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Tree::from(i)
            } else {
                Tree::from(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        YamlValue::String(s) => Tree::from(s),
        YamlValue::Sequence(items) => Tree::Array(items.into_iter().map(yaml_to_tree).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                match yaml_key(&key) {
                    Some(key) => {
                        map.insert(key, yaml_to_tree(value));
                    }
                    None => tracing::warn!(?key, "skipping YAML entry with a non-scalar key"),
                }
            }
            Tree::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_tree(tagged.value),
    }
}

fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Null => Some(Scalar::Null.to_string()),
        YamlValue::Tagged(tagged) => yaml_key(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layercfg_tree::{Kind, get};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_nested() {
        let source = r#"
databases:
  main:
    host: 127.0.0.1
    port: 5432
    version:
      - ["9", "6"]
      - ["10"]
"#;
        let tree = YamlDecoder::new().decode(source).unwrap();
        assert_eq!(get(&tree, "databases.main.port").to_int(), 5432);
        assert_eq!(get(&tree, "databases.main.version[0][1]"), "6");
        assert_eq!(get(&tree, "databases.main.host"), "127.0.0.1");
    }

    #[test]
    fn test_decode_empty_document_is_object() {
        let tree = YamlDecoder::new().decode("").unwrap();
        assert_eq!(tree, Tree::object());
    }

    #[test]
    fn test_decode_scalar_keys_are_stringified() {
        let tree = YamlDecoder::new().decode("1: one\ntrue: yes\n").unwrap();
        assert_eq!(tree, Tree::from(json!({"1": "one", "true": "yes"})));
    }

    #[test]
    fn test_decode_unwraps_tags() {
        let tree = YamlDecoder::new().decode("port: !env 8080\n").unwrap();
        assert_eq!(get(&tree, "port").kind(), Some(Kind::Integer));
    }

    #[test]
    fn test_decode_invalid() {
        let err = YamlDecoder::new().decode("a: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Parse { format: Format::Yaml, .. }));
    }
}
