//! Format-specific decoders

mod json;
mod toml;
mod yaml;

pub use self::json::JsonDecoder;
pub use self::toml::TomlDecoder;
pub use self::yaml::YamlDecoder;
