//! Command implementations
//!
//! Each command returns the text to print so it can be tested without
//! spawning the binary.

use layercfg_sources::{Config, ConfigLoader, EnvSource};
use layercfg_tree::Tree;

use crate::cli::{Cli, ValueType};
use crate::error::{CliError, Result};

/// Build the layered configuration described by the global flags.
pub fn load(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    for path in &cli.config {
        loader = loader.file(path);
    }
    for path in &cli.optional {
        loader = loader.optional_file(path);
    }
    if cli.env {
        loader = loader.env(EnvSource::new());
    }
    if let Some(prefix) = &cli.env_prefix {
        loader = loader.env(EnvSource::with_prefix(prefix));
    }

    tracing::debug!(layers = loader.len(), "Loading configuration");
    Ok(loader.load()?)
}

pub fn run_get(config: &Config, path: &str, default: Option<&str>, json: bool) -> Result<String> {
    let value = match default {
        Some(fallback) => config.get_default(path, fallback),
        None => config.get(path),
    };

    if value.is_nil() && default.is_none() {
        return Err(CliError::user(format!("No value at {path}")));
    }

    if json {
        Ok(serde_json::to_string_pretty(&value.to_json())?)
    } else {
        Ok(value.to_string())
    }
}

pub fn run_set(config: &mut Config, path: &str, raw: &str, value_type: ValueType) -> Result<String> {
    let value = parse_value(raw, value_type)?;
    config.set(path, value)?;
    tracing::debug!(path, ?value_type, "Value set");
    run_dump(config)
}

pub fn run_dump(config: &Config) -> Result<String> {
    Ok(serde_json::to_string_pretty(&config.content().to_json())?)
}

fn parse_value(raw: &str, value_type: ValueType) -> Result<Tree> {
    let invalid = |kind: &str| CliError::user(format!("Invalid {kind} value: {raw}"));

    let value = match value_type {
        ValueType::String => Tree::from(raw),
        ValueType::Int => Tree::from(raw.trim().parse::<i64>().map_err(|_| invalid("integer"))?),
        ValueType::Float => Tree::from(raw.trim().parse::<f64>().map_err(|_| invalid("float"))?),
        ValueType::Bool => Tree::from(raw.trim().parse::<bool>().map_err(|_| invalid("boolean"))?),
        ValueType::Json => Tree::from(serde_json::from_str::<serde_json::Value>(raw)?),
    };
    Ok(value)
}
