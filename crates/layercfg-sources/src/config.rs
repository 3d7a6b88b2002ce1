//! The `Config` facade: a loaded store with typed accessors

use std::path::Path;

use layercfg_tree::{Content, Tree, ValueHandle};

use crate::env::EnvSource;
use crate::error::Result;
use crate::loader::{ConfigLoader, load_file};

/// Where [`Config::load_default`] looks for the project configuration
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// A loaded configuration.
///
/// Reads return [`ValueHandle`]s or typed values with a caller-supplied
/// default; writes go through path `set`s and report structural errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    content: Content,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: Content) -> Self {
        Self { content }
    }

    /// Load one file, then layer the raw process environment on top so
    /// variables such as `HOME` are readable as top-level keys.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new()
            .file(path.as_ref())
            .env(EnvSource::new())
            .load()
    }

    /// [`load`](Self::load) from [`DEFAULT_CONFIG_PATH`].
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Layer another file on top of the current content.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let layer = load_file(path.as_ref())?;
        self.content.merge(layer);
        Ok(())
    }

    pub fn merge(&mut self, layer: Content) {
        self.content.merge(layer);
    }

    pub fn get(&self, path: &str) -> ValueHandle<'_> {
        self.content.get(path)
    }

    pub fn get_default(&self, path: &str, fallback: impl Into<Tree>) -> ValueHandle<'_> {
        self.content.get_default(path, fallback)
    }

    /// Integer at `path`, `default` when absent or null, `0` when not numeric
    pub fn get_int(&self, path: &str, default: i64) -> i64 {
        self.get_default(path, default).to_int()
    }

    pub fn get_float(&self, path: &str, default: f64) -> f64 {
        self.get_default(path, default).to_float()
    }

    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        self.get_default(path, default).to_bool()
    }

    pub fn get_string(&self, path: &str, default: &str) -> String {
        self.get_default(path, default).to_string()
    }

    pub fn set(&mut self, path: &str, value: impl Into<Tree>) -> Result<()> {
        self.content.set(path, value)?;
        Ok(())
    }

    pub fn set_int(&mut self, path: &str, value: i64) -> Result<()> {
        self.set(path, value)
    }

    pub fn set_float(&mut self, path: &str, value: f64) -> Result<()> {
        self.set(path, value)
    }

    pub fn set_bool(&mut self, path: &str, value: bool) -> Result<()> {
        self.set(path, value)
    }

    pub fn set_string(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        self.set(path, value.into())
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }
}
