//! Layered configuration loading
//!
//! A [`ConfigLoader`] holds an ordered list of sources. Loading merges them
//! into one [`Content`] store in the order they were added, so later
//! sources override earlier ones on conflicting leaves.

use std::fs;
use std::path::{Path, PathBuf};

use layercfg_tree::{Content, Tree};

use crate::config::Config;
use crate::env::EnvSource;
use crate::error::{Error, Result};
use crate::format::Format;

const USER_CONFIG_FILES: &[&str] = &["config.yaml", "config.yml", "config.toml", "config.json"];

#[derive(Debug, Clone)]
enum Source {
    File { path: PathBuf, required: bool },
    Env(EnvSource),
    Content(Content),
}

/// Builder for a layered [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    sources: Vec<Source>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional stack for an application named `app`:
    ///
    /// 1. User config (`<config_dir>/<app>/config.{yaml,yml,toml,json}`), if present
    /// 2. Project config ([`DEFAULT_CONFIG_PATH`](crate::DEFAULT_CONFIG_PATH)), if present
    /// 3. Environment variables prefixed with `<APP>_`
    ///
    /// The user config directory is platform dependent:
    /// - Linux: `~/.config/<app>/`
    /// - macOS: `~/Library/Application Support/<app>/`
    /// - Windows: `%APPDATA%\<app>\`
    pub fn standard(app: &str) -> Self {
        Self::standard_in(app, dirs::config_dir())
    }

    /// [`standard`](Self::standard) with an explicit user config directory
    /// (or none), mainly for tests.
    pub fn standard_in(app: &str, config_dir: Option<PathBuf>) -> Self {
        let mut loader = Self::new();

        if let Some(dir) = config_dir.map(|dir| dir.join(app)) {
            match USER_CONFIG_FILES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
            {
                Some(path) => loader = loader.optional_file(path),
                None => tracing::debug!(?dir, "No user config found, skipping"),
            }
        }

        let prefix = format!("{}_", app.to_uppercase().replace('-', "_"));
        loader
            .optional_file(crate::DEFAULT_CONFIG_PATH)
            .env(EnvSource::with_prefix(prefix))
    }

    /// A file that must exist; its format comes from the extension.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File {
            path: path.into(),
            required: true,
        });
        self
    }

    /// A file that is skipped when it does not exist.
    pub fn optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::File {
            path: path.into(),
            required: false,
        });
        self
    }

    pub fn env(mut self, env: EnvSource) -> Self {
        self.sources.push(Source::Env(env));
        self
    }

    /// A literal layer, e.g. built-in defaults.
    pub fn content(mut self, content: Content) -> Self {
        self.sources.push(Source::Content(content));
        self
    }

    /// A literal tree layer.
    ///
    /// # Errors
    ///
    /// Fails when `tree` is not an object.
    pub fn tree(self, tree: Tree) -> Result<Self> {
        Ok(self.content(Content::try_from(tree)?))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Merge every source in order.
    ///
    /// # Errors
    ///
    /// Missing required files, unreadable files, unsupported extensions and
    /// decode failures abort loading.
    pub fn load(self) -> Result<Config> {
        let mut content = Content::new();

        for (layer, source) in self.sources.into_iter().enumerate() {
            match source {
                Source::File { path, required } => {
                    if !required && !path.is_file() {
                        tracing::debug!(layer, ?path, "Optional config not found, skipping");
                        continue;
                    }
                    tracing::debug!(layer, ?path, "Loading config file");
                    content.merge(load_file(&path)?);
                }
                Source::Env(env) => {
                    tracing::debug!(layer, "Loading environment variables");
                    content.merge(env.collect());
                }
                Source::Content(layer_content) => {
                    tracing::debug!(layer, "Merging literal layer");
                    content.merge(layer_content);
                }
            }
        }

        Ok(Config::from_content(content))
    }
}

/// Read and decode one configuration file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions,
/// [`Error::Io`] when the file cannot be read and
/// [`Error::ConfigParse`] / [`Error::NotAnObject`] when decoding fails.
pub fn load_file(path: &Path) -> Result<Content> {
    let format = Format::from_path(path)?;
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.decode(&source).map_err(|e| e.at(path))
}
