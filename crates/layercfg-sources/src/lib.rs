//! Configuration sources for layercfg
//!
//! Everything around the tree engine that talks to the outside world:
//!
//! - **Decoders**: JSON, YAML and TOML documents into a [`Tree`](layercfg_tree::Tree)
//! - **Environment**: process variables as top-level keys or prefixed paths
//! - **Loader**: ordered layering of files, environment and literal trees
//! - **Config**: a facade with typed getters and setters
//!
//! # Example
//!
//! ```no_run
//! use layercfg_sources::{ConfigLoader, EnvSource};
//!
//! let config = ConfigLoader::new()
//!     .file("config/config.yaml")
//!     .optional_file("config/local.yaml")
//!     .env(EnvSource::with_prefix("APP_"))
//!     .load()?;
//!
//! let port = config.get_int("databases.main.port", 5432);
//! # Ok::<(), layercfg_sources::Error>(())
//! ```

pub mod config;
pub mod decoders;
pub mod env;
pub mod error;
pub mod format;
pub mod loader;

pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use decoders::{JsonDecoder, TomlDecoder, YamlDecoder};
pub use env::EnvSource;
pub use error::{Error, Result};
pub use format::{Decoder, Format};
pub use loader::{ConfigLoader, load_file};
