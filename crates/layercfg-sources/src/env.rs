//! Environment variable ingestion
//!
//! Without a prefix every variable becomes a top-level key verbatim, so
//! `GOPATH` is readable as `config.get("GOPATH")`. With a prefix only
//! matching variables are taken and mapped onto paths:
//!
//! | Variable              | Prefix | Path            |
//! |-----------------------|--------|-----------------|
//! | `APP_DB__PORT=5433`   | `APP_` | `db.port`       |
//! | `APP_SERVERS__0=x`    | `APP_` | `servers.0`     |
//! | `APP_LOG_LEVEL=debug` | `APP_` | `log_level`     |
//!
//! Values are always strings; the value handle coerces them on read.

use layercfg_tree::Content;

const DEFAULT_SEPARATOR: &str = "__";

/// A snapshot of environment variables, turned into a [`Content`] layer.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: Option<String>,
    separator: String,
    vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
    /// All process variables as top-level keys
    pub fn new() -> Self {
        Self {
            prefix: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            vars: None,
        }
    }

    /// Only variables starting with `prefix`, mapped onto paths
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new().prefix(prefix)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Separator that stands for `.` in prefixed variable names
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Read from the given pairs instead of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// The selected variables, sorted by name so conflicting paths resolve
    /// the same way on every platform.
    fn vars(&self) -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = match &self.vars {
            Some(vars) => vars.clone(),
            // Variables that are not valid unicode cannot be addressed by a path
            None => std::env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
                .collect(),
        };
        vars.sort_by(|(a, _), (b, _)| a.cmp(b));
        vars
    }

    /// Map a variable name to a path, or `None` when it is not selected.
    fn path_for(&self, name: &str) -> Option<String> {
        let Some(prefix) = &self.prefix else {
            return Some(name.to_string());
        };
        let rest = name.strip_prefix(prefix.as_str())?;
        if rest.is_empty() {
            return None;
        }
        let path = if self.separator.is_empty() {
            rest.to_lowercase()
        } else {
            rest.to_lowercase().replace(&self.separator.to_lowercase(), ".")
        };
        Some(path)
    }

    /// Collect the selected variables into a content layer.
    pub fn collect(&self) -> Content {
        let mut content = Content::new();
        let mut taken = 0usize;

        for (name, value) in self.vars() {
            let Some(path) = self.path_for(&name) else {
                continue;
            };

            if self.prefix.is_none() {
                content.insert(path, value);
                taken += 1;
                continue;
            }

            match content.set(&path, value) {
                Ok(()) => taken += 1,
                Err(error) => {
                    tracing::warn!(variable = %name, %path, %error, "skipping environment variable");
                }
            }
        }

        tracing::debug!(prefix = ?self.prefix, taken, "collected environment variables");
        content
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}
