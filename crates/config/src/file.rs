//! Configuration file source via `txconf.toml`
//!
//! Top-level scalar keys are option keys. Per-datasource flags live in a
//! `[datasource.<name>]` table:
//!
//! ```toml
//! transaction-xa-enabled = true
//!
//! [datasource.users]
//! xa-enabled = false
//! ```
//!
//! The `users` table above sets `transaction-xa-enabled-users`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use txconf_core::{normalize_key, ConfigError, Result, TRANSACTION_XA_ENABLED_DATASOURCE};

use crate::source::ConfigSource;

/// Config file name looked up in the configuration directory.
pub const CONFIG_FILE_NAME: &str = "txconf.toml";

/// Default ordinal for [`FileSource`]. Below the environment.
pub const FILE_ORDINAL: i32 = 250;

/// One `[datasource.<name>]` table. Unknown keys are a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct DatasourceSection {
    #[serde(default)]
    xa_enabled: Option<toml::Value>,
}

/// On-disk layout of `txconf.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileLayout {
    #[serde(default)]
    datasource: BTreeMap<String, DatasourceSection>,
    #[serde(flatten)]
    options: BTreeMap<String, toml::Value>,
}

/// Source backed by a `txconf.toml` file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
    values: BTreeMap<String, String>,
}

impl FileSource {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds a value that cannot be used as an option value.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse config content. `path` is only used for naming and errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let layout: FileLayout =
            toml::from_str(content).map_err(|e| ConfigError::parse(path, e.to_string()))?;

        let mut values = BTreeMap::new();
        for (key, value) in layout.options {
            let key = normalize_key(&key).to_string();
            let rendered = render_scalar(&key, &value)?;
            values.insert(key, rendered);
        }
        for (datasource, section) in layout.datasource {
            if let Some(value) = section.xa_enabled {
                let key = TRANSACTION_XA_ENABLED_DATASOURCE.key_for(&datasource);
                let rendered = render_scalar(&key, &value)?;
                values.insert(key, rendered);
            }
        }

        tracing::debug!(path = %path.display(), count = values.len(), "loaded config file");
        Ok(Self {
            path: path.to_path_buf(),
            name: format!("file:{}", path.display()),
            values,
        })
    }

    /// Path the source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Transaction configuration
#
# Use XA datasources (default: false)
transaction-xa-enabled = false

# Per-datasource XA, one table per named datasource.
# [datasource.users]
# xa-enabled = true
"#
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| ConfigError::io(path, e))?;
            tracing::info!(path = %path.display(), "wrote default config file");
        }
        Ok(())
    }
}

/// Render a TOML scalar as the raw string an option would receive.
fn render_scalar(key: &str, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) => Err(ConfigError::invalid_value(
            key,
            "arrays are not supported as option values",
        )),
        toml::Value::Table(_) => Err(ConfigError::invalid_value(
            key,
            "tables are only supported under [datasource]",
        )),
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn ordinal(&self) -> i32 {
        FILE_ORDINAL
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
