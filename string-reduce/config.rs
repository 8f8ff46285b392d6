use std::{
  fs,
  io::Error as IOError,
  path::Path,
};

use serde::Deserialize;
use thiserror::Error;
use toml::{
  Value,
  de::Error as TomlError,
};

/// How plain strings are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringStyle {
  /// Between the configured quotation marks.
  #[default]
  Quoted,
  /// Bare, with `ε` standing for the empty string.
  Simple,
  /// In square brackets.
  Boxed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct DisplayConfig {
  pub string_style:  StringStyle,
  pub opening_quote: String,
  pub closing_quote: String,
  /// Shown in place of password values.
  pub password_mask: String,
}

impl Default for DisplayConfig {
  fn default() -> Self {
    Self {
      string_style:  StringStyle::Quoted,
      opening_quote: "“".to_string(),
      closing_quote: "”".to_string(),
      password_mask: "*****".to_string(),
    }
  }
}

impl DisplayConfig {
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigLoadError> {
    toml::from_str(source).map_err(ConfigLoadError::BadConfig)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
    let source = fs::read_to_string(path).map_err(ConfigLoadError::Error)?;
    Self::from_toml_str(&source)
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub display: DisplayConfig,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
  #[error("bad config: {0}")]
  BadConfig(#[from] TomlError),
  #[error(transparent)]
  Error(#[from] IOError),
}

impl Config {
  pub fn from_toml_str(source: &str) -> Result<Self, ConfigLoadError> {
    toml::from_str(source).map_err(ConfigLoadError::BadConfig)
  }

  /// Layers a local config over a global one, key by key.
  ///
  /// A missing file on either side is skipped; a malformed one is an error
  /// even when the other side loaded.
  pub fn load(
    global: Result<String, ConfigLoadError>,
    local: Result<String, ConfigLoadError>,
  ) -> Result<Self, ConfigLoadError> {
    let parse = |source: Result<String, ConfigLoadError>| {
      source.and_then(|file| toml::from_str::<Value>(&file).map_err(ConfigLoadError::BadConfig))
    };

    let value = match (parse(global), parse(local)) {
      (Ok(global), Ok(local)) => merge_toml_values(global, local),
      (_, Err(ConfigLoadError::BadConfig(err))) | (Err(ConfigLoadError::BadConfig(err)), _) => {
        return Err(ConfigLoadError::BadConfig(err));
      },
      (Ok(value), Err(_)) | (Err(_), Ok(value)) => value,
      (Err(err), Err(_)) => return Err(err),
    };

    value.try_into().map_err(ConfigLoadError::BadConfig)
  }

  pub fn load_files(global: impl AsRef<Path>, local: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
    let read = |path: &Path| fs::read_to_string(path).map_err(ConfigLoadError::Error);
    Self::load(read(global.as_ref()), read(local.as_ref()))
  }
}

/// Tables merge recursively; any other right-hand value wins.
fn merge_toml_values(left: Value, right: Value) -> Value {
  match (left, right) {
    (Value::Table(mut left), Value::Table(right)) => {
      for (key, value) in right {
        let merged = match left.remove(&key) {
          Some(existing) => merge_toml_values(existing, value),
          None => value,
        };
        left.insert(key, merged);
      }
      Value::Table(left)
    },
    (_, right) => right,
  }
}
