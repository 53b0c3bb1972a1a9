/* src/cli/core/src/config/types.rs */

use std::fmt;

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
  #[default]
  Dev,
  Prod,
}

impl BuildType {
  /// Parse the positional build-type token. An empty token means `dev`.
  pub fn from_arg(arg: &str) -> Result<Self> {
    match arg {
      "" | "dev" => Ok(Self::Dev),
      "prod" => Ok(Self::Prod),
      other => bail!("unknown build type \"{other}\" (expected dev or prod)"),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Dev => "dev",
      Self::Prod => "prod",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// On-disk shape of `<name>.<build type>.json`. Every field is optional and
/// `null` is treated like an absent key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
  pub src: Option<String>,
  pub dist: Option<String>,
  pub files: Option<Vec<String>>,
  pub explicit_params: Option<bool>,
  pub npx: Option<bool>,
}

/// Resolved build settings, read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub src: String,
  pub dist: String,
  pub files: Vec<String>,
  pub explicit_params: bool,
  pub npx: bool,
}

impl Default for Settings {
  fn default() -> Self {
    SettingsFile::default().into()
  }
}

impl From<SettingsFile> for Settings {
  fn from(raw: SettingsFile) -> Self {
    Self {
      src: raw.src.unwrap_or_else(default_src),
      dist: raw.dist.unwrap_or_else(default_dist),
      files: raw.files.unwrap_or_default(),
      explicit_params: raw.explicit_params.unwrap_or(false),
      npx: raw.npx.unwrap_or(false),
    }
  }
}

fn default_src() -> String {
  "src".to_string()
}

fn default_dist() -> String {
  "dist".to_string()
}
