/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{BuildType, Settings, SettingsFile};
use crate::build::BuildContext;
use crate::logger::Logger;
use crate::ui::Spinner;

pub const DEFAULT_SETTINGS_FILENAME: &str = "odin";
pub const SETTINGS_FILENAME_ENV: &str = "SETTINGS_FILENAME";

/// Base name of the settings file, from `SETTINGS_FILENAME` or `odin`.
pub fn settings_filename_from_env() -> String {
  std::env::var(SETTINGS_FILENAME_ENV)
    .ok()
    .filter(|name| !name.is_empty())
    .unwrap_or_else(|| DEFAULT_SETTINGS_FILENAME.to_string())
}

/// `<base>.<build type>.json`
pub fn settings_file_name(base: &str, build_type: BuildType) -> String {
  format!("{base}.{build_type}.json")
}

pub fn settings_path(ctx: &BuildContext, build_type: BuildType) -> PathBuf {
  ctx.cwd.join(settings_file_name(&ctx.settings_filename, build_type))
}

pub fn parse_settings(content: &str) -> Result<Settings> {
  let raw: SettingsFile = serde_json::from_str(content)?;
  Ok(raw.into())
}

/// Read and parse a settings file, returning the raw text alongside the result.
pub async fn read_settings(path: &Path) -> Result<(String, Settings)> {
  let content = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read {}", path.display()))?;
  let settings =
    parse_settings(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  Ok((content, settings))
}

/// Locate and load the settings for `build_type`.
///
/// Never fails: a missing, unreadable or malformed file is reported through the
/// console and yields `None`, which callers treat as "no settings found".
pub async fn load_settings(ctx: &BuildContext, build_type: BuildType) -> Option<Settings> {
  let log = Logger::new("SETTINGS", ctx.debug);
  log.blank();
  log.i("Getting settings file...");
  log.d(&format!("Getting settings file -> {build_type}"));

  let mut spinner = Spinner::default();
  spinner.start("Getting settings file...");
  let path = settings_path(ctx, build_type);
  match read_settings(&path).await {
    Ok((content, settings)) => {
      spinner.succeed("Settings file found");
      log.d(content.trim_end());
      Some(settings)
    }
    Err(e) => {
      spinner.fail("Settings file not found");
      log.e(&format!("{e:#}"));
      None
    }
  }
}
