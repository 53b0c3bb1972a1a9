/* src/cli/core/src/config/tests/loading.rs */

use tempfile::TempDir;

use crate::build::BuildContext;
use crate::config::loader::{DEFAULT_SETTINGS_FILENAME, read_settings, settings_path};
use crate::config::{BuildType, load_settings, settings_file_name};

fn context(dir: &TempDir, base: &str) -> BuildContext {
  BuildContext::new(dir.path().to_path_buf(), false, base.to_string())
}

#[test]
fn settings_file_name_convention() {
  assert_eq!(settings_file_name("odin", BuildType::Dev), "odin.dev.json");
  assert_eq!(settings_file_name("odin", BuildType::Prod), "odin.prod.json");
  assert_eq!(settings_file_name("tsbuild", BuildType::Prod), "tsbuild.prod.json");
  assert_eq!(DEFAULT_SETTINGS_FILENAME, "odin");
}

#[test]
fn settings_path_is_relative_to_context_cwd() {
  let tmp = tempfile::tempdir().unwrap();
  let ctx = context(&tmp, "odin");
  assert_eq!(settings_path(&ctx, BuildType::Prod), tmp.path().join("odin.prod.json"));
}

#[tokio::test]
async fn load_settings_reads_matching_build_type() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("odin.dev.json"), r#"{ "dist": "dev-out" }"#).unwrap();
  std::fs::write(tmp.path().join("odin.prod.json"), r#"{ "dist": "prod-out", "npx": true }"#)
    .unwrap();

  let ctx = context(&tmp, "odin");
  let dev = load_settings(&ctx, BuildType::Dev).await.unwrap();
  assert_eq!(dev.dist, "dev-out");
  assert!(!dev.npx);

  let prod = load_settings(&ctx, BuildType::Prod).await.unwrap();
  assert_eq!(prod.dist, "prod-out");
  assert!(prod.npx);
}

#[tokio::test]
async fn load_settings_honors_custom_base_name() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("builder.dev.json"), r#"{ "src": "lib" }"#).unwrap();

  let ctx = context(&tmp, "builder");
  let settings = load_settings(&ctx, BuildType::Dev).await.unwrap();
  assert_eq!(settings.src, "lib");

  let default_ctx = context(&tmp, "odin");
  assert!(load_settings(&default_ctx, BuildType::Dev).await.is_none());
}

#[tokio::test]
async fn load_settings_missing_file_is_none() {
  let tmp = tempfile::tempdir().unwrap();
  let ctx = context(&tmp, "odin");
  assert!(load_settings(&ctx, BuildType::Dev).await.is_none());
  // nothing was created as a side effect
  assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn load_settings_malformed_file_is_none() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("odin.dev.json"), "{ not json").unwrap();
  let ctx = context(&tmp, "odin");
  assert!(load_settings(&ctx, BuildType::Dev).await.is_none());
}

#[tokio::test]
async fn read_settings_error_names_the_file() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("odin.prod.json");

  let missing = read_settings(&path).await.unwrap_err();
  assert!(format!("{missing:#}").contains("failed to read"));
  assert!(format!("{missing:#}").contains("odin.prod.json"));

  std::fs::write(&path, "[1, 2").unwrap();
  let malformed = read_settings(&path).await.unwrap_err();
  assert!(format!("{malformed:#}").contains("failed to parse"));
}

#[tokio::test]
async fn read_settings_returns_raw_content() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("odin.dev.json");
  let body = r#"{ "files": ["LICENSE"] }"#;
  std::fs::write(&path, body).unwrap();

  let (content, settings) = read_settings(&path).await.unwrap();
  assert_eq!(content, body);
  assert_eq!(settings.files, vec!["LICENSE"]);
}
