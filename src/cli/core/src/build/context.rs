/* src/cli/core/src/build/context.rs */

use std::path::{Component, Path, PathBuf};

/// Per-run state owned by the orchestrator and handed to every stage.
#[derive(Debug, Clone)]
pub struct BuildContext {
  /// Working directory captured once at startup; `src`/`dist` resolve against it.
  pub cwd: PathBuf,
  pub debug: bool,
  /// Base name of the settings file (`<base>.<build type>.json`).
  pub settings_filename: String,
}

impl BuildContext {
  pub fn new(cwd: PathBuf, debug: bool, settings_filename: String) -> Self {
    Self { cwd, debug, settings_filename }
  }

  pub fn resolve(&self, relative: &str) -> PathBuf {
    join_under(&self.cwd, relative)
  }
}

/// Join `relative` onto `base`, treating a leading root or drive prefix as
/// part of the relative path: `/x` lands at `<base>/x`.
pub(crate) fn join_under(base: &Path, relative: &str) -> PathBuf {
  let rooted = Path::new(relative)
    .components()
    .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));
  let mut joined = base.to_path_buf();
  joined.extend(rooted);
  normalize(&joined)
}

/// Lexically collapse `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if !out.pop() {
          out.push(component);
        }
      }
      other => out.push(other),
    }
  }
  out
}
