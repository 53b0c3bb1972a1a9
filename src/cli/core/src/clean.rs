/* src/cli/core/src/clean.rs */

// Clean stage: removes the previous build output before compiling.
// Best effort: a failed delete is reported and the build goes on.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::build::BuildContext;
use crate::logger::Logger;
use crate::ui::Spinner;

/// Delete `<cwd>/<dist>`. Returns false when the delete failed; never errors.
pub async fn run_clean(ctx: &BuildContext, dist: &str) -> bool {
  let log = Logger::new("CLEAN", ctx.debug);
  log.i("Deleting previous build...");

  let mut spinner = Spinner::default();
  spinner.start("Deleting previous build...");
  let path = ctx.resolve(dist);
  let result = match guard_out_dir(ctx, &path) {
    Ok(()) => delete_if_exists(&path).await,
    Err(e) => Err(e),
  };
  match result {
    Ok(true) => {
      spinner.succeed("Previous build deleted");
      log.d(&format!("deleted {}", path.display()));
      true
    }
    Ok(false) => {
      spinner.succeed("No previous build to delete");
      true
    }
    Err(e) => {
      spinner.fail("Previous build delete failed");
      log.e(&format!("{e:#}"));
      false
    }
  }
}

/// The output directory must not contain the working directory.
fn guard_out_dir(ctx: &BuildContext, path: &Path) -> Result<()> {
  if ctx.cwd.starts_with(path) {
    bail!("refusing to delete {}: it contains the working directory", path.display());
  }
  Ok(())
}

/// Remove a directory tree (or a stray file) at `path`. Ok(false) when absent.
pub(crate) async fn delete_if_exists(path: &Path) -> Result<bool> {
  let meta = match tokio::fs::symlink_metadata(path).await {
    Ok(meta) => meta,
    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
    Err(e) => return Err(e).with_context(|| format!("failed to stat {}", path.display())),
  };
  let removed = if meta.is_dir() {
    tokio::fs::remove_dir_all(path).await
  } else {
    tokio::fs::remove_file(path).await
  };
  match removed {
    Ok(()) => Ok(true),
    // raced with another remover
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
    Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context(dir: &Path) -> BuildContext {
    BuildContext::new(dir.to_path_buf(), false, "odin".into())
  }

  #[tokio::test]
  async fn delete_if_exists_noop_on_missing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dist");
    assert!(!delete_if_exists(&path).await.unwrap());
  }

  #[tokio::test]
  async fn delete_if_exists_removes_nested_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dist");
    std::fs::create_dir_all(path.join("sub/deeper")).unwrap();
    std::fs::write(path.join("sub/file.js"), "export {}").unwrap();
    std::fs::write(path.join("sub/deeper/file.d.ts"), "export {}").unwrap();

    assert!(delete_if_exists(&path).await.unwrap());
    assert!(!path.exists());
  }

  #[tokio::test]
  async fn delete_if_exists_removes_stray_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("dist");
    std::fs::write(&path, "not a directory").unwrap();

    assert!(delete_if_exists(&path).await.unwrap());
    assert!(!path.exists());
  }

  #[tokio::test]
  async fn run_clean_twice_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = context(tmp.path());
    std::fs::create_dir_all(tmp.path().join("dist/assets")).unwrap();
    std::fs::write(tmp.path().join("dist/assets/app.js"), "//").unwrap();

    assert!(run_clean(&ctx, "dist").await);
    assert!(!tmp.path().join("dist").exists());
    assert!(run_clean(&ctx, "dist").await);
    assert!(run_clean(&ctx, "dist").await);
  }

  #[tokio::test]
  async fn run_clean_leaves_siblings_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = context(tmp.path());
    std::fs::create_dir_all(tmp.path().join("out")).unwrap();
    std::fs::create_dir_all(tmp.path().join("src")).unwrap();
    std::fs::write(tmp.path().join("src/index.ts"), "export {}").unwrap();

    assert!(run_clean(&ctx, "out").await);
    assert!(!tmp.path().join("out").exists());
    assert!(tmp.path().join("src/index.ts").exists());
  }

  #[tokio::test]
  async fn run_clean_refuses_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("project");
    std::fs::create_dir_all(project.join("src")).unwrap();
    let ctx = context(&project);

    assert!(!run_clean(&ctx, ".").await);
    assert!(!run_clean(&ctx, "").await);
    assert!(!run_clean(&ctx, "..").await);
    assert!(project.join("src").exists());
  }

  #[tokio::test]
  async fn run_clean_absolute_dist_stays_inside_project() {
    let project = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    std::fs::write(outside.path().join("data.bin"), "keep").unwrap();
    let ctx = context(project.path());

    let dist = outside.path().to_string_lossy().into_owned();
    assert!(run_clean(&ctx, &dist).await);
    assert!(outside.path().join("data.bin").exists());
  }

  #[tokio::test]
  async fn run_clean_absolute_dist_removes_project_relative_dir() {
    let project = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(project.path().join("out/js")).unwrap();
    let ctx = context(project.path());

    assert!(run_clean(&ctx, "/out").await);
    assert!(!project.path().join("out").exists());
  }
}
