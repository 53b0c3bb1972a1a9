/* src/cli/core/src/build/copy.rs */

// Copy stage: auxiliary files from `src` into `dist`, all in flight at once.
// Every copy runs to completion; failures are collected per file, never raised.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tokio::task::JoinSet;

use super::BuildContext;
use super::context::join_under;
use crate::logger::Logger;
use crate::ui::{self, Spinner};

#[derive(Debug)]
pub struct CopyFailure {
  pub file: String,
  pub error: anyhow::Error,
}

impl fmt::Display for CopyFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {:#}", self.file, self.error)
  }
}

#[derive(Debug, Default)]
pub struct CopyReport {
  pub copied: usize,
  pub failures: Vec<CopyFailure>,
}

impl CopyReport {
  pub fn is_success(&self) -> bool {
    self.failures.is_empty()
  }
}

pub async fn run_copy(ctx: &BuildContext, files: &[String], src: &str, dist: &str) -> CopyReport {
  let log = Logger::new("COPY", ctx.debug);
  if files.is_empty() {
    log.i("No files to copy");
    return CopyReport::default();
  }
  log.d(&format!("Copying files: {files:?}"));
  log.i(&format!("Copying files from {src} to {dist}"));

  let src_dir = ctx.resolve(src);
  let dist_dir = ctx.resolve(dist);

  let mut spinner = Spinner::default();
  spinner.start(&format!("Copying {} files...", files.len()));
  let results = copy_all(&src_dir, &dist_dir, files).await;

  let failed = results.iter().filter(|result| result.is_err()).count();
  if failed == 0 {
    spinner.succeed(&format!("{} files copied", files.len()));
  } else {
    spinner.fail(&format!("{failed} of {} files failed to copy", files.len()));
  }

  let mut report = CopyReport::default();
  for (file, result) in files.iter().zip(results) {
    match result {
      Ok(bytes) => {
        report.copied += 1;
        ui::detail_ok(&format!("{file}  {}", ui::format_size(bytes)));
      }
      Err(error) => {
        ui::detail_fail(file);
        let failure = CopyFailure { file: file.clone(), error };
        log.e(&failure.to_string());
        report.failures.push(failure);
      }
    }
  }
  report
}

/// Spawn every copy, then collect results back in `files` order.
async fn copy_all(src_dir: &Path, dist_dir: &Path, files: &[String]) -> Vec<Result<u64>> {
  let mut join_set = JoinSet::new();
  for (idx, file) in files.iter().enumerate() {
    let from = join_under(src_dir, file);
    let to = join_under(dist_dir, file);
    join_set.spawn(async move { (idx, copy_file(from, to).await) });
  }

  let mut slots: Vec<Option<Result<u64>>> = files.iter().map(|_| None).collect();
  while let Some(joined) = join_set.join_next().await {
    if let Ok((idx, result)) = joined {
      slots[idx] = Some(result);
    }
  }
  slots
    .into_iter()
    .map(|slot| slot.unwrap_or_else(|| Err(anyhow!("copy task did not complete"))))
    .collect()
}

/// Copy `from` to `to`, creating the destination's parent directories.
/// Returns the number of bytes copied.
async fn copy_file(from: PathBuf, to: PathBuf) -> Result<u64> {
  if from == to {
    bail!("source and destination are the same path: {}", from.display());
  }
  if let Some(parent) = to.parent() {
    tokio::fs::create_dir_all(parent)
      .await
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  tokio::fs::copy(&from, &to)
    .await
    .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))
}
