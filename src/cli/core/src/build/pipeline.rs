/* src/cli/core/src/build/pipeline.rs */

// Build orchestrator: clean -> compile -> copy, strictly in order.

use std::time::{Duration, Instant};

use anyhow::Result;

use super::BuildContext;
use super::compile::run_compile;
use super::copy::{CopyReport, run_copy};
use crate::clean::run_clean;
use crate::config::Settings;
use crate::logger::Logger;
use crate::ui;

const TOTAL_STAGES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Cleaning,
  Compiling,
  Copying,
}

impl Stage {
  pub fn number(self) -> u32 {
    match self {
      Self::Cleaning => 1,
      Self::Compiling => 2,
      Self::Copying => 3,
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Self::Cleaning => "Cleaning previous build",
      Self::Compiling => "Compiling TypeScript",
      Self::Copying => "Copying files",
    }
  }

  fn announce(self) {
    ui::step(self.number(), TOTAL_STAGES, self.title());
  }
}

#[derive(Debug)]
pub struct BuildOutcome {
  /// False when the previous output could not be removed.
  pub clean_ok: bool,
  pub copy: CopyReport,
  pub elapsed: Duration,
}

impl BuildOutcome {
  pub fn is_success(&self) -> bool {
    self.copy.is_success()
  }
}

/// Run every stage for already-loaded settings.
///
/// Only a compile failure returns `Err`; clean and copy problems are reported
/// by their stages and folded into the outcome.
pub async fn run_pipeline(ctx: &BuildContext, settings: &Settings) -> Result<BuildOutcome> {
  let started = Instant::now();
  let log = Logger::new("BUILD", ctx.debug);
  log.d(&format!("Building {} -> {}", settings.src, settings.dist));
  ui::blank();

  Stage::Cleaning.announce();
  let clean_ok = run_clean(ctx, &settings.dist).await;
  ui::blank();

  Stage::Compiling.announce();
  run_compile(ctx, settings).await?;
  ui::blank();

  Stage::Copying.announce();
  let copy = run_copy(ctx, &settings.files, &settings.src, &settings.dist).await;
  ui::blank();

  Ok(BuildOutcome { clean_ok, copy, elapsed: started.elapsed() })
}

pub fn print_summary(settings: &Settings, outcome: &BuildOutcome) {
  let elapsed = outcome.elapsed.as_secs_f64();
  if outcome.is_success() {
    ui::ok(&format!("build complete in {elapsed:.1}s"));
  } else {
    let failed = outcome.copy.failures.len();
    ui::fail(&format!("build finished with {failed} copy failure(s) in {elapsed:.1}s"));
  }
  if !outcome.clean_ok {
    ui::warn("previous build was not removed, output may contain stale files");
  }
  ui::detail(&format!(
    "{} \u{2192} {} \u{00b7} {} files copied",
    settings.src, settings.dist, outcome.copy.copied
  ));
}
