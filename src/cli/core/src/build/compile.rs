/* src/cli/core/src/build/compile.rs */

use anyhow::{Result, bail};

use super::BuildContext;
use crate::config::Settings;
use crate::logger::Logger;
use crate::shell::{quote_arg, run_command};
use crate::ui::Spinner;

pub const COMPILER: &str = "tsc";
pub const PACKAGE_RUNNER: &str = "npx";
const DEBUG_FLAGS: [&str; 3] = ["--diagnostics", "--listFiles", "--listEmittedFiles"];

/// The single `tsc` invocation for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
  pub npx: bool,
  pub args: Vec<String>,
}

impl CompileCommand {
  pub fn new(settings: &Settings, debug: bool) -> Self {
    let mut args = Vec::new();
    if debug {
      args.extend(DEBUG_FLAGS.iter().map(|flag| (*flag).to_string()));
    }
    if settings.explicit_params {
      args.push("--project".to_string());
      args.push(format!("{}/tsconfig.json", settings.src));
    }
    Self { npx: settings.npx, args }
  }

  /// Shell form, e.g. `npx tsc --project src/tsconfig.json`.
  pub fn render(&self) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(self.args.len() + 2);
    if self.npx {
      parts.push(PACKAGE_RUNNER);
    }
    parts.push(COMPILER);
    let mut line = parts.join(" ");
    for arg in &self.args {
      line.push(' ');
      line.push_str(&quote_arg(arg));
    }
    line
  }
}

/// Run the compiler. A failure here stops the pipeline so that stale or
/// partial output is never copied into `dist`.
pub async fn run_compile(ctx: &BuildContext, settings: &Settings) -> Result<()> {
  let log = Logger::new("BUILD", ctx.debug);
  log.i("Building typescript...");

  let command = CompileCommand::new(settings, ctx.debug).render();
  log.d(&command);

  let mut spinner = Spinner::default();
  spinner.start("Building typescript...");
  match run_command(&ctx.cwd, &command, COMPILER).await {
    Ok(stdout) => {
      spinner.succeed("Typescript built successfully");
      if !stdout.is_empty() {
        log.d(stdout.trim_end());
      }
      Ok(())
    }
    Err(e) => {
      spinner.fail("Typescript build failed");
      log.e(&format!("Details: {e:#}"));
      bail!("compilation failed, output was not copied");
    }
  }
}
