/* src/cli/core/src/main.rs */

mod build;
mod clean;
mod config;
mod logger;
mod shell;
mod ui;

use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;

use build::{BuildContext, print_summary, run_pipeline};
use config::{BuildType, load_settings, settings_file_name, settings_filename_from_env};
use logger::Logger;

const ORIGIN: &str = "ODIN";

#[derive(Parser)]
#[command(name = "odin", version, about = "Clean, compile and package a TypeScript project")]
struct Cli {
  /// Build type, selects `<SETTINGS_FILENAME>.<type>.json` (dev or prod)
  build_type: Option<String>,
  /// Verbose logging plus tsc diagnostics and file listings
  #[arg(long)]
  debug: bool,
}

async fn run(cli: &Cli) -> Result<ExitCode> {
  let Some(arg) = cli.build_type.as_deref() else {
    bail!("No build type provided");
  };
  let build_type = BuildType::from_arg(arg)?;

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let ctx = BuildContext::new(cwd, cli.debug, settings_filename_from_env());
  if ctx.debug {
    Logger::new("DEBUGGER", true).i("Debug mode enabled");
  }

  ui::banner(build_type.as_str());
  let file_name = settings_file_name(&ctx.settings_filename, build_type);
  ui::arrow(&format!("using {file_name}"));

  let log = Logger::new(ORIGIN, ctx.debug);
  let Some(settings) = load_settings(&ctx, build_type).await else {
    log.e(&format!("No settings file found ({file_name})"));
    return Ok(ExitCode::FAILURE);
  };
  log.l(&format!(
    "src: {} \u{00b7} dist: {} \u{00b7} {} files to copy",
    settings.src,
    settings.dist,
    settings.files.len()
  ));

  let outcome = run_pipeline(&ctx, &settings).await?;
  print_summary(&settings, &outcome);
  Ok(if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Load a dotenv file into the process environment. A missing file is fine.
fn load_dotenv(path: &Path) -> Result<()> {
  match dotenvy::from_path(path) {
    Ok(()) => Ok(()),
    Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
  }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let dotenv = load_dotenv(Path::new(".env"));
  let cli = Cli::parse();

  ui::clear_console();
  let log = Logger::new(ORIGIN, cli.debug);
  log.i(&format!("Starting {} v{}...", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
  if let Err(e) = dotenv {
    log.e(&format!("{e:#}"));
  }

  match run(&cli).await {
    Ok(code) => code,
    Err(e) => {
      log.e(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
