/* src/cli/core/src/ui.rs */

use std::io::{IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const GRAY: &str = "\x1b[90m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

// dots2 frames, the last entry is the finished frame
const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷", "⣷"];

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  println!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn step(n: u32, total: u32, msg: &str) {
  println!("  {BOLD}[{n}/{total}]{RESET} {msg}...");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn detail_ok(msg: &str) {
  println!("        {GREEN}\u{2713}{RESET} {msg}");
}

pub fn detail_fail(msg: &str) {
  println!("        {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  println!("  {YELLOW}!{RESET} {msg}");
}

pub fn banner(build_type: &str) {
  println!();
  println!("  {BOLD}Odin{RESET} build {build_type} {DIM}v{VERSION}{RESET}");
  println!();
}

pub fn format_size(bytes: u64) -> String {
  if bytes >= 1_000_000 {
    format!("{:.1} MB", bytes as f64 / 1_000_000.0)
  } else if bytes >= 1_000 {
    format!("{:.1} kB", bytes as f64 / 1_000.0)
  } else {
    format!("{bytes} B")
  }
}

pub fn blank() {
  println!();
}

/// Wipe the terminal before a run. No-op when stdout is redirected.
pub fn clear_console() {
  let mut stdout = std::io::stdout();
  if !stdout.is_terminal() {
    return;
  }
  let seq = if cfg!(windows) { "\x1Bc" } else { "\x1B[2J\x1B[3J\x1B[H" };
  let _ = stdout.write_all(seq.as_bytes());
  let _ = stdout.flush();
}

fn spinner_style() -> ProgressStyle {
  ProgressStyle::with_template("     {spinner:.red} {msg}")
    .unwrap_or_else(|_| ProgressStyle::default_spinner())
    .tick_strings(SPINNER_FRAMES)
}

/// Progress indicator for the stage currently running.
///
/// The animated bar is drawn by indicatif on stderr and hidden when stderr is
/// not a terminal. Terminal states are printed as regular status lines so they
/// survive in captured logs.
#[derive(Default)]
pub struct Spinner {
  bar: Option<ProgressBar>,
}

impl Spinner {
  pub fn start(&mut self, text: &str) {
    self.stop();
    let bar = ProgressBar::new_spinner();
    bar.set_style(spinner_style());
    bar.set_message(text.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    self.bar = Some(bar);
  }

  pub fn succeed(&mut self, text: &str) {
    self.stop();
    ok(text);
  }

  pub fn fail(&mut self, text: &str) {
    self.stop();
    fail(text);
  }

  fn stop(&mut self) {
    if let Some(bar) = self.bar.take() {
      bar.finish_and_clear();
    }
  }
}

impl Drop for Spinner {
  fn drop(&mut self) {
    self.stop();
  }
}
