/* src/cli/core/src/logger.rs */

// Origin-labelled log lines: `[ORIGIN] > message`.

use crate::ui::{BOLD, BRIGHT_BLUE, BRIGHT_CYAN, BRIGHT_RED, DIM, GRAY, RESET};

#[derive(Debug, Clone, Copy)]
pub struct Logger {
  origin: &'static str,
  debug: bool,
}

impl Logger {
  pub fn new(origin: &'static str, debug: bool) -> Self {
    Self { origin, debug }
  }

  fn format(&self, color: &str, message: &str) -> String {
    format!("{GRAY}[{}]{RESET}{BOLD} > {RESET}{color}{message}{RESET}", self.origin)
  }

  /// Plain, low-emphasis line.
  pub fn l(&self, message: &str) {
    println!("{}", self.format(GRAY, message));
  }

  pub fn i(&self, message: &str) {
    println!("{}", self.info_line(message));
  }

  fn info_line(&self, message: &str) -> String {
    self.format(BRIGHT_CYAN, message)
  }

  pub fn e(&self, message: &str) {
    eprintln!("{}", self.format(BRIGHT_RED, message));
  }

  /// Only printed when debug mode is on.
  pub fn d(&self, message: &str) {
    if let Some(line) = self.debug_line(message) {
      println!("{line}");
    }
  }

  fn debug_line(&self, message: &str) -> Option<String> {
    self.debug.then(|| format!("{DIM}(DEBUG){RESET} {}", self.format(BRIGHT_BLUE, message)))
  }

  pub fn blank(&self) {
    println!();
  }
}
