/* src/cli/core/src/shell.rs */

// Shell command helpers for the compile stage.

use std::borrow::Cow;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result, bail};
use tokio::process::Command;

#[derive(Debug)]
pub(crate) struct CommandOutput {
  pub status: ExitStatus,
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  /// Zero exit status and nothing written to stderr.
  pub fn succeeded(&self) -> bool {
    self.status.success() && self.stderr.is_empty()
  }
}

/// Spawn `sh -c <command>` in `base_dir` and wait for it, capturing both streams.
pub(crate) async fn capture_command(
  base_dir: &Path,
  command: &str,
  label: &str,
) -> Result<CommandOutput> {
  let output = Command::new("sh")
    .args(["-c", command])
    .current_dir(base_dir)
    .stdin(Stdio::null())
    .output()
    .await
    .with_context(|| format!("failed to run {label}"))?;
  Ok(CommandOutput {
    status: output.status,
    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
  })
}

/// Run a shell command, bail on failure (shows both stdout and stderr on error).
/// Output on stderr counts as a failure even when the exit status is zero.
pub(crate) async fn run_command(base_dir: &Path, command: &str, label: &str) -> Result<String> {
  let output = capture_command(base_dir, command, label).await?;
  if !output.succeeded() {
    let mut msg = if output.status.success() {
      format!("{label} wrote to stderr")
    } else {
      format!("{label} exited with status {}", output.status)
    };
    if !output.stderr.is_empty() {
      msg.push('\n');
      msg.push_str(output.stderr.trim_end());
    }
    if !output.stdout.is_empty() {
      msg.push('\n');
      msg.push_str(output.stdout.trim_end());
    }
    bail!("{msg}");
  }
  Ok(output.stdout)
}

/// Quote an argument for `sh` when it contains anything beyond a safe charset.
pub(crate) fn quote_arg(arg: &str) -> Cow<'_, str> {
  if !arg.is_empty() && arg.chars().all(is_shell_safe) {
    Cow::Borrowed(arg)
  } else {
    Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
  }
}

fn is_shell_safe(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '@' | '+' | ',')
}
