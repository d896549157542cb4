//! Shell command execution utilities for PAS diagnostics.
//!
//! This module provides safe shell command execution with proper quoting
//! to prevent command injection when templating port identifiers into
//! platform CLI invocations.
//!
//! # Example
//!
//! ```ignore
//! use pas_diag_common::shell::{self, CPS_GET_CMD, GREP_CMD, shellquote};
//!
//! let port = "1";
//! let cmd = format!("{} observed/base-pas/media port={} | {} -e qsa-adapter",
//!     CPS_GET_CMD, shellquote(port), GREP_CMD);
//! let result = shell::exec(&cmd).await?;
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{DiagError, DiagResult};

/// Path to the transceiver summary tool.
pub const TRANSCEIVER_CMD: &str = "/usr/bin/opx-show-transceivers";

/// Path to the CPS object get tool for hardware-state queries.
pub const CPS_GET_CMD: &str = "/usr/bin/cps_get_oid.py";

/// Path to the `grep` command.
pub const GREP_CMD: &str = "/bin/grep";

/// Regex for characters that need escaping in shell double-quotes.
/// Matches: $, `, ", \, and newline
static SHELL_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([$`"\\\n])"#).expect("Invalid regex pattern"));

/// Quotes a string for safe use in shell commands.
///
/// This function wraps the string in double quotes and escapes any
/// characters that have special meaning inside double quotes:
/// - `$` (variable expansion)
/// - `` ` `` (command substitution)
/// - `"` (quote termination)
/// - `\` (escape character)
/// - newline (command termination)
///
/// # Example
///
/// ```
/// use pas_diag_common::shell::shellquote;
///
/// assert_eq!(shellquote("simple"), "\"simple\"");
/// assert_eq!(shellquote("with$var"), "\"with\\$var\"");
/// assert_eq!(shellquote("with\"quote"), "\"with\\\"quote\"");
/// ```
pub fn shellquote(s: &str) -> String {
    let escaped = SHELL_ESCAPE_RE.replace_all(s, r"\$1");
    format!("\"{}\"", escaped)
}

/// Result of a shell command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// The exit code of the command (0 = success).
    pub exit_code: i32,
    /// The combined stdout output.
    pub stdout: String,
    /// The combined stderr output.
    pub stderr: String,
}

impl ExecResult {
    /// Returns true if the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the combined output (stdout + stderr) for error messages.
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Executes a shell command asynchronously.
///
/// This function runs the command through `/bin/sh -c` to support the
/// pipe into `grep` used by the hardware-state query.
///
/// # Returns
///
/// * `Ok(ExecResult)` - The command execution result
/// * `Err(DiagError)` - If the command could not be spawned
pub async fn exec(cmd: &str) -> DiagResult<ExecResult> {
    tracing::debug!(command = %cmd, "Executing shell command");

    let output = Command::new("/bin/sh")
        .arg("-c")
        .arg(cmd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DiagError::Spawn {
            command: cmd.to_string(),
            source: e,
        })?;

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    let result = ExecResult {
        exit_code,
        stdout,
        stderr,
    };

    if result.success() {
        tracing::trace!(command = %cmd, exit_code = exit_code, "Command succeeded");
    } else {
        tracing::warn!(
            command = %cmd,
            exit_code = exit_code,
            stderr = %result.stderr,
            "Command failed"
        );
    }

    Ok(result)
}

/// Executes a shell command and returns an error on non-zero exit.
///
/// # Returns
///
/// * `Ok(String)` - The stdout output on success
/// * `Err(DiagError)` - If the command fails or returns non-zero
pub async fn exec_or_throw(cmd: &str) -> DiagResult<String> {
    let result = exec(cmd).await?;
    if result.success() {
        Ok(result.stdout)
    } else {
        Err(DiagError::CommandFailed {
            command: cmd.to_string(),
            exit_code: result.exit_code,
            output: result.combined_output(),
        })
    }
}
