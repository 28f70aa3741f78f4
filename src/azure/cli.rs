//! Azure CLI command execution.
//!
//! Every provisioning action goes through the [`Runner`] trait so tests can
//! substitute a scripted fake for the real `az` binary.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Name of the Azure CLI binary looked up on PATH.
pub const AZ_BIN: &str = "az";

/// Stdout safety limit for a single command.
const STDOUT_LIMIT: usize = 500_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Executes provisioning commands and reports whether the underlying tool
/// exists at all.
///
/// The single implementation outside of tests is [`AzCli`].
pub trait Runner {
    /// Whether the provisioning binary can be found on this machine.
    fn is_available(&self) -> bool;

    /// Run one command and return its stdout.
    ///
    /// A non-zero exit status or a spawn failure is an `Err` carrying the
    /// command's stderr (or the OS error) as a readable message.
    fn run(&self, cmd: &str) -> Result<String, Box<dyn Error>>;
}

/// The real Azure CLI, invoked as a subprocess.
pub struct AzCli;

impl Runner for AzCli {
    fn is_available(&self) -> bool {
        which::which(AZ_BIN).is_ok()
    }

    fn run(&self, cmd: &str) -> Result<String, Box<dyn Error>> {
        log::debug!("run({cmd})", cmd = cmd.on_blue());

        let parts: Vec<&str> = split_and_strip(cmd);
        log::trace!("split parts={:?}", parts);

        let mut command = Command::new(parts[0]);
        for arg in parts.iter().skip(1) {
            command.arg(arg);
        }

        let output = command.output().map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute {}: {}", parts[0], e)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::trace!(
                "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
                code = output.status.code(),
                status = output.status,
                stderr = stderr.red()
            );
            log::warn!(
                "{failed} to run {cmd}",
                failed = "failed".on_red(),
                cmd = cmd.on_blue()
            );
            return Err(format!("ERROR running: {stderr}").into());
        }

        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > STDOUT_LIMIT {
            return Err(format!(
                "Response too large: {} bytes for command: {:?}",
                output.stdout.len(),
                parts
            )
            .into());
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

        Ok(stdout)
    }
}

/// Split a command string on spaces, preserving quoted substrings.
///
/// Needed because locations like `'East US'` contain spaces and must reach
/// the CLI as a single argument.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
