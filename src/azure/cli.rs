//! Azure CLI command execution.
//!
//! Runs `az` with JSON output and parses the response.

use super::error::{AzError, AzResult};
use crate::config;
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::io;
use std::process::{Command, Output};

#[cfg(windows)]
const AZ: &str = "az.cmd";
#[cfg(not(windows))]
const AZ: &str = "az";

/// Render arguments as a command line for logs.
fn describe<S: AsRef<OsStr>>(args: &[S]) -> String {
    let mut cmd = String::from("az");
    for arg in args {
        cmd.push(' ');
        cmd.push_str(&arg.as_ref().to_string_lossy());
    }
    cmd
}

fn spawn_err(err: io::Error) -> AzError {
    match err.kind() {
        io::ErrorKind::NotFound => AzError::AzNotInstalled,
        _ => AzError::Io(err),
    }
}

/// Run `az` and capture its output, whatever the exit status.
pub fn output<S: AsRef<OsStr>>(args: &[S]) -> AzResult<Output> {
    let cmd = describe(args);
    log::debug!("run({cmd})", cmd = cmd.on_blue());
    Command::new(AZ).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        spawn_err(e)
    })
}

/// Run `az` and return stdout on success.
///
/// The whole of stdout is buffered before [`config::MAX_RESPONSE_BYTES`] is
/// checked, so the limit rejects oversized results but does not bound memory.
///
/// # Returns
/// * `Ok(Vec<u8>)` - stdout of a successful command
/// * `Err` - if `az` is missing, exits non zero, or prints too much
pub fn run<S: AsRef<OsStr>>(args: &[S]) -> AzResult<Vec<u8>> {
    let cmd = describe(args);
    let output = output(args)?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > config::MAX_RESPONSE_BYTES {
            return Err(AzError::ResponseTooLarge(output.stdout.len()));
        }
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
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
    Err(AzError::CommandFailure {
        code: output.status.code(),
        stderr,
    })
}

/// Run `az` with inherited stdio, for interactive commands like `az login`.
pub fn run_interactive<S: AsRef<OsStr>>(args: &[S]) -> AzResult<()> {
    let cmd = describe(args);
    log::debug!("run_interactive({cmd})", cmd = cmd.on_blue());

    let status = Command::new(AZ).args(args).status().map_err(spawn_err)?;
    if status.success() {
        Ok(())
    } else {
        log::warn!("{failed} to run {cmd}", failed = "failed".on_red());
        Err(AzError::CommandFailure {
            code: status.code(),
            stderr: format!("{cmd} exited with {status}"),
        })
    }
}

/// Run `az` and deserialize its JSON output.
pub fn az<T, S>(args: &[S]) -> AzResult<T>
where
    T: DeserializeOwned,
    S: AsRef<OsStr>,
{
    let stdout = run(args)?;
    parse_json(&stdout)
}

/// Deserialize a JSON response, reporting the path of the failing field.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> AzResult<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!(
            "OUTPUT START:\n\n{}\n\nOUTPUT END\n",
            String::from_utf8_lossy(bytes)
        );
        AzError::Parse {
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    })
}
