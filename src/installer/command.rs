//! Runs the installer as a child process.

use super::{Installer, InstallReport, InstallError};
use crate::settings::InstallSettings;

use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Hands the settings to an external program.
///
/// The settings are written to the child's standard input as a single
/// JSON object. The child answers with a JSON [`InstallerResponse`] as
/// the last non-empty line of its standard output.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
  program: String,
  args: Vec<String>,
}

/// What the child process reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InstallerResponse {
  Success {
    #[serde(default)]
    message: String,
  },
  Error {
    reason: String,
  },
}

impl CommandInstaller {
  pub fn new(program: impl Into<String>, args: Vec<String>) -> CommandInstaller {
    CommandInstaller {
      program: program.into(),
      args,
    }
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }
}

impl Installer for CommandInstaller {
  fn install(&mut self, settings: &InstallSettings) -> Result<InstallReport, InstallError> {
    let payload = serde_json::to_vec(settings)
      .map_err(|err| InstallError::Io(err.into()))?;

    info!("Running installer: {} {}", self.program, self.args.join(" "));
    let mut child = Command::new(&self.program)
      .args(&self.args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
      // A child that never reads its input is allowed; its response
      // still decides the outcome.
      match stdin.write_all(&payload) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
          warn!("Installer closed its input before reading the settings");
        }
        Err(err) => return Err(err.into()),
      }
    }

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!("Installer exited with {}", output.status);
    if !stderr.trim().is_empty() {
      debug!("Installer stderr: {}", stderr.trim());
    }

    match parse_response(&stdout) {
      Some(InstallerResponse::Success { message }) => {
        if !output.status.success() {
          warn!("Installer reported success but exited with {}", output.status);
        }
        Ok(InstallReport::new(message))
      }
      Some(InstallerResponse::Error { reason }) => Err(InstallError::Failed(reason)),
      None => Err(InstallError::Failed(failure_message(output.status, &stderr))),
    }
  }
}

/// Reads the response from the last non-empty line of output, so that
/// installers may print progress before answering.
fn parse_response(stdout: &str) -> Option<InstallerResponse> {
  let line = stdout.lines().rev().map(str::trim).find(|line| !line.is_empty())?;
  match serde_json::from_str(line) {
    Ok(response) => Some(response),
    Err(err) => {
      warn!("Could not parse installer response '{}': {}", line, err);
      None
    }
  }
}

fn failure_message(status: ExitStatus, stderr: &str) -> String {
  let stderr = stderr.trim();
  if stderr.is_empty() {
    format!("installer exited with {} without a response", status)
  } else {
    stderr.to_owned()
  }
}
