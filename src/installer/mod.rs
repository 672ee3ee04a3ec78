//! The seam between the settings builder and whatever performs the
//! installation.

mod command;

pub use command::{CommandInstaller, InstallerResponse};

use crate::settings::InstallSettings;

use thiserror::Error;

use std::io;

/// Outcome of a successful installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
  /// Human-readable account of what the installer did.
  pub message: String,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
  /// The installer ran and reported that installation failed.
  #[error("{0}")]
  Failed(String),
  #[error("Could not run installer: {0}")]
  Io(#[from] io::Error),
}

/// Something capable of installing the application from a finished
/// set of settings. Called exactly once per run.
pub trait Installer {
  fn install(&mut self, settings: &InstallSettings) -> Result<InstallReport, InstallError>;
}

impl InstallReport {
  pub fn new(message: impl Into<String>) -> InstallReport {
    InstallReport { message: message.into() }
  }
}
