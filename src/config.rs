//! Environment configuration for the bootstrapper itself, as opposed
//! to the settings passed to the installer.

use crate::installer::CommandInstaller;
use crate::util::split_command;

use log::LevelFilter;
use thiserror::Error;

use std::env;

pub const INSTALLER_COMMAND_ENV_VAR: &str = "INSTALLER_COMMAND";
pub const LOG_LEVEL_ENV_VAR: &str = "AUTOCONFIG_LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("Missing INSTALLER_COMMAND environment variable")]
  MissingInstallerCommand,
  #[error("Invalid AUTOCONFIG_LOG_LEVEL '{0}', expected one of off, error, warn, info, debug, trace")]
  InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
  /// Program and arguments of the external installer.
  pub installer_program: String,
  pub installer_args: Vec<String>,
  pub log_level: LevelFilter,
}

impl Config {
  pub fn from_env() -> Result<Config, ConfigError> {
    Config::from_lookup(|name| env::var(name).ok())
  }

  /// Reads configuration through `lookup`, which maps an environment
  /// variable name to its value.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let log_level = match lookup(LOG_LEVEL_ENV_VAR) {
      Some(level) if !level.trim().is_empty() => level.trim().parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(level))?,
      _ => DEFAULT_LOG_LEVEL,
    };
    let command = lookup(INSTALLER_COMMAND_ENV_VAR)
      .ok_or(ConfigError::MissingInstallerCommand)?;
    let (installer_program, installer_args) = split_command(&command)
      .ok_or(ConfigError::MissingInstallerCommand)?;
    Ok(Config { installer_program, installer_args, log_level })
  }

  pub fn installer(&self) -> CommandInstaller {
    CommandInstaller::new(self.installer_program.clone(), self.installer_args.clone())
  }
}
