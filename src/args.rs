//! Command line argument parser.

use clap::Parser;

/// Collects installation settings and runs the installer.
///
/// Help and version flags are disabled so that every argument reaches
/// the settings parser as-is.
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
  /// Settings as `key=value`, or `-f` followed by one argument
  /// holding whitespace-separated `key=value` pairs.
  #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
  pub settings: Vec<String>,
}
