//! Log output setup.

use log::{LevelFilter, SetLoggerError};

use std::io;
use std::time::SystemTime;

/// Sends log records at or above `level` to standard error. Standard
/// output is left to the installer's completion message.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "[{} {} {}] {}",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        record.level(),
        record.target(),
        message,
      ))
    })
    .level(level)
    .chain(io::stderr())
    .apply()
}
