use crate::installer::{Installer, InstallReport};
use crate::settings::InstallSettings;

use anyhow::anyhow;
use log::info;

/// Builds settings from the command line arguments and runs the
/// installer with them once.
///
/// Any installer failure comes back as a single fatal error carrying
/// the installer's message.
pub fn run_install<I, S>(args: I, installer: &mut impl Installer) -> anyhow::Result<InstallReport>
where I: IntoIterator<Item = S>,
      S: AsRef<str> {
  let settings = InstallSettings::from_args(args)?;

  info!("Running installation for site '{}' ...", settings.site);
  info!("Installation settings: {}", settings.summary());

  let report = installer.install(&settings)
    .map_err(|err| anyhow!("ERROR: {}", err))?;
  info!("Installer finished successfully");
  Ok(report)
}
