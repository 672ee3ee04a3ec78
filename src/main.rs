
use emr_autoconfig::args::CliArgs;
use emr_autoconfig::config::Config;
use emr_autoconfig::logging::init_logging;
use emr_autoconfig::setup::run_install;

use clap::Parser;

fn main() -> anyhow::Result<()> {
  let args = CliArgs::parse();
  let config = Config::from_env()?;
  init_logging(config.log_level)?;

  let mut installer = config.installer();
  let report = run_install(&args.settings, &mut installer)?;
  println!("{}", report.message);
  Ok(())
}
