//! Bootstraps an installation from command line settings.
//!
//! Arguments are folded over a table of defaults into
//! [`InstallSettings`](settings::InstallSettings), which are then
//! handed once to an [`Installer`](installer::Installer).

pub mod args;
pub mod config;
pub mod installer;
pub mod logging;
pub mod settings;
pub mod setup;
pub mod util;
