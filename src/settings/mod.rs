//! Installation settings and the command-line parser that builds
//! them.

mod key;

pub use key::{SettingKey, UnknownSettingKey};

use crate::util::mask_secret;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use std::collections::BTreeMap;

/// Reserved value meaning "leave this setting empty". Allows an empty
/// value to be spelled on a command line where an empty string would
/// be awkward to pass through a shell.
pub const PLACEHOLDER: &str = "BLANK";

/// An argument equal to this introduces a single argument containing
/// several whitespace-separated `key=value` pairs.
pub const PAIR_LIST_FLAG: &str = "-f";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SettingsError {
  #[error("Missing setting name in '{token}'")]
  EmptyKey { token: String },
}

/// The full set of values handed to the installer.
///
/// Serializes to a flat JSON object keyed by the installer's setting
/// names, with any unrecognized settings appended after the known
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallSettings {
  /// Login name of the initial administrator.
  #[serde(rename = "iuser")]
  pub admin_user: String,
  /// Display name of the initial administrator.
  #[serde(rename = "iuname")]
  pub admin_name: String,
  #[serde(rename = "iuserpass")]
  pub admin_password: String,
  /// Access control group the administrator is placed in.
  #[serde(rename = "igroup")]
  pub group: String,
  /// Host of the database server.
  pub server: String,
  /// Host the web server connects to the database from.
  #[serde(rename = "loginhost")]
  pub login_host: String,
  pub port: String,
  /// Database superuser, used to create the application database and
  /// user.
  pub root: String,
  #[serde(rename = "rootpass")]
  pub root_password: String,
  /// Database user the application runs as.
  pub login: String,
  #[serde(rename = "pass")]
  pub password: String,
  #[serde(rename = "dbname")]
  pub db_name: String,
  pub collate: String,
  /// Identifier of the site being installed.
  pub site: String,
  /// Existing site to copy configuration from, if any.
  pub source_site_id: String,
  pub clone_database: String,
  pub no_root_db_access: String,
  pub development_translations: String,
  /// Settings with no named field. These are passed through to the
  /// installer untouched.
  #[serde(flatten)]
  pub extra: BTreeMap<String, String>,
}

impl Default for InstallSettings {
  fn default() -> Self {
    InstallSettings {
      admin_user: String::from("admin"),
      admin_name: String::from("Administrator"),
      admin_password: String::from("pass"),
      group: String::from("Default"),
      server: String::from("localhost"),
      login_host: String::from("localhost"),
      port: String::from("3306"),
      root: String::from("root"),
      root_password: String::from(PLACEHOLDER),
      login: String::from("openemr"),
      password: String::from("openemr"),
      db_name: String::from("openemr"),
      collate: String::from("utf8mb4_general_ci"),
      site: String::from("default"),
      source_site_id: String::from(PLACEHOLDER),
      clone_database: String::from(PLACEHOLDER),
      no_root_db_access: String::from(PLACEHOLDER),
      development_translations: String::from(PLACEHOLDER),
      extra: BTreeMap::new(),
    }
  }
}

impl InstallSettings {
  /// Builds settings from the process arguments (excluding the
  /// program name).
  ///
  /// Arguments are applied left to right over the defaults, so the
  /// last mention of a key wins. Each argument is either `key=value`
  /// or `-f` followed by one argument holding whitespace-separated
  /// `key=value` pairs. An argument with no `=` sets its key to the
  /// empty string. Afterwards every value equal to [`PLACEHOLDER`] is
  /// emptied.
  pub fn from_args<I, S>(args: I) -> Result<InstallSettings, SettingsError>
  where I: IntoIterator<Item = S>,
        S: AsRef<str> {
    let mut settings = InstallSettings::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
      let token = arg.as_ref();
      if token == PAIR_LIST_FLAG {
        if let Some(pairs) = args.next() {
          settings.apply_pair_list(pairs.as_ref())?;
          continue;
        }
      }
      let (key, value) = token.split_once('=').unwrap_or((token, ""));
      settings.set(key, value).map_err(|_| SettingsError::EmptyKey { token: token.to_owned() })?;
    }
    settings.normalize_placeholders();
    Ok(settings)
  }

  /// Applies a whitespace-separated list of `key=value` pairs. Pairs
  /// without `=` are skipped.
  pub fn apply_pair_list(&mut self, pairs: &str) -> Result<(), SettingsError> {
    for pair in pairs.split_whitespace() {
      let Some((key, value)) = pair.split_once('=') else {
        warn!("Ignoring '{}' in {} list, expected key=value", pair, PAIR_LIST_FLAG);
        continue;
      };
      self.set(key, value).map_err(|_| SettingsError::EmptyKey { token: pair.to_owned() })?;
    }
    Ok(())
  }

  /// Sets a single setting by name. Names with no corresponding field
  /// are stored in [`extra`](InstallSettings::extra).
  pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
    if key.is_empty() {
      return Err(SettingsError::EmptyKey { token: format!("={}", value) });
    }
    match key.parse::<SettingKey>() {
      Ok(known) => {
        debug!("{} = {}", known, display_value(known.is_secret(), value));
        *self.get_mut(known) = value.to_owned();
      }
      Err(_) => {
        warn!("Unrecognized setting '{}', passing it through to the installer", key);
        self.extra.insert(key.to_owned(), value.to_owned());
      }
    }
    Ok(())
  }

  pub fn get(&self, key: SettingKey) -> &str {
    match key {
      SettingKey::AdminUser => &self.admin_user,
      SettingKey::AdminName => &self.admin_name,
      SettingKey::AdminPassword => &self.admin_password,
      SettingKey::Group => &self.group,
      SettingKey::Server => &self.server,
      SettingKey::LoginHost => &self.login_host,
      SettingKey::Port => &self.port,
      SettingKey::Root => &self.root,
      SettingKey::RootPassword => &self.root_password,
      SettingKey::Login => &self.login,
      SettingKey::Password => &self.password,
      SettingKey::DbName => &self.db_name,
      SettingKey::Collate => &self.collate,
      SettingKey::Site => &self.site,
      SettingKey::SourceSiteId => &self.source_site_id,
      SettingKey::CloneDatabase => &self.clone_database,
      SettingKey::NoRootDbAccess => &self.no_root_db_access,
      SettingKey::DevelopmentTranslations => &self.development_translations,
    }
  }

  pub fn get_mut(&mut self, key: SettingKey) -> &mut String {
    match key {
      SettingKey::AdminUser => &mut self.admin_user,
      SettingKey::AdminName => &mut self.admin_name,
      SettingKey::AdminPassword => &mut self.admin_password,
      SettingKey::Group => &mut self.group,
      SettingKey::Server => &mut self.server,
      SettingKey::LoginHost => &mut self.login_host,
      SettingKey::Port => &mut self.port,
      SettingKey::Root => &mut self.root,
      SettingKey::RootPassword => &mut self.root_password,
      SettingKey::Login => &mut self.login,
      SettingKey::Password => &mut self.password,
      SettingKey::DbName => &mut self.db_name,
      SettingKey::Collate => &mut self.collate,
      SettingKey::Site => &mut self.site,
      SettingKey::SourceSiteId => &mut self.source_site_id,
      SettingKey::CloneDatabase => &mut self.clone_database,
      SettingKey::NoRootDbAccess => &mut self.no_root_db_access,
      SettingKey::DevelopmentTranslations => &mut self.development_translations,
    }
  }

  /// Replaces every value equal to [`PLACEHOLDER`] with the empty
  /// string, including pass-through settings.
  pub fn normalize_placeholders(&mut self) {
    for key in SettingKey::ALL {
      let value = self.get_mut(key);
      if *value == PLACEHOLDER {
        value.clear();
      }
    }
    for value in self.extra.values_mut() {
      if *value == PLACEHOLDER {
        value.clear();
      }
    }
  }

  /// All settings as name/value pairs: known settings in documented
  /// order, then pass-through settings sorted by name.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    let known = SettingKey::ALL.into_iter().map(move |key| (key.as_str(), self.get(key)));
    let extra = self.extra.iter().map(|(key, value)| (key.as_str(), value.as_str()));
    known.chain(extra)
  }

  /// One-line rendering of every setting with passwords masked,
  /// suitable for logs.
  pub fn summary(&self) -> String {
    SettingKey::ALL.into_iter()
      .map(|key| format!("{}={}", key, display_value(key.is_secret(), self.get(key))))
      .chain(self.extra.iter().map(|(key, value)| format!("{}={}", key, value)))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

fn display_value(secret: bool, value: &str) -> &str {
  if secret {
    mask_secret(value)
  } else {
    value
  }
}
