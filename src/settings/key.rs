//! Names of the settings understood by the installer.

use thiserror::Error;

use std::fmt::{self, Display};
use std::str::FromStr;

/// A setting with a documented default. Each variant corresponds to
/// exactly one field of [`InstallSettings`](super::InstallSettings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
  AdminUser,
  AdminName,
  AdminPassword,
  Group,
  Server,
  LoginHost,
  Port,
  Root,
  RootPassword,
  Login,
  Password,
  DbName,
  Collate,
  Site,
  SourceSiteId,
  CloneDatabase,
  NoRootDbAccess,
  DevelopmentTranslations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown setting '{0}'")]
pub struct UnknownSettingKey(pub String);

impl SettingKey {
  /// Every known key, in the order the installer documents them.
  pub const ALL: [SettingKey; 18] = [
    SettingKey::AdminUser,
    SettingKey::AdminName,
    SettingKey::AdminPassword,
    SettingKey::Group,
    SettingKey::Server,
    SettingKey::LoginHost,
    SettingKey::Port,
    SettingKey::Root,
    SettingKey::RootPassword,
    SettingKey::Login,
    SettingKey::Password,
    SettingKey::DbName,
    SettingKey::Collate,
    SettingKey::Site,
    SettingKey::SourceSiteId,
    SettingKey::CloneDatabase,
    SettingKey::NoRootDbAccess,
    SettingKey::DevelopmentTranslations,
  ];

  /// The key as it appears on the command line and in the payload
  /// sent to the installer.
  pub fn as_str(self) -> &'static str {
    match self {
      SettingKey::AdminUser => "iuser",
      SettingKey::AdminName => "iuname",
      SettingKey::AdminPassword => "iuserpass",
      SettingKey::Group => "igroup",
      SettingKey::Server => "server",
      SettingKey::LoginHost => "loginhost",
      SettingKey::Port => "port",
      SettingKey::Root => "root",
      SettingKey::RootPassword => "rootpass",
      SettingKey::Login => "login",
      SettingKey::Password => "pass",
      SettingKey::DbName => "dbname",
      SettingKey::Collate => "collate",
      SettingKey::Site => "site",
      SettingKey::SourceSiteId => "source_site_id",
      SettingKey::CloneDatabase => "clone_database",
      SettingKey::NoRootDbAccess => "no_root_db_access",
      SettingKey::DevelopmentTranslations => "development_translations",
    }
  }

  /// Whether the value should be hidden from logs.
  pub fn is_secret(self) -> bool {
    matches!(self, SettingKey::AdminPassword | SettingKey::RootPassword | SettingKey::Password)
  }
}

impl Display for SettingKey {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SettingKey {
  type Err = UnknownSettingKey;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    SettingKey::ALL.into_iter()
      .find(|key| key.as_str() == s)
      .ok_or_else(|| UnknownSettingKey(s.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_key_parses_back_to_itself() {
    for key in SettingKey::ALL {
      assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
    }
  }

  #[test]
  fn unknown_key_is_reported_verbatim() {
    assert_eq!("iufname".parse::<SettingKey>(), Err(UnknownSettingKey(String::from("iufname"))));
  }

  #[test]
  fn keys_are_case_sensitive() {
    assert!("IUSER".parse::<SettingKey>().is_err());
  }
}
