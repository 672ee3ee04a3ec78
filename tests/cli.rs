//! Runs the built binary against a shell script standing in for the
//! installer.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_emr-autoconfig");

struct FakeInstaller {
  script: PathBuf,
  received: PathBuf,
}

impl FakeInstaller {
  /// Writes a script that saves its input and then prints `response`.
  fn new(name: &str, response: &str) -> FakeInstaller {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli").join(name);
    fs::create_dir_all(&dir).unwrap();
    let script = dir.join("install.sh");
    let received = dir.join("received.json");
    let _ = fs::remove_file(&received);
    fs::write(&script, format!("cat > '{}'\n{}\n", received.display(), response)).unwrap();
    FakeInstaller { script, received }
  }

  fn run(&self, args: &[&str]) -> Output {
    Command::new(BIN)
      .args(args)
      .env("INSTALLER_COMMAND", format!("sh {}", self.script.display()))
      .env("AUTOCONFIG_LOG_LEVEL", "debug")
      .output()
      .unwrap()
  }

  fn received(&self) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(&self.received).unwrap()).unwrap()
  }
}

#[test]
fn default_install_prints_installer_message() {
  let installer = FakeInstaller::new("defaults", r#"echo '{"status":"success","message":"Installed site default"}'"#);
  let output = installer.run(&[]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Installed site default");

  let settings = installer.received();
  assert_eq!(settings["iuser"], "admin");
  assert_eq!(settings["dbname"], "openemr");
  assert_eq!(settings["port"], "3306");
  assert_eq!(settings["rootpass"], "");
  assert_eq!(settings["development_translations"], "");
}

#[test]
fn pair_list_and_arguments_reach_installer() {
  let installer = FakeInstaller::new("overrides", r#"echo '{"status":"success","message":"done"}'"#);
  let output = installer.run(&["-f", "server=mysql rootpass=root port=3307", "port=3308", "iufname=Jane"]);
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let settings = installer.received();
  assert_eq!(settings["server"], "mysql");
  assert_eq!(settings["rootpass"], "root");
  assert_eq!(settings["port"], "3308");
  assert_eq!(settings["iufname"], "Jane");
}

#[test]
fn passwords_stay_out_of_logs() {
  let installer = FakeInstaller::new("masking", r#"echo '{"status":"success","message":"done"}'"#);
  let output = installer.run(&["pass=s3cr3t-value"]);
  assert!(output.status.success());
  assert!(!String::from_utf8_lossy(&output.stderr).contains("s3cr3t-value"));
  assert_eq!(installer.received()["pass"], "s3cr3t-value");
}

#[test]
fn installer_failure_exits_nonzero() {
  let installer = FakeInstaller::new("failure", r#"echo '{"status":"error","reason":"Access denied for user root"}'"#);
  let output = installer.run(&["rootpass=wrong"]);
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("ERROR: Access denied for user root"));
}

#[test]
fn missing_installer_command_is_reported() {
  let output = Command::new(BIN)
    .env_remove("INSTALLER_COMMAND")
    .output()
    .unwrap();
  assert!(!output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("INSTALLER_COMMAND"));
}
