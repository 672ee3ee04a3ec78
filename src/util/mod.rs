
/// Replacement text for a secret value in logs. Empty secrets stay
/// empty so that "no password" remains distinguishable from a
/// password.
pub fn mask_secret(value: &str) -> &'static str {
  if value.is_empty() {
    ""
  } else {
    "****"
  }
}

/// Splits a command line held in a single string into program and
/// arguments on whitespace. Returns `None` if the string is blank.
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
  let mut words = command.split_whitespace().map(str::to_owned);
  let program = words.next()?;
  Some((program, words.collect()))
}
