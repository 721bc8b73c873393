/* src/cli/core/src/config/tests/loader.rs */

use super::*;

#[test]
fn finds_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("docbase.toml"), "[server]\nport = 4000\n").unwrap();
  let nested = tmp.path().join("a/b");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_docbase_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join("docbase.toml"));
  assert_eq!(load_docbase_config(&found).unwrap().server.port, 4000);
}

#[test]
fn missing_file_falls_back_to_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  let (base_dir, config) = resolve_config(None, tmp.path()).unwrap();
  assert_eq!(base_dir, tmp.path());
  assert_eq!(config.server.port, 3000);
}

#[test]
fn explicit_path_must_exist() {
  let tmp = tempfile::tempdir().unwrap();
  let missing = tmp.path().join("nope.toml");
  let err = resolve_config(Some(&missing), tmp.path()).unwrap_err();
  assert!(err.to_string().contains("failed to read"));
}

#[test]
fn invalid_config_reports_file() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("docbase.toml");
  std::fs::write(&path, "[i18n]\ndefault = \"pt\"\n").unwrap();
  let err = load_docbase_config(&path).unwrap_err();
  assert!(err.to_string().starts_with("invalid "));
}

#[test]
fn base_dir_is_config_parent() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("docbase.toml");
  std::fs::write(&path, "").unwrap();
  let (base_dir, _) = resolve_config(Some(&path), Path::new("/")).unwrap();
  assert_eq!(base_dir, tmp.path());
}
