/* src/cli/core/src/config/tests/mod.rs */

use std::path::Path;

use docbase_site::{DictionarySource, Locale};

use super::*;

mod loader;

fn parse(toml_src: &str) -> DocbaseConfig {
  toml::from_str(toml_src).unwrap()
}

#[test]
fn empty_file_uses_defaults() {
  let config = parse("");
  assert_eq!(config.site.name, "Docbase");
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.i18n.default, "en");
  assert_eq!(config.i18n.cookie_name, "NEXT_LOCALE");
  assert_eq!(config.i18n.cookie_max_age, 31_536_000);
  assert_eq!(config.routing.excluded_prefixes, vec!["/api", "/_static", "/healthz"]);
  assert!(config.validate().is_ok());
}

#[test]
fn partial_sections_keep_field_defaults() {
  let config = parse(
    r#"
[server]
port = 8080

[i18n]
default = "de"
"#,
  );
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.addr(8080), "0.0.0.0:8080");
  assert_eq!(config.i18n.cookie_name, "NEXT_LOCALE");
}

#[test]
fn unsupported_default_locale_is_rejected() {
  let config = parse("[i18n]\ndefault = \"fr\"\n");
  let err = config.validate().unwrap_err();
  assert!(format!("{err:#}").contains("unsupported locale \"fr\""));
}

#[test]
fn bad_cookie_name_is_rejected() {
  assert!(parse("[i18n]\ncookie_name = \"a;b\"\n").validate().is_err());
}

#[test]
fn relative_prefix_is_rejected() {
  assert!(parse("[routing]\nexcluded_prefixes = [\"api\"]\n").validate().is_err());
}

#[test]
fn bad_log_level_is_rejected() {
  assert!(parse("[log]\nlevel = \"loud\"\n").validate().is_err());
  assert_eq!(parse("[log]\nlevel = \"debug\"\n").log_level().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn site_config_resolves_directories() {
  let config = parse(
    r#"
[site]
name = "Docbase Beta"

[server]
static_dir = "public"

[i18n]
default = "de"
dictionaries_dir = "content/dictionaries"
"#,
  );
  let site = config.to_site_config(Path::new("/srv/site")).unwrap();
  assert_eq!(site.brand, "Docbase Beta");
  assert_eq!(site.default_locale, Locale::De);
  assert_eq!(site.static_dir.as_deref(), Some(Path::new("/srv/site/public")));
  match site.dictionaries {
    DictionarySource::Directory(dir) => {
      assert_eq!(dir, Path::new("/srv/site/content/dictionaries"));
    }
    DictionarySource::Embedded => panic!("expected directory source"),
  }
}

#[test]
fn site_config_defaults_to_embedded() {
  let site = parse("").to_site_config(Path::new(".")).unwrap();
  assert!(matches!(site.dictionaries, DictionarySource::Embedded));
  assert!(site.static_dir.is_none());
}
