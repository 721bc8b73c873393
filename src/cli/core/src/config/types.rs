/* src/cli/core/src/config/types.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use docbase_site::config::{DEFAULT_COOKIE_MAX_AGE, DEFAULT_COOKIE_NAME, DEFAULT_EXCLUDED_PREFIXES};
use docbase_site::{DictionarySource, Locale, SiteConfig};
use serde::Deserialize;

/// `docbase.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocbaseConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub routing: RoutingSection,
  #[serde(default)]
  pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_name")]
  pub name: String,
  #[serde(default = "default_contact_email")]
  pub contact_email: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { name: default_name(), contact_email: default_contact_email() }
  }
}

fn default_name() -> String {
  "Docbase".to_string()
}

fn default_contact_email() -> String {
  "info@gzhn.online".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  pub static_dir: Option<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), static_dir: None }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locale")]
  pub default: String,
  #[serde(default = "default_cookie_name")]
  pub cookie_name: String,
  #[serde(default = "default_cookie_max_age")]
  pub cookie_max_age: u64,
  /// Directory holding `{locale}.json`; the embedded dictionaries are used when unset.
  pub dictionaries_dir: Option<String>,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self {
      default: default_locale(),
      cookie_name: default_cookie_name(),
      cookie_max_age: default_cookie_max_age(),
      dictionaries_dir: None,
    }
  }
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    self.default.parse::<Locale>().context("i18n.default")?;
    if self.cookie_name.is_empty() || self.cookie_name.contains([';', '=', ' ']) {
      bail!("i18n.cookie_name \"{}\" is not a valid cookie name", self.cookie_name);
    }
    Ok(())
  }
}

fn default_locale() -> String {
  Locale::default().code().to_string()
}

fn default_cookie_name() -> String {
  DEFAULT_COOKIE_NAME.to_string()
}

fn default_cookie_max_age() -> u64 {
  DEFAULT_COOKIE_MAX_AGE
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutingSection {
  #[serde(default = "default_excluded_prefixes")]
  pub excluded_prefixes: Vec<String>,
}

impl Default for RoutingSection {
  fn default() -> Self {
    Self { excluded_prefixes: default_excluded_prefixes() }
  }
}

impl RoutingSection {
  pub fn validate(&self) -> Result<()> {
    for prefix in &self.excluded_prefixes {
      if !prefix.starts_with('/') {
        bail!("routing.excluded_prefixes entry \"{prefix}\" must start with '/'");
      }
    }
    Ok(())
  }
}

fn default_excluded_prefixes() -> Vec<String> {
  DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| (*p).to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
  /// `env_logger` filter level; `RUST_LOG` takes precedence.
  #[serde(default = "default_log_level")]
  pub level: String,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { level: default_log_level() }
  }
}

fn default_log_level() -> String {
  "info".to_string()
}

impl DocbaseConfig {
  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    self.routing.validate()?;
    self.log_level()?;
    Ok(())
  }

  pub fn log_level(&self) -> Result<log::LevelFilter> {
    self.log.level.parse().with_context(|| format!("invalid log.level \"{}\"", self.log.level))
  }

  pub fn addr(&self, port: u16) -> String {
    format!("{}:{port}", self.server.host)
  }

  /// Runtime config; relative directories resolve against `base_dir`.
  pub fn to_site_config(&self, base_dir: &Path) -> Result<SiteConfig> {
    let default_locale = self.i18n.default.parse::<Locale>().context("i18n.default")?;
    let dictionaries = match &self.i18n.dictionaries_dir {
      Some(dir) => DictionarySource::Directory(base_dir.join(dir)),
      None => DictionarySource::Embedded,
    };
    Ok(SiteConfig {
      brand: self.site.name.clone(),
      contact_email: self.site.contact_email.clone(),
      default_locale,
      cookie_name: self.i18n.cookie_name.clone(),
      cookie_max_age: self.i18n.cookie_max_age,
      excluded_prefixes: self.routing.excluded_prefixes.clone(),
      dictionaries,
      static_dir: self.server.static_dir.as_ref().map(|dir| base_dir.join(dir)),
    })
  }
}
