/* src/server/core/rust/src/server.rs */

use std::path::PathBuf;
use std::sync::Arc;

use crate::compose::{ComposeContext, Page, compose};
use crate::config::SiteConfig;
use crate::dictionary::{DictionaryLoader, DictionarySource};
use crate::errors::SiteError;
use crate::locale::Locale;

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
#[derive(Clone)]
pub struct SiteParts {
  pub config: Arc<SiteConfig>,
  pub dictionaries: Arc<DictionaryLoader>,
}

impl SiteParts {
  /// Load the locale's dictionary and render `page`.
  pub async fn render(
    &self,
    page: Page,
    locale: Locale,
    current_path: &str,
    year: i32,
  ) -> Result<String, SiteError> {
    let dict = self.dictionaries.load(locale).await?;
    let ctx = ComposeContext {
      brand: &self.config.brand,
      contact_email: &self.config.contact_email,
      year,
      current_path,
      stylesheet: self.config.stylesheet_href(),
    };
    Ok(compose(page, locale, &dict, &ctx))
  }
}

pub struct SiteServer {
  config: SiteConfig,
}

impl SiteServer {
  pub fn new() -> Self {
    Self { config: SiteConfig::default() }
  }

  pub fn from_config(config: SiteConfig) -> Self {
    Self { config }
  }

  pub fn brand(mut self, brand: impl Into<String>) -> Self {
    self.config.brand = brand.into();
    self
  }

  pub fn contact_email(mut self, email: impl Into<String>) -> Self {
    self.config.contact_email = email.into();
    self
  }

  pub fn default_locale(mut self, locale: Locale) -> Self {
    self.config.default_locale = locale;
    self
  }

  pub fn cookie(mut self, name: impl Into<String>, max_age: u64) -> Self {
    self.config.cookie_name = name.into();
    self.config.cookie_max_age = max_age;
    self
  }

  pub fn exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.config.excluded_prefixes.push(prefix.into());
    self
  }

  pub fn dictionaries(mut self, source: DictionarySource) -> Self {
    self.config.dictionaries = source;
    self
  }

  pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.config.static_dir = Some(dir.into());
    self
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  /// Consume the builder, returning shared parts for an adapter.
  pub fn into_parts(self) -> SiteParts {
    let loader = DictionaryLoader::new(self.config.dictionaries.clone());
    SiteParts { config: Arc::new(self.config), dictionaries: Arc::new(loader) }
  }
}

impl Default for SiteServer {
  fn default() -> Self {
    Self::new()
  }
}
