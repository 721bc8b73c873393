/* src/server/core/rust/src/config.rs */

use std::path::PathBuf;

use crate::dictionary::DictionarySource;
use crate::locale::Locale;
use crate::resolve::ResolveContext;
use crate::routing::{RouteDecision, decide};

pub const DEFAULT_COOKIE_NAME: &str = "NEXT_LOCALE";
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 3] = ["/api", "/_static", "/healthz"];
/// One year, in seconds.
pub const DEFAULT_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Runtime settings shared by every request.
#[derive(Debug, Clone)]
pub struct SiteConfig {
  pub brand: String,
  pub contact_email: String,
  pub default_locale: Locale,
  pub cookie_name: String,
  pub cookie_max_age: u64,
  /// Path prefixes the locale router never redirects, on top of the site's
  /// own endpoints.
  pub excluded_prefixes: Vec<String>,
  pub dictionaries: DictionarySource,
  /// Served under `/_static` when set.
  pub static_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      brand: "Docbase".to_string(),
      contact_email: "info@gzhn.online".to_string(),
      default_locale: Locale::En,
      cookie_name: DEFAULT_COOKIE_NAME.to_string(),
      cookie_max_age: DEFAULT_COOKIE_MAX_AGE,
      excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
      dictionaries: DictionarySource::Embedded,
      static_dir: None,
    }
  }
}

impl SiteConfig {
  pub fn resolve_context<'a>(
    &'a self,
    cookie_header: Option<&'a str>,
    accept_language: Option<&'a str>,
  ) -> ResolveContext<'a> {
    ResolveContext {
      cookie_header,
      accept_language,
      cookie_name: &self.cookie_name,
      default_locale: self.default_locale,
    }
  }

  /// Locale router decision for one request.
  pub fn route(
    &self,
    path: &str,
    query: Option<&str>,
    cookie_header: Option<&str>,
    accept_language: Option<&str>,
  ) -> RouteDecision {
    let ctx = self.resolve_context(cookie_header, accept_language);
    decide(path, query, &ctx, &self.excluded_prefixes)
  }

  /// Locale for a path segment; unsupported codes fall back to the default.
  pub fn locale_or_default(&self, code: &str) -> Locale {
    Locale::parse_or(code, self.default_locale)
  }

  pub fn stylesheet_href(&self) -> Option<&'static str> {
    self.static_dir.as_ref().map(|_| "/_static/site.css")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let config = SiteConfig::default();
    assert_eq!(config.cookie_name, "NEXT_LOCALE");
    assert_eq!(config.cookie_max_age, 31_536_000);
    assert_eq!(config.default_locale, Locale::En);
    assert!(config.stylesheet_href().is_none());
  }

  #[test]
  fn route_uses_configured_cookie_name() {
    let config = SiteConfig { cookie_name: "lang".to_string(), ..SiteConfig::default() };
    let decision = config.route("/", None, Some("NEXT_LOCALE=en; lang=de"), None);
    assert_eq!(decision, RouteDecision::Redirect("/de".to_string()));
  }

  #[test]
  fn route_uses_configured_default() {
    let config = SiteConfig { default_locale: Locale::De, ..SiteConfig::default() };
    let decision = config.route("/terms", None, None, Some("fr"));
    assert_eq!(decision, RouteDecision::Redirect("/de/terms".to_string()));
    assert_eq!(config.locale_or_default("fr"), Locale::De);
  }

  #[test]
  fn custom_exclusions_keep_site_endpoints() {
    let config =
      SiteConfig { excluded_prefixes: vec!["/internal".to_string()], ..SiteConfig::default() };
    assert_eq!(config.route("/internal/x", None, None, None), RouteDecision::PassThrough);
    for path in ["/api/locale", "/healthz", "/_static/site.css"] {
      assert_eq!(config.route(path, Some("to=de"), None, None), RouteDecision::PassThrough);
    }
    // The wider /api namespace is no longer excluded.
    let decision = config.route("/api/other", None, None, None);
    assert_eq!(decision, RouteDecision::Redirect("/en/api/other".to_string()));
  }
}
