/* src/server/core/rust/src/resolve.rs */

use crate::locale::Locale;

/// Request inputs consulted when a path carries no locale.
pub struct ResolveContext<'a> {
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub cookie_name: &'a str,
  pub default_locale: Locale,
}

/// Resolve chain for a raw request: cookie(`cookie_name`) -> Accept-Language -> default_locale
pub fn resolve_request(ctx: &ResolveContext<'_>) -> Locale {
  let cookie = ctx.cookie_header.and_then(|h| cookie_value(h, ctx.cookie_name));
  resolve(cookie, ctx.accept_language, ctx.default_locale)
}

/// First match wins: a supported cookie value, then the first supported
/// Accept-Language entry in header order, then `default`.
pub fn resolve(cookie: Option<&str>, accept_language: Option<&str>, default: Locale) -> Locale {
  if let Some(loc) = cookie.and_then(Locale::from_code) {
    return loc;
  }

  if let Some(loc) = accept_language.and_then(parse_accept_language) {
    return loc;
  }

  default
}

/// Extract a named value from a raw `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  for pair in header.split(';') {
    let pair = pair.trim();
    if let Some((k, v)) = pair.split_once('=') {
      if k.trim() == name {
        return Some(v.trim());
      }
    }
  }
  None
}

/// Entries are taken in header order; quality weights are stripped, not sorted on.
fn parse_accept_language(header: &str) -> Option<Locale> {
  for part in header.split(',') {
    let tag = part.split(';').next().unwrap_or("").trim();
    // Primary subtag only, compared as sent: de-DE -> de, DE-de -> DE
    let primary: String = tag.chars().take(2).collect();
    if let Some(loc) = Locale::from_code(&primary) {
      return Some(loc);
    }
  }
  None
}
