/* src/server/core/rust/src/routing.rs */

use url::Url;

use crate::locale::Locale;
use crate::resolve::{ResolveContext, resolve_request};

/// Endpoint that persists the locale cookie and navigates back.
pub const SWITCH_ENDPOINT: &str = "/api/locale";
pub const STATIC_PREFIX: &str = "/_static";
pub const HEALTH_ENDPOINT: &str = "/healthz";

/// Served by the site itself, so never redirected whatever the configured
/// exclusions are.
const RESERVED_PREFIXES: [&str; 3] = [SWITCH_ENDPOINT, STATIC_PREFIX, HEALTH_ENDPOINT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
  /// Serve the request as-is.
  PassThrough,
  /// Redirect to the given locale-prefixed location (path plus query).
  Redirect(String),
}

/// Locale encoded in the first path segment, if it is a supported one.
/// `/en` and `/en/...` match; `/enx` does not.
pub fn path_locale(path: &str) -> Option<Locale> {
  let rest = path.strip_prefix('/')?;
  let segment = rest.split('/').next().unwrap_or("");
  Locale::from_code(segment)
}

/// `path` is `prefix` itself or lies below it on a segment boundary.
fn under_prefix(path: &str, prefix: &str) -> bool {
  let prefix = prefix.trim_end_matches('/');
  !prefix.is_empty()
    && (path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}

/// Paths the locale router never intercepts: the site's own endpoints,
/// configured prefixes, and anything whose last segment has a file extension.
pub fn is_excluded(path: &str, excluded_prefixes: &[String]) -> bool {
  if RESERVED_PREFIXES.iter().any(|prefix| under_prefix(path, prefix))
    || excluded_prefixes.iter().any(|prefix| under_prefix(path, prefix))
  {
    return true;
  }
  let last = path.rsplit('/').next().unwrap_or("");
  last.contains('.')
}

/// `/{locale}{path}`, with the bare root mapped to `/{locale}`.
pub fn prefixed_path(locale: Locale, path: &str) -> String {
  if path.is_empty() || path == "/" {
    format!("/{}", locale.code())
  } else if path.starts_with('/') {
    format!("/{}{path}", locale.code())
  } else {
    format!("/{}/{path}", locale.code())
  }
}

/// Decide whether an incoming request passes through or is redirected to a
/// locale-prefixed location.
pub fn decide(
  path: &str,
  query: Option<&str>,
  resolve: &ResolveContext<'_>,
  excluded_prefixes: &[String],
) -> RouteDecision {
  if is_excluded(path, excluded_prefixes) || path_locale(path).is_some() {
    return RouteDecision::PassThrough;
  }

  let locale = resolve_request(resolve);
  let mut location = prefixed_path(locale, path);
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    location.push('?');
    location.push_str(q);
  }
  RouteDecision::Redirect(location)
}

/// Replace the locale segment of `current` with `to`, adding one when absent.
/// The result is always a valid URI reference.
pub fn switch_locale_path(current: &str, to: Locale) -> String {
  let current = safe_local_path(current);
  let rest = match path_locale(current) {
    // Drop "/xx" and keep whatever follows the segment.
    Some(loc) => &current[loc.code().len() + 1..],
    None => current,
  };
  match encode_local_path(rest) {
    Some(rest) => prefixed_path(to, &rest),
    None => prefixed_path(to, "/"),
  }
}

/// Serialize a local path (and query) the way a URL parser would: bytes not
/// allowed in a URI become `%XX`, existing escapes stay, dot segments go.
fn encode_local_path(path: &str) -> Option<String> {
  let url = Url::parse(&format!("http://localhost{path}")).ok()?;
  let mut out = url.path().to_string();
  if let Some(query) = url.query() {
    out.push('?');
    out.push_str(query);
  }
  Some(out)
}

/// Only same-origin absolute paths are accepted as navigation targets.
pub fn safe_local_path(path: &str) -> &str {
  let is_local = path.starts_with('/')
    && !path.starts_with("//")
    && !path.contains('\\')
    && !path.chars().any(char::is_control);
  if is_local { path } else { "/" }
}
