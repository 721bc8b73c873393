/* src/server/core/rust/src/compose/page.rs */

use super::legal::LegalDocument;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
  Home,
  Privacy,
  Terms,
  NotFound,
}

impl Page {
  /// Pages reachable under `/{locale}`; `NotFound` is only ever a fallback.
  pub const ROUTED: [Page; 3] = [Page::Home, Page::Privacy, Page::Terms];

  /// Path below the locale segment (`""` for home).
  pub fn slug(self) -> &'static str {
    match self {
      Page::Home | Page::NotFound => "",
      Page::Privacy => "privacy",
      Page::Terms => "terms",
    }
  }

  /// Page for the remainder of a path after its locale segment.
  pub fn from_slug(slug: &str) -> Option<Self> {
    match slug.trim_matches('/') {
      "" => Some(Page::Home),
      "privacy" => Some(Page::Privacy),
      "terms" => Some(Page::Terms),
      _ => None,
    }
  }

  pub fn path(self, locale: Locale) -> String {
    match self.slug() {
      "" => format!("/{}", locale.code()),
      slug => format!("/{}/{slug}", locale.code()),
    }
  }

  pub fn legal(self) -> Option<LegalDocument> {
    match self {
      Page::Privacy => Some(LegalDocument::Privacy),
      Page::Terms => Some(LegalDocument::Terms),
      Page::Home | Page::NotFound => None,
    }
  }
}
