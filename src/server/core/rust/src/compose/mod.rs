/* src/server/core/rust/src/compose/mod.rs */

//! Server-side page rendering: a document shell with header and footer
//! around one page body, all filled from a locale's dictionary.

mod legal;
mod page;

pub use legal::{LegalBody, LegalDocument};
pub use page::Page;

use serde_json::{Map, Value, json};

use crate::dictionary::Dictionary;
use crate::injector::inject;
use crate::locale::Locale;
use crate::routing::SWITCH_ENDPOINT;

const DOCUMENT: &str = include_str!("../../templates/document.html");
const HEADER: &str = include_str!("../../templates/header.html");
const FOOTER: &str = include_str!("../../templates/footer.html");
const HOME: &str = include_str!("../../templates/home.html");
const LEGAL: &str = include_str!("../../templates/legal.html");
const NOT_FOUND: &str = include_str!("../../templates/not_found.html");

pub const KEYWORDS: [&str; 7] = [
  "document management",
  "document scanner",
  "OCR",
  "GDPR compliant",
  "Germany",
  "paperless",
  "digital documents",
];

/// Per-request values that do not come from the dictionary.
#[derive(Debug, Clone)]
pub struct ComposeContext<'a> {
  pub brand: &'a str,
  pub contact_email: &'a str,
  pub year: i32,
  /// Path the switcher returns to after changing locale.
  pub current_path: &'a str,
  pub stylesheet: Option<&'a str>,
}

struct Lookup<'a> {
  dict: &'a Dictionary,
  missing: Vec<String>,
}

impl Lookup<'_> {
  fn text(&mut self, path: &str) -> String {
    match self.dict.get(path) {
      Some(s) => s.to_string(),
      None => {
        self.note_missing(path);
        path.to_string()
      }
    }
  }

  fn note_missing(&mut self, path: &str) {
    if !self.missing.iter().any(|p| p == path) {
      self.missing.push(path.to_string());
    }
  }
}

/// Render a complete HTML document. Missing dictionary keys render as their
/// dotted key and are reported in a single warning.
pub fn compose(page: Page, locale: Locale, dict: &Dictionary, ctx: &ComposeContext<'_>) -> String {
  let mut lookup = Lookup { dict, missing: Vec::new() };

  let description = lookup.text("metadata.description");
  let og_title = lookup.text("metadata.title");
  let title = match page {
    Page::Home => og_title.clone(),
    Page::Privacy | Page::Terms | Page::NotFound => {
      let section = match page.legal() {
        Some(doc) => doc.dictionary_section(),
        None => "notFound",
      };
      format!("{} - {}", lookup.text(&format!("{section}.title")), ctx.brand)
    }
  };

  let mut site = json!({
    "locale": locale.code(),
    "og_locale": locale.og_locale(),
    "brand": ctx.brand,
    "contact_email": ctx.contact_email,
    "year": ctx.year,
    "title": title,
    "og_title": og_title,
    "description": description,
    "keywords": KEYWORDS.join(", "),
    "stylesheet": ctx.stylesheet,
    "home_href": Page::Home.path(locale),
    "features_href": format!("{}#features", Page::Home.path(locale)),
    "privacy_href": Page::Privacy.path(locale),
    "terms_href": Page::Terms.path(locale),
    "locales": switcher_entries(locale, ctx.current_path),
    "alternates": alternates(page),
  });

  let body_template = match page.legal() {
    Some(doc) => {
      let body = LegalBody::select(doc, locale);
      let last_updated = lookup.text(&format!("{}.lastUpdated", doc.dictionary_section()));
      site["heading"] = json!(body.heading());
      site["last_updated"] = json!(last_updated);
      site["legal"] = json!(body.html());
      LEGAL
    }
    None if page == Page::NotFound => NOT_FOUND,
    None => HOME,
  };

  let mut data = match dict.as_value() {
    Value::Object(map) => map.clone(),
    _ => Map::new(),
  };

  let mut fill = |template: &str, data: &Value| {
    let injected = inject(template, data);
    for path in &injected.missing {
      lookup.note_missing(path);
    }
    injected.html
  };

  data.insert("site".to_string(), site);
  let mut data = Value::Object(data);
  let header = fill(HEADER, &data);
  let footer = fill(FOOTER, &data);
  let body = fill(body_template, &data);
  data["site"]["header"] = json!(header);
  data["site"]["footer"] = json!(footer);
  data["site"]["body"] = json!(body);
  let html = fill(DOCUMENT, &data);

  if !lookup.missing.is_empty() {
    log::warn!(
      "dictionary '{}' is missing {} key(s) for {page:?}: {}",
      dict.locale(),
      lookup.missing.len(),
      lookup.missing.join(", ")
    );
  }
  html
}

/// One switcher entry per supported locale; each link goes through the
/// switch endpoint so the choice is persisted.
fn switcher_entries(active: Locale, current_path: &str) -> Value {
  let entries: Vec<Value> = Locale::ALL
    .iter()
    .map(|&locale| {
      json!({
        "code": locale.code(),
        "label": locale.label(),
        "href": switch_href(locale, current_path),
        "active": locale == active,
      })
    })
    .collect();
  Value::Array(entries)
}

pub fn switch_href(to: Locale, from: &str) -> String {
  let query = url::form_urlencoded::Serializer::new(String::new())
    .append_pair("to", to.code())
    .append_pair("from", from)
    .finish();
  format!("{SWITCH_ENDPOINT}?{query}")
}

fn alternates(page: Page) -> Value {
  if page == Page::NotFound {
    return Value::Array(Vec::new());
  }
  let entries: Vec<Value> = Locale::ALL
    .iter()
    .map(|&locale| json!({ "code": locale.code(), "href": page.path(locale) }))
    .collect();
  Value::Array(entries)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::DictionarySource;
  use crate::dictionary::DictionaryLoader;

  fn ctx(path: &str) -> ComposeContext<'_> {
    ComposeContext {
      brand: "Docbase",
      contact_email: "info@gzhn.online",
      year: 2026,
      current_path: path,
      stylesheet: None,
    }
  }

  async fn dict(locale: Locale) -> std::sync::Arc<Dictionary> {
    DictionaryLoader::new(DictionarySource::Embedded).load(locale).await.unwrap()
  }

  #[tokio::test]
  async fn home_document_shell() {
    let d = dict(Locale::De).await;
    let html = compose(Page::Home, Locale::De, &d, &ctx("/de"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"de\">"));
    assert!(html.contains(&format!("<title>{}</title>", d.get("metadata.title").unwrap())));
    assert!(html.contains("<meta property=\"og:locale\" content=\"de_DE\">"));
    assert!(html.contains("GDPR compliant"));
    assert!(html.contains("id=\"features\""));
    assert!(!html.contains("<!--site:"));
  }

  #[tokio::test]
  async fn header_links_are_locale_prefixed() {
    let d = dict(Locale::En).await;
    let html = compose(Page::Home, Locale::En, &d, &ctx("/en"));
    assert!(html.contains("href=\"/en#features\""));
    assert!(html.contains("href=\"/en/privacy\""));
    assert!(html.contains("href=\"/en/terms\""));
    assert!(html.contains("data-menu hidden"));
  }

  #[tokio::test]
  async fn switcher_marks_active_locale() {
    let d = dict(Locale::En).await;
    let html = compose(Page::Privacy, Locale::En, &d, &ctx("/en/privacy"));
    assert!(html.contains("href=\"/api/locale?to=de&amp;from=%2Fen%2Fprivacy\""));
    assert!(html.contains("class=\"locale-option active\">EN</a>"));
    assert!(html.contains("class=\"locale-option\">DE</a>"));
  }

  #[tokio::test]
  async fn footer_year_and_brand() {
    let d = dict(Locale::En).await;
    let html = compose(Page::Home, Locale::En, &d, &ctx("/en"));
    let rights = d.get("footer.rights").unwrap();
    assert!(html.contains(&format!("&copy; 2026 Docbase. {rights}")));
    assert!(html.contains("mailto:info@gzhn.online"));
  }

  #[tokio::test]
  async fn legal_pages_pick_body_by_locale() {
    let en = dict(Locale::En).await;
    let de = dict(Locale::De).await;
    let html = compose(Page::Privacy, Locale::En, &en, &ctx("/en/privacy"));
    assert!(html.contains("<h1>Privacy Policy</h1>"));
    assert!(html.contains(en.get("privacy.lastUpdated").unwrap()));
    let title = format!("<title>{} - Docbase</title>", en.get("privacy.title").unwrap());
    assert!(html.contains(&title));

    let html = compose(Page::Terms, Locale::De, &de, &ctx("/de/terms"));
    assert!(html.contains("<h1>Allgemeine Geschäftsbedingungen</h1>"));
    assert!(!html.contains("Terms of Service"));
  }

  #[tokio::test]
  async fn unsupported_segment_renders_default_locale() {
    let locale = Locale::parse_or("fr", Locale::En);
    let d = dict(locale).await;
    let html = compose(Page::Privacy, locale, &d, &ctx("/fr/privacy"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<h1>Privacy Policy</h1>"));
  }

  #[test]
  fn missing_key_renders_key_name() {
    let d = Dictionary::from_json(Locale::De, r#"{"nav": {"features": "Funktionen"}}"#).unwrap();
    let html = compose(Page::Home, Locale::De, &d, &ctx("/de"));
    assert!(html.contains(">Funktionen</a>"));
    assert!(html.contains(">nav.privacy</a>"));
    assert!(html.contains("<title>metadata.title</title>"));
  }

  #[test]
  fn stylesheet_link_is_optional() {
    let d = Dictionary::from_json(Locale::En, "{}").unwrap();
    let html = compose(Page::Home, Locale::En, &d, &ctx("/en"));
    assert!(!html.contains("rel=\"stylesheet\""));
    let with_css = ComposeContext { stylesheet: Some("/_static/site.css"), ..ctx("/en") };
    let html = compose(Page::Home, Locale::En, &d, &with_css);
    assert!(html.contains("<link rel=\"stylesheet\" href=\"/_static/site.css\">"));
  }

  #[test]
  fn switch_href_encodes_path() {
    assert_eq!(switch_href(Locale::De, "/en/terms"), "/api/locale?to=de&from=%2Fen%2Fterms");
  }
}
