/* src/server/core/rust/src/compose/legal.rs */

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDocument {
  Privacy,
  Terms,
}

impl LegalDocument {
  /// Dictionary section holding `title` and `lastUpdated`.
  pub fn dictionary_section(self) -> &'static str {
    match self {
      LegalDocument::Privacy => "privacy",
      LegalDocument::Terms => "terms",
    }
  }
}

/// Legal text is authored per language, never translated through the
/// dictionary. Each variant holds a complete, independent body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalBody {
  English { heading: &'static str, html: &'static str },
  German { heading: &'static str, html: &'static str },
}

impl LegalBody {
  pub fn select(document: LegalDocument, locale: Locale) -> Self {
    match (document, locale) {
      (LegalDocument::Privacy, Locale::En) => LegalBody::English {
        heading: "Privacy Policy",
        html: include_str!("../../content/legal/privacy.en.html"),
      },
      (LegalDocument::Privacy, Locale::De) => LegalBody::German {
        heading: "Datenschutzerklärung",
        html: include_str!("../../content/legal/privacy.de.html"),
      },
      (LegalDocument::Terms, Locale::En) => LegalBody::English {
        heading: "Terms of Service",
        html: include_str!("../../content/legal/terms.en.html"),
      },
      (LegalDocument::Terms, Locale::De) => LegalBody::German {
        heading: "Allgemeine Geschäftsbedingungen",
        html: include_str!("../../content/legal/terms.de.html"),
      },
    }
  }

  pub fn heading(&self) -> &'static str {
    match self {
      LegalBody::English { heading, .. } | LegalBody::German { heading, .. } => heading,
    }
  }

  pub fn html(&self) -> &'static str {
    match self {
      LegalBody::English { html, .. } | LegalBody::German { html, .. } => html,
    }
  }
}
