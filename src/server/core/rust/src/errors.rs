/* src/server/core/rust/src/errors.rs */

use std::fmt;

use crate::locale::Locale;

/// Failure to obtain a locale's dictionary. Every variant is a server-side
/// fault: requests cannot be rendered without the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
  /// The source could not produce the document (missing file, I/O error).
  DictionaryUnreadable { locale: Locale, detail: String },
  /// The document is not a JSON object.
  DictionaryMalformed { locale: Locale, detail: String },
}

impl SiteError {
  pub fn code(&self) -> &'static str {
    match self {
      SiteError::DictionaryUnreadable { .. } => "DICTIONARY_UNREADABLE",
      SiteError::DictionaryMalformed { .. } => "DICTIONARY_MALFORMED",
    }
  }

  pub fn locale(&self) -> Locale {
    match self {
      SiteError::DictionaryUnreadable { locale, .. }
      | SiteError::DictionaryMalformed { locale, .. } => *locale,
    }
  }

  /// HTTP status an adapter should answer with.
  pub fn status(&self) -> u16 {
    500
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SiteError::DictionaryUnreadable { locale, detail } => {
        write!(f, "dictionary '{locale}' unreadable: {detail}")
      }
      SiteError::DictionaryMalformed { locale, detail } => {
        write!(f, "dictionary '{locale}' malformed: {detail}")
      }
    }
  }
}

impl std::error::Error for SiteError {}
