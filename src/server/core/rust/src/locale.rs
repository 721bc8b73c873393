/* src/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported site locale. The set is closed; unknown codes never become a `Locale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  De,
}

impl Locale {
  /// Every supported locale, in switcher order.
  pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

  pub fn code(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::De => "de",
    }
  }

  /// Label shown in the language switcher.
  pub fn label(self) -> &'static str {
    match self {
      Locale::En => "EN",
      Locale::De => "DE",
    }
  }

  /// Open Graph `og:locale` value.
  pub fn og_locale(self) -> &'static str {
    match self {
      Locale::En => "en_US",
      Locale::De => "de_DE",
    }
  }

  /// Exact, case-sensitive membership check used for path segments and cookies.
  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|l| l.code() == code)
  }

  /// Normalize an arbitrary code, falling back to `default` when unsupported.
  pub fn parse_or(code: &str, default: Locale) -> Self {
    Self::from_code(code).unwrap_or(default)
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let supported: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
    write!(f, "unsupported locale \"{}\" (expected one of {})", self.0, supported.join(", "))
  }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for Locale {
  type Err = UnsupportedLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
  }
}
