/* src/server/core/rust/src/dictionary/source.rs */

use std::path::PathBuf;

use crate::errors::SiteError;
use crate::locale::Locale;

const EMBEDDED_EN: &str = include_str!("../../content/dictionaries/en.json");
const EMBEDDED_DE: &str = include_str!("../../content/dictionaries/de.json");

/// Where dictionary documents come from.
#[derive(Debug, Clone, Default)]
pub enum DictionarySource {
  /// Compiled into the binary.
  #[default]
  Embedded,
  /// `{dir}/{code}.json` read from disk on first use.
  Directory(PathBuf),
}

impl DictionarySource {
  pub async fn read(&self, locale: Locale) -> Result<String, SiteError> {
    match self {
      DictionarySource::Embedded => Ok(embedded(locale).to_string()),
      DictionarySource::Directory(dir) => {
        let path = dir.join(format!("{}.json", locale.code()));
        tokio::fs::read_to_string(&path)
          .await
          .map_err(|e| SiteError::DictionaryUnreadable {
            locale,
            detail: format!("failed to read {}: {e}", path.display()),
          })
      }
    }
  }

  pub fn describe(&self) -> String {
    match self {
      DictionarySource::Embedded => "embedded".to_string(),
      DictionarySource::Directory(dir) => dir.display().to_string(),
    }
  }
}

fn embedded(locale: Locale) -> &'static str {
  match locale {
    Locale::En => EMBEDDED_EN,
    Locale::De => EMBEDDED_DE,
  }
}
