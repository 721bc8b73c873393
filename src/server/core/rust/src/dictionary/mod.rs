/* src/server/core/rust/src/dictionary/mod.rs */

mod loader;
mod source;
mod symmetry;

pub use loader::DictionaryLoader;
pub use source::DictionarySource;
pub use symmetry::{MissingKey, check_symmetry};

use std::collections::BTreeSet;

use serde_json::Value;

use crate::errors::SiteError;
use crate::locale::Locale;

/// Translated UI strings for one locale: a nested JSON object addressed by
/// dotted paths (`nav.features`). Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dictionary {
  locale: Locale,
  root: Value,
}

impl Dictionary {
  pub fn from_json(locale: Locale, text: &str) -> Result<Self, SiteError> {
    let root: Value = serde_json::from_str(text).map_err(|e| SiteError::DictionaryMalformed {
      locale,
      detail: format!("not valid JSON: {e}"),
    })?;
    Self::from_value(locale, root)
  }

  pub fn from_value(locale: Locale, root: Value) -> Result<Self, SiteError> {
    if !root.is_object() {
      let detail = "root must be a JSON object".to_string();
      return Err(SiteError::DictionaryMalformed { locale, detail });
    }
    Ok(Self { locale, root })
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn as_value(&self) -> &Value {
    &self.root
  }

  /// String at `path`, if present and a string.
  pub fn get(&self, path: &str) -> Option<&str> {
    let mut current = &self.root;
    for key in path.split('.') {
      current = current.get(key)?;
    }
    current.as_str()
  }

  /// Dotted paths of every non-object value, sorted.
  pub fn leaf_paths(&self) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_leaves(&self.root, "", &mut out);
    out
  }
}

fn collect_leaves(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
  match value {
    Value::Object(map) => {
      for (key, child) in map {
        let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        collect_leaves(child, &path, out);
      }
    }
    _ => {
      out.insert(prefix.to_string());
    }
  }
}
