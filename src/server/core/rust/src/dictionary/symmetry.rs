/* src/server/core/rust/src/dictionary/symmetry.rs */

use std::collections::BTreeSet;
use std::fmt;

use super::Dictionary;
use crate::locale::Locale;

/// A leaf key present in some locale but absent from `locale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
  pub locale: Locale,
  pub path: String,
}

impl fmt::Display for MissingKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: missing '{}'", self.locale, self.path)
  }
}

/// Compare leaf key sets across dictionaries. Empty means locale-symmetric.
pub fn check_symmetry(dicts: &[&Dictionary]) -> Vec<MissingKey> {
  let per_locale: Vec<(Locale, BTreeSet<String>)> =
    dicts.iter().map(|d| (d.locale(), d.leaf_paths())).collect();
  let all: BTreeSet<&String> = per_locale.iter().flat_map(|(_, paths)| paths.iter()).collect();

  let mut missing = Vec::new();
  for (locale, paths) in &per_locale {
    for path in &all {
      if !paths.contains(*path) {
        missing.push(MissingKey { locale: *locale, path: (*path).clone() });
      }
    }
  }
  missing
}
