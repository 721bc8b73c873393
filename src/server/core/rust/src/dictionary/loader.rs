/* src/server/core/rust/src/dictionary/loader.rs */

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::{Dictionary, DictionarySource};
use crate::errors::SiteError;
use crate::locale::Locale;

/// Lazily loads one dictionary per locale and memoizes it for the life of
/// the loader. Failed loads are not cached.
pub struct DictionaryLoader {
  source: DictionarySource,
  cells: [OnceCell<Arc<Dictionary>>; Locale::ALL.len()],
}

impl DictionaryLoader {
  pub fn new(source: DictionarySource) -> Self {
    Self { source, cells: std::array::from_fn(|_| OnceCell::new()) }
  }

  pub async fn load(&self, locale: Locale) -> Result<Arc<Dictionary>, SiteError> {
    let cell = &self.cells[locale as usize];
    let dict = cell
      .get_or_try_init(|| async {
        let text = self.source.read(locale).await?;
        let dict = Dictionary::from_json(locale, &text)?;
        log::info!("loaded dictionary '{locale}' ({})", self.source.describe());
        Ok::<_, SiteError>(Arc::new(dict))
      })
      .await?;
    Ok(Arc::clone(dict))
  }

  /// Every supported locale's dictionary, in `Locale::ALL` order.
  pub async fn load_all(&self) -> Result<Vec<Arc<Dictionary>>, SiteError> {
    let mut out = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
      out.push(self.load(locale).await?);
    }
    Ok(out)
  }
}
