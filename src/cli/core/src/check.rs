/* src/cli/core/src/check.rs */

use anyhow::{Result, bail};
use docbase_site::{Dictionary, DictionaryLoader, MissingKey, SiteConfig, check_symmetry};

use crate::ui;

pub struct CheckReport {
  /// `(locale code, leaf key count)` per loaded dictionary.
  pub loaded: Vec<(String, usize)>,
  pub missing: Vec<MissingKey>,
}

pub async fn check_dictionaries(site: &SiteConfig) -> Result<CheckReport> {
  let loader = DictionaryLoader::new(site.dictionaries.clone());
  let dicts = loader.load_all().await?;
  let loaded =
    dicts.iter().map(|d| (d.locale().code().to_string(), d.leaf_paths().len())).collect();
  let refs: Vec<&Dictionary> = dicts.iter().map(AsRef::as_ref).collect();
  Ok(CheckReport { loaded, missing: check_symmetry(&refs) })
}

pub async fn run_check(site: &SiteConfig) -> Result<()> {
  ui::arrow(&format!("dictionaries: {}", site.dictionaries.describe()));
  let report = check_dictionaries(site).await?;
  for (code, count) in &report.loaded {
    ui::ok(&format!("{code}  {count} keys"));
  }

  if report.missing.is_empty() {
    ui::ok("dictionaries are locale-symmetric");
    return Ok(());
  }

  for missing in &report.missing {
    ui::fail(&missing.to_string());
  }
  bail!("{} dictionary key(s) missing", report.missing.len());
}
