/* src/cli/core/src/export.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docbase_site::{Locale, Page, SiteParts};

use crate::ui;

/// Output file for a page: `{out}/{locale}/index.html`, `{out}/{locale}/{slug}/index.html`.
pub fn page_file(out: &Path, page: Page, locale: Locale) -> PathBuf {
  let mut path = out.join(locale.code());
  if !page.slug().is_empty() {
    path.push(page.slug());
  }
  path.join("index.html")
}

/// Render every routed page for every locale into `out`. Returns the written files.
pub async fn export_site(parts: &SiteParts, out: &Path, year: i32) -> Result<Vec<PathBuf>> {
  let mut written = Vec::new();
  for locale in Locale::ALL {
    for page in Page::ROUTED {
      let html = parts.render(page, locale, &page.path(locale), year).await?;
      let file = page_file(out, page, locale);
      if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(&file, html).with_context(|| format!("failed to write {}", file.display()))?;
      written.push(file);
    }
  }

  if let Some(static_dir) = &parts.config.static_dir {
    let target = out.join("_static");
    copy_dir(static_dir, &target)?;
  }
  Ok(written)
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
  std::fs::create_dir_all(to).with_context(|| format!("failed to create {}", to.display()))?;
  let entries =
    std::fs::read_dir(from).with_context(|| format!("failed to read {}", from.display()))?;
  for entry in entries {
    let entry = entry?;
    let dest = to.join(entry.file_name());
    if entry.file_type()?.is_dir() {
      copy_dir(&entry.path(), &dest)?;
    } else {
      std::fs::copy(entry.path(), &dest)
        .with_context(|| format!("failed to copy {}", entry.path().display()))?;
    }
  }
  Ok(())
}

pub async fn run_export(parts: &SiteParts, out: &Path, year: i32) -> Result<()> {
  ui::arrow(&format!("exporting to {}", out.display()));
  let files = export_site(parts, out, year).await?;
  for file in &files {
    let size = std::fs::metadata(file).map(|m| m.len()).unwrap_or(0);
    let rel = file.strip_prefix(out).unwrap_or(file);
    ui::detail(&format!("{}  {}", rel.display(), ui::format_size(size)));
  }
  ui::ok(&format!("exported {} pages", files.len()));
  Ok(())
}

#[cfg(test)]
mod tests {
  use docbase_site::SiteServer;

  use super::*;

  #[test]
  fn file_layout() {
    let out = Path::new("dist");
    assert_eq!(page_file(out, Page::Home, Locale::En), Path::new("dist/en/index.html"));
    assert_eq!(page_file(out, Page::Privacy, Locale::De), Path::new("dist/de/privacy/index.html"));
    assert_eq!(page_file(out, Page::Terms, Locale::En), Path::new("dist/en/terms/index.html"));
  }

  #[tokio::test]
  async fn writes_every_page_for_every_locale() {
    let tmp = tempfile::tempdir().unwrap();
    let parts = SiteServer::new().into_parts();
    let files = export_site(&parts, tmp.path(), 2026).await.unwrap();
    assert_eq!(files.len(), Locale::ALL.len() * Page::ROUTED.len());

    let privacy = std::fs::read_to_string(tmp.path().join("de/privacy/index.html")).unwrap();
    assert!(privacy.contains("<h1>Datenschutzerklärung</h1>"));
    assert!(privacy.contains("&copy; 2026 Docbase."));
    let home = std::fs::read_to_string(tmp.path().join("en/index.html")).unwrap();
    assert!(home.contains("<html lang=\"en\">"));
  }

  #[tokio::test]
  async fn copies_static_dir() {
    let assets = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(assets.path().join("img")).unwrap();
    std::fs::write(assets.path().join("site.css"), "body{}").unwrap();
    std::fs::write(assets.path().join("img/logo.svg"), "<svg/>").unwrap();
    let out = tempfile::tempdir().unwrap();

    let parts = SiteServer::new().static_dir(assets.path()).into_parts();
    export_site(&parts, out.path(), 2026).await.unwrap();
    assert!(out.path().join("_static/site.css").is_file());
    assert!(out.path().join("_static/img/logo.svg").is_file());
  }
}
