/* src/cli/core/src/serve.rs */

use anyhow::{Context, Result, anyhow};
use docbase_site::SiteServer;
use docbase_site_axum::IntoAxumRouter;

use crate::config::DocbaseConfig;
use crate::ui;

/// `--port` wins over `PORT`, which wins over `server.port`.
pub fn resolve_port(flag: Option<u16>, env: Option<&str>, config: &DocbaseConfig) -> Result<u16> {
  if let Some(port) = flag {
    return Ok(port);
  }
  match env {
    Some(value) => value.trim().parse().with_context(|| format!("invalid PORT \"{value}\"")),
    None => Ok(config.server.port),
  }
}

pub async fn run_serve(server: SiteServer, addr: &str) -> Result<()> {
  let site = server.config();
  ui::arrow(&format!("dictionaries: {}", site.dictionaries.describe()));
  if let Some(dir) = &site.static_dir {
    if dir.is_dir() {
      ui::arrow(&format!("static files: {}", dir.display()));
    } else {
      ui::warn(&format!("static_dir {} does not exist", dir.display()));
    }
  }
  ui::ok(&format!("listening on {addr}"));
  server.serve(addr).await.map_err(|e| anyhow!("server error: {e}"))
}
