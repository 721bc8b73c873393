/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::DocbaseConfig;

pub const CONFIG_FILE: &str = "docbase.toml";

/// Walk upward from `start` to find `docbase.toml`, like Cargo.toml discovery
pub fn find_docbase_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_docbase_config(path: &Path) -> Result<DocbaseConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: DocbaseConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Explicit path, or discovery from `cwd`. Without a file anywhere the
/// defaults apply with `cwd` as the base directory.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(PathBuf, DocbaseConfig)> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => match find_docbase_config(cwd) {
      Ok(p) => p,
      Err(_) => return Ok((cwd.to_path_buf(), DocbaseConfig::default())),
    },
  };
  let config = load_docbase_config(&path)?;
  let base_dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
  Ok((base_dir, config))
}
