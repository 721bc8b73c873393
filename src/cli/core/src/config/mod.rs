/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_docbase_config, load_docbase_config, resolve_config};
pub use types::DocbaseConfig;
