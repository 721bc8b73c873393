/* src/cli/core/src/main.rs */

mod check;
mod config;
mod export;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use docbase_site::{SiteConfig, SiteServer};

use config::{DocbaseConfig, resolve_config};

#[derive(Parser)]
#[command(name = "docbase", about = "Docbase website server")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the localized site over HTTP
  Serve {
    /// Path to docbase.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen port (overrides PORT and server.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Validate config and check that every locale has the same dictionary keys
  Check {
    /// Path to docbase.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Render every page for every locale to static HTML
  Export {
    /// Path to docbase.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,
  },
}

fn setup_logging(config: &DocbaseConfig) -> Result<()> {
  let mut builder = env_logger::Builder::new();
  builder.filter_level(config.log_level()?);
  // RUST_LOG refines the configured level
  builder.parse_default_env();
  builder.try_init()?;
  Ok(())
}

fn load(explicit: Option<&Path>) -> Result<(DocbaseConfig, SiteConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (base_dir, config) = resolve_config(explicit, &cwd)?;
  setup_logging(&config)?;
  let site = config.to_site_config(&base_dir)?;
  Ok((config, site))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, port } => {
      ui::banner("serve");
      let (config, site) = load(config.as_deref())?;
      let env_port = std::env::var("PORT").ok();
      let port = serve::resolve_port(port, env_port.as_deref(), &config)?;
      serve::run_serve(SiteServer::from_config(site), &config.addr(port)).await?;
    }
    Command::Check { config } => {
      ui::banner("check");
      let (_, site) = load(config.as_deref())?;
      ui::ok("config is valid");
      check::run_check(&site).await?;
    }
    Command::Export { config, out } => {
      ui::banner("export");
      let (_, site) = load(config.as_deref())?;
      let parts = SiteServer::from_config(site).into_parts();
      let year = chrono::Local::now().year();
      export::run_export(&parts, &out, year).await?;
    }
  }

  Ok(())
}
