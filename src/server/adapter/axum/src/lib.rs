/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
mod middleware;

use docbase_site::{SiteParts, SiteServer};

/// Re-export the site core for convenience
pub use docbase_site;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SiteParts {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    log::info!("Docbase site running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> axum::Router {
    self.into_parts().into_axum_router()
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    self.into_parts().serve(addr).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_axum_router_builds_without_panic() {
    let server = SiteServer::new();
    let _router = server.into_axum_router();
  }
}
