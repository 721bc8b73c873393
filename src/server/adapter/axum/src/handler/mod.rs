/* src/server/adapter/axum/src/handler/mod.rs */

mod locale;
mod page;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, get_service};
use docbase_site::SiteParts;
use docbase_site::routing::{HEALTH_ENDPOINT, STATIC_PREFIX, SWITCH_ENDPOINT};
use tower_http::services::ServeDir;

use crate::middleware::{locale_redirect, log_request};

pub(crate) struct AppState {
  pub parts: SiteParts,
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let static_dir = parts.config.static_dir.clone();
  let state = Arc::new(AppState { parts });

  let mut router = page_routes()
    .route(SWITCH_ENDPOINT, get(locale::handle_switch))
    .route(HEALTH_ENDPOINT, get(handle_health));

  if let Some(dir) = static_dir {
    router = router.nest_service(STATIC_PREFIX, get_service(ServeDir::new(dir)));
  }

  // The fallback must be in place before layering so unmatched paths are
  // redirected as well.
  router
    .fallback(page::handle_not_found)
    .layer(middleware::from_fn_with_state(Arc::clone(&state), locale_redirect))
    .layer(middleware::from_fn(log_request))
    .with_state(state)
}

/// Locale-prefixed pages, each also served with a trailing slash. The segment
/// is normalized by the handlers, so a request reaching them with an
/// unsupported code renders the default locale.
fn page_routes() -> Router<Arc<AppState>> {
  Router::new()
    .route("/{locale}", get(page::handle_home))
    .route("/{locale}/", get(page::handle_home))
    .route("/{locale}/{page}", get(page::handle_page))
    .route("/{locale}/{page}/", get(page::handle_page))
}

async fn handle_health() -> &'static str {
  "ok"
}
