/* src/server/adapter/axum/src/middleware.rs */

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use docbase_site::RouteDecision;

use crate::handler::AppState;

/// Redirect requests without a supported locale segment to `/{locale}{path}`.
pub(crate) async fn locale_redirect(
  State(state): State<Arc<AppState>>,
  req: Request,
  next: Next,
) -> Response {
  let headers = req.headers();
  let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
  let accept_language = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
  let decision =
    state.parts.config.route(req.uri().path(), req.uri().query(), cookie, accept_language);

  match decision {
    RouteDecision::PassThrough => next.run(req).await,
    RouteDecision::Redirect(location) => {
      log::debug!("{} -> {location}", req.uri().path());
      Redirect::temporary(&location).into_response()
    }
  }
}

pub(crate) async fn log_request(req: Request, next: Next) -> Response {
  let method = req.method().clone();
  let path = req.uri().path().to_string();
  let started = Instant::now();
  let response = next.run(req).await;
  log::info!("{method} {path} {} {:.1?}", response.status().as_u16(), started.elapsed());
  response
}
