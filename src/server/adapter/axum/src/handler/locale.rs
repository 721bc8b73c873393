/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use cookie::{Cookie, SameSite};
use docbase_site::switch_locale_path;
use serde::Deserialize;

use super::AppState;

#[derive(Deserialize)]
pub(super) struct SwitchQuery {
  to: Option<String>,
  from: Option<String>,
}

/// Persist the chosen locale in the cookie and go back to `from` under the
/// new locale prefix.
pub(super) async fn handle_switch(
  State(state): State<Arc<AppState>>,
  Query(query): Query<SwitchQuery>,
) -> Response {
  let config = &state.parts.config;
  let to = config.locale_or_default(query.to.as_deref().unwrap_or_default());
  let target = switch_locale_path(query.from.as_deref().unwrap_or("/"), to);

  let max_age = i64::try_from(config.cookie_max_age).unwrap_or(i64::MAX);
  let cookie = Cookie::build((config.cookie_name.as_str(), to.code()))
    .path("/")
    .max_age(cookie::time::Duration::seconds(max_age))
    .same_site(SameSite::Lax)
    .build();

  log::debug!("locale switch to '{to}' -> {target}");
  ([(SET_COOKIE, cookie.to_string())], Redirect::to(&target)).into_response()
}
