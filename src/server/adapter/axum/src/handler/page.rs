/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use chrono::Datelike;
use docbase_site::routing::path_locale;
use docbase_site::{Locale, Page};

use super::AppState;
use crate::error::AxumError;

fn current_year() -> i32 {
  chrono::Utc::now().year()
}

async fn render(
  state: &AppState,
  page: Page,
  locale: Locale,
  uri: &Uri,
) -> Result<Html<String>, AxumError> {
  let html = state.parts.render(page, locale, uri.path(), current_year()).await?;
  Ok(Html(html))
}

pub(super) async fn handle_home(
  State(state): State<Arc<AppState>>,
  Path(locale): Path<String>,
  uri: Uri,
) -> Result<Html<String>, AxumError> {
  let locale = state.parts.config.locale_or_default(&locale);
  render(&state, Page::Home, locale, &uri).await
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path((locale, slug)): Path<(String, String)>,
  uri: Uri,
) -> Result<Response, AxumError> {
  let locale = state.parts.config.locale_or_default(&locale);
  match Page::from_slug(&slug) {
    Some(page) => Ok(render(&state, page, locale, &uri).await?.into_response()),
    None => not_found(&state, locale, &uri).await,
  }
}

/// Fallback for every unmatched path: the localized not-found page.
pub(super) async fn handle_not_found(
  State(state): State<Arc<AppState>>,
  uri: Uri,
) -> Result<Response, AxumError> {
  let locale = path_locale(uri.path()).unwrap_or(state.parts.config.default_locale);
  not_found(&state, locale, &uri).await
}

async fn not_found(state: &AppState, locale: Locale, uri: &Uri) -> Result<Response, AxumError> {
  let html = render(state, Page::NotFound, locale, uri).await?;
  Ok((StatusCode::NOT_FOUND, html).into_response())
}
