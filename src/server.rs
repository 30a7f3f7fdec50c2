//! HTTP surface for the locale subsystem.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
        HeaderValue, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::I18nError;
use crate::i18n::{locale_names, negotiate, ContentLanguage, I18n, Locale};
use crate::prompts::PromptTemplates;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub i18n: Arc<I18n>,
    pub document: Arc<ContentLanguage>,
    pub prompts: Arc<PromptTemplates>,
}

/// Locale negotiated from the request's `Accept-Language` header.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

#[derive(Debug, Serialize)]
pub struct LocaleEntry {
    pub code: Locale,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    pub current: Locale,
    pub supported: Vec<LocaleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/locale", get(get_locale).put(put_locale))
        .route("/api/messages/:key", get(get_message))
        .route("/api/prompts/:name", get(get_prompt))
        .layer(middleware::from_fn_with_state(state.clone(), locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Negotiates the request locale and advertises the document language.
async fn locale_middleware(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let header = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate(header);
    req.extensions_mut().insert(RequestLocale(locale));

    let mut response = next.run(req).await;

    if let Some(lang) = state.document.get() {
        match HeaderValue::from_str(&lang) {
            Ok(value) => {
                response.headers_mut().insert(CONTENT_LANGUAGE, value);
            }
            Err(e) => warn!("Invalid document language {}: {}", lang, e),
        }
    }
    response
}

async fn health(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": state.i18n.t_in(locale, "service_healthy", &[]),
    }))
}

async fn get_locale(State(state): State<AppState>) -> Json<LocaleResponse> {
    Json(LocaleResponse {
        current: state.i18n.current_locale(),
        supported: locale_names()
            .into_iter()
            .map(|(code, name)| LocaleEntry { code, name })
            .collect(),
    })
}

async fn put_locale(
    State(state): State<AppState>,
    Extension(RequestLocale(request_locale)): Extension<RequestLocale>,
    Json(body): Json<SetLocaleRequest>,
) -> Response {
    match state.i18n.set_locale(&body.locale) {
        Ok(locale) => Json(json!({
            "success": true,
            "locale": locale,
            "message": state.i18n.t_args("locale_changed", &[("locale", locale.display_name())]),
        }))
        .into_response(),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "locale": state.i18n.current_locale(),
                "error": state.i18n.t_in(
                    request_locale,
                    "unsupported_locale",
                    &[("locale", body.locale.as_str())],
                ),
            })),
        )
            .into_response(),
    }
}

async fn get_message(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let args: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    Json(json!({
        "key": key,
        "locale": locale,
        "message": state.i18n.t_in(locale, &key, &args),
    }))
}

async fn get_prompt(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Path(name): Path<String>,
) -> Response {
    match state.prompts.load(&name, locale) {
        Ok(template) => template.into_response(),
        Err(e @ I18nError::TemplateNotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to load prompt {}: {}", name, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
