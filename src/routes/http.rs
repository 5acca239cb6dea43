// GET handlers: dashboard page, version, chart descriptions

use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::models::Category;
use crate::panel::now_epoch_ms;
use crate::version::{NAME, VERSION};
use crate::{chart, sampler, shell};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — the dashboard page. All live behavior happens client-side by
/// polling /api/charts/{category} on the refresh interval.
pub(super) async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/dashboard — returns the static composition (fetch once; tabs and
/// copy never change).
pub(super) async fn dashboard_handler() -> impl IntoResponse {
    axum::Json(shell::dashboard_info())
}

/// GET /api/charts/{category} — draws a fresh sample for the category and
/// returns its chart description. Each poll is an independent tick.
pub(super) async fn chart_handler(Path(category): Path<String>) -> Response {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };
    let sample = sampler::generate(category, &mut rand::thread_rng(), now_epoch_ms());
    axum::Json(chart::chart_for(&sample)).into_response()
}
