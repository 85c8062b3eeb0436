// handler/dashboard.rs
use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};

use crate::{dtos::common::ApiResponse, error::HttpError, AppState};

pub fn dashboard_handler() -> Router {
    Router::new().route("/stats", get(get_dashboard_stats))
}

pub async fn get_dashboard_stats(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state.dashboard_service.get_stats().await?;

    Ok(Json(ApiResponse::success(
        "Dashboard statistics retrieved successfully",
        stats,
    )))
}
