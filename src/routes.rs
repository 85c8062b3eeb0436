// routes.rs
use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        customers::customers_handler,
        dashboard::dashboard_handler,
        finance::finance_handler,
        materials::{materials_handler, suppliers_handler},
        payments::{payment_nodes_handler, project_payments_handler},
        projects::{phases_handler, projects_handler},
        talent::talent_handler,
        workers::{teams_handler, workers_handler},
    },
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest(
            "/projects",
            projects_handler().merge(project_payments_handler()),
        )
        .nest("/phases", phases_handler())
        .nest("/payment-nodes", payment_nodes_handler())
        .nest("/customers", customers_handler())
        .nest("/workers", workers_handler())
        .nest("/teams", teams_handler())
        .nest("/materials", materials_handler())
        .nest("/suppliers", suppliers_handler())
        .nest("/talent", talent_handler())
        .nest("/finance", finance_handler())
        .nest("/dashboard", dashboard_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
