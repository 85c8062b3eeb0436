// handler/payments.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{paymentdb::PaymentNodeExt, projectdb::ProjectExt},
    dtos::{common::ApiResponse, paymentdtos::*},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn project_payments_handler() -> Router {
    Router::new()
        .route(
            "/:project_id/payment-nodes",
            get(list_payment_nodes).post(create_payment_node),
        )
        .route(
            "/:project_id/payment-nodes/defaults",
            post(create_default_nodes),
        )
        .route("/:project_id/payment-summary", get(get_payment_summary))
}

pub fn payment_nodes_handler() -> Router {
    Router::new()
        .route(
            "/:node_id",
            put(update_payment_node).delete(delete_payment_node),
        )
        .route("/:node_id/payments", post(record_payment))
}

pub async fn list_payment_nodes(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_project(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ProjectNotFound.to_string()))?;

    let nodes = app_state
        .db_client
        .get_payment_nodes(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Payment nodes retrieved successfully",
        nodes,
    )))
}

pub async fn create_payment_node(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<CreatePaymentNodeDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_project(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ProjectNotFound.to_string()))?;

    let node = app_state
        .db_client
        .create_payment_node(project_id, body.node_type, body.amount, body.due_date)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Payment node created successfully",
        node,
    )))
}

/// Replace the project's payment plan with the stock four-node split.
/// The UI warns that this overwrites any existing nodes.
pub async fn create_default_nodes(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<CreateDefaultNodesDto>,
) -> Result<impl IntoResponse, HttpError> {
    let nodes = app_state
        .payment_service
        .create_default_nodes(project_id, body.total_contract_amount)
        .await?;

    Ok(Json(ApiResponse::success(
        "Default payment nodes created successfully",
        nodes,
    )))
}

pub async fn get_payment_summary(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let summary = app_state.payment_service.summarize_project(project_id).await?;

    Ok(Json(ApiResponse::success(
        "Payment summary retrieved successfully",
        summary,
    )))
}

pub async fn update_payment_node(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(node_id): Path<Uuid>,
    Json(body): Json<UpdatePaymentNodeDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let node = app_state
        .db_client
        .update_payment_node(
            node_id,
            body.node_type,
            body.amount,
            body.paid_amount,
            body.due_date,
            body.status,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Payment node updated successfully",
        node,
    )))
}

pub async fn record_payment(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(node_id): Path<Uuid>,
    Json(body): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let node = app_state
        .payment_service
        .record_payment(node_id, body.amount)
        .await?;

    Ok(Json(ApiResponse::success(
        "Payment recorded successfully",
        node,
    )))
}

pub async fn delete_payment_node(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(node_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_payment_node(node_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Payment node deleted successfully",
        (),
    )))
}
