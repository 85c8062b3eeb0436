// handler/customers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::customerdb::CustomerExt,
    dtos::{common::ApiResponse, common::PaginatedResponse, customerdtos::*},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn customers_handler() -> Router {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route(
            "/:customer_id",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
}

pub async fn create_customer(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let customer = app_state
        .db_client
        .create_customer(
            body.name,
            body.phone,
            body.address,
            body.source,
            body.budget,
            body.notes,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Customer created successfully",
        customer,
    )))
}

pub async fn list_customers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<CustomerListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let customers = app_state
        .db_client
        .get_customers(query.stage, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_customers(query.stage)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        customers,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_customer(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = app_state
        .db_client
        .get_customer(customer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Customer retrieved successfully",
        customer,
    )))
}

pub async fn update_customer(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(customer_id): Path<Uuid>,
    Json(body): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let customer = app_state
        .db_client
        .update_customer(
            customer_id,
            body.name,
            body.phone,
            body.address,
            body.source,
            body.stage,
            body.budget,
            body.notes,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Customer updated successfully",
        customer,
    )))
}

pub async fn delete_customer(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_customer(customer_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Customer deleted successfully",
        (),
    )))
}
