// handler/finance.rs
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
    db::financedb::FinanceExt,
    dtos::{common::ApiResponse, common::PaginatedResponse, financedtos::*},
    error::{ErrorMessage, HttpError},
    service::budget::{plan_budget, DEFAULT_BUDGET_SPLITS},
    utils::record_no::generate_record_no,
    AppState,
};

pub fn finance_handler() -> Router {
    Router::new()
        .route("/records", post(create_finance_record).get(list_finance_records))
        .route(
            "/records/:record_id",
            get(get_finance_record)
                .put(update_finance_record)
                .delete(delete_finance_record),
        )
        .route("/projects/:project_id/records", get(list_project_records))
        .route("/budget", post(calculate_budget))
}

pub async fn create_finance_record(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateFinanceRecordDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let record = app_state
        .db_client
        .create_finance_record(
            generate_record_no(),
            body.kind,
            body.category,
            body.amount,
            body.record_date,
            body.project_id,
            body.description,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Finance record created successfully",
        record,
    )))
}

pub async fn list_finance_records(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<FinanceListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let records = app_state
        .db_client
        .get_finance_records(query.kind, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_finance_records(query.kind)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        records,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn list_project_records(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let records = app_state
        .db_client
        .get_project_finance_records(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Project finance records retrieved successfully",
        records,
    )))
}

pub async fn get_finance_record(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let record = app_state
        .db_client
        .get_finance_record(record_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Finance record retrieved successfully",
        record,
    )))
}

pub async fn update_finance_record(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
    Json(body): Json<UpdateFinanceRecordDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let record = app_state
        .db_client
        .update_finance_record(
            record_id,
            body.kind,
            body.category,
            body.amount,
            body.record_date,
            body.project_id,
            body.description,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Finance record updated successfully",
        record,
    )))
}

pub async fn delete_finance_record(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(record_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_finance_record(record_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Finance record deleted successfully",
        (),
    )))
}

pub async fn calculate_budget(
    Json(body): Json<BudgetRequestDto>,
) -> Result<impl IntoResponse, HttpError> {
    let lines = match &body.splits {
        Some(splits) => {
            let splits: Vec<_> = splits
                .iter()
                .map(|split| (split.category, split.share))
                .collect();
            plan_budget(body.total_budget, &splits)?
        }
        None => plan_budget(body.total_budget, &DEFAULT_BUDGET_SPLITS)?,
    };

    let response = BudgetResponseDto {
        total_budget: body.total_budget,
        lines,
    };

    Ok(Json(ApiResponse::success(
        "Budget calculated successfully",
        response,
    )))
}
