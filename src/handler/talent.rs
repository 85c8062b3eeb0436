// handler/talent.rs
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
    db::talentdb::TalentExt,
    dtos::{common::ApiResponse, common::PaginatedResponse, talentdtos::*},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn talent_handler() -> Router {
    Router::new()
        .route("/", post(create_candidate).get(list_candidates))
        .route(
            "/:candidate_id",
            get(get_candidate)
                .put(update_candidate)
                .delete(delete_candidate),
        )
}

pub async fn create_candidate(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateCandidateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let candidate = app_state
        .db_client
        .create_candidate(
            body.name,
            body.phone,
            body.position,
            body.trade,
            body.expected_salary,
            body.notes,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Candidate created successfully",
        candidate,
    )))
}

pub async fn list_candidates(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<TalentListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let candidates = app_state
        .db_client
        .get_candidates(query.stage, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_candidates(query.stage)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        candidates,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_candidate(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(candidate_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let candidate = app_state
        .db_client
        .get_candidate(candidate_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Candidate retrieved successfully",
        candidate,
    )))
}

pub async fn update_candidate(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(candidate_id): Path<Uuid>,
    Json(body): Json<UpdateCandidateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let candidate = app_state
        .db_client
        .update_candidate(
            candidate_id,
            body.name,
            body.phone,
            body.position,
            body.trade,
            body.expected_salary,
            body.stage,
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
        "Candidate updated successfully",
        candidate,
    )))
}

pub async fn delete_candidate(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(candidate_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_candidate(candidate_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Candidate deleted successfully",
        (),
    )))
}
