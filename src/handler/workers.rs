// handler/workers.rs
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
    db::workerdb::WorkerExt,
    dtos::{common::ApiResponse, common::PaginatedResponse, common::RequestQueryDto, workerdtos::*},
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn workers_handler() -> Router {
    Router::new()
        .route("/", post(create_worker).get(list_workers))
        .route(
            "/:worker_id",
            get(get_worker).put(update_worker).delete(delete_worker),
        )
}

pub fn teams_handler() -> Router {
    Router::new()
        .route("/", post(create_team).get(list_teams))
        .route(
            "/:team_id",
            get(get_team).put(update_team).delete(delete_team),
        )
}

// Worker handlers
pub async fn create_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateWorkerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = app_state
        .db_client
        .create_worker(
            body.name,
            body.phone,
            body.trade,
            body.skill_level,
            body.daily_rate,
            body.team_id,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Worker created successfully",
        worker,
    )))
}

pub async fn list_workers(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<WorkerListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let workers = app_state
        .db_client
        .get_workers(query.trade, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_workers(query.trade)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        workers,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let worker = app_state
        .db_client
        .get_worker(worker_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Worker retrieved successfully",
        worker,
    )))
}

pub async fn update_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<Uuid>,
    Json(body): Json<UpdateWorkerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let worker = app_state
        .db_client
        .update_worker(
            worker_id,
            body.name,
            body.phone,
            body.trade,
            body.skill_level,
            body.daily_rate,
            body.team_id,
            body.is_available,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Worker updated successfully",
        worker,
    )))
}

pub async fn delete_worker(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(worker_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_worker(worker_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Worker deleted successfully",
        (),
    )))
}

// Crew team handlers
pub async fn create_team(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let team = app_state
        .db_client
        .create_team(
            body.name,
            body.leader_name,
            body.phone,
            body.specialty,
            body.notes,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Team created successfully",
        team,
    )))
}

pub async fn list_teams(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    query
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query.page_or_default();
    let limit = query.limit_or_default();

    let teams = app_state
        .db_client
        .get_teams(limit as i64, query.offset())
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_teams()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(teams, total, page, limit)))
}

pub async fn get_team(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let team = app_state
        .db_client
        .get_team(team_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    let members = app_state
        .db_client
        .get_team_members(team_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let detail = TeamDetailDto {
        team,
        member_count: members.len(),
        members,
    };

    Ok(Json(ApiResponse::success(
        "Team retrieved successfully",
        detail,
    )))
}

pub async fn update_team(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
    Json(body): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let team = app_state
        .db_client
        .update_team(
            team_id,
            body.name,
            body.leader_name,
            body.phone,
            body.specialty,
            body.rating,
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
        "Team updated successfully",
        team,
    )))
}

pub async fn delete_team(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_team(team_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Team deleted successfully",
        (),
    )))
}
