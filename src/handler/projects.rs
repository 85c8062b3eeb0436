// handler/projects.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::Utc;
use futures::future::try_join_all;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::projectdb::ProjectExt,
    dtos::{common::ApiResponse, common::PaginatedResponse, projectdtos::*},
    error::{ErrorMessage, HttpError},
    models::projectmodel::{PhaseStatus, Project, ProjectPhase, ProjectStatus},
    service::timeline::derive_timeline,
    AppState,
};

pub fn projects_handler() -> Router {
    Router::new()
        .route("/", post(create_project).get(list_projects))
        .route("/gantt", get(get_gantt_overview))
        .route(
            "/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/:project_id/phases",
            post(create_phase).get(list_project_phases),
        )
        .route("/:project_id/timeline", get(get_project_timeline))
}

pub fn phases_handler() -> Router {
    Router::new()
        .route("/:phase_id", put(update_phase).delete(delete_phase))
        .route("/:phase_id/progress", put(update_phase_progress))
}

pub async fn create_project(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let project = app_state
        .db_client
        .create_project(
            body.name,
            body.customer_id,
            body.team_id,
            body.address,
            body.project_type,
            body.contract_amount,
            body.designer,
            body.notes,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Project created successfully",
        project,
    )))
}

pub async fn list_projects(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<ProjectListQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);
    let offset = ((page - 1) * limit) as i64;

    let projects = app_state
        .db_client
        .get_projects(query.status, limit as i64, offset)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let total = app_state
        .db_client
        .count_projects(query.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(PaginatedResponse::new(
        projects,
        total,
        page as u32,
        limit as u32,
    )))
}

pub async fn get_project(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let project = app_state
        .db_client
        .get_project(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ProjectNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Project retrieved successfully",
        project,
    )))
}

pub async fn update_project(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let project = app_state
        .db_client
        .update_project(
            project_id,
            body.name,
            body.customer_id,
            body.team_id,
            body.address,
            body.project_type,
            body.status,
            body.contract_amount,
            body.designer,
            body.notes,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::ProjectNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Project updated successfully",
        project,
    )))
}

pub async fn delete_project(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_project(project_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::ProjectNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Project deleted successfully",
        (),
    )))
}

// Phase handlers
pub async fn create_phase(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<CreatePhaseDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .get_project(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ProjectNotFound.to_string()))?;

    let phase = app_state
        .db_client
        .create_phase(
            project_id,
            body.phase_name,
            body.phase_order,
            body.estimated_duration,
            body.start_date,
            body.end_date,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Phase created successfully",
        phase,
    )))
}

pub async fn list_project_phases(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let phases = app_state
        .db_client
        .get_project_phases(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Phases retrieved successfully",
        phases,
    )))
}

pub async fn update_phase(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(phase_id): Path<Uuid>,
    Json(body): Json<UpdatePhaseDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let phase = app_state
        .db_client
        .update_phase(
            phase_id,
            body.phase_name,
            body.phase_order,
            body.estimated_duration,
            body.start_date,
            body.end_date,
            body.actual_start_date,
            body.actual_end_date,
        )
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Phase updated successfully",
        phase,
    )))
}

pub async fn update_phase_progress(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(phase_id): Path<Uuid>,
    Json(body): Json<UpdatePhaseProgressDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let phase = app_state
        .db_client
        .update_phase_progress(phase_id, body.progress, body.status)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::success(
        "Phase progress updated successfully",
        phase,
    )))
}

pub async fn delete_phase(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(phase_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .delete_phase(phase_id)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                HttpError::not_found(ErrorMessage::RecordNotFound.to_string())
            }
            _ => HttpError::server_error(e.to_string()),
        })?;

    Ok(Json(ApiResponse::<()>::success(
        "Phase deleted successfully",
        (),
    )))
}

// Timeline handlers
pub async fn get_project_timeline(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    app_state
        .db_client
        .get_project(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::ProjectNotFound.to_string()))?;

    let phases = app_state
        .db_client
        .get_project_phases(project_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let timeline = build_timeline_dto(project_id, &phases);

    Ok(Json(ApiResponse::success(
        "Timeline derived successfully",
        timeline,
    )))
}

/// Derived timelines for every active project, for the portfolio gantt view.
pub async fn get_gantt_overview(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let projects = app_state
        .db_client
        .get_projects(Some(ProjectStatus::InProgress), 50, 0)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    // Phase collections load independently per project; each derivation is
    // pure over its own snapshot.
    let phase_lists = try_join_all(
        projects
            .iter()
            .map(|project| app_state.db_client.get_project_phases(project.id)),
    )
    .await
    .map_err(|e| HttpError::server_error(e.to_string()))?;

    let timelines: Vec<ProjectTimelineDto> = projects
        .iter()
        .zip(phase_lists.iter())
        .map(|(project, phases): (&Project, _)| build_timeline_dto(project.id, phases))
        .collect();

    Ok(Json(ApiResponse::success(
        "Gantt overview derived successfully",
        timelines,
    )))
}

fn build_timeline_dto(project_id: Uuid, phases: &[ProjectPhase]) -> ProjectTimelineDto {
    let today = Utc::now().date_naive();
    let timeline = derive_timeline(phases, today);

    let phase_dtos = phases
        .iter()
        .zip(timeline.phases.iter())
        .map(|(phase, span)| TimelinePhaseDto {
            phase_id: phase.id,
            phase_name: phase.phase_name.clone(),
            status: phase.status.unwrap_or(PhaseStatus::NotStarted),
            progress: phase.progress.unwrap_or(0),
            start: span.start,
            end: span.end,
            left_pct: span.left_pct,
            width_pct: span.width_pct,
        })
        .collect();

    ProjectTimelineDto {
        project_id,
        project_start: timeline.project_start,
        project_end: timeline.project_end,
        total_days: timeline.total_days,
        phases: phase_dtos,
    }
}
