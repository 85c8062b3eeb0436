use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::projectmodel::*;

//Project DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub customer_id: Option<Uuid>,

    pub team_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,

    pub project_type: ProjectType,

    #[validate(range(min = 0.0, message = "Contract amount must be positive"))]
    pub contract_amount: f64,

    #[validate(length(max = 100, message = "Designer name is too long"))]
    pub designer: Option<String>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    pub customer_id: Option<Uuid>,

    pub team_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: Option<String>,

    pub project_type: Option<ProjectType>,

    pub status: Option<ProjectStatus>,

    #[validate(range(min = 0.0, message = "Contract amount must be positive"))]
    pub contract_amount: Option<f64>,

    #[validate(length(max = 100, message = "Designer name is too long"))]
    pub designer: Option<String>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectListQueryDto {
    pub status: Option<ProjectStatus>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

//Phase DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePhaseDto {
    #[validate(length(min = 1, max = 50, message = "Phase name must be between 1 and 50 characters"))]
    pub phase_name: String,

    #[validate(range(min = 0, max = 1000, message = "Phase order must be between 0 and 1000"))]
    pub phase_order: i32,

    #[validate(range(min = 1, max = 365, message = "Duration must be between 1 and 365 days"))]
    pub estimated_duration: i32,

    // Free text on purpose; the timeline deriver tolerates bad input.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdatePhaseDto {
    #[validate(length(min = 1, max = 50, message = "Phase name must be between 1 and 50 characters"))]
    pub phase_name: Option<String>,

    #[validate(range(min = 0, max = 1000, message = "Phase order must be between 0 and 1000"))]
    pub phase_order: Option<i32>,

    #[validate(range(min = 1, max = 365, message = "Duration must be between 1 and 365 days"))]
    pub estimated_duration: Option<i32>,

    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub actual_start_date: Option<String>,
    pub actual_end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePhaseProgressDto {
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100"))]
    pub progress: i32,

    pub status: Option<PhaseStatus>,
}

//Timeline response DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct TimelinePhaseDto {
    pub phase_id: Uuid,
    pub phase_name: String,
    pub status: PhaseStatus,
    pub progress: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub left_pct: f64,
    pub width_pct: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectTimelineDto {
    pub project_id: Uuid,
    pub project_start: NaiveDate,
    pub project_end: NaiveDate,
    pub total_days: i64,
    pub phases: Vec<TimelinePhaseDto>,
}
