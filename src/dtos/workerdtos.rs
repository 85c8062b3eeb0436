use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::workermodel::*;

//Worker DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateWorkerDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: String,

    pub trade: WorkerTrade,

    pub skill_level: SkillLevel,

    #[validate(range(min = 0.0, message = "Daily rate must be positive"))]
    pub daily_rate: Option<f64>,

    pub team_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateWorkerDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: Option<String>,

    pub trade: Option<WorkerTrade>,

    pub skill_level: Option<SkillLevel>,

    #[validate(range(min = 0.0, message = "Daily rate must be positive"))]
    pub daily_rate: Option<f64>,

    pub team_id: Option<Uuid>,

    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct WorkerListQueryDto {
    pub trade: Option<WorkerTrade>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

//Crew team DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTeamDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Leader name is required"))]
    pub leader_name: String,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: String,

    pub specialty: WorkerTrade,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateTeamDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Leader name is required"))]
    pub leader_name: Option<String>,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: Option<String>,

    pub specialty: Option<WorkerTrade>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f32>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamDetailDto {
    pub team: CrewTeam,
    pub member_count: usize,
    pub members: Vec<Worker>,
}
