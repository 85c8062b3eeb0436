use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::talentmodel::*;
use crate::models::workermodel::WorkerTrade;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCandidateDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: String,

    #[validate(length(min = 1, max = 100, message = "Position is required"))]
    pub position: String,

    pub trade: WorkerTrade,

    #[validate(range(min = 0.0, message = "Expected salary must be positive"))]
    pub expected_salary: Option<f64>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCandidateDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Position is required"))]
    pub position: Option<String>,

    pub trade: Option<WorkerTrade>,

    #[validate(range(min = 0.0, message = "Expected salary must be positive"))]
    pub expected_salary: Option<f64>,

    pub stage: Option<TalentStage>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TalentListQueryDto {
    pub stage: Option<TalentStage>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
