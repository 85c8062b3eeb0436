use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

use crate::models::workermodel::WorkerTrade;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "talent_stage", rename_all = "snake_case")]
pub enum TalentStage {
    Sourced,
    Contacted,
    Interviewing,
    Offered,
    Hired,
    Rejected,
}

impl TalentStage {
    pub fn to_str(&self) -> &str {
        match self {
            TalentStage::Sourced => "sourced",
            TalentStage::Contacted => "contacted",
            TalentStage::Interviewing => "interviewing",
            TalentStage::Offered => "offered",
            TalentStage::Hired => "hired",
            TalentStage::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TalentCandidate {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub position: String,
    pub trade: WorkerTrade,
    pub expected_salary: Option<BigDecimal>,
    pub stage: Option<TalentStage>,          // Database has DEFAULT 'sourced', can be NULL
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
