use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "worker_trade", rename_all = "snake_case")]
pub enum WorkerTrade {
    Demolition,
    Electrician,
    Plumber,
    Mason,
    Carpenter,
    Painter,
    Cleaner,
    Finishing,
    Other,
}

impl WorkerTrade {
    pub fn to_str(&self) -> &str {
        match self {
            WorkerTrade::Demolition => "demolition",
            WorkerTrade::Electrician => "electrician",
            WorkerTrade::Plumber => "plumber",
            WorkerTrade::Mason => "mason",
            WorkerTrade::Carpenter => "carpenter",
            WorkerTrade::Painter => "painter",
            WorkerTrade::Cleaner => "cleaner",
            WorkerTrade::Finishing => "finishing",
            WorkerTrade::Other => "other",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "skill_level", rename_all = "snake_case")]
pub enum SkillLevel {
    Apprentice,
    Journeyman,
    Master,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub trade: WorkerTrade,
    pub skill_level: SkillLevel,
    pub daily_rate: Option<BigDecimal>,
    pub team_id: Option<Uuid>,
    pub is_available: Option<bool>,          // Database has DEFAULT TRUE, can be NULL
    pub completed_projects: Option<i32>,     // Database has DEFAULT 0, can be NULL
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CrewTeam {
    pub id: Uuid,
    pub name: String,
    pub leader_name: String,
    pub phone: String,
    pub specialty: WorkerTrade,
    pub rating: Option<f32>,                 // Database has DEFAULT 0.0, can be NULL
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
