use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "project_type", rename_all = "snake_case")]
pub enum ProjectType {
    Home,
    Office,
    Shop,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "phase_status", rename_all = "snake_case")]
pub enum PhaseStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl PhaseStatus {
    pub fn to_str(&self) -> &str {
        match self {
            PhaseStatus::NotStarted => "not_started",
            PhaseStatus::InProgress => "in_progress",
            PhaseStatus::Completed => "completed",
            PhaseStatus::Paused => "paused",
        }
    }
}

/// Default phase vocabulary for a renovation job, in build order.
/// Stored as plain text on the phase row so sites can add their own labels.
pub const DEFAULT_PHASE_NAMES: [&str; 7] = [
    "demolition",
    "electrical_plumbing",
    "masonry",
    "carpentry",
    "painting",
    "cleaning",
    "finishing",
];

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub customer_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub address: String,
    pub project_type: ProjectType,
    pub status: Option<ProjectStatus>,       // Database has DEFAULT 'planning', can be NULL
    pub contract_amount: BigDecimal,
    pub designer: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectPhase {
    pub id: Uuid,
    pub project_id: Uuid,
    pub phase_name: String,
    pub phase_order: i32,
    pub status: Option<PhaseStatus>,         // Database has DEFAULT 'not_started', can be NULL
    pub progress: Option<i32>,               // Database has DEFAULT 0, can be NULL
    pub estimated_duration: i32,
    // Schedule fields are user-entered text and may be blank or malformed.
    // The timeline deriver owns parsing; nothing else should interpret them.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub actual_start_date: Option<String>,
    pub actual_end_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
