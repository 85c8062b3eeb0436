use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "customer_source", rename_all = "snake_case")]
pub enum CustomerSource {
    Referral,
    WalkIn,
    Online,
    PhoneCall,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "customer_stage", rename_all = "snake_case")]
pub enum CustomerStage {
    NewLead,
    FollowingUp,
    Measured,
    Quoted,
    Signed,
    Lost,
}

impl CustomerStage {
    pub fn to_str(&self) -> &str {
        match self {
            CustomerStage::NewLead => "new_lead",
            CustomerStage::FollowingUp => "following_up",
            CustomerStage::Measured => "measured",
            CustomerStage::Quoted => "quoted",
            CustomerStage::Signed => "signed",
            CustomerStage::Lost => "lost",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub source: CustomerSource,
    pub stage: Option<CustomerStage>,        // Database has DEFAULT 'new_lead', can be NULL
    pub budget: Option<BigDecimal>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
