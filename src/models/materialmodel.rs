use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "material_category", rename_all = "snake_case")]
pub enum MaterialCategory {
    Board,
    Tile,
    Paint,
    Electrical,
    Plumbing,
    Hardware,
    Fixture,
    Other,
}

impl MaterialCategory {
    pub fn to_str(&self) -> &str {
        match self {
            MaterialCategory::Board => "board",
            MaterialCategory::Tile => "tile",
            MaterialCategory::Paint => "paint",
            MaterialCategory::Electrical => "electrical",
            MaterialCategory::Plumbing => "plumbing",
            MaterialCategory::Hardware => "hardware",
            MaterialCategory::Fixture => "fixture",
            MaterialCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    pub category: MaterialCategory,
    pub brand: Option<String>,
    pub spec: Option<String>,
    pub unit: String,
    pub unit_price: BigDecimal,
    pub stock_quantity: Option<i32>,         // Database has DEFAULT 0, can be NULL
    pub low_stock_threshold: Option<i32>,    // Database has DEFAULT 0, can be NULL
    pub supplier_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub category: MaterialCategory,
    pub rating: Option<f32>,                 // Database has DEFAULT 0.0, can be NULL
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
