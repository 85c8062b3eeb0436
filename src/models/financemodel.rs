use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "finance_kind", rename_all = "snake_case")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl FinanceKind {
    pub fn to_str(&self) -> &str {
        match self {
            FinanceKind::Income => "income",
            FinanceKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "finance_category", rename_all = "snake_case")]
pub enum FinanceCategory {
    ContractPayment,
    MaterialPurchase,
    LaborCost,
    DesignFee,
    Rent,
    Marketing,
    Other,
}

impl FinanceCategory {
    pub fn to_str(&self) -> &str {
        match self {
            FinanceCategory::ContractPayment => "contract_payment",
            FinanceCategory::MaterialPurchase => "material_purchase",
            FinanceCategory::LaborCost => "labor_cost",
            FinanceCategory::DesignFee => "design_fee",
            FinanceCategory::Rent => "rent",
            FinanceCategory::Marketing => "marketing",
            FinanceCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FinanceRecord {
    pub id: Uuid,
    pub record_no: String,
    pub kind: FinanceKind,
    pub category: FinanceCategory,
    pub amount: BigDecimal,
    pub record_date: NaiveDate,
    pub project_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}
