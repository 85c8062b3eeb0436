use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::financemodel::*;
use crate::service::budget::BudgetLine;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateFinanceRecordDto {
    pub kind: FinanceKind,

    pub category: FinanceCategory,

    #[validate(range(min = 0.01, message = "Amount must be greater than zero"))]
    pub amount: f64,

    pub record_date: NaiveDate,

    pub project_id: Option<Uuid>,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateFinanceRecordDto {
    pub kind: Option<FinanceKind>,

    pub category: Option<FinanceCategory>,

    #[validate(range(min = 0.01, message = "Amount must be greater than zero"))]
    pub amount: Option<f64>,

    pub record_date: Option<NaiveDate>,

    pub project_id: Option<Uuid>,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FinanceListQueryDto {
    pub kind: Option<FinanceKind>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

//Budget calculator DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetSplitDto {
    pub category: FinanceCategory,
    pub share: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetRequestDto {
    pub total_budget: f64,
    // Defaults to the stock split when omitted.
    pub splits: Option<Vec<BudgetSplitDto>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetResponseDto {
    pub total_budget: f64,
    pub lines: Vec<BudgetLine>,
}
