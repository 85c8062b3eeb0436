use serde::{Deserialize, Serialize};

use crate::service::payment_plan::PaymentSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStatsDto {
    pub total: i64,
    pub planning: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub on_hold: i64,
    pub cancelled: i64,
    pub total_contract_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerStatsDto {
    pub total: i64,
    pub new_this_month: i64,
    pub signed: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceStatsDto {
    pub workers_total: i64,
    pub workers_available: i64,
    pub teams_total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialStatsDto {
    pub total: i64,
    pub low_stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentStatsDto {
    pub total: i64,
    pub sourced: i64,
    pub contacted: i64,
    pub interviewing: i64,
    pub offered: i64,
    pub hired: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthFinanceDto {
    pub month_income: f64,
    pub month_expense: f64,
    pub month_net: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsDto {
    pub projects: ProjectStatsDto,
    pub payments: PaymentSummary,
    pub customers: CustomerStatsDto,
    pub workforce: WorkforceStatsDto,
    pub materials: MaterialStatsDto,
    pub talent: TalentStatsDto,
    pub finance: MonthFinanceDto,
}
