// service/dashboard_service.rs
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use std::sync::Arc;

use crate::{
    db::{
        cache::{CacheHelper, DASHBOARD_STATS_TTL},
        customerdb::CustomerExt,
        dashboarddb::DashboardExt,
        db::DBClient,
        financedb::FinanceExt,
        materialdb::MaterialExt,
        talentdb::TalentExt,
        workerdb::WorkerExt,
    },
    dtos::dashboarddtos::*,
    models::{
        customermodel::CustomerStage, financemodel::FinanceKind, projectmodel::ProjectStatus,
        talentmodel::TalentStage,
    },
    service::{error::ServiceError, payment_plan::summarize_payments},
};

#[derive(Debug, Clone)]
pub struct DashboardService {
    db_client: Arc<DBClient>,
}

impl DashboardService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    /// Aggregate statistics for the dashboard landing page.
    ///
    /// All the independent aggregates are fetched concurrently; payment
    /// figures come from the same summarizer the per-project view uses,
    /// applied to every node in the system.
    pub async fn get_stats(&self) -> Result<DashboardStatsDto, ServiceError> {
        if let Some(redis) = &self.db_client.redis_client {
            if let Ok(Some(cached)) =
                CacheHelper::get::<DashboardStatsDto>(redis, &CacheHelper::dashboard_stats_key())
                    .await
            {
                return Ok(cached);
            }
        }

        let today = Utc::now().date_naive();
        let month_start = today.with_day(1).unwrap_or(today);
        let month_start_at =
            DateTime::<Utc>::from_naive_utc_and_offset(month_start.and_time(NaiveTime::MIN), Utc);

        let (
            status_counts,
            total_contract_amount,
            payment_nodes,
            customer_total,
            customers_this_month,
            customers_signed,
            workers_total,
            workers_available,
            teams_total,
            materials_total,
            materials_low_stock,
            talent_counts,
            talent_total,
            month_income,
            month_expense,
        ) = tokio::try_join!(
            self.db_client.count_projects_by_status(),
            self.db_client.sum_contract_amounts(),
            self.db_client.get_all_payment_nodes(),
            self.db_client.count_customers(None),
            self.db_client.count_customers_since(month_start_at),
            self.db_client.count_customers(Some(CustomerStage::Signed)),
            self.db_client.count_workers(None),
            self.db_client.count_available_workers(),
            self.db_client.count_teams(),
            self.db_client.count_materials(None),
            self.db_client.count_low_stock_materials(),
            self.db_client.count_candidates_by_stage(),
            self.db_client.count_candidates(None),
            self.db_client
                .sum_finance_records(FinanceKind::Income, month_start, today),
            self.db_client
                .sum_finance_records(FinanceKind::Expense, month_start, today),
        )?;

        let status_count = |wanted: ProjectStatus| -> i64 {
            status_counts
                .iter()
                .find(|(status, _)| *status == wanted)
                .map(|(_, count)| *count)
                .unwrap_or(0)
        };

        let projects = ProjectStatsDto {
            total: status_counts.iter().map(|(_, count)| count).sum(),
            planning: status_count(ProjectStatus::Planning),
            in_progress: status_count(ProjectStatus::InProgress),
            completed: status_count(ProjectStatus::Completed),
            on_hold: status_count(ProjectStatus::OnHold),
            cancelled: status_count(ProjectStatus::Cancelled),
            total_contract_amount,
        };

        let stage_count = |wanted: TalentStage| -> i64 {
            talent_counts
                .iter()
                .find(|(stage, _)| *stage == wanted)
                .map(|(_, count)| *count)
                .unwrap_or(0)
        };

        let stats = DashboardStatsDto {
            projects,
            payments: summarize_payments(&payment_nodes),
            customers: CustomerStatsDto {
                total: customer_total,
                new_this_month: customers_this_month,
                signed: customers_signed,
            },
            workforce: WorkforceStatsDto {
                workers_total,
                workers_available,
                teams_total,
            },
            materials: MaterialStatsDto {
                total: materials_total,
                low_stock: materials_low_stock,
            },
            talent: TalentStatsDto {
                total: talent_total,
                sourced: stage_count(TalentStage::Sourced),
                contacted: stage_count(TalentStage::Contacted),
                interviewing: stage_count(TalentStage::Interviewing),
                offered: stage_count(TalentStage::Offered),
                hired: stage_count(TalentStage::Hired),
                rejected: stage_count(TalentStage::Rejected),
            },
            finance: MonthFinanceDto {
                month_income,
                month_expense,
                month_net: month_income - month_expense,
            },
        };

        if let Some(redis) = &self.db_client.redis_client {
            let _ = CacheHelper::set(
                redis,
                &CacheHelper::dashboard_stats_key(),
                &stats,
                DASHBOARD_STATS_TTL,
            )
            .await;
        }

        Ok(stats)
    }
}
