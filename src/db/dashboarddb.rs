// db/dashboarddb.rs
use async_trait::async_trait;
use num_traits::ToPrimitive;
use sqlx::{types::BigDecimal, Error, Row};

use super::db::DBClient;
use crate::models::paymentmodel::PaymentNode;
use crate::models::projectmodel::ProjectStatus;

#[async_trait]
pub trait DashboardExt {
    async fn count_projects_by_status(&self) -> Result<Vec<(ProjectStatus, i64)>, Error>;

    async fn sum_contract_amounts(&self) -> Result<f64, Error>;

    /// Every payment node in the system. The dashboard aggregates these in
    /// memory with the same summarizer the per-project view uses.
    async fn get_all_payment_nodes(&self) -> Result<Vec<PaymentNode>, Error>;
}

#[async_trait]
impl DashboardExt for DBClient {
    async fn count_projects_by_status(&self) -> Result<Vec<(ProjectStatus, i64)>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT status, COUNT(*) as cnt
            FROM projects
            WHERE status IS NOT NULL
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let status: ProjectStatus = row.try_get("status")?;
            let cnt: i64 = row.try_get("cnt")?;
            counts.push((status, cnt));
        }
        Ok(counts)
    }

    async fn sum_contract_amounts(&self) -> Result<f64, Error> {
        let row = sqlx::query("SELECT COALESCE(SUM(contract_amount), 0) as total FROM projects")
            .fetch_one(&self.pool)
            .await?;

        let total: BigDecimal = row.try_get("total")?;
        Ok(total.to_f64().unwrap_or(0.0))
    }

    async fn get_all_payment_nodes(&self) -> Result<Vec<PaymentNode>, Error> {
        sqlx::query_as::<_, PaymentNode>(
            r#"
            SELECT
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            FROM payment_nodes
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
