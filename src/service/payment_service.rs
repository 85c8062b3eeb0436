// service/payment_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    db::{cache::CacheHelper, db::DBClient, paymentdb::PaymentNodeExt, projectdb::ProjectExt},
    models::paymentmodel::{PaymentNode, PaymentNodeStatus},
    service::{
        error::ServiceError,
        payment_plan::{plan_default_nodes, summarize_payments, PaymentSummary},
    },
    utils::decimal::BigDecimalHelpers,
};

#[derive(Debug, Clone)]
pub struct PaymentPlanService {
    db_client: Arc<DBClient>,
}

impl PaymentPlanService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn summarize_project(&self, project_id: Uuid) -> Result<PaymentSummary, ServiceError> {
        self.db_client
            .get_project(project_id)
            .await?
            .ok_or(ServiceError::ProjectNotFound(project_id))?;

        let nodes = self.db_client.get_payment_nodes(project_id).await?;
        Ok(summarize_payments(&nodes))
    }

    /// Replace a project's payment nodes with the stock four-node plan.
    ///
    /// Two explicit steps: clear, then insert one node at a time. There is no
    /// wrapping transaction; an insert failure propagates to the caller and
    /// leaves the rows created so far in place.
    pub async fn create_default_nodes(
        &self,
        project_id: Uuid,
        total_contract_amount: f64,
    ) -> Result<Vec<PaymentNode>, ServiceError> {
        self.db_client
            .get_project(project_id)
            .await?
            .ok_or(ServiceError::ProjectNotFound(project_id))?;

        let planned = plan_default_nodes(total_contract_amount)?;

        let removed = self
            .db_client
            .delete_project_payment_nodes(project_id)
            .await?;
        if removed > 0 {
            tracing::info!(
                "Replaced {} existing payment node(s) for project {}",
                removed,
                project_id
            );
        }

        let mut created = Vec::with_capacity(planned.len());
        for node in planned {
            let inserted = self
                .db_client
                .create_payment_node(project_id, node.node_type, node.amount, None)
                .await?;
            created.push(inserted);
        }

        self.invalidate_dashboard_cache().await;

        Ok(created)
    }

    /// Record an incremental payment against a node and re-derive its status
    /// by the natural rule.
    pub async fn record_payment(
        &self,
        node_id: Uuid,
        amount: f64,
    ) -> Result<PaymentNode, ServiceError> {
        let node = self
            .db_client
            .get_payment_node(node_id)
            .await?
            .ok_or(ServiceError::PaymentNodeNotFound(node_id))?;

        let new_paid = node.paid_amount.to_f64_or_zero() + amount;
        let status = PaymentNodeStatus::from_amounts(node.amount.to_f64_or_zero(), new_paid);

        let updated = self
            .db_client
            .set_paid_amount(node_id, new_paid, status)
            .await?;

        self.invalidate_dashboard_cache().await;

        Ok(updated)
    }

    async fn invalidate_dashboard_cache(&self) {
        if let Some(redis) = &self.db_client.redis_client {
            let _ = CacheHelper::delete(redis, &CacheHelper::dashboard_stats_key()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[tokio::test]
    async fn payment_service_compiles() {
        let pool = PgPool::connect_lazy("postgres://localhost/renodesk").unwrap();
        let db_client = Arc::new(DBClient::new(pool));
        let svc = PaymentPlanService::new(db_client);

        let _ = svc.summarize_project(Uuid::nil());
    }
}
