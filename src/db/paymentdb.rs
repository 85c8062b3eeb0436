// db/paymentdb.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::paymentmodel::*;

#[async_trait]
pub trait PaymentNodeExt {
    async fn get_payment_nodes(&self, project_id: Uuid) -> Result<Vec<PaymentNode>, Error>;

    async fn get_payment_node(&self, node_id: Uuid) -> Result<Option<PaymentNode>, Error>;

    async fn create_payment_node(
        &self,
        project_id: Uuid,
        node_type: PaymentNodeType,
        amount: f64,
        due_date: Option<NaiveDate>,
    ) -> Result<PaymentNode, Error>;

    async fn update_payment_node(
        &self,
        node_id: Uuid,
        node_type: Option<PaymentNodeType>,
        amount: Option<f64>,
        paid_amount: Option<f64>,
        due_date: Option<NaiveDate>,
        status: Option<PaymentNodeStatus>,
    ) -> Result<PaymentNode, Error>;

    /// Overwrite the paid amount and status on a node. The caller owns the
    /// status derivation; this just persists what it was handed.
    async fn set_paid_amount(
        &self,
        node_id: Uuid,
        paid_amount: f64,
        status: PaymentNodeStatus,
    ) -> Result<PaymentNode, Error>;

    async fn delete_payment_node(&self, node_id: Uuid) -> Result<(), Error>;

    async fn delete_project_payment_nodes(&self, project_id: Uuid) -> Result<u64, Error>;
}

#[async_trait]
impl PaymentNodeExt for DBClient {
    async fn get_payment_nodes(&self, project_id: Uuid) -> Result<Vec<PaymentNode>, Error> {
        sqlx::query_as::<_, PaymentNode>(
            r#"
            SELECT
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            FROM payment_nodes
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_payment_node(&self, node_id: Uuid) -> Result<Option<PaymentNode>, Error> {
        sqlx::query_as::<_, PaymentNode>(
            r#"
            SELECT
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            FROM payment_nodes
            WHERE id = $1
            "#,
        )
        .bind(node_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_payment_node(
        &self,
        project_id: Uuid,
        node_type: PaymentNodeType,
        amount: f64,
        due_date: Option<NaiveDate>,
    ) -> Result<PaymentNode, Error> {
        let amount_bd = BigDecimal::try_from(amount).unwrap_or_default();

        sqlx::query_as::<_, PaymentNode>(
            r#"
            INSERT INTO payment_nodes
            (project_id, node_type, amount, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            "#,
        )
        .bind(project_id)
        .bind(node_type)
        .bind(amount_bd)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_payment_node(
        &self,
        node_id: Uuid,
        node_type: Option<PaymentNodeType>,
        amount: Option<f64>,
        paid_amount: Option<f64>,
        due_date: Option<NaiveDate>,
        status: Option<PaymentNodeStatus>,
    ) -> Result<PaymentNode, Error> {
        let amount_bd = amount.and_then(|a| BigDecimal::try_from(a).ok());
        let paid_amount_bd = paid_amount.and_then(|a| BigDecimal::try_from(a).ok());

        sqlx::query_as::<_, PaymentNode>(
            r#"
            UPDATE payment_nodes
            SET node_type = COALESCE($2, node_type),
                amount = COALESCE($3, amount),
                paid_amount = COALESCE($4, paid_amount),
                due_date = COALESCE($5, due_date),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            "#,
        )
        .bind(node_id)
        .bind(node_type)
        .bind(amount_bd)
        .bind(paid_amount_bd)
        .bind(due_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_paid_amount(
        &self,
        node_id: Uuid,
        paid_amount: f64,
        status: PaymentNodeStatus,
    ) -> Result<PaymentNode, Error> {
        let paid_amount_bd = BigDecimal::try_from(paid_amount).unwrap_or_default();

        sqlx::query_as::<_, PaymentNode>(
            r#"
            UPDATE payment_nodes
            SET paid_amount = $2,
                status = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, project_id, node_type, amount, paid_amount,
                due_date, status, created_at, updated_at
            "#,
        )
        .bind(node_id)
        .bind(paid_amount_bd)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_payment_node(&self, node_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM payment_nodes WHERE id = $1")
            .bind(node_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }

    async fn delete_project_payment_nodes(&self, project_id: Uuid) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM payment_nodes WHERE project_id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
