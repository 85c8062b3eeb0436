// db/customerdb.rs
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::customermodel::*;

#[async_trait]
pub trait CustomerExt {
    async fn create_customer(
        &self,
        name: String,
        phone: String,
        address: Option<String>,
        source: CustomerSource,
        budget: Option<f64>,
        notes: Option<String>,
    ) -> Result<Customer, Error>;

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, Error>;

    async fn get_customers(
        &self,
        stage: Option<CustomerStage>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Customer>, Error>;

    async fn count_customers(&self, stage: Option<CustomerStage>) -> Result<i64, Error>;

    async fn count_customers_since(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<i64, Error>;

    async fn update_customer(
        &self,
        customer_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        source: Option<CustomerSource>,
        stage: Option<CustomerStage>,
        budget: Option<f64>,
        notes: Option<String>,
    ) -> Result<Customer, Error>;

    async fn delete_customer(&self, customer_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl CustomerExt for DBClient {
    async fn create_customer(
        &self,
        name: String,
        phone: String,
        address: Option<String>,
        source: CustomerSource,
        budget: Option<f64>,
        notes: Option<String>,
    ) -> Result<Customer, Error> {
        let budget_bd = budget.and_then(|b| BigDecimal::try_from(b).ok());

        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers
            (name, phone, address, source, budget, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, name, phone, address, source, stage,
                budget, notes, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(address)
        .bind(source)
        .bind(budget_bd)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                id, name, phone, address, source, stage,
                budget, notes, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_customers(
        &self,
        stage: Option<CustomerStage>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Customer>, Error> {
        match stage {
            Some(stage) => {
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT
                        id, name, phone, address, source, stage,
                        budget, notes, created_at, updated_at
                    FROM customers
                    WHERE stage = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(stage)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT
                        id, name, phone, address, source, stage,
                        budget, notes, created_at, updated_at
                    FROM customers
                    ORDER BY created_at DESC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn count_customers(&self, stage: Option<CustomerStage>) -> Result<i64, Error> {
        let count: (i64,) = match stage {
            Some(stage) => {
                sqlx::query_as("SELECT COUNT(*) FROM customers WHERE stage = $1")
                    .bind(stage)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM customers")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn count_customers_since(
        &self,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<i64, Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM customers WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.0)
    }

    async fn update_customer(
        &self,
        customer_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        source: Option<CustomerSource>,
        stage: Option<CustomerStage>,
        budget: Option<f64>,
        notes: Option<String>,
    ) -> Result<Customer, Error> {
        let budget_bd = budget.and_then(|b| BigDecimal::try_from(b).ok());

        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                address = COALESCE($4, address),
                source = COALESCE($5, source),
                stage = COALESCE($6, stage),
                budget = COALESCE($7, budget),
                notes = COALESCE($8, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, phone, address, source, stage,
                budget, notes, created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .bind(name)
        .bind(phone)
        .bind(address)
        .bind(source)
        .bind(stage)
        .bind(budget_bd)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_customer(&self, customer_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
