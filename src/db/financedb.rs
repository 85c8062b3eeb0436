// db/financedb.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use num_traits::ToPrimitive;
use sqlx::{types::BigDecimal, Error, Row};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::financemodel::*;

#[async_trait]
pub trait FinanceExt {
    async fn create_finance_record(
        &self,
        record_no: String,
        kind: FinanceKind,
        category: FinanceCategory,
        amount: f64,
        record_date: NaiveDate,
        project_id: Option<Uuid>,
        description: Option<String>,
    ) -> Result<FinanceRecord, Error>;

    async fn get_finance_record(&self, record_id: Uuid) -> Result<Option<FinanceRecord>, Error>;

    async fn get_finance_records(
        &self,
        kind: Option<FinanceKind>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FinanceRecord>, Error>;

    async fn get_project_finance_records(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<FinanceRecord>, Error>;

    async fn count_finance_records(&self, kind: Option<FinanceKind>) -> Result<i64, Error>;

    /// Sum of record amounts of one kind within [from, to] inclusive.
    async fn sum_finance_records(
        &self,
        kind: FinanceKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<f64, Error>;

    async fn update_finance_record(
        &self,
        record_id: Uuid,
        kind: Option<FinanceKind>,
        category: Option<FinanceCategory>,
        amount: Option<f64>,
        record_date: Option<NaiveDate>,
        project_id: Option<Uuid>,
        description: Option<String>,
    ) -> Result<FinanceRecord, Error>;

    async fn delete_finance_record(&self, record_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl FinanceExt for DBClient {
    async fn create_finance_record(
        &self,
        record_no: String,
        kind: FinanceKind,
        category: FinanceCategory,
        amount: f64,
        record_date: NaiveDate,
        project_id: Option<Uuid>,
        description: Option<String>,
    ) -> Result<FinanceRecord, Error> {
        let amount_bd = BigDecimal::try_from(amount).unwrap_or_default();

        sqlx::query_as::<_, FinanceRecord>(
            r#"
            INSERT INTO finance_records
            (record_no, kind, category, amount, record_date, project_id, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, record_no, kind, category, amount, record_date,
                project_id, description, created_at, updated_at
            "#,
        )
        .bind(record_no)
        .bind(kind)
        .bind(category)
        .bind(amount_bd)
        .bind(record_date)
        .bind(project_id)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_finance_record(&self, record_id: Uuid) -> Result<Option<FinanceRecord>, Error> {
        sqlx::query_as::<_, FinanceRecord>(
            r#"
            SELECT
                id, record_no, kind, category, amount, record_date,
                project_id, description, created_at, updated_at
            FROM finance_records
            WHERE id = $1
            "#,
        )
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_finance_records(
        &self,
        kind: Option<FinanceKind>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FinanceRecord>, Error> {
        match kind {
            Some(kind) => {
                sqlx::query_as::<_, FinanceRecord>(
                    r#"
                    SELECT
                        id, record_no, kind, category, amount, record_date,
                        project_id, description, created_at, updated_at
                    FROM finance_records
                    WHERE kind = $1
                    ORDER BY record_date DESC, created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(kind)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, FinanceRecord>(
                    r#"
                    SELECT
                        id, record_no, kind, category, amount, record_date,
                        project_id, description, created_at, updated_at
                    FROM finance_records
                    ORDER BY record_date DESC, created_at DESC
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

    async fn get_project_finance_records(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<FinanceRecord>, Error> {
        sqlx::query_as::<_, FinanceRecord>(
            r#"
            SELECT
                id, record_no, kind, category, amount, record_date,
                project_id, description, created_at, updated_at
            FROM finance_records
            WHERE project_id = $1
            ORDER BY record_date DESC, created_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_finance_records(&self, kind: Option<FinanceKind>) -> Result<i64, Error> {
        let count: (i64,) = match kind {
            Some(kind) => {
                sqlx::query_as("SELECT COUNT(*) FROM finance_records WHERE kind = $1")
                    .bind(kind)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM finance_records")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn sum_finance_records(
        &self,
        kind: FinanceKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<f64, Error> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(amount), 0) as total
            FROM finance_records
            WHERE kind = $1 AND record_date BETWEEN $2 AND $3
            "#,
        )
        .bind(kind)
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        let total: BigDecimal = row.try_get("total")?;
        Ok(total.to_f64().unwrap_or(0.0))
    }

    async fn update_finance_record(
        &self,
        record_id: Uuid,
        kind: Option<FinanceKind>,
        category: Option<FinanceCategory>,
        amount: Option<f64>,
        record_date: Option<NaiveDate>,
        project_id: Option<Uuid>,
        description: Option<String>,
    ) -> Result<FinanceRecord, Error> {
        let amount_bd = amount.and_then(|a| BigDecimal::try_from(a).ok());

        sqlx::query_as::<_, FinanceRecord>(
            r#"
            UPDATE finance_records
            SET kind = COALESCE($2, kind),
                category = COALESCE($3, category),
                amount = COALESCE($4, amount),
                record_date = COALESCE($5, record_date),
                project_id = COALESCE($6, project_id),
                description = COALESCE($7, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, record_no, kind, category, amount, record_date,
                project_id, description, created_at, updated_at
            "#,
        )
        .bind(record_id)
        .bind(kind)
        .bind(category)
        .bind(amount_bd)
        .bind(record_date)
        .bind(project_id)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_finance_record(&self, record_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM finance_records WHERE id = $1")
            .bind(record_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
