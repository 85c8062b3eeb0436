// db/talentdb.rs
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error, Row};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::talentmodel::*;
use crate::models::workermodel::WorkerTrade;

#[async_trait]
pub trait TalentExt {
    async fn create_candidate(
        &self,
        name: String,
        phone: String,
        position: String,
        trade: WorkerTrade,
        expected_salary: Option<f64>,
        notes: Option<String>,
    ) -> Result<TalentCandidate, Error>;

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Option<TalentCandidate>, Error>;

    async fn get_candidates(
        &self,
        stage: Option<TalentStage>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TalentCandidate>, Error>;

    async fn count_candidates(&self, stage: Option<TalentStage>) -> Result<i64, Error>;

    /// Pipeline counts grouped by stage, for the dashboard funnel.
    async fn count_candidates_by_stage(&self) -> Result<Vec<(TalentStage, i64)>, Error>;

    async fn update_candidate(
        &self,
        candidate_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        position: Option<String>,
        trade: Option<WorkerTrade>,
        expected_salary: Option<f64>,
        stage: Option<TalentStage>,
        notes: Option<String>,
    ) -> Result<TalentCandidate, Error>;

    async fn delete_candidate(&self, candidate_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl TalentExt for DBClient {
    async fn create_candidate(
        &self,
        name: String,
        phone: String,
        position: String,
        trade: WorkerTrade,
        expected_salary: Option<f64>,
        notes: Option<String>,
    ) -> Result<TalentCandidate, Error> {
        let expected_salary_bd =
            expected_salary.and_then(|salary| BigDecimal::try_from(salary).ok());

        sqlx::query_as::<_, TalentCandidate>(
            r#"
            INSERT INTO talent_candidates
            (name, phone, position, trade, expected_salary, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, name, phone, position, trade, expected_salary,
                stage, notes, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(position)
        .bind(trade)
        .bind(expected_salary_bd)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Option<TalentCandidate>, Error> {
        sqlx::query_as::<_, TalentCandidate>(
            r#"
            SELECT
                id, name, phone, position, trade, expected_salary,
                stage, notes, created_at, updated_at
            FROM talent_candidates
            WHERE id = $1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_candidates(
        &self,
        stage: Option<TalentStage>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TalentCandidate>, Error> {
        match stage {
            Some(stage) => {
                sqlx::query_as::<_, TalentCandidate>(
                    r#"
                    SELECT
                        id, name, phone, position, trade, expected_salary,
                        stage, notes, created_at, updated_at
                    FROM talent_candidates
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
                sqlx::query_as::<_, TalentCandidate>(
                    r#"
                    SELECT
                        id, name, phone, position, trade, expected_salary,
                        stage, notes, created_at, updated_at
                    FROM talent_candidates
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

    async fn count_candidates(&self, stage: Option<TalentStage>) -> Result<i64, Error> {
        let count: (i64,) = match stage {
            Some(stage) => {
                sqlx::query_as("SELECT COUNT(*) FROM talent_candidates WHERE stage = $1")
                    .bind(stage)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM talent_candidates")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn count_candidates_by_stage(&self) -> Result<Vec<(TalentStage, i64)>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT stage, COUNT(*) as cnt
            FROM talent_candidates
            WHERE stage IS NOT NULL
            GROUP BY stage
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let stage: TalentStage = row.try_get("stage")?;
            let cnt: i64 = row.try_get("cnt")?;
            counts.push((stage, cnt));
        }
        Ok(counts)
    }

    async fn update_candidate(
        &self,
        candidate_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        position: Option<String>,
        trade: Option<WorkerTrade>,
        expected_salary: Option<f64>,
        stage: Option<TalentStage>,
        notes: Option<String>,
    ) -> Result<TalentCandidate, Error> {
        let expected_salary_bd =
            expected_salary.and_then(|salary| BigDecimal::try_from(salary).ok());

        sqlx::query_as::<_, TalentCandidate>(
            r#"
            UPDATE talent_candidates
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                position = COALESCE($4, position),
                trade = COALESCE($5, trade),
                expected_salary = COALESCE($6, expected_salary),
                stage = COALESCE($7, stage),
                notes = COALESCE($8, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, phone, position, trade, expected_salary,
                stage, notes, created_at, updated_at
            "#,
        )
        .bind(candidate_id)
        .bind(name)
        .bind(phone)
        .bind(position)
        .bind(trade)
        .bind(expected_salary_bd)
        .bind(stage)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_candidate(&self, candidate_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM talent_candidates WHERE id = $1")
            .bind(candidate_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
