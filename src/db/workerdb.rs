// db/workerdb.rs
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::workermodel::*;

#[async_trait]
pub trait WorkerExt {
    async fn create_worker(
        &self,
        name: String,
        phone: String,
        trade: WorkerTrade,
        skill_level: SkillLevel,
        daily_rate: Option<f64>,
        team_id: Option<Uuid>,
    ) -> Result<Worker, Error>;

    async fn get_worker(&self, worker_id: Uuid) -> Result<Option<Worker>, Error>;

    async fn get_workers(
        &self,
        trade: Option<WorkerTrade>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Worker>, Error>;

    async fn count_workers(&self, trade: Option<WorkerTrade>) -> Result<i64, Error>;

    async fn count_available_workers(&self) -> Result<i64, Error>;

    async fn update_worker(
        &self,
        worker_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        trade: Option<WorkerTrade>,
        skill_level: Option<SkillLevel>,
        daily_rate: Option<f64>,
        team_id: Option<Uuid>,
        is_available: Option<bool>,
    ) -> Result<Worker, Error>;

    async fn delete_worker(&self, worker_id: Uuid) -> Result<(), Error>;

    // Crew team management
    async fn create_team(
        &self,
        name: String,
        leader_name: String,
        phone: String,
        specialty: WorkerTrade,
        notes: Option<String>,
    ) -> Result<CrewTeam, Error>;

    async fn get_team(&self, team_id: Uuid) -> Result<Option<CrewTeam>, Error>;

    async fn get_teams(&self, limit: i64, offset: i64) -> Result<Vec<CrewTeam>, Error>;

    async fn count_teams(&self) -> Result<i64, Error>;

    async fn get_team_members(&self, team_id: Uuid) -> Result<Vec<Worker>, Error>;

    async fn update_team(
        &self,
        team_id: Uuid,
        name: Option<String>,
        leader_name: Option<String>,
        phone: Option<String>,
        specialty: Option<WorkerTrade>,
        rating: Option<f32>,
        notes: Option<String>,
    ) -> Result<CrewTeam, Error>;

    async fn delete_team(&self, team_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn create_worker(
        &self,
        name: String,
        phone: String,
        trade: WorkerTrade,
        skill_level: SkillLevel,
        daily_rate: Option<f64>,
        team_id: Option<Uuid>,
    ) -> Result<Worker, Error> {
        let daily_rate_bd = daily_rate.and_then(|rate| BigDecimal::try_from(rate).ok());

        sqlx::query_as::<_, Worker>(
            r#"
            INSERT INTO workers
            (name, phone, trade, skill_level, daily_rate, team_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, name, phone, trade, skill_level, daily_rate, team_id,
                is_available, completed_projects, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(trade)
        .bind(skill_level)
        .bind(daily_rate_bd)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_worker(&self, worker_id: Uuid) -> Result<Option<Worker>, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT
                id, name, phone, trade, skill_level, daily_rate, team_id,
                is_available, completed_projects, created_at, updated_at
            FROM workers
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_workers(
        &self,
        trade: Option<WorkerTrade>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Worker>, Error> {
        match trade {
            Some(trade) => {
                sqlx::query_as::<_, Worker>(
                    r#"
                    SELECT
                        id, name, phone, trade, skill_level, daily_rate, team_id,
                        is_available, completed_projects, created_at, updated_at
                    FROM workers
                    WHERE trade = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(trade)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Worker>(
                    r#"
                    SELECT
                        id, name, phone, trade, skill_level, daily_rate, team_id,
                        is_available, completed_projects, created_at, updated_at
                    FROM workers
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

    async fn count_workers(&self, trade: Option<WorkerTrade>) -> Result<i64, Error> {
        let count: (i64,) = match trade {
            Some(trade) => {
                sqlx::query_as("SELECT COUNT(*) FROM workers WHERE trade = $1")
                    .bind(trade)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM workers")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn count_available_workers(&self) -> Result<i64, Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM workers WHERE is_available IS NOT FALSE")
                .fetch_one(&self.pool)
                .await?;
        Ok(count.0)
    }

    async fn update_worker(
        &self,
        worker_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        trade: Option<WorkerTrade>,
        skill_level: Option<SkillLevel>,
        daily_rate: Option<f64>,
        team_id: Option<Uuid>,
        is_available: Option<bool>,
    ) -> Result<Worker, Error> {
        let daily_rate_bd = daily_rate.and_then(|rate| BigDecimal::try_from(rate).ok());

        sqlx::query_as::<_, Worker>(
            r#"
            UPDATE workers
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                trade = COALESCE($4, trade),
                skill_level = COALESCE($5, skill_level),
                daily_rate = COALESCE($6, daily_rate),
                team_id = COALESCE($7, team_id),
                is_available = COALESCE($8, is_available),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, phone, trade, skill_level, daily_rate, team_id,
                is_available, completed_projects, created_at, updated_at
            "#,
        )
        .bind(worker_id)
        .bind(name)
        .bind(phone)
        .bind(trade)
        .bind(skill_level)
        .bind(daily_rate_bd)
        .bind(team_id)
        .bind(is_available)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_worker(&self, worker_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(worker_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }

    async fn create_team(
        &self,
        name: String,
        leader_name: String,
        phone: String,
        specialty: WorkerTrade,
        notes: Option<String>,
    ) -> Result<CrewTeam, Error> {
        sqlx::query_as::<_, CrewTeam>(
            r#"
            INSERT INTO crew_teams
            (name, leader_name, phone, specialty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id, name, leader_name, phone, specialty,
                rating, notes, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(leader_name)
        .bind(phone)
        .bind(specialty)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_team(&self, team_id: Uuid) -> Result<Option<CrewTeam>, Error> {
        sqlx::query_as::<_, CrewTeam>(
            r#"
            SELECT
                id, name, leader_name, phone, specialty,
                rating, notes, created_at, updated_at
            FROM crew_teams
            WHERE id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_teams(&self, limit: i64, offset: i64) -> Result<Vec<CrewTeam>, Error> {
        sqlx::query_as::<_, CrewTeam>(
            r#"
            SELECT
                id, name, leader_name, phone, specialty,
                rating, notes, created_at, updated_at
            FROM crew_teams
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_teams(&self) -> Result<i64, Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM crew_teams")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn get_team_members(&self, team_id: Uuid) -> Result<Vec<Worker>, Error> {
        sqlx::query_as::<_, Worker>(
            r#"
            SELECT
                id, name, phone, trade, skill_level, daily_rate, team_id,
                is_available, completed_projects, created_at, updated_at
            FROM workers
            WHERE team_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_team(
        &self,
        team_id: Uuid,
        name: Option<String>,
        leader_name: Option<String>,
        phone: Option<String>,
        specialty: Option<WorkerTrade>,
        rating: Option<f32>,
        notes: Option<String>,
    ) -> Result<CrewTeam, Error> {
        sqlx::query_as::<_, CrewTeam>(
            r#"
            UPDATE crew_teams
            SET name = COALESCE($2, name),
                leader_name = COALESCE($3, leader_name),
                phone = COALESCE($4, phone),
                specialty = COALESCE($5, specialty),
                rating = COALESCE($6, rating),
                notes = COALESCE($7, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, leader_name, phone, specialty,
                rating, notes, created_at, updated_at
            "#,
        )
        .bind(team_id)
        .bind(name)
        .bind(leader_name)
        .bind(phone)
        .bind(specialty)
        .bind(rating)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_team(&self, team_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM crew_teams WHERE id = $1")
            .bind(team_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
