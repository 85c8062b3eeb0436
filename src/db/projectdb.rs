// db/projectdb.rs
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::projectmodel::*;

#[async_trait]
pub trait ProjectExt {
    async fn create_project(
        &self,
        name: String,
        customer_id: Option<Uuid>,
        team_id: Option<Uuid>,
        address: String,
        project_type: ProjectType,
        contract_amount: f64,
        designer: Option<String>,
        notes: Option<String>,
    ) -> Result<Project, Error>;

    async fn get_project(&self, project_id: Uuid) -> Result<Option<Project>, Error>;

    async fn get_projects(
        &self,
        status: Option<ProjectStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, Error>;

    async fn count_projects(&self, status: Option<ProjectStatus>) -> Result<i64, Error>;

    async fn update_project(
        &self,
        project_id: Uuid,
        name: Option<String>,
        customer_id: Option<Uuid>,
        team_id: Option<Uuid>,
        address: Option<String>,
        project_type: Option<ProjectType>,
        status: Option<ProjectStatus>,
        contract_amount: Option<f64>,
        designer: Option<String>,
        notes: Option<String>,
    ) -> Result<Project, Error>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), Error>;

    // Phase management
    async fn create_phase(
        &self,
        project_id: Uuid,
        phase_name: String,
        phase_order: i32,
        estimated_duration: i32,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<ProjectPhase, Error>;

    async fn get_phase(&self, phase_id: Uuid) -> Result<Option<ProjectPhase>, Error>;

    /// Phases for one project, ordered by phase_order ascending. The timeline
    /// deriver depends on this ordering.
    async fn get_project_phases(&self, project_id: Uuid) -> Result<Vec<ProjectPhase>, Error>;

    async fn update_phase(
        &self,
        phase_id: Uuid,
        phase_name: Option<String>,
        phase_order: Option<i32>,
        estimated_duration: Option<i32>,
        start_date: Option<String>,
        end_date: Option<String>,
        actual_start_date: Option<String>,
        actual_end_date: Option<String>,
    ) -> Result<ProjectPhase, Error>;

    async fn update_phase_progress(
        &self,
        phase_id: Uuid,
        progress: i32,
        status: Option<PhaseStatus>,
    ) -> Result<ProjectPhase, Error>;

    async fn delete_phase(&self, phase_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl ProjectExt for DBClient {
    async fn create_project(
        &self,
        name: String,
        customer_id: Option<Uuid>,
        team_id: Option<Uuid>,
        address: String,
        project_type: ProjectType,
        contract_amount: f64,
        designer: Option<String>,
        notes: Option<String>,
    ) -> Result<Project, Error> {
        let contract_amount_bd = BigDecimal::try_from(contract_amount).unwrap_or_default();

        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
            (name, customer_id, team_id, address, project_type, contract_amount, designer, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, name, customer_id, team_id, address, project_type,
                status, contract_amount, designer, notes, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(customer_id)
        .bind(team_id)
        .bind(address)
        .bind(project_type)
        .bind(contract_amount_bd)
        .bind(designer)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_project(&self, project_id: Uuid) -> Result<Option<Project>, Error> {
        sqlx::query_as::<_, Project>(
            r#"
            SELECT
                id, name, customer_id, team_id, address, project_type,
                status, contract_amount, designer, notes, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_projects(
        &self,
        status: Option<ProjectStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, Error> {
        match status {
            Some(status) => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT
                        id, name, customer_id, team_id, address, project_type,
                        status, contract_amount, designer, notes, created_at, updated_at
                    FROM projects
                    WHERE status = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(status)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT
                        id, name, customer_id, team_id, address, project_type,
                        status, contract_amount, designer, notes, created_at, updated_at
                    FROM projects
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

    async fn count_projects(&self, status: Option<ProjectStatus>) -> Result<i64, Error> {
        let count: (i64,) = match status {
            Some(status) => {
                sqlx::query_as("SELECT COUNT(*) FROM projects WHERE status = $1")
                    .bind(status)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM projects")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        name: Option<String>,
        customer_id: Option<Uuid>,
        team_id: Option<Uuid>,
        address: Option<String>,
        project_type: Option<ProjectType>,
        status: Option<ProjectStatus>,
        contract_amount: Option<f64>,
        designer: Option<String>,
        notes: Option<String>,
    ) -> Result<Project, Error> {
        let contract_amount_bd =
            contract_amount.and_then(|amount| BigDecimal::try_from(amount).ok());

        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = COALESCE($2, name),
                customer_id = COALESCE($3, customer_id),
                team_id = COALESCE($4, team_id),
                address = COALESCE($5, address),
                project_type = COALESCE($6, project_type),
                status = COALESCE($7, status),
                contract_amount = COALESCE($8, contract_amount),
                designer = COALESCE($9, designer),
                notes = COALESCE($10, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, customer_id, team_id, address, project_type,
                status, contract_amount, designer, notes, created_at, updated_at
            "#,
        )
        .bind(project_id)
        .bind(name)
        .bind(customer_id)
        .bind(team_id)
        .bind(address)
        .bind(project_type)
        .bind(status)
        .bind(contract_amount_bd)
        .bind(designer)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }

    async fn create_phase(
        &self,
        project_id: Uuid,
        phase_name: String,
        phase_order: i32,
        estimated_duration: i32,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<ProjectPhase, Error> {
        sqlx::query_as::<_, ProjectPhase>(
            r#"
            INSERT INTO project_phases
            (project_id, phase_name, phase_order, estimated_duration, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, project_id, phase_name, phase_order, status, progress,
                estimated_duration, start_date, end_date, actual_start_date,
                actual_end_date, created_at, updated_at
            "#,
        )
        .bind(project_id)
        .bind(phase_name)
        .bind(phase_order)
        .bind(estimated_duration)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_phase(&self, phase_id: Uuid) -> Result<Option<ProjectPhase>, Error> {
        sqlx::query_as::<_, ProjectPhase>(
            r#"
            SELECT
                id, project_id, phase_name, phase_order, status, progress,
                estimated_duration, start_date, end_date, actual_start_date,
                actual_end_date, created_at, updated_at
            FROM project_phases
            WHERE id = $1
            "#,
        )
        .bind(phase_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_project_phases(&self, project_id: Uuid) -> Result<Vec<ProjectPhase>, Error> {
        sqlx::query_as::<_, ProjectPhase>(
            r#"
            SELECT
                id, project_id, phase_name, phase_order, status, progress,
                estimated_duration, start_date, end_date, actual_start_date,
                actual_end_date, created_at, updated_at
            FROM project_phases
            WHERE project_id = $1
            ORDER BY phase_order ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_phase(
        &self,
        phase_id: Uuid,
        phase_name: Option<String>,
        phase_order: Option<i32>,
        estimated_duration: Option<i32>,
        start_date: Option<String>,
        end_date: Option<String>,
        actual_start_date: Option<String>,
        actual_end_date: Option<String>,
    ) -> Result<ProjectPhase, Error> {
        sqlx::query_as::<_, ProjectPhase>(
            r#"
            UPDATE project_phases
            SET phase_name = COALESCE($2, phase_name),
                phase_order = COALESCE($3, phase_order),
                estimated_duration = COALESCE($4, estimated_duration),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                actual_start_date = COALESCE($7, actual_start_date),
                actual_end_date = COALESCE($8, actual_end_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, project_id, phase_name, phase_order, status, progress,
                estimated_duration, start_date, end_date, actual_start_date,
                actual_end_date, created_at, updated_at
            "#,
        )
        .bind(phase_id)
        .bind(phase_name)
        .bind(phase_order)
        .bind(estimated_duration)
        .bind(start_date)
        .bind(end_date)
        .bind(actual_start_date)
        .bind(actual_end_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_phase_progress(
        &self,
        phase_id: Uuid,
        progress: i32,
        status: Option<PhaseStatus>,
    ) -> Result<ProjectPhase, Error> {
        sqlx::query_as::<_, ProjectPhase>(
            r#"
            UPDATE project_phases
            SET progress = $2,
                status = COALESCE($3, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, project_id, phase_name, phase_order, status, progress,
                estimated_duration, start_date, end_date, actual_start_date,
                actual_end_date, created_at, updated_at
            "#,
        )
        .bind(phase_id)
        .bind(progress)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_phase(&self, phase_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM project_phases WHERE id = $1")
            .bind(phase_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
