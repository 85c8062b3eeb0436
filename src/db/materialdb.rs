// db/materialdb.rs
use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::materialmodel::*;

#[async_trait]
pub trait MaterialExt {
    async fn create_material(
        &self,
        name: String,
        category: MaterialCategory,
        brand: Option<String>,
        spec: Option<String>,
        unit: String,
        unit_price: f64,
        stock_quantity: i32,
        low_stock_threshold: i32,
        supplier_id: Option<Uuid>,
    ) -> Result<Material, Error>;

    async fn get_material(&self, material_id: Uuid) -> Result<Option<Material>, Error>;

    async fn get_materials(
        &self,
        category: Option<MaterialCategory>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Material>, Error>;

    async fn count_materials(&self, category: Option<MaterialCategory>) -> Result<i64, Error>;

    /// Materials at or below their configured low-stock threshold.
    async fn get_low_stock_materials(&self) -> Result<Vec<Material>, Error>;

    async fn count_low_stock_materials(&self) -> Result<i64, Error>;

    async fn update_material(
        &self,
        material_id: Uuid,
        name: Option<String>,
        category: Option<MaterialCategory>,
        brand: Option<String>,
        spec: Option<String>,
        unit: Option<String>,
        unit_price: Option<f64>,
        stock_quantity: Option<i32>,
        low_stock_threshold: Option<i32>,
        supplier_id: Option<Uuid>,
    ) -> Result<Material, Error>;

    async fn delete_material(&self, material_id: Uuid) -> Result<(), Error>;

    // Supplier management
    async fn create_supplier(
        &self,
        name: String,
        contact_name: String,
        phone: String,
        address: Option<String>,
        category: MaterialCategory,
        notes: Option<String>,
    ) -> Result<Supplier, Error>;

    async fn get_supplier(&self, supplier_id: Uuid) -> Result<Option<Supplier>, Error>;

    async fn get_suppliers(&self, limit: i64, offset: i64) -> Result<Vec<Supplier>, Error>;

    async fn count_suppliers(&self) -> Result<i64, Error>;

    async fn update_supplier(
        &self,
        supplier_id: Uuid,
        name: Option<String>,
        contact_name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        category: Option<MaterialCategory>,
        rating: Option<f32>,
        notes: Option<String>,
    ) -> Result<Supplier, Error>;

    async fn delete_supplier(&self, supplier_id: Uuid) -> Result<(), Error>;
}

#[async_trait]
impl MaterialExt for DBClient {
    async fn create_material(
        &self,
        name: String,
        category: MaterialCategory,
        brand: Option<String>,
        spec: Option<String>,
        unit: String,
        unit_price: f64,
        stock_quantity: i32,
        low_stock_threshold: i32,
        supplier_id: Option<Uuid>,
    ) -> Result<Material, Error> {
        let unit_price_bd = BigDecimal::try_from(unit_price).unwrap_or_default();

        sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials
            (name, category, brand, spec, unit, unit_price, stock_quantity, low_stock_threshold, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, name, category, brand, spec, unit, unit_price,
                stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(brand)
        .bind(spec)
        .bind(unit)
        .bind(unit_price_bd)
        .bind(stock_quantity)
        .bind(low_stock_threshold)
        .bind(supplier_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_material(&self, material_id: Uuid) -> Result<Option<Material>, Error> {
        sqlx::query_as::<_, Material>(
            r#"
            SELECT
                id, name, category, brand, spec, unit, unit_price,
                stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
            FROM materials
            WHERE id = $1
            "#,
        )
        .bind(material_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_materials(
        &self,
        category: Option<MaterialCategory>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Material>, Error> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Material>(
                    r#"
                    SELECT
                        id, name, category, brand, spec, unit, unit_price,
                        stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
                    FROM materials
                    WHERE category = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(category)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Material>(
                    r#"
                    SELECT
                        id, name, category, brand, spec, unit, unit_price,
                        stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
                    FROM materials
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

    async fn count_materials(&self, category: Option<MaterialCategory>) -> Result<i64, Error> {
        let count: (i64,) = match category {
            Some(category) => {
                sqlx::query_as("SELECT COUNT(*) FROM materials WHERE category = $1")
                    .bind(category)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM materials")
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count.0)
    }

    async fn get_low_stock_materials(&self) -> Result<Vec<Material>, Error> {
        sqlx::query_as::<_, Material>(
            r#"
            SELECT
                id, name, category, brand, spec, unit, unit_price,
                stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
            FROM materials
            WHERE COALESCE(stock_quantity, 0) <= COALESCE(low_stock_threshold, 0)
            ORDER BY stock_quantity ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn count_low_stock_materials(&self) -> Result<i64, Error> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM materials
            WHERE COALESCE(stock_quantity, 0) <= COALESCE(low_stock_threshold, 0)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }

    async fn update_material(
        &self,
        material_id: Uuid,
        name: Option<String>,
        category: Option<MaterialCategory>,
        brand: Option<String>,
        spec: Option<String>,
        unit: Option<String>,
        unit_price: Option<f64>,
        stock_quantity: Option<i32>,
        low_stock_threshold: Option<i32>,
        supplier_id: Option<Uuid>,
    ) -> Result<Material, Error> {
        let unit_price_bd = unit_price.and_then(|p| BigDecimal::try_from(p).ok());

        sqlx::query_as::<_, Material>(
            r#"
            UPDATE materials
            SET name = COALESCE($2, name),
                category = COALESCE($3, category),
                brand = COALESCE($4, brand),
                spec = COALESCE($5, spec),
                unit = COALESCE($6, unit),
                unit_price = COALESCE($7, unit_price),
                stock_quantity = COALESCE($8, stock_quantity),
                low_stock_threshold = COALESCE($9, low_stock_threshold),
                supplier_id = COALESCE($10, supplier_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, category, brand, spec, unit, unit_price,
                stock_quantity, low_stock_threshold, supplier_id, created_at, updated_at
            "#,
        )
        .bind(material_id)
        .bind(name)
        .bind(category)
        .bind(brand)
        .bind(spec)
        .bind(unit)
        .bind(unit_price_bd)
        .bind(stock_quantity)
        .bind(low_stock_threshold)
        .bind(supplier_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_material(&self, material_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(material_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }

    async fn create_supplier(
        &self,
        name: String,
        contact_name: String,
        phone: String,
        address: Option<String>,
        category: MaterialCategory,
        notes: Option<String>,
    ) -> Result<Supplier, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers
            (name, contact_name, phone, address, category, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, name, contact_name, phone, address, category,
                rating, notes, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(contact_name)
        .bind(phone)
        .bind(address)
        .bind(category)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_supplier(&self, supplier_id: Uuid) -> Result<Option<Supplier>, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            SELECT
                id, name, contact_name, phone, address, category,
                rating, notes, created_at, updated_at
            FROM suppliers
            WHERE id = $1
            "#,
        )
        .bind(supplier_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_suppliers(&self, limit: i64, offset: i64) -> Result<Vec<Supplier>, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            SELECT
                id, name, contact_name, phone, address, category,
                rating, notes, created_at, updated_at
            FROM suppliers
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_suppliers(&self) -> Result<i64, Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn update_supplier(
        &self,
        supplier_id: Uuid,
        name: Option<String>,
        contact_name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        category: Option<MaterialCategory>,
        rating: Option<f32>,
        notes: Option<String>,
    ) -> Result<Supplier, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers
            SET name = COALESCE($2, name),
                contact_name = COALESCE($3, contact_name),
                phone = COALESCE($4, phone),
                address = COALESCE($5, address),
                category = COALESCE($6, category),
                rating = COALESCE($7, rating),
                notes = COALESCE($8, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, contact_name, phone, address, category,
                rating, notes, created_at, updated_at
            "#,
        )
        .bind(supplier_id)
        .bind(name)
        .bind(contact_name)
        .bind(phone)
        .bind(address)
        .bind(category)
        .bind(rating)
        .bind(notes)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_supplier(&self, supplier_id: Uuid) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(supplier_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }
        Ok(())
    }
}
