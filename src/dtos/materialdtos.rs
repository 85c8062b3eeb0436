use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::materialmodel::*;

//Material DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateMaterialDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    pub category: MaterialCategory,

    #[validate(length(max = 100, message = "Brand name is too long"))]
    pub brand: Option<String>,

    #[validate(length(max = 255, message = "Spec is too long"))]
    pub spec: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Unit is required"))]
    pub unit: String,

    #[validate(range(min = 0.0, message = "Unit price must be positive"))]
    pub unit_price: f64,

    #[validate(range(min = 0, message = "Stock quantity must be positive"))]
    pub stock_quantity: i32,

    #[validate(range(min = 0, message = "Low stock threshold must be positive"))]
    pub low_stock_threshold: i32,

    pub supplier_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateMaterialDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    pub category: Option<MaterialCategory>,

    #[validate(length(max = 100, message = "Brand name is too long"))]
    pub brand: Option<String>,

    #[validate(length(max = 255, message = "Spec is too long"))]
    pub spec: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Unit is required"))]
    pub unit: Option<String>,

    #[validate(range(min = 0.0, message = "Unit price must be positive"))]
    pub unit_price: Option<f64>,

    #[validate(range(min = 0, message = "Stock quantity must be positive"))]
    pub stock_quantity: Option<i32>,

    #[validate(range(min = 0, message = "Low stock threshold must be positive"))]
    pub low_stock_threshold: Option<i32>,

    pub supplier_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct MaterialListQueryDto {
    pub category: Option<MaterialCategory>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

//Supplier DTOs
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateSupplierDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Contact name is required"))]
    pub contact_name: String,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: String,

    #[validate(length(max = 255, message = "Address is too long"))]
    pub address: Option<String>,

    pub category: MaterialCategory,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateSupplierDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Contact name is required"))]
    pub contact_name: Option<String>,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Address is too long"))]
    pub address: Option<String>,

    pub category: Option<MaterialCategory>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f32>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}
