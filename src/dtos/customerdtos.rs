use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::customermodel::*;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCustomerDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: String,

    #[validate(length(max = 255, message = "Address is too long"))]
    pub address: Option<String>,

    pub source: CustomerSource,

    #[validate(range(min = 0.0, message = "Budget must be positive"))]
    pub budget: Option<f64>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCustomerDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(custom = "crate::dtos::common::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Address is too long"))]
    pub address: Option<String>,

    pub source: Option<CustomerSource>,

    pub stage: Option<CustomerStage>,

    #[validate(range(min = 0.0, message = "Budget must be positive"))]
    pub budget: Option<f64>,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerListQueryDto {
    pub stage: Option<CustomerStage>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}
