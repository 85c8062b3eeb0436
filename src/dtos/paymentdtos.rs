use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::paymentmodel::*;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePaymentNodeDto {
    pub node_type: PaymentNodeType,

    #[validate(range(min = 0.0, message = "Amount must be positive"))]
    pub amount: f64,

    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdatePaymentNodeDto {
    pub node_type: Option<PaymentNodeType>,

    #[validate(range(min = 0.0, message = "Amount must be positive"))]
    pub amount: Option<f64>,

    // Manual override; allowed to exceed the node amount.
    #[validate(range(min = 0.0, message = "Paid amount must be positive"))]
    pub paid_amount: Option<f64>,

    pub due_date: Option<NaiveDate>,

    pub status: Option<PaymentNodeStatus>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RecordPaymentDto {
    #[validate(range(min = 0.01, message = "Payment amount must be greater than zero"))]
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDefaultNodesDto {
    // Validated by the payment plan service so the invalid-amount error is
    // the same whether it comes from the API or an internal caller.
    pub total_contract_amount: f64,
}
