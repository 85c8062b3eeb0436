use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "payment_node_type", rename_all = "snake_case")]
pub enum PaymentNodeType {
    Deposit,
    Phase1Payment,
    Phase2Payment,
    Phase3Payment,
    ChangeOrderPayment,
    FinalPayment,
    TotalContract,
}

impl PaymentNodeType {
    pub fn to_str(&self) -> &str {
        match self {
            PaymentNodeType::Deposit => "deposit",
            PaymentNodeType::Phase1Payment => "phase1_payment",
            PaymentNodeType::Phase2Payment => "phase2_payment",
            PaymentNodeType::Phase3Payment => "phase3_payment",
            PaymentNodeType::ChangeOrderPayment => "change_order_payment",
            PaymentNodeType::FinalPayment => "final_payment",
            PaymentNodeType::TotalContract => "total_contract",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "payment_node_status", rename_all = "snake_case")]
pub enum PaymentNodeStatus {
    Unpaid,
    Partial,
    Paid,
}

impl PaymentNodeStatus {
    pub fn to_str(&self) -> &str {
        match self {
            PaymentNodeStatus::Unpaid => "unpaid",
            PaymentNodeStatus::Partial => "partial",
            PaymentNodeStatus::Paid => "paid",
        }
    }

    /// Natural status rule. Manual overrides via the update endpoint are
    /// allowed to disagree with this; it is only applied when a payment is
    /// recorded against a node.
    pub fn from_amounts(amount: f64, paid_amount: f64) -> Self {
        if paid_amount <= 0.0 {
            PaymentNodeStatus::Unpaid
        } else if paid_amount >= amount {
            PaymentNodeStatus::Paid
        } else {
            PaymentNodeStatus::Partial
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PaymentNode {
    pub id: Uuid,
    pub project_id: Uuid,
    pub node_type: PaymentNodeType,
    pub amount: BigDecimal,
    pub paid_amount: BigDecimal,             // May exceed amount through manual override
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentNodeStatus>,   // Database has DEFAULT 'unpaid', can be NULL
    pub created_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
    pub updated_at: Option<DateTime<Utc>>,   // Database has DEFAULT NOW(), can be NULL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_amounts() {
        assert_eq!(PaymentNodeStatus::from_amounts(100.0, 0.0), PaymentNodeStatus::Unpaid);
        assert_eq!(PaymentNodeStatus::from_amounts(100.0, 50.0), PaymentNodeStatus::Partial);
        assert_eq!(PaymentNodeStatus::from_amounts(100.0, 100.0), PaymentNodeStatus::Paid);
        // Over-payment stays representable and still reads as paid
        assert_eq!(PaymentNodeStatus::from_amounts(100.0, 150.0), PaymentNodeStatus::Paid);
    }
}
