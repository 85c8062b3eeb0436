use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::paymentmodel::{PaymentNode, PaymentNodeStatus, PaymentNodeType};
use crate::service::error::ServiceError;

/// Contract split used when a project gets its stock four-node payment plan:
/// 20% deposit, 30% after phase one, 30% after phase two, and the remainder
/// as the final payment so the plan always sums to the contract amount.
pub const DEFAULT_SPLITS: [(PaymentNodeType, f64); 3] = [
    (PaymentNodeType::Deposit, 0.20),
    (PaymentNodeType::Phase1Payment, 0.30),
    (PaymentNodeType::Phase2Payment, 0.30),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSummary {
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_unpaid: f64,
    pub paid_count: usize,
    pub partial_count: usize,
    pub unpaid_count: usize,
    pub payment_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedNode {
    pub node_type: PaymentNodeType,
    pub amount: f64,
}

/// Roll a project's payment nodes up into the figures the dashboard shows.
///
/// Counts go by the stored status, not a re-derivation, so a manual override
/// on a node is reflected as entered. `payment_progress` is deliberately not
/// capped at 100: an over-paid project reads as over 100% rather than being
/// silently clamped.
pub fn summarize_payments(nodes: &[PaymentNode]) -> PaymentSummary {
    let mut total_amount = 0.0;
    let mut total_paid = 0.0;
    let mut paid_count = 0;
    let mut partial_count = 0;
    let mut unpaid_count = 0;

    for node in nodes {
        total_amount += node.amount.to_f64().unwrap_or(0.0);
        total_paid += node.paid_amount.to_f64().unwrap_or(0.0);

        match node.status.unwrap_or(PaymentNodeStatus::Unpaid) {
            PaymentNodeStatus::Paid => paid_count += 1,
            PaymentNodeStatus::Partial => partial_count += 1,
            PaymentNodeStatus::Unpaid => unpaid_count += 1,
        }
    }

    let payment_progress = if total_amount > 0.0 {
        100.0 * total_paid / total_amount
    } else {
        0.0
    };

    PaymentSummary {
        total_amount,
        total_paid,
        total_unpaid: total_amount - total_paid,
        paid_count,
        partial_count,
        unpaid_count,
        payment_progress,
    }
}

/// Compute the stock four-node plan for a contract amount.
///
/// The first three nodes round to whole currency units; the final payment is
/// the remainder, so the four amounts sum exactly to `total_contract_amount`.
pub fn plan_default_nodes(total_contract_amount: f64) -> Result<Vec<PlannedNode>, ServiceError> {
    if !(total_contract_amount > 0.0) {
        return Err(ServiceError::InvalidContractAmount);
    }

    let mut nodes: Vec<PlannedNode> = Vec::with_capacity(DEFAULT_SPLITS.len() + 1);
    let mut allocated = 0.0;

    for (node_type, share) in DEFAULT_SPLITS {
        let amount = (total_contract_amount * share).round();
        allocated += amount;
        nodes.push(PlannedNode { node_type, amount });
    }

    nodes.push(PlannedNode {
        node_type: PaymentNodeType::FinalPayment,
        amount: total_contract_amount - allocated,
    });

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    fn node(amount: i64, paid: i64, status: PaymentNodeStatus) -> PaymentNode {
        PaymentNode {
            id: Uuid::new_v4(),
            project_id: Uuid::nil(),
            node_type: PaymentNodeType::Deposit,
            amount: BigDecimal::from(amount),
            paid_amount: BigDecimal::from(paid),
            due_date: None,
            status: Some(status),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_summary_totals_and_counts() {
        let nodes = vec![
            node(100, 100, PaymentNodeStatus::Paid),
            node(200, 50, PaymentNodeStatus::Partial),
            node(50, 0, PaymentNodeStatus::Unpaid),
        ];

        let summary = summarize_payments(&nodes);

        assert_eq!(summary.total_amount, 350.0);
        assert_eq!(summary.total_paid, 150.0);
        assert_eq!(summary.total_unpaid, 200.0);
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.partial_count, 1);
        assert_eq!(summary.unpaid_count, 1);
        assert!((summary.payment_progress - 42.857142857142854).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_empty_list_is_all_zero() {
        let summary = summarize_payments(&[]);

        assert_eq!(summary.total_amount, 0.0);
        assert_eq!(summary.total_paid, 0.0);
        assert_eq!(summary.total_unpaid, 0.0);
        assert_eq!(summary.paid_count, 0);
        assert_eq!(summary.partial_count, 0);
        assert_eq!(summary.unpaid_count, 0);
        assert_eq!(summary.payment_progress, 0.0);
    }

    #[test]
    fn test_summary_counts_stored_status_not_amounts() {
        // A manual override disagrees with the amounts; the count follows it.
        let nodes = vec![node(100, 100, PaymentNodeStatus::Partial)];
        let summary = summarize_payments(&nodes);

        assert_eq!(summary.partial_count, 1);
        assert_eq!(summary.paid_count, 0);
    }

    #[test]
    fn test_over_payment_exceeds_hundred_percent() {
        let nodes = vec![node(100, 150, PaymentNodeStatus::Paid)];
        let summary = summarize_payments(&nodes);

        assert!(summary.payment_progress > 100.0);
        assert_eq!(summary.total_unpaid, -50.0);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let nodes = vec![
            node(100, 100, PaymentNodeStatus::Paid),
            node(200, 50, PaymentNodeStatus::Partial),
        ];

        assert_eq!(summarize_payments(&nodes), summarize_payments(&nodes));
    }

    #[test]
    fn test_default_plan_for_round_contract() {
        let nodes = plan_default_nodes(1_000_000.0).unwrap();

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].node_type, PaymentNodeType::Deposit);
        assert_eq!(nodes[0].amount, 200_000.0);
        assert_eq!(nodes[1].amount, 300_000.0);
        assert_eq!(nodes[2].amount, 300_000.0);
        assert_eq!(nodes[3].node_type, PaymentNodeType::FinalPayment);
        assert_eq!(nodes[3].amount, 200_000.0);
    }

    #[test]
    fn test_default_plan_sums_exactly_despite_rounding() {
        for total in [1.0, 3.0, 99.0, 12_345.0, 777_777.0] {
            let nodes = plan_default_nodes(total).unwrap();
            let sum: f64 = nodes.iter().map(|n| n.amount).sum();
            assert_eq!(sum, total, "plan for {} must sum exactly", total);
        }
    }

    #[test]
    fn test_non_positive_contract_amount_is_rejected() {
        assert!(matches!(
            plan_default_nodes(0.0),
            Err(ServiceError::InvalidContractAmount)
        ));
        assert!(matches!(
            plan_default_nodes(-5.0),
            Err(ServiceError::InvalidContractAmount)
        ));
    }
}
