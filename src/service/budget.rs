use serde::{Deserialize, Serialize};

use crate::models::financemodel::FinanceCategory;
use crate::service::error::ServiceError;

/// Default split used by the budget calculator when the caller does not
/// supply one. The last line always absorbs the rounding remainder.
pub const DEFAULT_BUDGET_SPLITS: [(FinanceCategory, f64); 4] = [
    (FinanceCategory::MaterialPurchase, 0.45),
    (FinanceCategory::LaborCost, 0.35),
    (FinanceCategory::DesignFee, 0.10),
    (FinanceCategory::Other, 0.10),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLine {
    pub category: FinanceCategory,
    pub share: f64,
    pub amount: f64,
}

/// Split a total budget across spending categories.
///
/// Every line except the last rounds to whole currency units; the last line
/// is the remainder so the lines sum exactly to `total_budget`.
pub fn plan_budget(
    total_budget: f64,
    splits: &[(FinanceCategory, f64)],
) -> Result<Vec<BudgetLine>, ServiceError> {
    if !(total_budget > 0.0) {
        return Err(ServiceError::Validation(
            "Budget must be greater than zero".to_string(),
        ));
    }
    if splits.is_empty() {
        return Err(ServiceError::Validation(
            "At least one budget split is required".to_string(),
        ));
    }
    if splits.iter().any(|(_, share)| *share < 0.0) {
        return Err(ServiceError::Validation(
            "Budget shares cannot be negative".to_string(),
        ));
    }

    let share_sum: f64 = splits.iter().map(|(_, share)| share).sum();
    if (share_sum - 1.0).abs() > 0.001 {
        return Err(ServiceError::Validation(format!(
            "Budget shares must sum to 100%, got {:.1}%",
            share_sum * 100.0
        )));
    }

    let mut lines: Vec<BudgetLine> = Vec::with_capacity(splits.len());
    let mut allocated = 0.0;

    for (category, share) in &splits[..splits.len() - 1] {
        let amount = (total_budget * share).round();
        allocated += amount;
        lines.push(BudgetLine {
            category: *category,
            share: *share,
            amount,
        });
    }

    let (last_category, last_share) = splits[splits.len() - 1];
    lines.push(BudgetLine {
        category: last_category,
        share: last_share,
        amount: total_budget - allocated,
    });

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_sums_exactly() {
        for total in [100_000.0, 33_333.0, 7.0] {
            let lines = plan_budget(total, &DEFAULT_BUDGET_SPLITS).unwrap();
            let sum: f64 = lines.iter().map(|l| l.amount).sum();
            assert_eq!(sum, total);
            assert_eq!(lines.len(), 4);
        }
    }

    #[test]
    fn test_known_breakdown() {
        let lines = plan_budget(100_000.0, &DEFAULT_BUDGET_SPLITS).unwrap();

        assert_eq!(lines[0].amount, 45_000.0);
        assert_eq!(lines[1].amount, 35_000.0);
        assert_eq!(lines[2].amount, 10_000.0);
        assert_eq!(lines[3].amount, 10_000.0);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(plan_budget(0.0, &DEFAULT_BUDGET_SPLITS).is_err());
        assert!(plan_budget(-1.0, &DEFAULT_BUDGET_SPLITS).is_err());
        assert!(plan_budget(1000.0, &[]).is_err());
        assert!(plan_budget(
            1000.0,
            &[
                (FinanceCategory::MaterialPurchase, 0.5),
                (FinanceCategory::LaborCost, 0.2),
            ],
        )
        .is_err());
    }
}
