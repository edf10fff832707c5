//! Budget allocation rules and category summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{pct, round_half_up};
use crate::models::{BudgetCategory, CategoryKind};

/// Percentage split applied to monthly income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRule {
    /// 50% needs / 30% wants / 20% savings.
    #[serde(rename = "50-30-20")]
    FiftyThirtyTwenty,
    /// 60% needs / 20% wants / 20% savings.
    #[serde(rename = "60-20-20")]
    SixtyTwentyTwenty,
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocationInput {
    pub monthly_income: Decimal,
    pub budget_rule: BudgetRule,
    /// Custom percentages; only read when the rule is `Custom`.
    pub custom_needs: Option<Decimal>,
    pub custom_wants: Option<Decimal>,
    pub custom_savings: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocationResult {
    pub needs_amount: Decimal,
    pub wants_amount: Decimal,
    pub savings_amount: Decimal,
    pub needs_percent: Decimal,
    pub wants_percent: Decimal,
    pub savings_percent: Decimal,
    /// Sum of the three percentages. Not forced to 100; callers warn when
    /// a custom split doesn't add up.
    pub total_percent: Decimal,
}

/// Splits monthly income by the chosen rule.
pub fn budget_allocation(input: &BudgetAllocationInput) -> BudgetAllocationResult {
    let (needs_percent, wants_percent, savings_percent) = match input.budget_rule {
        BudgetRule::FiftyThirtyTwenty => {
            (Decimal::from(50), Decimal::from(30), Decimal::from(20))
        }
        BudgetRule::SixtyTwentyTwenty => {
            (Decimal::from(60), Decimal::from(20), Decimal::from(20))
        }
        BudgetRule::Custom => (
            input.custom_needs.unwrap_or(Decimal::ZERO),
            input.custom_wants.unwrap_or(Decimal::ZERO),
            input.custom_savings.unwrap_or(Decimal::ZERO),
        ),
    };

    BudgetAllocationResult {
        needs_amount: round_half_up(input.monthly_income * pct(needs_percent)),
        wants_amount: round_half_up(input.monthly_income * pct(wants_percent)),
        savings_amount: round_half_up(input.monthly_income * pct(savings_percent)),
        needs_percent,
        wants_percent,
        savings_percent,
        total_percent: needs_percent + wants_percent + savings_percent,
    }
}

/// Actuals computed from itemized categories against a monthly income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_needs: Decimal,
    pub total_wants: Decimal,
    pub total_savings: Decimal,
    pub total_spent: Decimal,
    /// Income minus everything allocated; negative when overspent.
    pub remaining: Decimal,
    pub needs_percent: Decimal,
    pub wants_percent: Decimal,
    pub savings_percent: Decimal,
}

/// Aggregates itemized budget lines into the three buckets.
///
/// Percentages are of monthly income and are 0 when income is 0.
pub fn summarize_categories(
    categories: &[BudgetCategory],
    monthly_income: Decimal,
) -> BudgetSummary {
    let bucket = |kind: CategoryKind| -> Decimal {
        categories
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.amount)
            .sum()
    };
    let total_needs = bucket(CategoryKind::Need);
    let total_wants = bucket(CategoryKind::Want);
    let total_savings = bucket(CategoryKind::Savings);
    let total_spent = total_needs + total_wants + total_savings;

    let percent_of_income = |amount: Decimal| -> Decimal {
        if monthly_income > Decimal::ZERO {
            round_half_up(amount / monthly_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    };

    BudgetSummary {
        total_needs,
        total_wants,
        total_savings,
        total_spent,
        remaining: monthly_income - total_spent,
        needs_percent: percent_of_income(total_needs),
        wants_percent: percent_of_income(total_wants),
        savings_percent: percent_of_income(total_savings),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn fifty_thirty_twenty_split() {
        let result = budget_allocation(&BudgetAllocationInput {
            monthly_income: dec!(5000),
            budget_rule: BudgetRule::FiftyThirtyTwenty,
            custom_needs: None,
            custom_wants: None,
            custom_savings: None,
        });

        assert_eq!(result.needs_amount, dec!(2500.00));
        assert_eq!(result.wants_amount, dec!(1500.00));
        assert_eq!(result.savings_amount, dec!(1000.00));
        assert_eq!(result.total_percent, dec!(100));
    }

    #[test]
    fn sixty_twenty_twenty_split() {
        let result = budget_allocation(&BudgetAllocationInput {
            monthly_income: dec!(4000),
            budget_rule: BudgetRule::SixtyTwentyTwenty,
            custom_needs: None,
            custom_wants: None,
            custom_savings: None,
        });

        assert_eq!(result.needs_amount, dec!(2400.00));
        assert_eq!(result.wants_amount, dec!(800.00));
        assert_eq!(result.savings_amount, dec!(800.00));
    }

    #[test]
    fn custom_split_is_not_forced_to_sum_to_100() {
        let result = budget_allocation(&BudgetAllocationInput {
            monthly_income: dec!(6000),
            budget_rule: BudgetRule::Custom,
            custom_needs: Some(dec!(40)),
            custom_wants: Some(dec!(40)),
            custom_savings: Some(dec!(30)),
        });

        assert_eq!(result.total_percent, dec!(110));
        assert_eq!(result.needs_amount, dec!(2400.00));
        assert_eq!(result.savings_amount, dec!(1800.00));
    }

    #[test]
    fn summary_buckets_itemized_categories() {
        let categories = vec![
            BudgetCategory {
                id: "1".to_string(),
                name: "Rent".to_string(),
                amount: dec!(1800),
                kind: CategoryKind::Need,
            },
            BudgetCategory {
                id: "2".to_string(),
                name: "Groceries".to_string(),
                amount: dec!(450),
                kind: CategoryKind::Need,
            },
            BudgetCategory {
                id: "3".to_string(),
                name: "Dining Out".to_string(),
                amount: dec!(300),
                kind: CategoryKind::Want,
            },
            BudgetCategory {
                id: "4".to_string(),
                name: "Emergency Fund".to_string(),
                amount: dec!(500),
                kind: CategoryKind::Savings,
            },
        ];

        let summary = summarize_categories(&categories, dec!(5000));

        assert_eq!(summary.total_needs, dec!(2250));
        assert_eq!(summary.total_wants, dec!(300));
        assert_eq!(summary.total_savings, dec!(500));
        assert_eq!(summary.remaining, dec!(1950));
        assert_eq!(summary.needs_percent, dec!(45.00));
        assert_eq!(summary.savings_percent, dec!(10.00));
    }

    #[test]
    fn zero_income_reports_zero_percentages() {
        let summary = summarize_categories(&[], dec!(0));

        assert_eq!(summary.needs_percent, dec!(0));
        assert_eq!(summary.remaining, dec!(0));
    }
}
