//! Declarative recommendation rules evaluated against the financial
//! profile.
//!
//! Rules are heuristics over whatever the user has entered so far; absent
//! fields count as zero inside conditions. Evaluation never affects
//! calculation results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FinancialProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One condition → message rule.
pub struct Rule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub condition: fn(&FinancialProfile) -> bool,
}

fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

fn savings_rate_below_15(profile: &FinancialProfile) -> bool {
    let monthly_savings = profile
        .monthly_expenses
        .as_ref()
        .and_then(|e| e.savings)
        .unwrap_or(Decimal::ZERO);
    let annual_savings = monthly_savings * Decimal::from(12);
    let gross = or_zero(profile.gross_income);
    if gross <= Decimal::ZERO {
        return annual_savings.is_zero();
    }
    annual_savings / gross * Decimal::ONE_HUNDRED < Decimal::from(15)
}

fn emergency_fund_underfunded(profile: &FinancialProfile) -> bool {
    let expenses = profile
        .monthly_expenses
        .as_ref()
        .map(|e| or_zero(e.needs) + or_zero(e.wants))
        .unwrap_or(Decimal::ZERO);
    let emergency_fund = profile
        .assets
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .find(|a| a.name.to_lowercase().contains("emergency"))
        .map(|a| a.value)
        .unwrap_or(Decimal::ZERO);
    emergency_fund < expenses * Decimal::from(3)
}

fn debt_to_income_above_36(profile: &FinancialProfile) -> bool {
    let monthly_debt = or_zero(profile.monthly_debt_payment);
    let gross_monthly = or_zero(profile.gross_income) / Decimal::from(12);
    if gross_monthly <= Decimal::ZERO {
        return false;
    }
    monthly_debt / gross_monthly * Decimal::ONE_HUNDRED > Decimal::from(36)
}

fn has_outstanding_debt(profile: &FinancialProfile) -> bool {
    or_zero(profile.total_debt) > Decimal::ZERO
}

fn retirement_savings_lagging(profile: &FinancialProfile) -> bool {
    let savings = or_zero(profile.current_retirement_savings);
    let income = profile
        .annual_salary
        .or(profile.gross_income)
        .unwrap_or(Decimal::ZERO);
    if income <= Decimal::ZERO {
        return false;
    }
    let age = Decimal::from(profile.current_age.unwrap_or(30));
    // Age-based benchmark: (age / 10) years of income by that age.
    let benchmark = age / Decimal::from(10) * income;
    savings < benchmark * Decimal::new(8, 1)
}

fn not_investing_yet(profile: &FinancialProfile) -> bool {
    or_zero(profile.current_investments).is_zero()
        && or_zero(profile.current_retirement_savings).is_zero()
}

fn net_worth_below_annual_salary(profile: &FinancialProfile) -> bool {
    or_zero(profile.net_worth) < or_zero(profile.annual_salary)
}

/// The rule set, in declaration order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "increase-savings-rate",
        title: "Boost Your Savings Rate",
        description: "Your savings rate is lower than the recommended 15-20%. Try to automate \
                      your savings by setting up recurring transfers to a high-yield savings \
                      account.",
        priority: Priority::High,
        condition: savings_rate_below_15,
    },
    Rule {
        id: "build-emergency-fund",
        title: "Build Your Emergency Fund",
        description: "An emergency fund should cover 3-6 months of living expenses. This will \
                      protect you from unexpected financial shocks.",
        priority: Priority::High,
        condition: emergency_fund_underfunded,
    },
    Rule {
        id: "reduce-dti",
        title: "Lower Your Debt-to-Income Ratio",
        description: "Your debt-to-income ratio is higher than the recommended 36%. Focus on \
                      paying down high-interest debt to free up more of your income.",
        priority: Priority::High,
        condition: debt_to_income_above_36,
    },
    Rule {
        id: "debt-avalanche",
        title: "Consider the Debt Avalanche Method",
        description: "The debt avalanche method involves paying off your highest-interest debt \
                      first. This can save you a significant amount of money in interest over \
                      time.",
        priority: Priority::Medium,
        condition: has_outstanding_debt,
    },
    Rule {
        id: "increase-retirement-contributions",
        title: "Increase Your Retirement Contributions",
        description: "Your retirement savings seem to be lagging. Even small increases to your \
                      monthly contributions can make a big difference over time thanks to \
                      compound growth.",
        priority: Priority::High,
        condition: retirement_savings_lagging,
    },
    Rule {
        id: "start-investing",
        title: "Start Investing for the Future",
        description: "If you haven't already, consider opening a brokerage account and \
                      investing in a diversified portfolio of low-cost index funds. This is a \
                      great way to build long-term wealth.",
        priority: Priority::Medium,
        condition: not_investing_yet,
    },
    Rule {
        id: "grow-net-worth",
        title: "Focus on Growing Your Net Worth",
        description: "Your net worth is a key indicator of your financial health. You can \
                      increase it by growing your assets (like savings and investments) and \
                      reducing your liabilities (like debt).",
        priority: Priority::Low,
        condition: net_worth_below_annual_salary,
    },
];

/// Rules whose condition matches the profile, sorted high priority first;
/// declaration order breaks ties.
pub fn evaluate(profile: &FinancialProfile) -> Vec<&'static Rule> {
    let mut matched: Vec<&'static Rule> = RULES
        .iter()
        .filter(|rule| (rule.condition)(profile))
        .collect();
    matched.sort_by_key(|rule| rule.priority);
    matched
}

/// A 0-100 health score derived from the rule set: start at 100 and deduct
/// per triggered rule, weighted by priority. `None` until the user has
/// entered something to score.
pub fn financial_health_score(profile: &FinancialProfile) -> Option<Decimal> {
    if profile.is_unset() {
        return None;
    }

    let mut score = Decimal::ONE_HUNDRED;
    for rule in evaluate(profile) {
        score -= match rule.priority {
            Priority::High => Decimal::from(20),
            Priority::Medium => Decimal::from(10),
            Priority::Low => Decimal::from(5),
        };
    }
    Some(score.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{AssetEntry, MonthlyExpenses};

    fn healthy_profile() -> FinancialProfile {
        FinancialProfile {
            gross_income: Some(dec!(100000)),
            annual_salary: Some(dec!(100000)),
            current_age: Some(30),
            current_retirement_savings: Some(dec!(300000)),
            current_investments: Some(dec!(50000)),
            net_worth: Some(dec!(400000)),
            monthly_debt_payment: Some(dec!(500)),
            total_debt: Some(dec!(0)),
            monthly_expenses: Some(MonthlyExpenses {
                needs: Some(dec!(2500)),
                wants: Some(dec!(1000)),
                savings: Some(dec!(2000)),
            }),
            assets: Some(vec![AssetEntry {
                name: "Emergency Fund".to_string(),
                value: dec!(20000),
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn healthy_profile_triggers_no_rules() {
        let matched = evaluate(&healthy_profile());

        assert!(matched.is_empty(), "unexpected: {:?}", matched
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>());
    }

    #[test]
    fn low_savings_rate_triggers_the_savings_rule() {
        let mut profile = healthy_profile();
        profile.monthly_expenses = Some(MonthlyExpenses {
            needs: Some(dec!(2500)),
            wants: Some(dec!(1000)),
            savings: Some(dec!(500)),
        });

        let ids: Vec<_> = evaluate(&profile).iter().map(|r| r.id).collect();

        assert!(ids.contains(&"increase-savings-rate"));
    }

    #[test]
    fn outstanding_debt_suggests_the_avalanche() {
        let mut profile = healthy_profile();
        profile.total_debt = Some(dec!(12000));

        let ids: Vec<_> = evaluate(&profile).iter().map(|r| r.id).collect();

        assert!(ids.contains(&"debt-avalanche"));
    }

    #[test]
    fn high_dti_triggers_the_dti_rule() {
        let mut profile = healthy_profile();
        profile.monthly_debt_payment = Some(dec!(4000));

        let ids: Vec<_> = evaluate(&profile).iter().map(|r| r.id).collect();

        assert!(ids.contains(&"reduce-dti"));
    }

    #[test]
    fn matches_are_sorted_high_priority_first() {
        let mut profile = healthy_profile();
        profile.total_debt = Some(dec!(12000));
        profile.net_worth = Some(dec!(10000));
        profile.monthly_debt_payment = Some(dec!(4000));

        let matched = evaluate(&profile);

        assert!(matched.len() >= 3);
        for pair in matched.windows(2) {
            assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn empty_profile_has_no_score() {
        assert_eq!(financial_health_score(&FinancialProfile::default()), None);
    }

    #[test]
    fn score_deducts_per_triggered_rule() {
        assert_eq!(
            financial_health_score(&healthy_profile()),
            Some(dec!(100))
        );

        let mut profile = healthy_profile();
        profile.total_debt = Some(dec!(12000));
        // One medium rule triggered: 100 - 10.
        assert_eq!(financial_health_score(&profile), Some(dec!(90)));
    }

    #[test]
    fn score_never_goes_below_zero() {
        let profile = FinancialProfile {
            gross_income: Some(dec!(1)),
            ..Default::default()
        };

        let score = financial_health_score(&profile).unwrap();
        assert!(score >= Decimal::ZERO);
    }
}
