//! Savings-goal projection: time to reach a target, and the contribution
//! needed to reach it on a schedule.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, pct, round_half_up};

/// Hard cap on the forward simulation: 100 years of months. Guarantees
/// termination when the contribution can never outrun the goal.
pub const MAX_GOAL_MONTHS: u32 = 1200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalInput {
    pub goal_amount: Decimal,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Annual rate in percent.
    pub interest_rate: Decimal,
    /// Optional target horizon in years; enables the required-contribution
    /// solve.
    pub timeframe: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalResult {
    /// Months of saving until the balance first meets the goal, capped at
    /// [`MAX_GOAL_MONTHS`].
    pub months_to_goal: u32,
    pub years_to_goal: Decimal,
    /// Balance at the month the goal was met (or at the cap).
    pub future_value: Decimal,
    /// False when the simulation hit the cap without converging.
    pub reached_goal: bool,
    /// `goal - current savings`, floored at zero.
    pub amount_needed: Decimal,
    /// Level monthly contribution that reaches the goal exactly at the
    /// requested timeframe. Only present when a timeframe was given;
    /// floored at zero when current savings alone already exceed the goal.
    pub monthly_contribution_needed: Option<Decimal>,
}

/// Projects a savings balance month by month until it meets the goal.
pub fn savings_goal(input: &SavingsGoalInput) -> SavingsGoalResult {
    let monthly_rate = pct(input.interest_rate) / Decimal::from(12);
    let growth = Decimal::ONE + monthly_rate;

    let mut balance = input.current_savings;
    let mut months = 0u32;
    while balance < input.goal_amount && months < MAX_GOAL_MONTHS {
        balance = balance * growth + input.monthly_contribution;
        months += 1;
    }
    let reached_goal = balance >= input.goal_amount;

    let monthly_contribution_needed = input
        .timeframe
        .map(|years| required_contribution(input, monthly_rate, years * 12));

    SavingsGoalResult {
        months_to_goal: months,
        years_to_goal: round_half_up(Decimal::from(months) / Decimal::from(12)),
        future_value: round_half_up(balance),
        reached_goal,
        amount_needed: max(input.goal_amount - input.current_savings, Decimal::ZERO),
        monthly_contribution_needed,
    }
}

/// Annuity solve: the level contribution that grows, with the current
/// savings, to exactly the goal after `months`. Simple division at zero
/// rate; negative results (already past the goal) floor to zero.
fn required_contribution(
    input: &SavingsGoalInput,
    monthly_rate: Decimal,
    months: u32,
) -> Decimal {
    if months == 0 {
        return Decimal::ZERO;
    }
    let n = Decimal::from(months);

    let needed = if monthly_rate.is_zero() {
        (input.goal_amount - input.current_savings) / n
    } else {
        let compound = (Decimal::ONE + monthly_rate)
            .checked_powi(i64::from(months))
            .unwrap_or(Decimal::MAX);
        let grown_savings = input.current_savings * compound;
        (input.goal_amount - grown_savings) * monthly_rate / (compound - Decimal::ONE)
    };

    max(round_half_up(needed), Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn months_until_goal_with_interest() {
        let result = savings_goal(&SavingsGoalInput {
            goal_amount: dec!(10000),
            current_savings: dec!(1000),
            monthly_contribution: dec!(500),
            interest_rate: dec!(5),
            timeframe: None,
        });

        // 18 months: 1000 growing at 5%/12 plus 500/month
        assert_eq!(result.months_to_goal, 18);
        assert!(result.reached_goal);
        assert!(result.future_value >= dec!(10000));
        assert_eq!(result.amount_needed, dec!(9000));
    }

    #[test]
    fn already_at_goal_takes_no_months() {
        let result = savings_goal(&SavingsGoalInput {
            goal_amount: dec!(5000),
            current_savings: dec!(6000),
            monthly_contribution: dec!(100),
            interest_rate: dec!(3),
            timeframe: None,
        });

        assert_eq!(result.months_to_goal, 0);
        assert_eq!(result.amount_needed, dec!(0));
        assert!(result.reached_goal);
    }

    #[test]
    fn unreachable_goal_caps_at_max_months() {
        let result = savings_goal(&SavingsGoalInput {
            goal_amount: dec!(1000000),
            current_savings: dec!(0),
            monthly_contribution: dec!(0),
            interest_rate: dec!(0),
            timeframe: None,
        });

        assert_eq!(result.months_to_goal, MAX_GOAL_MONTHS);
        assert!(!result.reached_goal);
    }

    #[test]
    fn zero_rate_solve_is_simple_division() {
        let result = savings_goal(&SavingsGoalInput {
            goal_amount: dec!(12000),
            current_savings: dec!(0),
            monthly_contribution: dec!(0),
            interest_rate: dec!(0),
            timeframe: Some(5),
        });

        // 12000 over 60 months
        assert_eq!(result.monthly_contribution_needed, Some(dec!(200.00)));
    }

    #[test]
    fn solved_contribution_reaches_the_goal_on_schedule() {
        let input = SavingsGoalInput {
            goal_amount: dec!(50000),
            current_savings: dec!(5000),
            monthly_contribution: dec!(0),
            interest_rate: dec!(5),
            timeframe: Some(5),
        };
        let needed = savings_goal(&input)
            .monthly_contribution_needed
            .unwrap();

        // Re-simulate with the solved contribution: the goal is met at the
        // 60-month mark, give or take the cent rounding on the solve.
        let check = savings_goal(&SavingsGoalInput {
            monthly_contribution: needed,
            timeframe: None,
            ..input
        });
        assert!(
            (59..=61).contains(&check.months_to_goal),
            "months {}",
            check.months_to_goal
        );
    }

    #[test]
    fn savings_beyond_goal_floor_the_solve_at_zero() {
        let result = savings_goal(&SavingsGoalInput {
            goal_amount: dec!(10000),
            current_savings: dec!(20000),
            monthly_contribution: dec!(0),
            interest_rate: dec!(4),
            timeframe: Some(3),
        });

        assert_eq!(result.monthly_contribution_needed, Some(dec!(0.00)));
    }
}
