//! Fixed-payment loan amortization.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, pct, round_half_up};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentInput {
    pub loan_amount: Decimal,
    /// Annual rate in percent.
    pub interest_rate: Decimal,
    /// Term in whole years.
    pub loan_term: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    /// Remaining balance after this payment, never below zero.
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentResult {
    pub monthly_payment: Decimal,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
    pub amortization_schedule: Vec<AmortizationRow>,
}

/// Level monthly payment for a principal amortized over `months` at the
/// given annual percentage rate. Zero rate degenerates to straight-line
/// repayment. `None` when the inputs are degenerate or the power term
/// overflows the decimal range.
pub(crate) fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    months: u32,
) -> Option<Decimal> {
    if principal <= Decimal::ZERO || annual_rate_percent < Decimal::ZERO || months == 0 {
        return None;
    }

    let monthly_rate = pct(annual_rate_percent) / Decimal::from(12);
    if monthly_rate.is_zero() {
        return Some(principal / Decimal::from(months));
    }

    let compound = (Decimal::ONE + monthly_rate).checked_powi(i64::from(months))?;
    let denominator = compound - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return None;
    }

    Some(principal * monthly_rate * compound / denominator)
}

/// Amortizes a loan into a full month-by-month schedule.
///
/// Returns `None` for a non-positive amount, negative rate, zero term, or
/// a degenerate payment; callers treat that as "insufficient input".
pub fn loan_payment(input: &LoanPaymentInput) -> Option<LoanPaymentResult> {
    let months = input.loan_term.checked_mul(12)?;
    let payment = monthly_payment(input.loan_amount, input.interest_rate, months)?;

    let monthly_rate = pct(input.interest_rate) / Decimal::from(12);
    let mut balance = input.loan_amount;
    let mut total_interest = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let interest = balance * monthly_rate;
        // The last payment absorbs rounding drift so the balance lands on 0.
        let principal_portion = if month == months {
            balance
        } else {
            payment - interest
        };
        let paid = if month == months {
            balance + interest
        } else {
            payment
        };

        balance = max(balance - principal_portion, Decimal::ZERO);
        total_interest += interest;

        schedule.push(AmortizationRow {
            month,
            payment: round_half_up(paid),
            principal: round_half_up(principal_portion),
            interest: round_half_up(interest),
            balance: round_half_up(balance),
        });
    }

    Some(LoanPaymentResult {
        monthly_payment: round_half_up(payment),
        total_paid: round_half_up(input.loan_amount + total_interest),
        total_interest: round_half_up(total_interest),
        amortization_schedule: schedule,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn thirty_year_mortgage_rate_payment() {
        let result = loan_payment(&LoanPaymentInput {
            loan_amount: dec!(250000),
            interest_rate: dec!(5),
            loan_term: 30,
        })
        .unwrap();

        assert_eq!(result.monthly_payment, dec!(1342.05));
        assert_eq!(result.amortization_schedule.len(), 360);
        assert_eq!(result.amortization_schedule[359].balance, dec!(0.00));
    }

    #[test]
    fn principal_portions_sum_to_the_loan_amount() {
        let result = loan_payment(&LoanPaymentInput {
            loan_amount: dec!(20000),
            interest_rate: dec!(6.5),
            loan_term: 5,
        })
        .unwrap();

        let principal_total: Decimal = result
            .amortization_schedule
            .iter()
            .map(|row| row.principal)
            .sum();

        // Row values are rounded to cents; allow the accumulated drift.
        let drift = (principal_total - dec!(20000)).abs();
        assert!(drift < dec!(0.50), "drift {drift}");
    }

    #[test]
    fn zero_rate_is_straight_line_repayment() {
        let result = loan_payment(&LoanPaymentInput {
            loan_amount: dec!(12000),
            interest_rate: dec!(0),
            loan_term: 1,
        })
        .unwrap();

        assert_eq!(result.monthly_payment, dec!(1000.00));
        assert_eq!(result.total_interest, dec!(0.00));
        assert_eq!(result.amortization_schedule[5].interest, dec!(0.00));
    }

    #[test]
    fn degenerate_inputs_yield_no_result() {
        assert_eq!(
            loan_payment(&LoanPaymentInput {
                loan_amount: dec!(0),
                interest_rate: dec!(5),
                loan_term: 30,
            }),
            None
        );
        assert_eq!(
            loan_payment(&LoanPaymentInput {
                loan_amount: dec!(-1000),
                interest_rate: dec!(5),
                loan_term: 30,
            }),
            None
        );
        assert_eq!(
            loan_payment(&LoanPaymentInput {
                loan_amount: dec!(1000),
                interest_rate: dec!(-1),
                loan_term: 30,
            }),
            None
        );
        assert_eq!(
            loan_payment(&LoanPaymentInput {
                loan_amount: dec!(1000),
                interest_rate: dec!(5),
                loan_term: 0,
            }),
            None
        );
    }

    #[test]
    fn interest_declines_as_principal_is_paid_down() {
        let result = loan_payment(&LoanPaymentInput {
            loan_amount: dec!(100000),
            interest_rate: dec!(4),
            loan_term: 15,
        })
        .unwrap();

        let first = &result.amortization_schedule[0];
        let last = &result.amortization_schedule[178];
        assert!(first.interest > last.interest);
        assert!(first.principal < last.principal);
    }

    #[test]
    fn totals_are_consistent_with_the_schedule() {
        let result = loan_payment(&LoanPaymentInput {
            loan_amount: dec!(50000),
            interest_rate: dec!(7),
            loan_term: 10,
        })
        .unwrap();

        assert_eq!(
            result.total_paid,
            round_half_up(dec!(50000) + result.total_interest)
        );
    }
}
