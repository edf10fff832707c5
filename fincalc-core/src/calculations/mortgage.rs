//! Monthly mortgage payment breakdown including escrow-style extras.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::loan::monthly_payment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageInput {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    /// Annual rate in percent.
    pub interest_rate: Decimal,
    /// Term in whole years.
    pub loan_term: u32,
    /// ANNUAL property tax; divided by 12 in the monthly breakdown.
    pub property_tax: Option<Decimal>,
    /// ANNUAL homeowner's insurance premium; divided by 12.
    pub home_insurance: Option<Decimal>,
    /// MONTHLY homeowner-association dues.
    pub hoa: Option<Decimal>,
    /// MONTHLY private mortgage insurance.
    pub pmi: Option<Decimal>,
}

/// Monthly payment breakdown plus lifetime totals. Component fields are
/// monthly amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageResult {
    pub loan_amount: Decimal,
    pub principal_and_interest: Decimal,
    pub property_tax: Decimal,
    pub home_insurance: Decimal,
    pub hoa: Decimal,
    pub pmi: Decimal,
    pub total_monthly_payment: Decimal,
    pub total_interest: Decimal,
    /// Home price plus lifetime interest, property tax, and insurance.
    pub total_cost: Decimal,
}

/// Computes the monthly mortgage payment breakdown.
///
/// Returns `None` when the down payment covers the whole price (nothing to
/// finance) or the amortization inputs are degenerate.
pub fn mortgage(input: &MortgageInput) -> Option<MortgageResult> {
    let loan_amount = input.home_price - input.down_payment;
    let months = input.loan_term.checked_mul(12)?;
    let principal_and_interest = monthly_payment(loan_amount, input.interest_rate, months)?;

    let twelve = Decimal::from(12);
    let annual_property_tax = input.property_tax.unwrap_or(Decimal::ZERO);
    let annual_insurance = input.home_insurance.unwrap_or(Decimal::ZERO);
    let monthly_property_tax = annual_property_tax / twelve;
    let monthly_insurance = annual_insurance / twelve;
    let hoa = input.hoa.unwrap_or(Decimal::ZERO);
    let pmi = input.pmi.unwrap_or(Decimal::ZERO);

    let total_monthly =
        principal_and_interest + monthly_property_tax + monthly_insurance + hoa + pmi;
    let total_interest = principal_and_interest * Decimal::from(months) - loan_amount;
    let years = Decimal::from(input.loan_term);
    let total_cost = input.home_price
        + total_interest
        + (annual_property_tax + annual_insurance) * years;

    Some(MortgageResult {
        loan_amount,
        principal_and_interest: round_half_up(principal_and_interest),
        property_tax: round_half_up(monthly_property_tax),
        home_insurance: round_half_up(monthly_insurance),
        hoa: round_half_up(hoa),
        pmi: round_half_up(pmi),
        total_monthly_payment: round_half_up(total_monthly),
        total_interest: round_half_up(total_interest),
        total_cost: round_half_up(total_cost),
    })
}
