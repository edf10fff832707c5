//! Federal income-tax and FICA building blocks shared by the take-home pay
//! calculator and the income-tax estimator.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::{FederalTaxConfig, FederalTaxTable, FilingStatus};

/// Marginal federal income tax on already-reduced taxable income.
///
/// Brackets must be ordered by ascending `min_income` with the top bracket
/// unbounded. Each bracket carries the cumulative tax at its floor, so the
/// owed amount is `base_tax + (taxable - min) * rate` for the bracket the
/// income lands in. Non-positive taxable income owes nothing.
pub fn federal_income_tax(
    taxable_income: Decimal,
    table: &FederalTaxTable,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let bracket = table.brackets.iter().find(|b| {
        taxable_income > b.min_income
            && b.max_income.map_or(true, |cap| taxable_income <= cap)
    });

    match bracket {
        Some(bracket) => {
            let marginal = taxable_income - bracket.min_income;
            round_half_up(bracket.base_tax + marginal * bracket.rate)
        }
        // Income below the first bracket floor (only possible with a
        // non-zero floor in the data); nothing is owed.
        None => Decimal::ZERO,
    }
}

/// Employee Social Security tax: flat rate up to the annual wage base.
pub fn social_security_tax(
    annual_gross: Decimal,
    config: &FederalTaxConfig,
) -> Decimal {
    let taxed_wages = annual_gross.min(config.ss_wage_base);
    round_half_up(max(taxed_wages, Decimal::ZERO) * config.ss_tax_rate)
}

/// Employee Medicare tax: flat rate on all wages plus the additional rate
/// on wages above the per-status threshold.
pub fn medicare_tax(
    annual_gross: Decimal,
    status: FilingStatus,
    config: &FederalTaxConfig,
) -> Decimal {
    let gross = max(annual_gross, Decimal::ZERO);
    let base = gross * config.medicare_tax_rate;
    let excess = max(gross - config.additional_medicare_threshold(status), Decimal::ZERO);
    round_half_up(base + excess * config.additional_medicare_rate)
}
