//! Standalone income-tax estimate: federal, state, and FICA in one pass.
//!
//! Earlier revisions of this suite shipped a second, simplified state-tax
//! path (a flat 5% regardless of state). The estimator now delegates to the
//! same per-state table and federal helpers the take-home pay calculator
//! uses, so the two never disagree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::calculations::federal::{federal_income_tax, medicare_tax, social_security_tax};
use crate::calculations::state_tax::StateTaxCalculator;
use crate::models::{FederalTaxConfig, FederalTaxTables, FilingStatus, StateTaxTable};

/// Per-dependent credit subtracted from federal tax, floored at zero.
pub const DEPENDENT_CREDIT: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxInput {
    pub income: Decimal,
    pub filing_status: FilingStatus,
    /// Two-letter state code; an unknown code means no state tax.
    pub state: String,
    /// Itemized/extra deductions on top of the standard deduction.
    pub deductions: Decimal,
    pub dependents: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxResult {
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    /// Social Security plus Medicare.
    pub fica_tax: Decimal,
    pub total_tax: Decimal,
    /// Total tax as a percent of gross income; 0 when income is 0.
    pub effective_rate: Decimal,
    pub take_home_pay: Decimal,
}

/// Calculator over the shared federal and state reference data.
#[derive(Debug, Clone)]
pub struct IncomeTaxEstimator<'a> {
    config: &'a FederalTaxConfig,
    tables: &'a FederalTaxTables,
    states: &'a StateTaxTable,
}

impl<'a> IncomeTaxEstimator<'a> {
    pub fn new(
        config: &'a FederalTaxConfig,
        tables: &'a FederalTaxTables,
        states: &'a StateTaxTable,
    ) -> Self {
        Self {
            config,
            tables,
            states,
        }
    }

    /// Estimates the annual tax picture for a gross income.
    pub fn calculate(
        &self,
        input: &IncomeTaxInput,
    ) -> IncomeTaxResult {
        let gross_income = max(input.income, Decimal::ZERO);

        let deduction = self.config.standard_deduction(input.filing_status)
            + max(input.deductions, Decimal::ZERO);
        let taxable_income = max(gross_income - deduction, Decimal::ZERO);

        let before_credits =
            federal_income_tax(taxable_income, self.tables.for_status(input.filing_status));
        let credits = DEPENDENT_CREDIT * Decimal::from(input.dependents);
        let federal_tax = max(before_credits - credits, Decimal::ZERO);

        let state_tax = StateTaxCalculator::new(self.states).calculate(
            gross_income,
            &input.state,
            input.filing_status,
        );
        let fica_tax = social_security_tax(gross_income, self.config)
            + medicare_tax(gross_income, input.filing_status, self.config);

        let total_tax = federal_tax + state_tax + fica_tax;
        let effective_rate = if gross_income > Decimal::ZERO {
            round_half_up(total_tax / gross_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        IncomeTaxResult {
            gross_income,
            taxable_income,
            federal_tax,
            state_tax,
            fica_tax,
            total_tax,
            effective_rate,
            take_home_pay: gross_income - total_tax,
        }
    }
}
