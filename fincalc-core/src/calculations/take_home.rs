//! Take-home pay: federal, state, and FICA withholding at any pay frequency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::calculations::federal::{federal_income_tax, medicare_tax, social_security_tax};
use crate::calculations::state_tax::StateTaxCalculator;
use crate::models::{FederalTaxConfig, FederalTaxTables, FilingStatus, PayFrequency, StateTaxTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHomePayInput {
    /// Gross pay per the given frequency (annual salary when `Annually`).
    pub gross_income: Decimal,
    pub pay_frequency: PayFrequency,
    pub filing_status: FilingStatus,
    /// Two-letter state code; an unknown code means no state tax.
    pub state: String,
}

/// Withholding breakdown. All component fields are per pay period, in the
/// same frequency the input used; `annual_gross` is the annualized figure
/// the taxes were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHomePayResult {
    pub annual_gross: Decimal,
    pub gross_pay: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub total_tax: Decimal,
    pub net_pay: Decimal,
    /// Total tax as a percent of gross pay.
    pub effective_tax_rate: Decimal,
}

/// Calculator over the federal config/tables and the state tax table.
#[derive(Debug, Clone)]
pub struct TakeHomePayCalculator<'a> {
    config: &'a FederalTaxConfig,
    tables: &'a FederalTaxTables,
    states: &'a StateTaxTable,
}

impl<'a> TakeHomePayCalculator<'a> {
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

    /// Computes the withholding breakdown for one paycheck.
    ///
    /// Annual taxes are computed once from the annualized gross, then every
    /// component is divided back down by the same period count and rounded.
    /// Net pay is derived by subtraction from the rounded components, so
    /// `net = gross - (federal + state + ss + medicare)` holds exactly.
    pub fn calculate(
        &self,
        input: &TakeHomePayInput,
    ) -> TakeHomePayResult {
        let periods = input.pay_frequency.periods();
        let annual_gross = max(input.gross_income, Decimal::ZERO) * periods;

        let taxable = max(
            annual_gross - self.config.standard_deduction(input.filing_status),
            Decimal::ZERO,
        );
        let annual_federal =
            federal_income_tax(taxable, self.tables.for_status(input.filing_status));
        let annual_state = StateTaxCalculator::new(self.states).calculate(
            annual_gross,
            &input.state,
            input.filing_status,
        );
        let annual_ss = social_security_tax(annual_gross, self.config);
        let annual_medicare = medicare_tax(annual_gross, input.filing_status, self.config);

        let gross_pay = round_half_up(annual_gross / periods);
        let federal_tax = round_half_up(annual_federal / periods);
        let state_tax = round_half_up(annual_state / periods);
        let social_security = round_half_up(annual_ss / periods);
        let medicare = round_half_up(annual_medicare / periods);

        let total_tax = federal_tax + state_tax + social_security + medicare;
        let net_pay = gross_pay - total_tax;

        let effective_tax_rate = if gross_pay > Decimal::ZERO {
            round_half_up(total_tax / gross_pay * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };

        TakeHomePayResult {
            annual_gross,
            gross_pay,
            federal_tax,
            state_tax,
            social_security,
            medicare,
            total_tax,
            net_pay,
            effective_tax_rate,
        }
    }
}
