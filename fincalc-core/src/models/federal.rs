use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// One marginal federal tax bracket.
///
/// `base_tax` is the cumulative tax owed at `min_income`, so the tax for an
/// income inside this bracket is `base_tax + (income - min_income) * rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

/// The full federal rate schedule for one filing status, ordered by
/// ascending `min_income` with the top bracket's `max_income` as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxTable {
    pub filing_status: FilingStatus,
    pub brackets: Vec<FederalBracket>,
}

/// Per-status federal bracket schedules for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxTables {
    pub tax_year: i32,
    pub single: FederalTaxTable,
    pub married: FederalTaxTable,
    pub head_of_household: FederalTaxTable,
}

impl FederalTaxTables {
    pub fn for_status(&self, status: FilingStatus) -> &FederalTaxTable {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::Married => &self.married,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }
}

/// Year-specific federal payroll constants: standard deductions and the
/// FICA parameters (Social Security wage base, Medicare surtax thresholds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxConfig {
    pub tax_year: i32,

    pub standard_deduction_single: Decimal,
    pub standard_deduction_married: Decimal,
    pub standard_deduction_head: Decimal,

    /// Wages above this are not subject to Social Security tax.
    pub ss_wage_base: Decimal,
    /// Employee Social Security rate (fraction, e.g. 0.062).
    pub ss_tax_rate: Decimal,
    /// Employee Medicare rate (fraction, e.g. 0.0145).
    pub medicare_tax_rate: Decimal,
    /// Additional Medicare rate on wages above the per-status threshold.
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold_single: Decimal,
    pub additional_medicare_threshold_married: Decimal,
}

impl FederalTaxConfig {
    pub fn standard_deduction(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.standard_deduction_single,
            FilingStatus::Married => self.standard_deduction_married,
            FilingStatus::HeadOfHousehold => self.standard_deduction_head,
        }
    }

    /// Threshold above which the additional Medicare rate applies.
    /// Head of household uses the single threshold.
    pub fn additional_medicare_threshold(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Married => self.additional_medicare_threshold_married,
            _ => self.additional_medicare_threshold_single,
        }
    }
}
