//! State income-tax calculation over the per-state reference table.

use rust_decimal::Decimal;

use crate::calculations::common::{max, pct, round_half_up};
use crate::models::{FilingStatus, StateTaxKind, StateTaxTable};

/// Calculator for state income tax.
///
/// Borrows the immutable state table; cheap to construct per call site.
#[derive(Debug, Clone)]
pub struct StateTaxCalculator<'a> {
    table: &'a StateTaxTable,
}

impl<'a> StateTaxCalculator<'a> {
    pub fn new(table: &'a StateTaxTable) -> Self {
        Self { table }
    }

    /// State income tax owed on `income` for the given state and filing
    /// status.
    ///
    /// An unknown state code or a state without an income tax owes 0.
    /// Negative income is clamped to 0 before use. The state's standard
    /// deduction (where one exists) is subtracted first, floored at 0.
    pub fn calculate(
        &self,
        income: Decimal,
        state_code: &str,
        filing_status: FilingStatus,
    ) -> Decimal {
        let Some(info) = self.table.get(state_code) else {
            return Decimal::ZERO;
        };

        let income = max(income, Decimal::ZERO);
        let taxable = max(income - info.deduction(filing_status), Decimal::ZERO);

        match &info.kind {
            StateTaxKind::None => Decimal::ZERO,
            StateTaxKind::Flat(rate) => round_half_up(taxable * pct(*rate)),
            StateTaxKind::Progressive { single, married } => {
                // Head of household follows the single-filer schedule.
                let brackets = match filing_status {
                    FilingStatus::Married => married,
                    _ => single,
                };

                let mut tax = Decimal::ZERO;
                let mut last_max = Decimal::ZERO;
                for bracket in brackets {
                    if taxable > bracket.min {
                        let taxed_up_to = match bracket.max {
                            Some(cap) => taxable.min(cap),
                            None => taxable,
                        };
                        let slice = taxed_up_to - max(bracket.min, last_max);
                        if slice > Decimal::ZERO {
                            tax += slice * pct(bracket.rate);
                        }
                    }
                    last_max = bracket.max.unwrap_or(Decimal::ZERO);
                }
                round_half_up(tax)
            }
        }
    }
}
