use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// One state income-tax bracket. Rates are in percent as published
/// (e.g. 9.3 for California's 9.3% bracket). A `None` max means the
/// bracket is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBracket {
    pub rate: Decimal,
    pub min: Decimal,
    pub max: Option<Decimal>,
}

/// How a state levies income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateTaxKind {
    /// No state income tax at all.
    None,
    /// Single flat rate in percent applied to taxable income.
    Flat(Decimal),
    /// Progressive schedules, one per filing status.
    Progressive {
        single: Vec<StateBracket>,
        married: Vec<StateBracket>,
    },
}

/// Tax profile for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub name: String,
    pub kind: StateTaxKind,
    /// Per-status standard deduction, where the state has one.
    pub deduction_single: Option<Decimal>,
    pub deduction_married: Option<Decimal>,
}

impl StateInfo {
    pub fn has_income_tax(&self) -> bool {
        !matches!(self.kind, StateTaxKind::None)
    }

    /// Standard deduction for a filing status; zero when the state has none.
    /// Head of household follows the single-filer deduction.
    pub fn deduction(&self, status: FilingStatus) -> Decimal {
        let d = match status {
            FilingStatus::Married => self.deduction_married,
            _ => self.deduction_single,
        };
        d.unwrap_or(Decimal::ZERO)
    }
}

/// Immutable lookup table of state tax profiles keyed by the two-letter
/// postal code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxTable {
    states: HashMap<String, StateInfo>,
}

impl StateTaxTable {
    pub fn new(states: HashMap<String, StateInfo>) -> Self {
        Self { states }
    }

    pub fn get(&self, code: &str) -> Option<&StateInfo> {
        self.states.get(code)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
