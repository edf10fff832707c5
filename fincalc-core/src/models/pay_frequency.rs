use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How often a paycheck arrives. Used to annualize gross pay and to divide
/// annual tax components back down to per-period figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Annually,
    Monthly,
    Biweekly,
    Weekly,
}

impl PayFrequency {
    /// Number of pay periods in a year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::Monthly => 12,
            Self::Biweekly => 26,
            Self::Weekly => 52,
        }
    }

    /// Period count as a decimal, for annualizing and de-annualizing amounts.
    pub fn periods(&self) -> Decimal {
        Decimal::from(self.periods_per_year())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annually => "annually",
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "annually" => Some(Self::Annually),
            "monthly" => Some(Self::Monthly),
            "biweekly" => Some(Self::Biweekly),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}
