//! Compound interest and investment growth with flexible compounding
//! frequencies and contribution schedules.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::calculations::common::{pct, round_half_up};

/// How often interest is credited. `Continuously` uses the closed-form
/// `e^r` yearly growth factor instead of per-period compounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
    Semimonthly,
    Biweekly,
    Weekly,
    Daily,
    Continuously,
}

impl CompoundingFrequency {
    /// Compounding periods per year; `None` for continuous compounding.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Self::Annually => Some(1),
            Self::Semiannually => Some(2),
            Self::Quarterly => Some(4),
            Self::Monthly => Some(12),
            Self::Semimonthly => Some(24),
            Self::Biweekly => Some(26),
            Self::Weekly => Some(52),
            Self::Daily => Some(365),
            Self::Continuously => None,
        }
    }
}

/// Whether contributions land before or after the interest accrual they
/// overlap with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionTiming {
    Beginning,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestInput {
    pub initial_investment: Decimal,
    /// Contributed once per year.
    pub annual_contribution: Decimal,
    /// Contributed monthly; spread across compounding periods.
    pub monthly_contribution: Decimal,
    /// Annual rate in percent.
    pub interest_rate: Decimal,
    pub years: u32,
    pub compounding_frequency: CompoundingFrequency,
    pub contribution_timing: ContributionTiming,
    /// Percent of earned interest lost to tax in the after-tax figure.
    pub tax_rate: Decimal,
    /// Percent used to deflate the ending balance into today's dollars.
    pub inflation_rate: Decimal,
}

/// Cumulative position at the end of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundYearRow {
    pub year: u32,
    pub principal: Decimal,
    pub contributions: Decimal,
    pub interest: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub ending_balance: Decimal,
    pub total_principal: Decimal,
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
    /// Balance with earned interest taxed at the input rate; principal and
    /// contributions are untaxed.
    pub after_tax_balance: Decimal,
    /// Ending balance deflated by inflation over the whole horizon.
    pub inflation_adjusted_balance: Decimal,
    pub yearly_schedule: Vec<CompoundYearRow>,
}

/// Simulates compound growth year by year.
///
/// Callers validate ranges (`years >= 1`, rates within 0..=100); the
/// simulation itself has no failure path.
pub fn compound_interest(input: &CompoundInterestInput) -> CompoundInterestResult {
    let rate = pct(input.interest_rate);
    let principal = input.initial_investment;
    let yearly_monthly_total = input.monthly_contribution * Decimal::from(12);

    let mut balance = principal;
    let mut contributions = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        match input.compounding_frequency.periods_per_year() {
            Some(periods) => {
                let period_rate = rate / Decimal::from(periods);
                let growth = Decimal::ONE + period_rate;
                let per_period_monthly = yearly_monthly_total / Decimal::from(periods);

                if input.contribution_timing == ContributionTiming::Beginning {
                    balance += input.annual_contribution;
                    contributions += input.annual_contribution;
                }
                for _ in 0..periods {
                    match input.contribution_timing {
                        ContributionTiming::Beginning => {
                            balance += per_period_monthly;
                            balance *= growth;
                        }
                        ContributionTiming::End => {
                            balance *= growth;
                            balance += per_period_monthly;
                        }
                    }
                    contributions += per_period_monthly;
                }
                if input.contribution_timing == ContributionTiming::End {
                    balance += input.annual_contribution;
                    contributions += input.annual_contribution;
                }
            }
            None => {
                // Continuous compounding: e^r growth over the year with
                // contributions at the year boundary.
                let growth = rate.exp_with_tolerance(Decimal::new(1, 16));
                let year_contribution = input.annual_contribution + yearly_monthly_total;
                match input.contribution_timing {
                    ContributionTiming::Beginning => {
                        balance = (balance + year_contribution) * growth;
                    }
                    ContributionTiming::End => {
                        balance = balance * growth + year_contribution;
                    }
                }
                contributions += year_contribution;
            }
        }

        schedule.push(CompoundYearRow {
            year,
            principal: round_half_up(principal),
            contributions: round_half_up(contributions),
            interest: round_half_up(balance - principal - contributions),
            balance: round_half_up(balance),
        });
    }

    let total_interest = balance - principal - contributions;
    let after_tax_balance = balance - total_interest * pct(input.tax_rate);
    let inflation_factor = (Decimal::ONE + pct(input.inflation_rate))
        .checked_powi(i64::from(input.years))
        .unwrap_or(Decimal::ONE);
    let inflation_adjusted_balance = if inflation_factor > Decimal::ZERO {
        balance / inflation_factor
    } else {
        balance
    };

    CompoundInterestResult {
        ending_balance: round_half_up(balance),
        total_principal: round_half_up(principal),
        total_contributions: round_half_up(contributions),
        total_interest: round_half_up(total_interest),
        after_tax_balance: round_half_up(after_tax_balance),
        inflation_adjusted_balance: round_half_up(inflation_adjusted_balance),
        yearly_schedule: schedule,
    }
}
