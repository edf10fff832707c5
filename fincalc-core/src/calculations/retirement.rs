//! Retirement projections: 401(k) with employer match, plain savings
//! growth, and simple investment growth.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::calculations::common::{pct, round_half_up};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourZeroOneKInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub annual_salary: Decimal,
    pub current_balance: Decimal,
    /// Employee deferral as percent of salary.
    pub employee_contribution_percent: Decimal,
    /// Employer match as percent of the matched employee contribution.
    pub employer_match_percent: Decimal,
    /// Salary percent up to which the employer matches.
    pub employer_match_limit: Decimal,
    /// Annual return in percent.
    pub annual_return_rate: Decimal,
    /// Annual raise in percent.
    pub salary_increase_rate: Decimal,
}

/// End-of-year position for one projected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourZeroOneKYearRow {
    pub age: u32,
    pub salary: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourZeroOneKResult {
    pub ending_balance: Decimal,
    pub employee_contributions: Decimal,
    pub employer_contributions: Decimal,
    /// `ending balance - starting balance - all contributions`.
    pub investment_growth: Decimal,
    pub years_to_retirement: u32,
    /// First-year employee deferral divided across twelve paychecks.
    pub monthly_contribution: Decimal,
    pub schedule: Vec<FourZeroOneKYearRow>,
}

/// Projects a 401(k) balance year by year to retirement age.
///
/// Each year the employee defers a percent of salary, the employer matches
/// up to its limit, the combined balance compounds at the return rate, and
/// the salary grows by the raise rate. A retirement age at or below the
/// current age projects zero years.
pub fn project_401k(input: &FourZeroOneKInput) -> FourZeroOneKResult {
    let years = input.retirement_age.saturating_sub(input.current_age);
    let growth = Decimal::ONE + pct(input.annual_return_rate);
    let raise = Decimal::ONE + pct(input.salary_increase_rate);
    let employee_rate = pct(input.employee_contribution_percent);
    let match_rate = pct(input.employer_match_percent);
    let match_limit = pct(input.employer_match_limit);

    let mut salary = input.annual_salary;
    let mut balance = input.current_balance;
    let mut employee_total = Decimal::ZERO;
    let mut employer_total = Decimal::ZERO;
    let mut first_year_employee = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(years as usize);

    for offset in 0..years {
        let employee = salary * employee_rate;
        let employer = employee.min(salary * match_limit) * match_rate;
        balance = (balance + employee + employer) * growth;
        employee_total += employee;
        employer_total += employer;
        if offset == 0 {
            first_year_employee = employee;
        }

        schedule.push(FourZeroOneKYearRow {
            age: input.current_age + offset + 1,
            salary: round_half_up(salary),
            employee_contribution: round_half_up(employee),
            employer_contribution: round_half_up(employer),
            balance: round_half_up(balance),
        });

        salary *= raise;
    }

    let ending_balance = round_half_up(balance);
    let employee_contributions = round_half_up(employee_total);
    let employer_contributions = round_half_up(employer_total);

    FourZeroOneKResult {
        ending_balance,
        employee_contributions,
        employer_contributions,
        // Residual of the reported figures, so the identity
        // growth = balance - start - contributions holds exactly.
        investment_growth: ending_balance
            - input.current_balance
            - employee_contributions
            - employer_contributions,
        years_to_retirement: years,
        monthly_contribution: round_half_up(first_year_employee / Decimal::from(12)),
        schedule,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSavingsInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Annual return in percent.
    pub return_rate: Decimal,
    /// Annual inflation in percent, for the today's-dollars figure.
    pub inflation_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Years from now, 1-based.
    pub year: u32,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementSavingsResult {
    pub future_value: Decimal,
    /// Future value deflated into today's dollars.
    pub real_value: Decimal,
    pub years_to_retirement: u32,
    pub projection: Vec<ProjectionPoint>,
}

/// Projects retirement savings with monthly compounding and contributions.
pub fn project_savings(input: &RetirementSavingsInput) -> RetirementSavingsResult {
    let years = input.retirement_age.saturating_sub(input.current_age);
    let monthly_growth = Decimal::ONE + pct(input.return_rate) / Decimal::from(12);

    let mut balance = input.current_savings;
    let mut projection = Vec::with_capacity(years as usize);
    for year in 1..=years {
        for _ in 0..12 {
            balance = balance * monthly_growth + input.monthly_contribution;
        }
        projection.push(ProjectionPoint {
            year,
            value: round_half_up(balance),
        });
    }

    let inflation_factor = (Decimal::ONE + pct(input.inflation_rate))
        .checked_powi(i64::from(years))
        .unwrap_or(Decimal::ONE);
    let real_value = if inflation_factor > Decimal::ZERO {
        balance / inflation_factor
    } else {
        balance
    };

    RetirementSavingsResult {
        future_value: round_half_up(balance),
        real_value: round_half_up(real_value),
        years_to_retirement: years,
        projection,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentGrowthInput {
    pub initial_investment: Decimal,
    pub monthly_contribution: Decimal,
    /// Horizon in years.
    pub time_horizon: u32,
    /// Annual return in percent.
    pub return_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentGrowthResult {
    pub future_value: Decimal,
    pub total_contributions: Decimal,
    pub total_growth: Decimal,
}

/// Simple monthly-compounded growth of an initial balance plus level
/// contributions.
pub fn investment_growth(input: &InvestmentGrowthInput) -> InvestmentGrowthResult {
    let monthly_growth = Decimal::ONE + pct(input.return_rate) / Decimal::from(12);
    let months = input.time_horizon * 12;

    let mut balance = input.initial_investment;
    for _ in 0..months {
        balance = balance * monthly_growth + input.monthly_contribution;
    }

    let future_value = round_half_up(balance);
    let total_contributions = round_half_up(
        input.initial_investment + input.monthly_contribution * Decimal::from(months),
    );

    InvestmentGrowthResult {
        future_value,
        total_contributions,
        total_growth: future_value - total_contributions,
    }
}
