//! Hourly wage to annual salary conversion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyToSalaryInput {
    pub hourly_rate: Decimal,
    pub hours_per_week: Decimal,
    pub weeks_per_year: Decimal,
    /// Unpaid weeks off per year, subtracted from `weeks_per_year`.
    pub paid_time_off: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyToSalaryResult {
    pub annual_salary: Decimal,
    pub monthly_pay: Decimal,
    pub biweekly_pay: Decimal,
    pub weekly_pay: Decimal,
    pub total_work_hours: Decimal,
    pub work_weeks: Decimal,
}

/// Converts an hourly rate to annual/monthly/biweekly/weekly pay.
///
/// Returns `None` when time off leaves no working weeks (the weekly figure
/// would be a division by zero).
pub fn hourly_to_salary(input: &HourlyToSalaryInput) -> Option<HourlyToSalaryResult> {
    let work_weeks = input.weeks_per_year - input.paid_time_off;
    if work_weeks <= Decimal::ZERO {
        return None;
    }

    let total_work_hours = input.hours_per_week * work_weeks;
    let annual_salary = input.hourly_rate * total_work_hours;

    Some(HourlyToSalaryResult {
        annual_salary: round_half_up(annual_salary),
        monthly_pay: round_half_up(annual_salary / Decimal::from(12)),
        biweekly_pay: round_half_up(annual_salary / Decimal::from(26)),
        weekly_pay: round_half_up(annual_salary / work_weeks),
        total_work_hours,
        work_weeks,
    })
}
