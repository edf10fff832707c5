use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilingStatus, PayFrequency};

/// One itemized budget line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Need,
    Want,
    Savings,
}

/// One tracked debt account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtAccount {
    pub name: String,
    pub balance: Decimal,
    /// Annual percentage rate, e.g. 18.5 for 18.5% APR.
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
}

/// One named savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    /// Free-form target date label as entered ("2028-06" etc.).
    pub target_date: String,
}

/// One named asset line for net-worth tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub name: String,
    pub value: Decimal,
}

/// Monthly spending grouped by the three budget buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyExpenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wants: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Decimal>,
}

/// The accumulated, persisted set of user-entered values shared across
/// calculators.
///
/// Every field is optional: `None` means "not yet provided", which is
/// distinct from an explicit zero. Consumers must not collapse the two.
/// Older persisted documents that predate a field deserialize with that
/// field as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialProfile {
    // Income
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_income: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_income: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<PayFrequency>,

    // Location & cost of living
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_living_adjustment: Option<Decimal>,

    // Tax status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filing_status: Option<FilingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_tax_rate: Option<Decimal>,

    // Retirement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_retirement_savings: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_retirement_contribution: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement_goal: Option<Decimal>,

    // Housing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_mortgage_payment: Option<Decimal>,

    // Investments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_investments: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_investment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return_rate: Option<Decimal>,

    // Debts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_debt: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_debt_payment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debts: Option<Vec<DebtAccount>>,

    // Goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_goal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_timeframe: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_fund_goal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<SavingsGoal>>,

    // Assets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<Decimal>,

    // Budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_expenses: Option<MonthlyExpenses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_categories: Option<Vec<BudgetCategory>>,
}

impl FinancialProfile {
    /// True when the user has not entered anything yet.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
