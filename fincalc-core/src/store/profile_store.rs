//! The shared profile/flow store with named patch operations.
//!
//! Each calculator writes through an operation that names exactly the
//! fields it owns; there is no open-ended merge, so one calculator can
//! never clobber another's fields by accident. Every mutation persists the
//! touched document immediately. The profile and the flow progress live
//! under independent keys with no cross-key transaction; a crash between
//! the two writes can leave them momentarily inconsistent, which is
//! acceptable for locally-recoverable data.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    AssetEntry, BudgetCategory, DebtAccount, FilingStatus, FinancialProfile, FlowProgress,
    FlowStep, MonthlyExpenses, PayFrequency, SavingsGoal,
};
use crate::store::{StorageBackend, StorageError};

/// Storage key for the serialized [`FinancialProfile`].
pub const PROFILE_KEY: &str = "sharedCalculatorData";
/// Storage key for the serialized [`FlowProgress`].
pub const FLOW_PROGRESS_KEY: &str = "calculatorFlowProgress";

/// Owns the live profile and flow progress, mirroring both to a backend.
pub struct ProfileStore<B: StorageBackend> {
    backend: B,
    profile: FinancialProfile,
    flow: FlowProgress,
}

impl<B: StorageBackend> ProfileStore<B> {
    /// Loads both documents from the backend. A missing or corrupt
    /// document falls back to its empty default; corruption is logged,
    /// not surfaced, so a damaged store never blocks startup.
    pub fn new(backend: B) -> Self {
        let profile = Self::load_or_default(&backend, PROFILE_KEY);
        let flow = Self::load_or_default(&backend, FLOW_PROGRESS_KEY);
        Self {
            backend,
            profile,
            flow,
        }
    }

    fn load_or_default<T: serde::de::DeserializeOwned + Default>(
        backend: &B,
        key: &str,
    ) -> T {
        match backend.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                warn!(key, %error, "stored document is corrupt, starting empty");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(error) => {
                warn!(key, %error, "storage read failed, starting empty");
                T::default()
            }
        }
    }

    pub fn profile(&self) -> &FinancialProfile {
        &self.profile
    }

    pub fn flow(&self) -> &FlowProgress {
        &self.flow
    }

    // ── Profile patch operations ────────────────────────────────────────

    /// Hourly-to-salary results: wage inputs and the derived annual figure.
    pub fn apply_income_result(
        &mut self,
        hourly_rate: Decimal,
        annual_salary: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.hourly_rate = Some(hourly_rate);
        self.profile.annual_salary = Some(annual_salary);
        self.profile.gross_income = Some(annual_salary);
        self.persist_profile()
    }

    /// Take-home pay results: the tax situation and net income.
    pub fn apply_take_home_result(
        &mut self,
        gross_income: Decimal,
        net_income: Decimal,
        pay_frequency: PayFrequency,
        filing_status: FilingStatus,
        state: String,
    ) -> Result<(), StorageError> {
        self.profile.gross_income = Some(gross_income);
        self.profile.net_income = Some(net_income);
        self.profile.pay_frequency = Some(pay_frequency);
        self.profile.filing_status = Some(filing_status);
        self.profile.state = Some(state);
        self.persist_profile()
    }

    /// Income-tax estimator results.
    pub fn apply_tax_result(
        &mut self,
        gross_income: Decimal,
        net_income: Decimal,
        effective_tax_rate: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.gross_income = Some(gross_income);
        self.profile.net_income = Some(net_income);
        self.profile.effective_tax_rate = Some(effective_tax_rate);
        self.persist_profile()
    }

    /// Cost-of-living comparison: the two cities and the adjustment factor.
    pub fn apply_cost_of_living(
        &mut self,
        current_city: String,
        new_city: String,
        cost_of_living_adjustment: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.current_city = Some(current_city);
        self.profile.new_city = Some(new_city);
        self.profile.cost_of_living_adjustment = Some(cost_of_living_adjustment);
        self.persist_profile()
    }

    /// Retirement planner inputs.
    pub fn apply_retirement_plan(
        &mut self,
        current_age: u32,
        retirement_age: u32,
        current_retirement_savings: Decimal,
        monthly_retirement_contribution: Decimal,
        expected_return_rate: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.current_age = Some(current_age);
        self.profile.retirement_age = Some(retirement_age);
        self.profile.current_retirement_savings = Some(current_retirement_savings);
        self.profile.monthly_retirement_contribution = Some(monthly_retirement_contribution);
        self.profile.expected_return_rate = Some(expected_return_rate);
        self.persist_profile()
    }

    /// 401(k) projection results: the derived monthly deferral.
    pub fn apply_401k_result(
        &mut self,
        monthly_retirement_contribution: Decimal,
        expected_return_rate: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.monthly_retirement_contribution = Some(monthly_retirement_contribution);
        self.profile.expected_return_rate = Some(expected_return_rate);
        self.persist_profile()
    }

    /// Mortgage calculator inputs and the derived monthly payment.
    pub fn apply_mortgage_result(
        &mut self,
        home_price: Decimal,
        down_payment: Decimal,
        mortgage_rate: Decimal,
        monthly_mortgage_payment: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.home_price = Some(home_price);
        self.profile.down_payment = Some(down_payment);
        self.profile.mortgage_rate = Some(mortgage_rate);
        self.profile.monthly_mortgage_payment = Some(monthly_mortgage_payment);
        self.persist_profile()
    }

    /// Budget calculator state: income, bucket totals, and line items.
    pub fn apply_budget_result(
        &mut self,
        monthly_income: Decimal,
        monthly_expenses: MonthlyExpenses,
        budget_categories: Vec<BudgetCategory>,
    ) -> Result<(), StorageError> {
        self.profile.monthly_income = Some(monthly_income);
        self.profile.monthly_expenses = Some(monthly_expenses);
        self.profile.budget_categories = Some(budget_categories);
        self.persist_profile()
    }

    /// Debt payoff inputs and the derived totals.
    pub fn apply_debt_result(
        &mut self,
        debts: Vec<DebtAccount>,
        total_debt: Decimal,
        monthly_debt_payment: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.debts = Some(debts);
        self.profile.total_debt = Some(total_debt);
        self.profile.monthly_debt_payment = Some(monthly_debt_payment);
        self.persist_profile()
    }

    /// Net-worth calculator results.
    pub fn apply_net_worth_result(
        &mut self,
        total_assets: Decimal,
        net_worth: Decimal,
    ) -> Result<(), StorageError> {
        self.profile.total_assets = Some(total_assets);
        self.profile.net_worth = Some(net_worth);
        self.persist_profile()
    }

    /// Replaces the itemized savings goals.
    pub fn set_goals(
        &mut self,
        goals: Vec<SavingsGoal>,
    ) -> Result<(), StorageError> {
        self.profile.goals = Some(goals);
        self.persist_profile()
    }

    /// Replaces the itemized asset list.
    pub fn set_assets(
        &mut self,
        assets: Vec<AssetEntry>,
    ) -> Result<(), StorageError> {
        self.profile.assets = Some(assets);
        self.persist_profile()
    }

    /// Empties the profile and removes its persisted copy. Flow progress
    /// is untouched.
    pub fn clear_profile(&mut self) -> Result<(), StorageError> {
        self.profile = FinancialProfile::default();
        debug!("profile cleared");
        self.backend.remove(PROFILE_KEY)
    }

    // ── Flow operations ─────────────────────────────────────────────────

    /// Idempotently records a completed flow step.
    pub fn mark_step_complete(
        &mut self,
        step: FlowStep,
    ) -> Result<(), StorageError> {
        if self.flow.is_step_complete(step) {
            return Ok(());
        }
        self.flow.mark_complete(step, now_millis());
        debug!(step = step.as_str(), "flow step completed");
        self.persist_flow()
    }

    /// Hides the flow banner until a full reset.
    pub fn dismiss_flow(&mut self) -> Result<(), StorageError> {
        self.flow.dismiss(now_millis());
        self.persist_flow()
    }

    pub fn next_step(&self) -> Option<FlowStep> {
        self.flow.next_step()
    }

    pub fn is_flow_complete(&self) -> bool {
        self.flow.is_complete()
    }

    /// Clears the flow progress and the profile together.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.flow = FlowProgress {
            last_updated: now_millis(),
            ..FlowProgress::default()
        };
        self.persist_flow()?;
        self.clear_profile()
    }

    // ── Persistence ─────────────────────────────────────────────────────

    fn persist_profile(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.profile)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        self.backend.set(PROFILE_KEY, &raw)
    }

    fn persist_flow(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.flow)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        self.backend.set(FLOW_PROGRESS_KEY, &raw)
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
