//! The calculation library: pure, reentrant functions behind every
//! calculator in the suite.
//!
//! Calculators that need reference data (tax tables, city indices) are
//! small structs borrowing the immutable tables; the rest are free
//! functions over typed input records. Identical input always produces
//! identical output, so every function is safe to re-invoke on each
//! keystroke. Domain "no result" conditions return `None` rather than
//! erroring.

pub mod budget;
pub mod common;
pub mod compound;
pub mod cost_of_living;
pub mod debt_payoff;
pub mod federal;
pub mod hourly;
pub mod income_tax;
pub mod loan;
pub mod mortgage;
pub mod net_worth;
pub mod retirement;
pub mod savings_goal;
pub mod state_tax;
pub mod take_home;

pub use budget::{
    BudgetAllocationInput, BudgetAllocationResult, BudgetRule, BudgetSummary, budget_allocation,
    summarize_categories,
};
pub use compound::{
    CompoundInterestInput, CompoundInterestResult, CompoundYearRow, CompoundingFrequency,
    ContributionTiming, compound_interest,
};
pub use cost_of_living::{
    CategoryComparison, CostOfLivingCalculator, CostOfLivingInput, CostOfLivingResult,
};
pub use debt_payoff::{
    DebtMonthEntry, DebtPayoffInput, DebtPayoffResult, MAX_PAYOFF_MONTHS, PayoffMonth,
    PayoffStrategy, debt_payoff,
};
pub use federal::{federal_income_tax, medicare_tax, social_security_tax};
pub use hourly::{HourlyToSalaryInput, HourlyToSalaryResult, hourly_to_salary};
pub use income_tax::{DEPENDENT_CREDIT, IncomeTaxEstimator, IncomeTaxInput, IncomeTaxResult};
pub use loan::{AmortizationRow, LoanPaymentInput, LoanPaymentResult, loan_payment};
pub use mortgage::{MortgageInput, MortgageResult, mortgage};
pub use net_worth::{NetWorthInput, NetWorthResult, net_worth};
pub use retirement::{
    FourZeroOneKInput, FourZeroOneKResult, FourZeroOneKYearRow, InvestmentGrowthInput,
    InvestmentGrowthResult, ProjectionPoint, RetirementSavingsInput, RetirementSavingsResult,
    investment_growth, project_401k, project_savings,
};
pub use savings_goal::{MAX_GOAL_MONTHS, SavingsGoalInput, SavingsGoalResult, savings_goal};
pub use state_tax::StateTaxCalculator;
pub use take_home::{TakeHomePayCalculator, TakeHomePayInput, TakeHomePayResult};
