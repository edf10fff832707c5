mod city;
mod federal;
mod filing_status;
mod flow;
mod pay_frequency;
mod profile;
mod state_tax;

pub use city::{CityCostIndex, CityIndexTable};
pub use federal::{FederalBracket, FederalTaxConfig, FederalTaxTable, FederalTaxTables};
pub use filing_status::FilingStatus;
pub use flow::{FlowProgress, FlowStep};
pub use pay_frequency::PayFrequency;
pub use profile::{
    AssetEntry, BudgetCategory, CategoryKind, DebtAccount, FinancialProfile, MonthlyExpenses,
    SavingsGoal,
};
pub use state_tax::{StateBracket, StateInfo, StateTaxKind, StateTaxTable};
