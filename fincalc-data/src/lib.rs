//! Embedded 2025 reference datasets: federal bracket schedules, the
//! per-state income-tax table, and city cost-of-living indices.
//!
//! The CSVs are compiled into the binary and parsed once on first access.
//! The embedded data is validated by this crate's test suite, so the
//! accessors treat a parse failure as a build defect rather than a
//! runtime condition.

pub mod loader;

use std::sync::OnceLock;

use rust_decimal::Decimal;
use tracing::debug;

use fincalc_core::models::{CityIndexTable, FederalTaxConfig, FederalTaxTables, StateTaxTable};

pub use loader::{
    CityRecord, DataError, FederalBracketRecord, StateBracketRecord, StateRecord,
    build_city_table, build_federal_tables, build_state_table, parse_cities,
    parse_federal_brackets, parse_state_brackets, parse_states,
};

/// Tax year all embedded datasets describe.
pub const TAX_YEAR: i32 = 2025;

const FEDERAL_BRACKETS_CSV: &str = include_str!("../data/federal_brackets_2025.csv");
const STATES_CSV: &str = include_str!("../data/states_2025.csv");
const STATE_BRACKETS_CSV: &str = include_str!("../data/state_brackets_2025.csv");
const CITY_COST_INDEX_CSV: &str = include_str!("../data/city_cost_index.csv");

/// Parses the embedded federal bracket CSV.
pub fn load_federal_tables() -> Result<FederalTaxTables, DataError> {
    let records = parse_federal_brackets(FEDERAL_BRACKETS_CSV.as_bytes())?;
    build_federal_tables(TAX_YEAR, &records)
}

/// Parses the embedded state tax CSVs.
pub fn load_state_table() -> Result<StateTaxTable, DataError> {
    let states = parse_states(STATES_CSV.as_bytes())?;
    let brackets = parse_state_brackets(STATE_BRACKETS_CSV.as_bytes())?;
    build_state_table(&states, &brackets)
}

/// Parses the embedded city index CSV.
pub fn load_city_table() -> Result<CityIndexTable, DataError> {
    let records = parse_cities(CITY_COST_INDEX_CSV.as_bytes())?;
    Ok(build_city_table(&records))
}

/// The 2025 federal bracket schedules, one per filing status.
pub fn federal_tax_tables() -> &'static FederalTaxTables {
    static TABLES: OnceLock<FederalTaxTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let tables = load_federal_tables().expect("embedded federal bracket data is valid");
        debug!(tax_year = TAX_YEAR, "federal bracket tables loaded");
        tables
    })
}

/// The 2025 per-state income-tax table (all 50 states).
pub fn state_tax_table() -> &'static StateTaxTable {
    static TABLE: OnceLock<StateTaxTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = load_state_table().expect("embedded state tax data is valid");
        debug!(states = table.len(), "state tax table loaded");
        table
    })
}

/// The composite city cost-of-living index table.
pub fn city_index_table() -> &'static CityIndexTable {
    static TABLE: OnceLock<CityIndexTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = load_city_table().expect("embedded city index data is valid");
        debug!(cities = table.len(), "city index table loaded");
        table
    })
}

/// 2025 federal payroll constants: standard deductions and FICA parameters.
pub fn federal_tax_config() -> &'static FederalTaxConfig {
    static CONFIG: OnceLock<FederalTaxConfig> = OnceLock::new();
    CONFIG.get_or_init(|| FederalTaxConfig {
        tax_year: TAX_YEAR,
        standard_deduction_single: Decimal::from(15000),
        standard_deduction_married: Decimal::from(30000),
        standard_deduction_head: Decimal::from(22500),
        ss_wage_base: Decimal::from(168600),
        // 6.2% employee Social Security
        ss_tax_rate: Decimal::new(62, 3),
        // 1.45% employee Medicare
        medicare_tax_rate: Decimal::new(145, 4),
        // 0.9% additional Medicare above the threshold
        additional_medicare_rate: Decimal::new(9, 3),
        additional_medicare_threshold_single: Decimal::from(200000),
        additional_medicare_threshold_married: Decimal::from(250000),
    })
}
