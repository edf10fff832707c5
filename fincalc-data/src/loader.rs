//! CSV parsers for the embedded reference datasets.
//!
//! Each dataset has a serde-derived record type mirroring its CSV columns,
//! a parse function over any reader, and a build function assembling the
//! parsed records into the immutable table types from `fincalc-core`.

use std::collections::HashMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use fincalc_core::models::{
    CityCostIndex, CityIndexTable, FederalBracket, FederalTaxTable, FederalTaxTables,
    FilingStatus, StateBracket, StateInfo, StateTaxKind, StateTaxTable,
};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown filing status '{0}'")]
    UnknownFilingStatus(String),

    #[error("unknown tax kind '{0}' for state {1}")]
    UnknownTaxKind(String, String),

    #[error("flat-rate state {0} is missing its rate")]
    MissingFlatRate(String),

    #[error("progressive state {0} has no {1} brackets")]
    MissingBrackets(String, &'static str),

    #[error("bracket row references unknown state '{0}'")]
    UnknownBracketState(String),

    #[error("city label '{0}' is missing its ', ST' suffix")]
    InvalidCityLabel(String),
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::CsvParse(err.to_string())
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// ── Federal brackets ────────────────────────────────────────────────────

/// One row of the federal bracket CSV. `rate` is a fraction (0.22 for the
/// 22% bracket); `base_tax` is the cumulative tax at `min_income`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FederalBracketRecord {
    pub status: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

pub fn parse_federal_brackets<R: Read>(
    reader: R,
) -> Result<Vec<FederalBracketRecord>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: FederalBracketRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Assembles per-status federal schedules, preserving CSV row order within
/// each status.
pub fn build_federal_tables(
    tax_year: i32,
    records: &[FederalBracketRecord],
) -> Result<FederalTaxTables, DataError> {
    let mut by_status: HashMap<FilingStatus, Vec<FederalBracket>> = HashMap::new();
    for record in records {
        let status = FilingStatus::parse(&record.status)
            .ok_or_else(|| DataError::UnknownFilingStatus(record.status.clone()))?;
        by_status.entry(status).or_default().push(FederalBracket {
            min_income: record.min_income,
            max_income: record.max_income,
            base_tax: record.base_tax,
            rate: record.rate,
        });
    }

    let mut table_for = |status: FilingStatus| -> Result<FederalTaxTable, DataError> {
        let brackets = by_status
            .remove(&status)
            .ok_or(DataError::UnknownFilingStatus(status.as_str().to_string()))?;
        Ok(FederalTaxTable {
            filing_status: status,
            brackets,
        })
    };

    Ok(FederalTaxTables {
        tax_year,
        single: table_for(FilingStatus::Single)?,
        married: table_for(FilingStatus::Married)?,
        head_of_household: table_for(FilingStatus::HeadOfHousehold)?,
    })
}

// ── State tax table ─────────────────────────────────────────────────────

/// One row of the state metadata CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRecord {
    pub code: String,
    pub name: String,
    /// `none`, `flat`, or `progressive`.
    pub kind: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub flat_rate: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub deduction_single: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub deduction_married: Option<Decimal>,
}

/// One row of the state bracket CSV. `rate` is in percent as published.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateBracketRecord {
    pub state: String,
    pub filing_status: String,
    pub min: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

pub fn parse_states<R: Read>(reader: R) -> Result<Vec<StateRecord>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: StateRecord = result?;
        records.push(record);
    }
    Ok(records)
}

pub fn parse_state_brackets<R: Read>(
    reader: R,
) -> Result<Vec<StateBracketRecord>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: StateBracketRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Joins state metadata with bracket rows into the lookup table.
pub fn build_state_table(
    states: &[StateRecord],
    brackets: &[StateBracketRecord],
) -> Result<StateTaxTable, DataError> {
    let mut single: HashMap<&str, Vec<StateBracket>> = HashMap::new();
    let mut married: HashMap<&str, Vec<StateBracket>> = HashMap::new();
    let known: std::collections::HashSet<&str> =
        states.iter().map(|s| s.code.as_str()).collect();

    for record in brackets {
        if !known.contains(record.state.as_str()) {
            return Err(DataError::UnknownBracketState(record.state.clone()));
        }
        let bucket = match record.filing_status.as_str() {
            "single" => &mut single,
            "married" => &mut married,
            other => return Err(DataError::UnknownFilingStatus(other.to_string())),
        };
        bucket
            .entry(record.state.as_str())
            .or_default()
            .push(StateBracket {
                rate: record.rate,
                min: record.min,
                max: record.max,
            });
    }

    let mut table = HashMap::new();
    for state in states {
        let kind = match state.kind.as_str() {
            "none" => StateTaxKind::None,
            "flat" => StateTaxKind::Flat(
                state
                    .flat_rate
                    .ok_or_else(|| DataError::MissingFlatRate(state.code.clone()))?,
            ),
            "progressive" => StateTaxKind::Progressive {
                single: single.remove(state.code.as_str()).ok_or(
                    DataError::MissingBrackets(state.code.clone(), "single"),
                )?,
                married: married.remove(state.code.as_str()).ok_or(
                    DataError::MissingBrackets(state.code.clone(), "married"),
                )?,
            },
            other => {
                return Err(DataError::UnknownTaxKind(
                    other.to_string(),
                    state.code.clone(),
                ));
            }
        };
        table.insert(
            state.code.clone(),
            StateInfo {
                name: state.name.clone(),
                kind,
                deduction_single: state.deduction_single,
                deduction_married: state.deduction_married,
            },
        );
    }

    Ok(StateTaxTable::new(table))
}

// ── City cost indices ───────────────────────────────────────────────────

/// One row of the city index CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub state: String,
    pub groceries: Decimal,
    pub housing: Decimal,
    pub utilities: Decimal,
    pub transportation: Decimal,
    pub overall: Decimal,
}

pub fn parse_cities<R: Read>(reader: R) -> Result<Vec<CityRecord>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: CityRecord = result?;
        if !record.city.contains(", ") {
            return Err(DataError::InvalidCityLabel(record.city));
        }
        records.push(record);
    }
    Ok(records)
}

pub fn build_city_table(records: &[CityRecord]) -> CityIndexTable {
    let cities = records
        .iter()
        .map(|record| {
            (
                record.city.clone(),
                CityCostIndex {
                    name: record.city.clone(),
                    state: record.state.clone(),
                    groceries: record.groceries,
                    housing: record.housing,
                    utilities: record.utilities,
                    transportation: record.transportation,
                    overall: record.overall,
                },
            )
        })
        .collect();
    CityIndexTable::new(cities)
}
