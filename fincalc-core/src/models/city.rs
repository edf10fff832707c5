use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Composite cost-of-living index numbers for one city, relative to a
/// national baseline of 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCostIndex {
    /// Display label, "City, ST".
    pub name: String,
    /// Two-letter state code parsed from the label.
    pub state: String,
    pub groceries: Decimal,
    pub housing: Decimal,
    pub utilities: Decimal,
    pub transportation: Decimal,
    pub overall: Decimal,
}

/// Immutable lookup table of city cost indices keyed by the "City, ST" label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityIndexTable {
    cities: HashMap<String, CityCostIndex>,
}

impl CityIndexTable {
    pub fn new(cities: HashMap<String, CityCostIndex>) -> Self {
        Self { cities }
    }

    pub fn get(&self, name: &str) -> Option<&CityCostIndex> {
        self.cities.get(name)
    }

    /// City labels in unspecified order, for populating pickers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
