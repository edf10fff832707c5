//! Cost-of-living comparison between two cities, including the post-tax
//! picture for each city's state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::take_home::{TakeHomePayCalculator, TakeHomePayInput, TakeHomePayResult};
use crate::models::{
    CityIndexTable, FederalTaxConfig, FederalTaxTables, FilingStatus, PayFrequency, StateTaxTable,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOfLivingInput {
    /// "City, ST" label of the current city.
    pub current_city: String,
    /// "City, ST" label of the prospective city.
    pub new_city: String,
    pub current_salary: Decimal,
    pub filing_status: FilingStatus,
}

/// Index delta for one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: String,
    pub current_index: Decimal,
    pub new_index: Decimal,
    /// Percent change from current to new, e.g. 38.89 for +38.89%.
    pub change_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOfLivingResult {
    /// Salary in the new city with the same purchasing power.
    pub equivalent_salary: Decimal,
    /// `equivalent_salary - current_salary`; negative means the move is
    /// cheaper.
    pub salary_difference: Decimal,
    /// Overall index change in percent.
    pub percent_difference: Decimal,
    pub categories: Vec<CategoryComparison>,
    /// Take-home pay on the current salary in the current city's state.
    pub current_take_home: TakeHomePayResult,
    /// Take-home pay on the equivalent salary in the new city's state.
    pub new_take_home: TakeHomePayResult,
}

/// Calculator over the city index table and the tax reference data.
#[derive(Debug, Clone)]
pub struct CostOfLivingCalculator<'a> {
    cities: &'a CityIndexTable,
    config: &'a FederalTaxConfig,
    tables: &'a FederalTaxTables,
    states: &'a StateTaxTable,
}

impl<'a> CostOfLivingCalculator<'a> {
    pub fn new(
        cities: &'a CityIndexTable,
        config: &'a FederalTaxConfig,
        tables: &'a FederalTaxTables,
        states: &'a StateTaxTable,
    ) -> Self {
        Self {
            cities,
            config,
            tables,
            states,
        }
    }

    /// Compares living costs between two cities.
    ///
    /// Returns `None` when either city is unknown or both labels name the
    /// same city; that is a valid "no comparison" outcome, not an error.
    pub fn calculate(
        &self,
        input: &CostOfLivingInput,
    ) -> Option<CostOfLivingResult> {
        if input.current_city == input.new_city {
            return None;
        }
        let current = self.cities.get(&input.current_city)?;
        let new = self.cities.get(&input.new_city)?;

        let ratio = new.overall / current.overall;
        let equivalent_salary = round_half_up(input.current_salary * ratio);
        let salary_difference = equivalent_salary - input.current_salary;
        let percent_difference =
            round_half_up((ratio - Decimal::ONE) * Decimal::ONE_HUNDRED);

        let categories = [
            ("groceries", current.groceries, new.groceries),
            ("housing", current.housing, new.housing),
            ("utilities", current.utilities, new.utilities),
            ("transportation", current.transportation, new.transportation),
            ("overall", current.overall, new.overall),
        ]
        .into_iter()
        .map(|(category, current_index, new_index)| CategoryComparison {
            category: category.to_string(),
            current_index,
            new_index,
            change_percent: round_half_up(
                (new_index / current_index - Decimal::ONE) * Decimal::ONE_HUNDRED,
            ),
        })
        .collect();

        let take_home = TakeHomePayCalculator::new(self.config, self.tables, self.states);
        let current_take_home = take_home.calculate(&TakeHomePayInput {
            gross_income: input.current_salary,
            pay_frequency: PayFrequency::Annually,
            filing_status: input.filing_status,
            state: current.state.clone(),
        });
        let new_take_home = take_home.calculate(&TakeHomePayInput {
            gross_income: equivalent_salary,
            pay_frequency: PayFrequency::Annually,
            filing_status: input.filing_status,
            state: new.state.clone(),
        });

        Some(CostOfLivingResult {
            equivalent_salary,
            salary_difference,
            percent_difference,
            categories,
            current_take_home,
            new_take_home,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{CityCostIndex, FederalBracket, FederalTaxTable, StateInfo, StateTaxKind};

    fn cities() -> CityIndexTable {
        let mut map = HashMap::new();
        map.insert(
            "Austin, TX".to_string(),
            CityCostIndex {
                name: "Austin, TX".to_string(),
                state: "TX".to_string(),
                groceries: dec!(95),
                housing: dec!(110),
                utilities: dec!(98),
                transportation: dec!(95),
                overall: dec!(105),
            },
        );
        map.insert(
            "San Francisco, CA".to_string(),
            CityCostIndex {
                name: "San Francisco, CA".to_string(),
                state: "CA".to_string(),
                groceries: dec!(120),
                housing: dec!(250),
                utilities: dec!(130),
                transportation: dec!(110),
                overall: dec!(180),
            },
        );
        CityIndexTable::new(map)
    }

    fn flat_tables() -> (FederalTaxConfig, FederalTaxTables, StateTaxTable) {
        let bracket = |status| FederalTaxTable {
            filing_status: status,
            brackets: vec![FederalBracket {
                min_income: dec!(0),
                max_income: None,
                base_tax: dec!(0),
                rate: dec!(0.10),
            }],
        };
        let config = FederalTaxConfig {
            tax_year: 2025,
            standard_deduction_single: dec!(15000),
            standard_deduction_married: dec!(30000),
            standard_deduction_head: dec!(22500),
            ss_wage_base: dec!(168600),
            ss_tax_rate: dec!(0.062),
            medicare_tax_rate: dec!(0.0145),
            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold_single: dec!(200000),
            additional_medicare_threshold_married: dec!(250000),
        };
        let tables = FederalTaxTables {
            tax_year: 2025,
            single: bracket(FilingStatus::Single),
            married: bracket(FilingStatus::Married),
            head_of_household: bracket(FilingStatus::HeadOfHousehold),
        };
        let mut states = HashMap::new();
        states.insert(
            "TX".to_string(),
            StateInfo {
                name: "Texas".to_string(),
                kind: StateTaxKind::None,
                deduction_single: None,
                deduction_married: None,
            },
        );
        states.insert(
            "CA".to_string(),
            StateInfo {
                name: "California".to_string(),
                kind: StateTaxKind::Flat(dec!(5)),
                deduction_single: None,
                deduction_married: None,
            },
        );
        (config, tables, StateTaxTable::new(states))
    }

    #[test]
    fn identical_cities_yield_no_comparison() {
        let cities = cities();
        let (config, tables, states) = flat_tables();
        let calc = CostOfLivingCalculator::new(&cities, &config, &tables, &states);

        let result = calc.calculate(&CostOfLivingInput {
            current_city: "Austin, TX".to_string(),
            new_city: "Austin, TX".to_string(),
            current_salary: dec!(90000),
            filing_status: FilingStatus::Single,
        });

        assert_eq!(result, None);
    }

    #[test]
    fn unknown_city_yields_no_comparison() {
        let cities = cities();
        let (config, tables, states) = flat_tables();
        let calc = CostOfLivingCalculator::new(&cities, &config, &tables, &states);

        let result = calc.calculate(&CostOfLivingInput {
            current_city: "Austin, TX".to_string(),
            new_city: "Nowhere, ZZ".to_string(),
            current_salary: dec!(90000),
            filing_status: FilingStatus::Single,
        });

        assert_eq!(result, None);
    }

    #[test]
    fn equivalent_salary_scales_by_overall_index() {
        let cities = cities();
        let (config, tables, states) = flat_tables();
        let calc = CostOfLivingCalculator::new(&cities, &config, &tables, &states);

        let result = calc
            .calculate(&CostOfLivingInput {
                current_city: "Austin, TX".to_string(),
                new_city: "San Francisco, CA".to_string(),
                current_salary: dec!(105000),
                filing_status: FilingStatus::Single,
            })
            .unwrap();

        // 105000 * 180 / 105 = 180000
        assert_eq!(result.equivalent_salary, dec!(180000.00));
        assert_eq!(result.salary_difference, dec!(75000.00));
        // 180/105 - 1 = 71.43%
        assert_eq!(result.percent_difference, dec!(71.43));
    }

    #[test]
    fn take_home_reflects_each_city_state() {
        let cities = cities();
        let (config, tables, states) = flat_tables();
        let calc = CostOfLivingCalculator::new(&cities, &config, &tables, &states);

        let result = calc
            .calculate(&CostOfLivingInput {
                current_city: "Austin, TX".to_string(),
                new_city: "San Francisco, CA".to_string(),
                current_salary: dec!(105000),
                filing_status: FilingStatus::Single,
            })
            .unwrap();

        assert_eq!(result.current_take_home.state_tax, dec!(0.00));
        // Flat 5% of the equivalent salary
        assert_eq!(result.new_take_home.state_tax, dec!(9000.00));
    }

    #[test]
    fn category_breakdown_covers_all_indices() {
        let cities = cities();
        let (config, tables, states) = flat_tables();
        let calc = CostOfLivingCalculator::new(&cities, &config, &tables, &states);

        let result = calc
            .calculate(&CostOfLivingInput {
                current_city: "Austin, TX".to_string(),
                new_city: "San Francisco, CA".to_string(),
                current_salary: dec!(105000),
                filing_status: FilingStatus::Single,
            })
            .unwrap();

        assert_eq!(result.categories.len(), 5);
        let housing = &result.categories[1];
        assert_eq!(housing.category, "housing");
        // 250/110 - 1 = 127.27%
        assert_eq!(housing.change_percent, dec!(127.27));
    }
}
