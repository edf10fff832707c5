//! Net-worth aggregation over a fixed set of asset and liability fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthInput {
    // Assets
    pub cash_and_savings: Decimal,
    pub investments: Decimal,
    pub retirement: Decimal,
    pub home_value: Decimal,
    pub vehicle_value: Decimal,
    pub other_assets: Decimal,
    // Liabilities
    pub mortgage: Decimal,
    pub student_loans: Decimal,
    pub car_loans: Decimal,
    pub credit_cards: Decimal,
    pub other_debts: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthResult {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    /// Cash and investments only; what could be tapped quickly.
    pub liquid_assets: Decimal,
    /// Liabilities as a percent of assets; 0 when there are no assets.
    pub debt_to_asset_ratio: Decimal,
}

/// Pure arithmetic; no error conditions.
pub fn net_worth(input: &NetWorthInput) -> NetWorthResult {
    let total_assets = input.cash_and_savings
        + input.investments
        + input.retirement
        + input.home_value
        + input.vehicle_value
        + input.other_assets;
    let total_liabilities = input.mortgage
        + input.student_loans
        + input.car_loans
        + input.credit_cards
        + input.other_debts;

    let debt_to_asset_ratio = if total_assets > Decimal::ZERO {
        round_half_up(total_liabilities / total_assets * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        liquid_assets: input.cash_and_savings + input.investments,
        debt_to_asset_ratio,
    }
}
