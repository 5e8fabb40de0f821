//! Risk / payout calculator
//!
//! Loss limits and payout figures for a funded-account challenge.

use serde::Serialize;

use crate::domain::RiskInputs;

/// Health is reported as a percentage and capped here.
pub const HEALTH_CAP_PCT: f64 = 100.0;

/// Derived figures of the risk/payout calculator.
///
/// # Formula
/// ```text
/// daily_loss_limit = account_size * daily_drawdown_pct / 100
/// max_loss_limit   = account_size * max_drawdown_pct / 100
/// target_profit    = account_size * profit_target_pct / 100
/// firm_cut         = target_profit * firm_pct / 100
/// trader_payout    = target_profit * trader_pct / 100
/// health_pct       = min(100, profit_target_pct / max_drawdown_pct * 100)
/// ```
///
/// # Example
/// - Account: $100,000, daily 5%, max 10%, target 10%, split 80/20
/// - Daily loss limit: $5,000, max loss limit: $10,000
/// - Target profit: $10,000 → firm $2,000, trader $8,000
/// - Health: min(100, 10 / 10 * 100) = 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub daily_loss_limit: f64,
    pub max_loss_limit: f64,
    pub target_profit: f64,
    pub firm_cut: f64,
    pub trader_payout: f64,
    pub health_pct: f64,
}

pub fn compute_risk(inputs: &RiskInputs) -> RiskMetrics {
    let account = inputs.account_size;
    let target_profit = account * inputs.profit_target_pct / 100.0;

    RiskMetrics {
        daily_loss_limit: account * inputs.daily_drawdown_pct / 100.0,
        max_loss_limit: account * inputs.max_drawdown_pct / 100.0,
        target_profit,
        firm_cut: target_profit * inputs.profit_split.firm_pct() / 100.0,
        trader_payout: target_profit * inputs.profit_split.trader_pct() / 100.0,
        health_pct: health_pct(inputs.profit_target_pct, inputs.max_drawdown_pct),
    }
}

/// Reward-to-drawdown ratio as a percentage, capped at [`HEALTH_CAP_PCT`].
///
/// A zero drawdown allowance is an unbounded ratio and reports the cap.
pub fn health_pct(profit_target_pct: f64, max_drawdown_pct: f64) -> f64 {
    if max_drawdown_pct == 0.0 {
        return HEALTH_CAP_PCT;
    }
    (profit_target_pct / max_drawdown_pct * 100.0).min(HEALTH_CAP_PCT)
}
