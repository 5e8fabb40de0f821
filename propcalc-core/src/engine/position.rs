//! Position size calculator
//!
//! Classic fixed-fractional sizing: risk X% of the account, stop Y units away.

use serde::Serialize;

use crate::domain::{InstrumentPreset, PositionInputs};

/// Derived figures of the position-size calculator.
///
/// # Formula
/// ```text
/// risk_dollars  = account_size * risk_pct / 100
/// risk_per_unit = stop_loss_units * tick_value
/// position_size = risk_dollars / risk_per_unit   (0 when risk_per_unit <= 0)
/// ```
///
/// # Example
/// - Account: $50,000, risk 1% ($500)
/// - Stop: 20 ticks on ES ($12.50 per tick) → $250 per contract
/// - Position: $500 / $250 = 2 contracts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionMetrics {
    pub risk_dollars: f64,
    /// Value of one unit actually used (override or preset).
    pub tick_value: f64,
    pub risk_per_unit: f64,
    pub position_size: f64,
}

/// Size a position against the active preset.
///
/// `tick_value_override` wins over the preset. With neither available the
/// tick value is zero and so is the position.
pub fn compute_position(
    inputs: &PositionInputs,
    instrument: Option<&InstrumentPreset>,
) -> PositionMetrics {
    let tick_value = inputs
        .tick_value_override
        .or_else(|| instrument.map(|i| i.tick_value))
        .unwrap_or(0.0);

    let risk_dollars = inputs.account_size * inputs.risk_pct / 100.0;
    let risk_per_unit = inputs.stop_loss_units * tick_value;

    let position_size = if risk_per_unit > 0.0 {
        risk_dollars / risk_per_unit
    } else {
        0.0
    };

    PositionMetrics {
        risk_dollars,
        tick_value,
        risk_per_unit,
        position_size: if position_size.is_finite() { position_size } else { 0.0 },
    }
}
