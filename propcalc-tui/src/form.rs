//! Editable form fields of both calculators.
//!
//! The form layer owns text parsing; the engine only ever sees numbers.

use propcalc_core::domain::{PositionInputs, RiskInputs};

/// Decoration shown around a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Dollar,
    Percent,
    None,
}

impl Affix {
    pub fn wrap(self, text: &str) -> String {
        match self {
            Affix::Dollar => format!("${text}"),
            Affix::Percent => format!("{text}%"),
            Affix::None => text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskField {
    AccountSize,
    DailyDrawdown,
    MaxDrawdown,
    ProfitTarget,
}

impl RiskField {
    pub const ALL: [RiskField; 4] = [
        RiskField::AccountSize,
        RiskField::DailyDrawdown,
        RiskField::MaxDrawdown,
        RiskField::ProfitTarget,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskField::AccountSize => "Account Size",
            RiskField::DailyDrawdown => "Daily Drawdown",
            RiskField::MaxDrawdown => "Max Overall Drawdown",
            RiskField::ProfitTarget => "Profit Target",
        }
    }

    pub fn affix(self) -> Affix {
        match self {
            RiskField::AccountSize => Affix::Dollar,
            _ => Affix::Percent,
        }
    }

    /// Increment applied by h/l.
    pub fn step(self) -> f64 {
        match self {
            RiskField::AccountSize => 1_000.0,
            _ => 0.5,
        }
    }

    pub fn get(self, inputs: &RiskInputs) -> f64 {
        match self {
            RiskField::AccountSize => inputs.account_size,
            RiskField::DailyDrawdown => inputs.daily_drawdown_pct,
            RiskField::MaxDrawdown => inputs.max_drawdown_pct,
            RiskField::ProfitTarget => inputs.profit_target_pct,
        }
    }

    pub fn set(self, inputs: &mut RiskInputs, value: f64) {
        match self {
            RiskField::AccountSize => inputs.account_size = value,
            RiskField::DailyDrawdown => inputs.daily_drawdown_pct = value,
            RiskField::MaxDrawdown => inputs.max_drawdown_pct = value,
            RiskField::ProfitTarget => inputs.profit_target_pct = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionField {
    AccountSize,
    RiskPct,
    StopLoss,
    /// Edits the override; the preset value shows through until set.
    TickValue,
}

impl PositionField {
    pub const ALL: [PositionField; 4] = [
        PositionField::AccountSize,
        PositionField::RiskPct,
        PositionField::StopLoss,
        PositionField::TickValue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PositionField::AccountSize => "Account Size",
            PositionField::RiskPct => "Risk Per Trade",
            PositionField::StopLoss => "Stop Loss",
            PositionField::TickValue => "Value Per Unit",
        }
    }

    pub fn affix(self) -> Affix {
        match self {
            PositionField::AccountSize | PositionField::TickValue => Affix::Dollar,
            PositionField::RiskPct => Affix::Percent,
            PositionField::StopLoss => Affix::None,
        }
    }

    pub fn step(self) -> f64 {
        match self {
            PositionField::AccountSize => 1_000.0,
            PositionField::RiskPct => 0.25,
            PositionField::StopLoss => 1.0,
            PositionField::TickValue => 0.5,
        }
    }

    /// Current value; `preset_tick_value` fills in for a missing override.
    pub fn get(self, inputs: &PositionInputs, preset_tick_value: f64) -> f64 {
        match self {
            PositionField::AccountSize => inputs.account_size,
            PositionField::RiskPct => inputs.risk_pct,
            PositionField::StopLoss => inputs.stop_loss_units,
            PositionField::TickValue => inputs.tick_value_override.unwrap_or(preset_tick_value),
        }
    }

    pub fn set(self, inputs: &mut PositionInputs, value: f64) {
        match self {
            PositionField::AccountSize => inputs.account_size = value,
            PositionField::RiskPct => inputs.risk_pct = value,
            PositionField::StopLoss => inputs.stop_loss_units = value,
            PositionField::TickValue => inputs.tick_value_override = Some(value),
        }
    }
}

/// Parse typed field text. Only finite numbers are accepted.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim().trim_start_matches('$').trim_end_matches('%').replace(',', "");
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Characters accepted while editing a field.
pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | ',' | 'e' | 'E')
}

/// Editor pre-fill: full precision, so committing it untouched is a no-op.
pub fn edit_text(value: f64) -> String {
    format!("{value}")
}

/// Value as shown in the form: whole numbers without decimals.
pub fn display_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.4}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
