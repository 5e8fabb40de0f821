use serde::{Deserialize, Serialize};

/// Share of realized profit kept by the trader.
///
/// Written as the trader percentage, either `90` or `"90"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SplitRepr")]
pub enum ProfitSplit {
    /// 80% trader / 20% firm
    #[default]
    #[serde(rename = "80")]
    Eighty,
    /// 90% trader / 10% firm
    #[serde(rename = "90")]
    Ninety,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SplitRepr {
    Number(u8),
    Text(String),
}

impl TryFrom<SplitRepr> for ProfitSplit {
    type Error = String;

    fn try_from(repr: SplitRepr) -> Result<Self, Self::Error> {
        let pct = match repr {
            SplitRepr::Number(n) => n.to_string(),
            SplitRepr::Text(s) => s,
        };
        match pct.trim() {
            "80" => Ok(ProfitSplit::Eighty),
            "90" => Ok(ProfitSplit::Ninety),
            other => Err(format!("unsupported profit split {other:?}, expected 80 or 90")),
        }
    }
}

impl ProfitSplit {
    pub fn trader_pct(self) -> f64 {
        match self {
            ProfitSplit::Eighty => 80.0,
            ProfitSplit::Ninety => 90.0,
        }
    }

    pub fn firm_pct(self) -> f64 {
        100.0 - self.trader_pct()
    }

    pub fn toggle(self) -> ProfitSplit {
        match self {
            ProfitSplit::Eighty => ProfitSplit::Ninety,
            ProfitSplit::Ninety => ProfitSplit::Eighty,
        }
    }

    /// Button caption, e.g. "80/20 Split".
    pub fn label(self) -> String {
        format!("{:.0}/{:.0} Split", self.trader_pct(), self.firm_pct())
    }
}

/// Inputs of the risk/payout calculator.
///
/// Percent fields are whole percentages (`5.0` means 5%). Nothing here is
/// validated; zero and negative values flow through the engine unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskInputs {
    pub account_size: f64,
    pub daily_drawdown_pct: f64,
    pub max_drawdown_pct: f64,
    pub profit_target_pct: f64,
    pub profit_split: ProfitSplit,
}

impl Default for RiskInputs {
    fn default() -> Self {
        Self {
            account_size: 100_000.0,
            daily_drawdown_pct: 5.0,
            max_drawdown_pct: 10.0,
            profit_target_pct: 10.0,
            profit_split: ProfitSplit::Eighty,
        }
    }
}

/// Inputs of the position-size calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionInputs {
    pub account_size: f64,
    pub risk_pct: f64,
    /// Stop distance counted in the instrument's unit (pips, ticks, points).
    pub stop_loss_units: f64,
    /// Manually entered value per unit; replaces the preset's `tick_value`.
    pub tick_value_override: Option<f64>,
}

impl Default for PositionInputs {
    fn default() -> Self {
        Self {
            account_size: 100_000.0,
            risk_pct: 1.0,
            stop_loss_units: 50.0,
            tick_value_override: None,
        }
    }
}
