use serde::{Deserialize, Serialize};

/// Market category an instrument preset is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Forex,
    Futures,
    Cfd,
    Commodities,
}

impl Category {
    /// Display order used by the category picker.
    pub const ALL: [Category; 4] = [
        Category::Forex,
        Category::Futures,
        Category::Cfd,
        Category::Commodities,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Forex => "Forex",
            Category::Futures => "Futures",
            Category::Cfd => "CFD",
            Category::Commodities => "Commodities",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Forex => 0,
            Category::Futures => 1,
            Category::Cfd => 2,
            Category::Commodities => 3,
        }
    }

    pub fn next(self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Category {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Read-only catalog entry describing how much one price increment is worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentPreset {
    pub name: String,
    pub category: Category,
    /// Smallest price increment (pip, tick or point).
    pub tick_size: f64,
    /// Monetary value of one `tick_size` move for one lot/contract.
    pub tick_value: f64,
    /// What one increment is called for this instrument ("pip", "tick", ...).
    pub unit: String,
}

impl InstrumentPreset {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        tick_size: f64,
        tick_value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            tick_size,
            tick_value,
            unit: unit.into(),
        }
    }
}
