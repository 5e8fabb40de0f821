//! Domain types for the calculators.

pub mod instrument;
pub mod params;

pub use instrument::{Category, InstrumentPreset};
pub use params::{PositionInputs, ProfitSplit, RiskInputs};
