//! propcalc core: derived metrics and animated numeric readouts for a
//! funded-account risk calculator.
//!
//! - Domain types (calculator inputs, instrument presets, profit split)
//! - Derived-value engine: pure risk/payout and position-size functions
//! - Instrument catalog with category-then-index selection
//! - Numeric display animator: ease-out transitions driven by host frames
//! - Formatters and TOML configuration

pub mod animation;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod format;

pub use catalog::{InstrumentCatalog, InstrumentSelection};
pub use config::{AnimationConfig, CalculatorConfig};
pub use error::ConfigError;
