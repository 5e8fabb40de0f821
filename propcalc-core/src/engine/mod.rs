//! Derived-value engine: pure functions from calculator inputs to metrics.
//!
//! Nothing here fails: degenerate divisions are guarded explicitly and map
//! to a defined value instead of NaN or infinity.

pub mod memo;
pub mod position;
pub mod risk;

pub use memo::Memo;
pub use position::{compute_position, PositionMetrics};
pub use risk::{compute_risk, health_pct, RiskMetrics, HEALTH_CAP_PCT};
