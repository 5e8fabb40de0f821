//! Numeric display animator.
//!
//! - [`easing`]: ease-out cubic curve
//! - [`animator`]: per-value Idle/Animating state machine
//! - [`scheduler`]: request/cancel frame primitives and the in-process queue
//! - [`display`]: one animator bound to a formatter and a frame registration
//! - [`board`]: keyed set of displays driven by the host's frame loop

pub mod animator;
pub mod board;
pub mod display;
pub mod easing;
pub mod scheduler;

pub use animator::{Animator, FrameTime, Phase, TargetChange, TickOutcome, DEFAULT_DURATION};
pub use board::DisplayBoard;
pub use display::AnimatedDisplay;
pub use easing::{ease_out_cubic, interpolate};
pub use scheduler::{FrameQueue, FrameScheduler, FrameToken};
