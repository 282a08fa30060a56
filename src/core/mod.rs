//! Numeric utilities, cost curve and cooldown timers.

pub mod constants;
pub mod cost_curve;
pub mod math;
pub mod timer;

pub use cost_curve::{upgrade_cost, CostCurve};
pub use math::{clamp, distance, lerp};
pub use timer::{describe, now_ms, remaining, CooldownTimer};
