//! Closed-form projectile trajectories under constant gravity.
//!
//! The solver lives in [`core::ballistics`]; the remaining `core` modules
//! collect launch input, annotate results and draw the chart used by the
//! binaries.

pub mod core;
