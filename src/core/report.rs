//! What the renderers show next to the curve: the apex and landing markers
//! and the three headline numbers.

use std::fmt;

use serde::Serialize;

use crate::core::ballistics::{TrajectoryResult, TrajectorySample};

pub const RESULTS_PLACEHOLDER: &str = "Results will appear here...";

/// Highest sample. Ties go to the earliest one.
pub fn apex_sample(samples: &[TrajectorySample]) -> Option<TrajectorySample> {
    let mut best: Option<TrajectorySample> = None;
    for sample in samples {
        if best.is_none_or(|b| sample.height_m > b.height_m) {
            best = Some(*sample);
        }
    }
    best
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Annotations {
    pub apex: Option<TrajectorySample>,
    pub landing: Option<TrajectorySample>,
}

pub fn annotate(result: &TrajectoryResult) -> Annotations {
    Annotations {
        apex: apex_sample(&result.samples),
        landing: result.landing_point(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ResultSummary {
    pub flight_time_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
}

impl From<&TrajectoryResult> for ResultSummary {
    fn from(result: &TrajectoryResult) -> Self {
        Self {
            flight_time_s: result.flight_time_s,
            max_height_m: result.max_height_m,
            range_m: result.range_m,
        }
    }
}

/// Maps -0.0 to 0.0 so two-decimal output never shows "-0.00".
pub fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time of Flight: {:.2} s", unsigned_zero(self.flight_time_s))?;
        writeln!(f, "Max Height: {:.2} m", unsigned_zero(self.max_height_m))?;
        write!(f, "Range: {:.2} m", unsigned_zero(self.range_m))
    }
}
