//! One launch = one request built from the form, one response handed to
//! the renderer. Neither holds on to widget state.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::core::ballistics::{LaunchParameters, TrajectoryResult, solve};
use crate::core::error::InputError;
use crate::core::input::LaunchForm;
use crate::core::planet::Planet;
use crate::core::report::{Annotations, ResultSummary, annotate};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRequest {
    pub params: LaunchParameters,
    pub planet: Planet,
    pub issued_at: DateTime<Local>,
}

impl SimulationRequest {
    pub fn new(params: LaunchParameters, planet: Planet) -> Self {
        Self {
            params,
            planet,
            issued_at: Local::now(),
        }
    }

    pub fn from_form(form: &LaunchForm) -> Result<Self, InputError> {
        Ok(Self::new(form.to_parameters()?, form.planet))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResponse {
    pub request: SimulationRequest,
    pub result: TrajectoryResult,
    pub annotations: Annotations,
    pub summary: ResultSummary,
}

impl SimulationResponse {
    pub fn landed(&self) -> bool {
        !self.result.is_empty()
    }
}

pub fn simulate(request: SimulationRequest) -> SimulationResponse {
    let result = solve(request.params);
    if result.is_empty() {
        warn!(
            height_m = request.params.height_m,
            speed_mps = request.params.speed_mps,
            angle_deg = request.params.angle_deg,
            "no real landing time; trajectory is empty"
        );
    } else {
        debug!(
            planet = %request.planet,
            flight_time_s = result.flight_time_s,
            range_m = result.range_m,
            max_height_m = result.max_height_m,
            "trajectory solved"
        );
    }

    SimulationResponse {
        annotations: annotate(&result),
        summary: ResultSummary::from(&result),
        request,
        result,
    }
}
