use macroquad::prelude::Texture2D;
use space_trajectory::core::input::LaunchForm;
use space_trajectory::core::planet::Planet;
use space_trajectory::core::report::RESULTS_PLACEHOLDER;
use space_trajectory::core::session::{SimulationRequest, SimulationResponse, simulate};
use tracing::{debug, info};

pub(crate) struct ChartCache {
    pub(crate) texture: Option<Texture2D>,
    pub(crate) size: (u32, u32),
    pub(crate) dirty: bool,
}

impl ChartCache {
    pub(crate) fn new() -> Self {
        Self {
            texture: None,
            size: (0, 0),
            dirty: true,
        }
    }

    /// A failed render also clears `dirty`, so it is not retried until the
    /// response or the size changes.
    pub(crate) fn needs_redraw(&self, size: (u32, u32)) -> bool {
        self.dirty || self.size != size
    }
}

pub(crate) struct AppRuntime {
    pub(crate) form: LaunchForm,
    pub(crate) planet_idx: usize,
    pub(crate) response: Option<SimulationResponse>,
    pub(crate) chart: ChartCache,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let form = LaunchForm::default();
        let planet_idx = form.planet.index();
        Self {
            form,
            planet_idx,
            response: None,
            chart: ChartCache::new(),
        }
    }

    /// Builds a fresh request from the fields. Unparsable input leaves the
    /// previous response on screen.
    pub(crate) fn launch(&mut self) {
        self.form.planet = Planet::from_index(self.planet_idx);
        match SimulationRequest::from_form(&self.form) {
            Ok(request) => {
                info!(planet = %request.planet, "launch");
                self.response = Some(simulate(request));
                self.chart.dirty = true;
            }
            Err(err) => debug!(%err, "launch ignored"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.response = None;
        self.chart.dirty = true;
    }

    pub(crate) fn results_lines(&self) -> Vec<String> {
        let Some(response) = &self.response else {
            return vec![RESULTS_PLACEHOLDER.to_string()];
        };

        let mut lines: Vec<String> = response
            .summary
            .to_string()
            .lines()
            .map(str::to_string)
            .collect();
        if !response.landed() {
            lines.push("No real landing time".to_string());
        }
        lines.push(format!(
            "{} | g = {:.2} m/s^2 | {}",
            response.request.planet,
            response.request.params.gravity_mps2,
            response.request.issued_at.format("%H:%M:%S")
        ));
        lines
    }
}
