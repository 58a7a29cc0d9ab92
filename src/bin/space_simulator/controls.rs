use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use space_trajectory::core::planet::Planet;

use crate::constants::{PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) clear: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            clear: self.clear || other.clear,
        }
    }
}

// Letter keys would fire while typing into the fields, so only Enter.
pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        clear: false,
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let planet_labels = Planet::ALL.map(Planet::label);

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch Controls")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.input_text(hash!(), "Velocity (m/s)", &mut state.form.velocity);
            ui.input_text(hash!(), "Angle (deg)", &mut state.form.angle);
            ui.input_text(hash!(), "Gravity (m/s^2)", &mut state.form.gravity);
            ui.input_text(hash!(), "Height (m)", &mut state.form.height);
            ui.combo_box(hash!(), "Planet", &planet_labels, &mut state.planet_idx);
            ui.label(None, "Gravity field is used only for Custom.");
            ui.separator();
            if ui.button(None, "Launch (Enter)") {
                actions.launch = true;
            }
            if ui.button(None, "Clear") {
                actions.clear = true;
            }
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.clear {
        state.clear();
    }
    if actions.launch {
        state.launch();
    }
}
