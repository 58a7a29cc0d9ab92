use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const TITLE_Y: f32 = 38.0;
pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 64.0;
pub const PANEL_W: f32 = 340.0;
pub const PANEL_H: f32 = 250.0;
pub const RESULTS_Y: f32 = PANEL_Y + PANEL_H + 36.0;
pub const RESULTS_LINE_PX: f32 = 26.0;

pub const CHART_LEFT: f32 = PANEL_X + PANEL_W + 24.0;
pub const CHART_TOP: f32 = PANEL_Y;
pub const CHART_RIGHT_MARGIN: f32 = 20.0;
pub const CHART_BOTTOM_MARGIN: f32 = 20.0;

// #0d0d1a, matches the chart background
pub const SPACE_BG: Color = Color::new(0.051, 0.051, 0.102, 1.0);
pub const TITLE_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const RESULTS_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const MUTED_TEXT_COLOR: Color = Color::new(0.62, 0.65, 0.72, 1.0);
pub const CHART_FRAME_COLOR: Color = Color::new(0.27, 0.27, 0.27, 1.0);
