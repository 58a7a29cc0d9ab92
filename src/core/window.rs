use crate::core::ballistics::TrajectorySample;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Plot bounds in world metres. The ground (`y = 0`) is always the bottom
/// edge; `x_min` only drops below zero for shots that travel backwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for AxisWindow {
    fn default() -> Self {
        Self::from_extents(0.0, 0.0, 0.0)
    }
}

impl AxisWindow {
    pub fn fit(samples: &[TrajectorySample], max_height_m: f64) -> Self {
        let (lo, hi, top) = samples.iter().fold(
            (0.0f64, 0.0f64, max_height_m.max(0.0)),
            |(lo, hi, top), s| (lo.min(s.distance_m), hi.max(s.distance_m), top.max(s.height_m)),
        );
        Self::from_extents(lo, hi, top)
    }

    fn from_extents(raw_min_x: f64, raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_x_span = (raw_max_x - raw_min_x).max(MIN_SPAN_M);
        let raw_y_span = raw_max_y.max(MIN_SPAN_M);
        let x_pad = raw_x_span * X_PADDING_RATIO;
        let y_pad = raw_y_span * Y_PADDING_RATIO;

        let mut x_min = if raw_min_x < 0.0 { raw_min_x - x_pad } else { 0.0 };
        let mut x_max = if raw_max_x > 0.0 { raw_max_x + x_pad } else { 0.0 };
        let mut y_max = (raw_max_y + y_pad).max(MIN_SPAN_M);

        let x_span = (x_max - x_min).max(MIN_SPAN_M);
        if x_span / y_max < DISTANCE_TO_HEIGHT_RATIO {
            let widened = y_max * DISTANCE_TO_HEIGHT_RATIO;
            // Grow towards the side the shot went.
            if x_max <= 0.0 && x_min < 0.0 {
                x_min = x_max - widened;
            } else {
                x_max = x_min + widened;
            }
        } else {
            y_max = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self { x_min, x_max, y_max }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }
}
