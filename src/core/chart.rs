//! Trajectory chart drawn with `plotters` into an in-memory RGB bitmap.
//!
//! The desktop simulator uploads the bitmap as a texture; nothing is written
//! to disk.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::TrajectoryResult;
use crate::core::error::ChartError;
use crate::core::report::annotate;
use crate::core::window::AxisWindow;

const MARKER_RADIUS: i32 = 5;
const X_GRID_LINES: usize = 10;
const Y_GRID_LINES: usize = 8;
const FONT_FAMILY: &str = "sans-serif";

#[derive(Clone, Copy, Debug)]
pub struct ChartTheme {
    pub background: RGBColor,
    pub legend_background: RGBColor,
    pub trajectory: RGBColor,
    pub apex: RGBColor,
    pub landing: RGBColor,
    pub grid: RGBColor,
    pub title: RGBColor,
    pub text: RGBColor,
}

pub const SPACE_THEME: ChartTheme = ChartTheme {
    background: RGBColor(0x0d, 0x0d, 0x1a),
    legend_background: RGBColor(0x1a, 0x1a, 0x2e),
    trajectory: RGBColor(0x00, 0xff, 0xff),
    apex: RGBColor(0xff, 0x00, 0xff),
    landing: RGBColor(0x00, 0xff, 0x00),
    grid: RGBColor(0x44, 0x44, 0x44),
    title: RGBColor(0x00, 0xff, 0xff),
    text: RGBColor(0xff, 0xff, 0xff),
};

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Title, tick labels, axis titles and legend. Off means no font is
    /// ever loaded.
    pub draw_text: bool,
    pub theme: ChartTheme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            draw_text: true,
            theme: SPACE_THEME,
        }
    }
}

/// Draws the chart and returns `width * height * 3` bytes, row-major RGB.
/// `None` draws the empty axes shown before the first launch.
pub fn render_rgb(
    result: Option<&TrajectoryResult>,
    options: &ChartOptions,
) -> Result<Vec<u8>, ChartError> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 {
        return Err(ChartError::EmptyCanvas { width, height });
    }

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(&root, result, options)?;
        root.present().map_err(drawing)?;
    }
    Ok(buffer)
}

pub fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
        .collect()
}

fn drawing<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

fn draw_chart(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    result: Option<&TrajectoryResult>,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    let theme = options.theme;
    root.fill(&theme.background).map_err(drawing)?;

    let window = result
        .map(|r| AxisWindow::fit(&r.samples, r.max_height_m))
        .unwrap_or_default();

    let mut builder = ChartBuilder::on(root);
    builder.margin(16);
    if options.draw_text {
        builder
            .caption(
                "Trajectory in Space",
                (FONT_FAMILY, 22).into_font().color(&theme.title),
            )
            .x_label_area_size(40)
            .y_label_area_size(56);
    }
    let mut chart = builder
        .build_cartesian_2d(window.x_min..window.x_max, 0f64..window.y_max)
        .map_err(drawing)?;

    if options.draw_text {
        chart
            .configure_mesh()
            .x_labels(X_GRID_LINES)
            .y_labels(Y_GRID_LINES)
            .bold_line_style(theme.grid)
            .light_line_style(theme.grid.mix(0.3))
            .axis_style(theme.text)
            .label_style((FONT_FAMILY, 13).into_font().color(&theme.text))
            .axis_desc_style((FONT_FAMILY, 14).into_font().color(&theme.text))
            .x_desc("Horizontal Distance (m)")
            .y_desc("Vertical Height (m)")
            .draw()
            .map_err(drawing)?;
    } else {
        chart
            .draw_series((0..=X_GRID_LINES).map(|i| {
                let x = window.x_min + window.x_span() * i as f64 / X_GRID_LINES as f64;
                PathElement::new(vec![(x, 0.0), (x, window.y_max)], theme.grid)
            }))
            .map_err(drawing)?;
        chart
            .draw_series((0..=Y_GRID_LINES).map(|i| {
                let y = window.y_max * i as f64 / Y_GRID_LINES as f64;
                PathElement::new(vec![(window.x_min, y), (window.x_max, y)], theme.grid)
            }))
            .map_err(drawing)?;
    }

    let Some(result) = result.filter(|r| !r.is_empty()) else {
        return Ok(());
    };

    let trajectory = theme.trajectory;
    chart
        .draw_series(LineSeries::new(
            result.samples.iter().map(|s| (s.distance_m, s.height_m)),
            trajectory.stroke_width(2),
        ))
        .map_err(drawing)?
        .label("Trajectory")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], trajectory.stroke_width(2))
        });

    let notes = annotate(result);
    if let Some(apex) = notes.apex {
        let color = theme.apex;
        chart
            .draw_series(std::iter::once(Circle::new(
                (apex.distance_m, apex.height_m),
                MARKER_RADIUS,
                color.filled(),
            )))
            .map_err(drawing)?
            .label("Max Height")
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, color.filled()));
    }
    if let Some(landing) = notes.landing {
        let color = theme.landing;
        chart
            .draw_series(std::iter::once(Circle::new(
                (landing.distance_m, landing.height_m),
                MARKER_RADIUS,
                color.filled(),
            )))
            .map_err(drawing)?
            .label("Landing Point")
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, color.filled()));
    }

    if options.draw_text {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(theme.legend_background)
            .border_style(theme.trajectory)
            .label_font((FONT_FAMILY, 13).into_font().color(&theme.text))
            .draw()
            .map_err(drawing)?;
    }

    Ok(())
}
