use macroquad::prelude::*;
use space_trajectory::core::chart::{ChartOptions, render_rgb, rgb_to_rgba};
use tracing::warn;

use crate::constants::{
    CHART_BOTTOM_MARGIN, CHART_FRAME_COLOR, CHART_LEFT, CHART_RIGHT_MARGIN, CHART_TOP,
    MUTED_TEXT_COLOR, RESULTS_COLOR, RESULTS_LINE_PX, RESULTS_Y, TITLE_COLOR, TITLE_Y,
};
use crate::state::AppRuntime;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn chart_rect(screen_w: f32, screen_h: f32) -> Rect {
    let w = (screen_w - CHART_RIGHT_MARGIN - CHART_LEFT).max(1.0);
    let h = (screen_h - CHART_BOTTOM_MARGIN - CHART_TOP).max(1.0);
    Rect::new(CHART_LEFT, CHART_TOP, w, h)
}

fn chart_pixels(rect: Rect) -> (u32, u32) {
    let w = rect.w.round().clamp(1.0, u16::MAX as f32) as u32;
    let h = rect.h.round().clamp(1.0, u16::MAX as f32) as u32;
    (w, h)
}

/// Redraws the plotters bitmap when the response or the chart size changed.
pub(crate) fn refresh_chart(state: &mut AppRuntime, rect: Rect) {
    let size = chart_pixels(rect);
    if !state.chart.needs_redraw(size) {
        return;
    }

    let result = state.response.as_ref().map(|r| &r.result);
    let options = ChartOptions {
        width: size.0,
        height: size.1,
        ..ChartOptions::default()
    };

    // Without a usable system font, fall back to the unlabeled chart.
    let rgb = render_rgb(result, &options).or_else(|err| {
        warn!(%err, "labeled chart failed; drawing without text");
        render_rgb(
            result,
            &ChartOptions {
                draw_text: false,
                ..options
            },
        )
    });

    state.chart.texture = match rgb {
        Ok(rgb) => {
            let texture = Texture2D::from_rgba8(size.0 as u16, size.1 as u16, &rgb_to_rgba(&rgb));
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(err) => {
            warn!(%err, "chart rendering failed");
            None
        }
    };
    state.chart.size = size;
    state.chart.dirty = false;
}

pub(crate) fn draw_chart(state: &AppRuntime, rect: Rect) {
    if let Some(texture) = &state.chart.texture {
        draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.5, CHART_FRAME_COLOR);
}

pub(crate) fn draw_header(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "Space Trajectory Simulator",
        left,
        TITLE_Y,
        30,
        TITLE_COLOR,
        font,
    );
}

pub(crate) fn draw_results_block(state: &AppRuntime, left: f32, font: Option<&Font>) {
    let color = if state.response.is_some() {
        RESULTS_COLOR
    } else {
        MUTED_TEXT_COLOR
    };
    for (i, line) in state.results_lines().iter().enumerate() {
        let size = if i < 3 { 22 } else { 18 };
        draw_ui_text(
            line,
            left,
            RESULTS_Y + (i as f32 * RESULTS_LINE_PX),
            size,
            color,
            font,
        );
    }
}
