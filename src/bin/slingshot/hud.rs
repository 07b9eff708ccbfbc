use macroquad::prelude::*;

use crate::constants::{STATUS_Y_OFFSET, TOOLBAR_HEIGHT};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, screen_w: f32, screen_h: f32, font: Option<&Font>) {
    let text_color = Color::from_rgba(30, 30, 35, 255);

    draw_rectangle(
        0.0,
        0.0,
        screen_w,
        TOOLBAR_HEIGHT,
        Color::from_rgba(210, 220, 235, 255),
    );

    let phase = phase_text(state.world.phase(), state.dragging);
    let samples = state.world.trajectory().current().len();
    let summary = format!("State: {phase} | Samples: {samples}");
    let size = measure_text(&summary, font, 18, 1.0);
    draw_ui_text(
        &summary,
        screen_w - size.width - 12.0,
        TOOLBAR_HEIGHT - 10.0,
        18,
        text_color,
        font,
    );

    draw_ui_text(
        &state.status_line,
        12.0,
        screen_h - STATUS_Y_OFFSET,
        18,
        DARKGRAY,
        font,
    );
}
