use macroquad::prelude::*;
use macroquad::ui::root_ui;
use slingshot_blocks::sim::window::{inset, plot_points};

use crate::constants::{GRAPH_DASH_PX, GRAPH_MARGIN, GRAPH_PANEL_H, GRAPH_PANEL_W, TOOLBAR_HEIGHT};
use crate::controls::FrameActions;
use crate::render::draw_ui_text;
use crate::state::GraphPanel;

pub(crate) fn graph_panel_rect(screen_w: f32) -> Rect {
    Rect::new(
        screen_w - GRAPH_PANEL_W - 12.0,
        TOOLBAR_HEIGHT + 12.0,
        GRAPH_PANEL_W,
        GRAPH_PANEL_H,
    )
}

fn draw_dashed_line(a: Vec2, b: Vec2, color: Color) {
    let length = a.distance(b);
    if length <= 0.0 {
        return;
    }
    let dir = (b - a) / length;
    let mut t = 0.0;
    while t < length {
        let start = a + dir * t;
        let end = a + dir * (t + GRAPH_DASH_PX).min(length);
        draw_line(start.x, start.y, end.x, end.y, 1.0, color);
        t += GRAPH_DASH_PX * 2.0;
    }
}

/// Trajectory chart in its own panel, with its action buttons underneath.
pub(crate) fn draw_graph_panel(
    graph: &GraphPanel,
    screen_w: f32,
    font: Option<&Font>,
) -> FrameActions {
    if !graph.open {
        return FrameActions::default();
    }

    let panel = graph_panel_rect(screen_w);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, WHITE);
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, DARKGRAY);
    draw_ui_text(
        "Trajectory",
        panel.x + 8.0,
        panel.y + 20.0,
        18,
        DARKGRAY,
        font,
    );

    let area = inset(panel, GRAPH_MARGIN);
    let corners = [
        vec2(area.x, area.y),
        vec2(area.x + area.w, area.y),
        vec2(area.x + area.w, area.y + area.h),
        vec2(area.x, area.y + area.h),
    ];
    for i in 0..corners.len() {
        draw_dashed_line(corners[i], corners[(i + 1) % corners.len()], BLACK);
    }

    if graph.points.len() >= 2 {
        let scaled = plot_points(&graph.points, area);
        for pair in scaled.windows(2) {
            draw_line(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                2.0,
                Color::from_rgba(70, 120, 255, 255),
            );
        }
        if let Some(last) = scaled.last() {
            draw_circle(last.x, last.y, 3.0, Color::from_rgba(200, 80, 80, 255));
        }
    } else {
        draw_ui_text(
            "No trajectory yet",
            area.x + 10.0,
            area.y + area.h * 0.5,
            18,
            GRAY,
            font,
        );
    }

    let buttons_y = panel.y + panel.h + 6.0;
    let mut ui = root_ui();
    FrameActions {
        refresh_graph: ui.button(vec2(panel.x, buttons_y), "Refresh"),
        export_graph: ui.button(vec2(panel.x + 80.0, buttons_y), "Export PNG (E)"),
        close_graph: ui.button(vec2(panel.x + 210.0, buttons_y), "Close"),
        ..Default::default()
    }
}
