use macroquad::prelude::*;
use slingshot_blocks::sim::Shape;
use slingshot_blocks::sim::coords::world_to_screen;

use crate::constants::{BACKGROUND, SLINGSHOT_ANCHOR_RADIUS};

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

pub(crate) fn draw_background() {
    clear_background(BACKGROUND);
}

pub(crate) fn draw_slingshot(origin: Vec2, stretched: Option<Vec2>, screen_h: f32) {
    let o = world_to_screen(origin, screen_h);
    draw_circle(
        o.x,
        o.y,
        SLINGSHOT_ANCHOR_RADIUS,
        Color::from_rgba(120, 70, 40, 255),
    );
    draw_circle_lines(
        o.x,
        o.y,
        SLINGSHOT_ANCHOR_RADIUS,
        6.0,
        Color::from_rgba(80, 50, 30, 255),
    );

    if let Some(stretched) = stretched {
        let s = world_to_screen(stretched, screen_h);
        draw_line(o.x, o.y, s.x, s.y, 3.0, Color::from_rgba(60, 30, 20, 255));
    }
}

pub(crate) fn draw_shapes(shapes: &[Shape], screen_h: f32) {
    for shape in shapes {
        match shape {
            Shape::Circle { center, radius } => draw_ball(*center, *radius, screen_h),
            Shape::Polygon(vertices) => draw_block(vertices, screen_h),
            Shape::Segment {
                a,
                b,
                half_thickness,
            } => {
                let a = world_to_screen(*a, screen_h);
                let b = world_to_screen(*b, screen_h);
                draw_line(
                    a.x,
                    a.y,
                    b.x,
                    b.y,
                    half_thickness * 2.0,
                    Color::from_rgba(50, 100, 50, 255),
                );
            }
        }
    }
}

fn draw_ball(center: Vec2, radius: f32, screen_h: f32) {
    let c = world_to_screen(center, screen_h);
    draw_circle(c.x, c.y, radius, Color::from_rgba(90, 160, 255, 255));
    draw_circle_lines(c.x, c.y, radius, 2.0, BLACK);
}

/// Blocks are convex, so a triangle fan from the first vertex fills them.
fn draw_block(vertices: &[Vec2], screen_h: f32) {
    if vertices.len() < 3 {
        return;
    }
    let screen: Vec<Vec2> = vertices
        .iter()
        .map(|v| world_to_screen(*v, screen_h))
        .collect();

    let fill = Color::from_rgba(200, 140, 100, 255);
    for pair in screen[1..].windows(2) {
        draw_triangle(screen[0], pair[0], pair[1], fill);
    }
    for (i, a) in screen.iter().enumerate() {
        let b = screen[(i + 1) % screen.len()];
        draw_line(a.x, a.y, b.x, b.y, 1.0, BLACK);
    }
}

pub(crate) fn draw_trajectory(points: &[Vec2], screen_h: f32) {
    if points.len() < 2 {
        return;
    }
    let color = Color::from_rgba(255, 80, 80, 180);
    let mut prev = world_to_screen(points[0], screen_h);
    for point in points.iter().skip(1).copied() {
        let cur = world_to_screen(point, screen_h);
        draw_line(prev.x, prev.y, cur.x, cur.y, 2.0, color);
        prev = cur;
    }
}
