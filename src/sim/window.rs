use std::ops::Range;

use macroquad::math::{Rect, Vec2, vec2};

const X_PADDING_RATIO: f32 = 0.06;
const Y_PADDING_RATIO: f32 = 0.10;

/// Axis-aligned extent of a set of trajectory samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn of(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: acc.min.min(*p),
                max: acc.max.max(*p),
            },
        ))
    }

    /// Spans are floored at one world unit so flat or vertical paths still plot.
    pub fn span(&self) -> Vec2 {
        (self.max - self.min).max(Vec2::ONE)
    }

    /// Data window with a little headroom on both axes, for chart export.
    pub fn padded_ranges(&self) -> (Range<f32>, Range<f32>) {
        let span = self.span();
        let x_pad = span.x * X_PADDING_RATIO;
        let y_pad = span.y * Y_PADDING_RATIO;
        (
            (self.min.x - x_pad)..(self.min.x + span.x + x_pad),
            (self.min.y - y_pad)..(self.min.y + span.y + y_pad),
        )
    }
}

/// Maps world samples into `area` (screen space, y down), stretching the
/// bounding box of the samples over the whole area.
pub fn plot_points(points: &[Vec2], area: Rect) -> Vec<Vec2> {
    let Some(bounds) = Bounds::of(points) else {
        return Vec::new();
    };
    let span = bounds.span();

    points
        .iter()
        .map(|p| {
            let norm_x = (p.x - bounds.min.x) / span.x;
            let norm_y = (p.y - bounds.min.y) / span.y;
            vec2(
                area.x + norm_x * area.w,
                area.y + (1.0 - norm_y) * area.h,
            )
        })
        .collect()
}

/// Inner plotting rectangle of a panel, `margin` pixels in from each edge.
pub fn inset(panel: Rect, margin: f32) -> Rect {
    Rect::new(
        panel.x + margin,
        panel.y + margin,
        (panel.w - 2.0 * margin).max(0.0),
        (panel.h - 2.0 * margin).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = Bounds::of(&[vec2(3.0, 9.0), vec2(-1.0, 4.0), vec2(7.0, 5.0)])
            .expect("non-empty input");
        assert_eq!(bounds.min, vec2(-1.0, 4.0));
        assert_eq!(bounds.max, vec2(7.0, 9.0));
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn stretches_path_over_plot_area() {
        let area = Rect::new(30.0, 30.0, 340.0, 240.0);
        let scaled = plot_points(&[vec2(150.0, 180.0), vec2(300.0, 380.0), vec2(450.0, 64.0)], area);

        // Left-most sample lands on the left edge, highest on the top edge,
        // lowest on the bottom edge.
        assert_close(scaled[0].x, 30.0, 1e-4);
        assert_close(scaled[1].y, 30.0, 1e-4);
        assert_close(scaled[2].x, 370.0, 1e-4);
        assert_close(scaled[2].y, 270.0, 1e-4);
    }

    #[test]
    fn flat_path_does_not_divide_by_zero() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scaled = plot_points(&[vec2(10.0, 64.0), vec2(10.5, 64.0)], area);
        assert!(scaled.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_close(scaled[0].y, 50.0, 1e-4);
        assert_close(scaled[1].x, 50.0, 1e-4);
    }

    #[test]
    fn padded_ranges_add_headroom() {
        let bounds = Bounds {
            min: vec2(100.0, 0.0),
            max: vec2(200.0, 50.0),
        };
        let (x, y) = bounds.padded_ranges();
        assert_close(x.start, 94.0, 1e-4);
        assert_close(x.end, 206.0, 1e-4);
        assert_close(y.start, -5.0, 1e-4);
        assert_close(y.end, 55.0, 1e-4);
    }

    #[test]
    fn inset_never_goes_negative() {
        let inner = inset(Rect::new(0.0, 0.0, 40.0, 300.0), 30.0);
        assert_eq!(inner.w, 0.0);
        assert_eq!(inner.h, 240.0);
    }
}
