//! PNG export of the last trajectory, drawn with plotters.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use macroquad::math::Vec2;
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::sim::window::Bounds;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("need at least 2 trajectory samples to plot, got {0}")]
    NotEnoughPoints(usize),
    #[error("could not create '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

pub fn export_file_name(at: NaiveDateTime) -> String {
    format!("trajectory-{}.png", at.format("%Y%m%d-%H%M%S"))
}

/// Writes `dir/trajectory-<timestamp>.png` and returns its path.
pub fn export_trajectory_png(
    points: &[Vec2],
    dir: &Path,
    size: (u32, u32),
    at: NaiveDateTime,
) -> Result<PathBuf, PlotError> {
    let bounds = match Bounds::of(points) {
        Some(bounds) if points.len() >= 2 => bounds,
        _ => return Err(PlotError::NotEnoughPoints(points.len())),
    };

    std::fs::create_dir_all(dir).map_err(|source| PlotError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(export_file_name(at));
    draw_chart(points, bounds, &path, size).map_err(|err| PlotError::Draw(err.to_string()))?;
    info!(path = %path.display(), samples = points.len(), "Trajectory chart exported");
    Ok(path)
}

fn draw_chart(
    points: &[Vec2],
    bounds: Bounds,
    path: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = bounds.padded_ranges();
    let mut chart = ChartBuilder::on(&root)
        .caption("Projectile trajectory", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Distance (px)")
        .y_desc("Height (px)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.x, p.y)),
        RGBColor(70, 120, 255).stroke_width(2),
    ))?;

    if let Some(last) = points.last() {
        chart.draw_series(std::iter::once(Circle::new(
            (last.x, last.y),
            4,
            RGBColor(200, 80, 80).filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use macroquad::math::vec2;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 5))
            .expect("valid timestamp")
    }

    #[test]
    fn file_name_is_timestamped() {
        assert_eq!(export_file_name(noon()), "trajectory-20240501-123005.png");
    }

    #[test]
    fn writes_timestamped_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let points = [vec2(0.0, 0.0), vec2(50.0, 40.0), vec2(100.0, 10.0)];

        let path = export_trajectory_png(&points, dir.path(), (320, 240), noon())
            .expect("chart should render");

        assert_eq!(path, dir.path().join(export_file_name(noon())));
        let written = std::fs::metadata(&path).expect("file exists");
        assert!(written.len() > 0);
    }

    #[test]
    fn refuses_single_sample() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = export_trajectory_png(&[vec2(1.0, 2.0)], dir.path(), (320, 240), noon())
            .expect_err("one point cannot be plotted");
        assert!(matches!(err, PlotError::NotEnoughPoints(1)));

        let err = export_trajectory_png(&[], dir.path(), (320, 240), noon())
            .expect_err("empty path cannot be plotted");
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn reports_unwritable_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").expect("write");

        let err = export_trajectory_png(
            &[vec2(0.0, 0.0), vec2(1.0, 1.0)],
            &blocker.join("plots"),
            (320, 240),
            noon(),
        )
        .expect_err("parent is a file");
        assert!(matches!(err, PlotError::Io { .. }));
    }
}
