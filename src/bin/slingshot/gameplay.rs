use std::path::Path;

use slingshot_blocks::export::export_trajectory_png;
use slingshot_blocks::sim::RecycleReason;
use tracing::warn;

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reload {
        state.reload();
    }

    if actions.toggle_options {
        state.show_options = !state.show_options;
    }

    if actions.open_graph {
        state.refresh_graph();
        state.graph.open = true;
    } else if actions.refresh_graph {
        state.refresh_graph();
    }

    if actions.close_graph {
        state.graph.open = false;
    }

    if actions.export_graph {
        export_graph(state);
    }
}

fn export_graph(state: &mut AppRuntime) {
    if !state.graph.open {
        state.refresh_graph();
    }
    let export = &state.config.export;
    match export_trajectory_png(
        &state.graph.points,
        Path::new(&export.dir),
        (export.width, export.height),
        chrono::Local::now().naive_local(),
    ) {
        Ok(path) => state.status_line = format!("Chart saved to {}", path.display()),
        Err(err) => {
            warn!(%err, "Trajectory export failed");
            state.status_line = format!("Export failed: {err}");
        }
    }
}

/// Runs every fixed step due this frame, recycling the projectile as soon as
/// it leaves the play area.
pub(crate) fn step_world(state: &mut AppRuntime, frame_dt: f32) {
    let steps = state.stepper.advance(frame_dt);
    let dt = state.stepper.step_s();
    for _ in 0..steps {
        state.world.step(dt);
        if let Some(reason) = state.world.recycle_if_outside() {
            state.dragging = false;
            state.status_line = match reason {
                RecycleReason::FellOut => "Ball fell out of the world, reloaded".to_string(),
                RecycleReason::PassedRightEdge => {
                    "Ball flew off to the right, reloaded".to_string()
                }
            };
        }
    }
}
