use macroquad::prelude::*;
use macroquad::ui::root_ui;
use slingshot_blocks::sim::ShotPhase;
use slingshot_blocks::sim::coords::screen_to_world;
use slingshot_blocks::sim::launch::can_grab;
use tracing::debug;

use crate::state::AppRuntime;

/// Press on the loaded ball starts a drag, moving drags it, releasing launches.
pub(crate) fn update_drag(state: &mut AppRuntime, mouse_screen: Vec2, screen_h: f32) {
    let pointer = screen_to_world(mouse_screen, screen_h);

    if is_mouse_button_pressed(MouseButton::Left)
        && !state.dragging
        && state.world.phase() == ShotPhase::Loaded
        && !root_ui().is_mouse_over(mouse_screen)
        && can_grab(
            pointer,
            state.world.projectile_position(),
            state.world.projectile_radius(),
            state.config.slingshot.grab_radius_factor,
        )
    {
        state.dragging = true;
        debug!("Drag started");
    }

    if !state.dragging {
        return;
    }

    if is_mouse_button_down(MouseButton::Left) {
        state.world.drag_to(pointer);
        return;
    }

    state.dragging = false;
    if let Some(velocity) = state.world.launch(pointer) {
        state.status_line = format!("Launched at {:.0} px/s", velocity.length());
    }
}
