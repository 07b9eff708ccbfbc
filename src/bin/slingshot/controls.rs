use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use slingshot_blocks::sim::ShotPhase;

use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reload: bool,
    pub(crate) toggle_options: bool,
    pub(crate) open_graph: bool,
    pub(crate) refresh_graph: bool,
    pub(crate) export_graph: bool,
    pub(crate) close_graph: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reload: self.reload || other.reload,
            toggle_options: self.toggle_options || other.toggle_options,
            open_graph: self.open_graph || other.open_graph,
            refresh_graph: self.refresh_graph || other.refresh_graph,
            export_graph: self.export_graph || other.export_graph,
            close_graph: self.close_graph || other.close_graph,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reload: is_key_pressed(KeyCode::R),
        toggle_options: is_key_pressed(KeyCode::O),
        open_graph: is_key_pressed(KeyCode::G),
        export_graph: is_key_pressed(KeyCode::E),
        ..Default::default()
    }
}

pub(crate) fn draw_toolbar() -> FrameActions {
    let mut ui = root_ui();
    FrameActions {
        reload: ui.button(vec2(8.0, 6.0), "Reload (R)"),
        toggle_options: ui.button(vec2(104.0, 6.0), "Options (O)"),
        ..Default::default()
    }
}

pub(crate) fn draw_options_window(state: &mut AppRuntime) -> FrameActions {
    if !state.show_options {
        return FrameActions::default();
    }

    let mut actions = FrameActions::default();
    let still_open = widgets::Window::new(hash!(), vec2(18.0, 48.0), vec2(320.0, 130.0))
        .label("Options")
        .close_button(true)
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, "Show the chart of the last");
            ui.label(None, "computed trajectory.");
            ui.separator();
            if ui.button(None, "Graph (G)") {
                actions.open_graph = true;
            }
            ui.label(
                None,
                &format!(
                    "Samples recorded: {}",
                    state.world.trajectory().latest().len()
                ),
            );
        });
    if !still_open {
        state.show_options = false;
    }

    actions
}

pub(crate) fn phase_text(phase: ShotPhase, dragging: bool) -> &'static str {
    match phase {
        ShotPhase::Loaded if dragging => "Aiming",
        ShotPhase::Loaded => "Loaded",
        ShotPhase::Flying => "Flying",
    }
}
