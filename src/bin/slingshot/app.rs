use std::sync::OnceLock;

use macroquad::prelude::*;
use slingshot_blocks::config::GameConfig;
use tracing::{info, warn};

use crate::constants::{MSAA_SAMPLES, UI_FONT_PATH, WINDOW_TITLE};
use crate::controls::{draw_options_window, draw_toolbar, hotkey_actions};
use crate::gameplay::{apply_actions, step_world};
use crate::graph::draw_graph_panel;
use crate::hud::draw_hud;
use crate::input::update_drag;
use crate::render::{draw_background, draw_shapes, draw_slingshot, draw_trajectory};
use crate::state::AppRuntime;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Loaded once; the window size and the game share the same values.
fn game_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        GameConfig::load().unwrap_or_else(|err| {
            warn!(%err, "Falling back to built-in configuration");
            GameConfig::default()
        })
    })
}

pub(crate) fn window_conf() -> Conf {
    // Runs before `run`, so the subscriber has to exist before the config loads.
    slingshot_blocks::init_logging();
    let config = game_config();
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: config.world.width as i32,
        window_height: config.world.height as i32,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let config = game_config().clone();
    info!(?config.world, "Starting game");
    let mut state = AppRuntime::new(config);

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions()
            .merge(draw_toolbar())
            .merge(draw_options_window(&mut state));
        apply_actions(&mut state, actions);

        let mouse = mouse_position();
        update_drag(&mut state, vec2(mouse.0, mouse.1), screen_h);
        step_world(&mut state, frame_dt);

        draw_background();
        let (origin, stretched) = state.slingshot_band();
        draw_slingshot(origin, stretched, screen_h);
        draw_shapes(&state.world.shapes(), screen_h);
        draw_trajectory(state.world.trajectory().current(), screen_h);
        draw_hud(&state, screen_w, screen_h, ui_font.as_ref());

        let graph_actions = draw_graph_panel(&state.graph, screen_w, ui_font.as_ref());
        apply_actions(&mut state, graph_actions);

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_loaded_once_and_shared() {
        let first = game_config();
        let second = game_config();
        assert!(std::ptr::eq(first, second));
        assert!(first.validate().is_ok());
    }
}
