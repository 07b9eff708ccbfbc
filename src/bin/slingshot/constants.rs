use macroquad::prelude::Color;

pub const WINDOW_TITLE: &str = "Slingshot Blocks";
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const TOOLBAR_HEIGHT: f32 = 34.0;
pub const STATUS_Y_OFFSET: f32 = 14.0;

pub const BACKGROUND: Color = Color::new(230.0 / 255.0, 240.0 / 255.0, 1.0, 1.0);
pub const SLINGSHOT_ANCHOR_RADIUS: f32 = 10.0;

pub const GRAPH_PANEL_W: f32 = 400.0;
pub const GRAPH_PANEL_H: f32 = 300.0;
pub const GRAPH_MARGIN: f32 = 30.0;
pub const GRAPH_DASH_PX: f32 = 6.0;
