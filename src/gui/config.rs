use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_TITLE: &'static str = "Life-like cellular automaton";
    pub const WINDOW_SIZE: [f32; 2] = [1280., 800.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 360.];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const MAX_FPS: f64 = 10.;
    pub const MAX_FPS_RANGE: std::ops::RangeInclusive<f64> = 1.0..=120.0;
}
