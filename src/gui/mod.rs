mod app;
mod config;
mod draw;

pub use app::App;
pub use config::Config;

use eframe::egui::{vec2, Context, ViewportBuilder};

/// Opens the viewer window and blocks until it is closed.
pub fn launch<F>(build: F) -> Result<(), eframe::Error>
where
    F: FnOnce(&Context) -> App + 'static,
{
    let [w, h] = Config::WINDOW_SIZE;
    let [min_w, min_h] = Config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(w, h))
            .with_min_inner_size(vec2(min_w, min_h)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        Config::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(build(&cc.egui_ctx)))),
    )
}
