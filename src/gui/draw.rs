use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, Image, RichText, Slider, Stroke, TextureOptions, Ui,
    Vec2,
};
use egui_file::FileDialog;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_playback_controls(&mut self, ui: &mut Ui) {
        let step = self.current.as_ref().map_or(0, |(step, _)| *step);
        ui.label(Self::new_text(&format!(
            "Step: {} / {}",
            step, self.total_steps
        )));
        if let Some((_, grid)) = &self.current {
            ui.label(Self::new_text(&format!(
                "Grid: {}x{}, alive: {}",
                grid.rows(),
                grid.cols(),
                grid.population()
            )));
        }

        // the live run is paced by the evolution itself
        ui.add_enabled_ui(!self.is_live(), |ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.is_paused = !self.is_paused;
            }

            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Next step")).clicked() {
                    self.do_one_step = true;
                }
                if ui.add(Self::new_button("Restart")).clicked() {
                    self.restart();
                }
            });
        });

        if ui.add(Self::new_button("Open log")).clicked() {
            let mut dialog = FileDialog::open_file(None);
            dialog.open();
            self.open_dialog = Some(dialog);
        }

        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, Config::MAX_FPS_RANGE).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_playback_controls(ui);
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_appearance_controls(ui);
                });
            });
        });
    }

    fn draw_cells(&mut self, ui: &mut Ui, area: Vec2) {
        let Some((_, grid)) = &self.current else {
            return;
        };
        let (rows, cols) = (grid.rows(), grid.cols());

        if self.texture_dirty {
            self.pixels.resize(4 * rows * cols, 0);
            grid.draw(&mut self.pixels);
            let image = ColorImage::from_rgba_unmultiplied([cols, rows], &self.pixels);
            self.texture.set(image, TextureOptions::NEAREST);
            self.texture_dirty = false;
        }

        // square cells, as large as the area allows
        let cell_px = (area.x / cols as f32).min(area.y / rows as f32);
        let size = Vec2::new(cell_px * cols as f32, cell_px * rows as f32);
        ui.add(Image::from_texture(SizedTexture::new(self.texture.id(), size)));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let field = Vec2::new(
            area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN,
            area.y,
        )
        .max(Vec2::ZERO);

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_cells(ui, field);
            });
        });
    }
}
