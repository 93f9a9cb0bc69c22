use super::Config;
use crate::{read_log_file, FpsLimiter, Grid, LiveFrame, Result};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use egui_file::FileDialog;
use std::{path::Path, thread::JoinHandle};

/// Where the viewer takes its generations from.
pub(super) enum Source {
    /// Generations published by an evolution running on another thread.
    Live {
        frame: LiveFrame,
        worker: Option<JoinHandle<Result<Grid>>>,
    },
    /// Generations read back from a step log.
    Replay { frames: Vec<Grid>, index: usize },
}

pub struct App {
    pub(super) source: Source,
    pub(super) current: Option<(usize, Grid)>, // Step number and grid on screen.
    pub(super) total_steps: usize,             // Number of steps of the run.
    pub(super) is_paused: bool,                // Flag indicating whether the replay is paused.
    pub(super) do_one_step: bool,              // Show one more frame and pause.
    pub(super) max_fps: f64,
    pub(super) status: String, // Last message for the user.
    pub(super) texture: TextureHandle,
    pub(super) pixels: Vec<u8>,
    pub(super) texture_dirty: bool,
    pub(super) fps_limiter: FpsLimiter,
    pub(super) open_dialog: Option<FileDialog>,
}

impl App {
    fn new(ctx: &Context, source: Source, total_steps: usize) -> Self {
        Self {
            source,
            current: None,
            total_steps,
            is_paused: false,
            do_one_step: false,
            max_fps: Config::MAX_FPS,
            status: String::new(),
            texture: ctx.load_texture("cells", ColorImage::default(), TextureOptions::NEAREST),
            pixels: vec![],
            texture_dirty: false,
            fps_limiter: FpsLimiter::default(),
            open_dialog: None,
        }
    }

    /// Shows generations published to `frame` by the evolution in `worker`.
    pub fn live(
        ctx: &Context,
        frame: LiveFrame,
        worker: JoinHandle<Result<Grid>>,
        total_steps: usize,
    ) -> Self {
        let source = Source::Live {
            frame,
            worker: Some(worker),
        };
        let mut app = Self::new(ctx, source, total_steps);
        app.status = "Running...".to_string();
        app
    }

    /// Plays back generations read from a step log.
    pub fn replay(ctx: &Context, frames: Vec<Grid>) -> Self {
        let total_steps = frames.len();
        let mut app = Self::new(ctx, Source::Replay { frames, index: 0 }, total_steps);
        app.show_replay_frame();
        app
    }

    pub(super) fn is_live(&self) -> bool {
        matches!(self.source, Source::Live { .. })
    }

    pub(super) fn load_log(&mut self, path: &Path) {
        match read_log_file(path) {
            Ok(frames) if frames.is_empty() => {
                self.status = format!("{} holds no generations", path.display());
            }
            Ok(frames) => {
                log::info!("Loaded {} generations from {}", frames.len(), path.display());
                self.total_steps = frames.len();
                self.source = Source::Replay { frames, index: 0 };
                self.is_paused = false;
                self.status = format!("Replaying {}", path.display());
                self.show_replay_frame();
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                self.status = e.to_string();
            }
        }
    }

    pub(super) fn restart(&mut self) {
        if let Source::Replay { index, .. } = &mut self.source {
            *index = 0;
        }
        self.show_replay_frame();
    }

    fn show_replay_frame(&mut self) {
        if let Source::Replay { frames, index } = &self.source {
            if let Some(grid) = frames.get(*index) {
                self.current = Some((*index + 1, grid.clone()));
                self.texture_dirty = true;
            }
        }
    }

    fn update_frame(&mut self) {
        match &mut self.source {
            Source::Live { frame, worker } => {
                if let Some(latest) = frame.take() {
                    self.current = Some(latest);
                    self.texture_dirty = true;
                }
                if worker.as_ref().is_some_and(|w| w.is_finished()) {
                    self.status = match worker.take().map(JoinHandle::join) {
                        Some(Ok(Ok(_))) => "Finished".to_string(),
                        Some(Ok(Err(e))) => {
                            log::error!("Automaton run failed: {}", e);
                            format!("Run failed: {e}")
                        }
                        _ => "Run panicked".to_string(),
                    };
                }
            }
            Source::Replay { frames, index } => {
                if self.is_paused && !self.do_one_step {
                    return;
                }
                self.do_one_step = false;
                if *index + 1 < frames.len() {
                    *index += 1;
                    self.show_replay_frame();
                } else {
                    self.is_paused = true;
                }
            }
        }
    }

    fn poll_dialog(&mut self, ctx: &Context) {
        let selected = self.open_dialog.as_mut().and_then(|dialog| {
            if dialog.show(ctx).selected() {
                dialog.path().map(|p| p.to_path_buf())
            } else {
                None
            }
        });
        if let Some(path) = selected {
            self.open_dialog = None;
            self.load_log(&path);
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_dialog(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);
                self.update_frame();
                self.draw(ui);
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
