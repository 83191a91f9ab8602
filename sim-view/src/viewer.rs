//! Interactive rock–paper–scissors particle viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation engine and
//! configuration and implements [`eframe::App`] to drive the frame loop
//! and the control surface.

use eframe::App;
use glam::Vec2;
use sim_core::{config::Config, engine::Engine};

use crate::render;

/// Fixed logical canvas size; the engine bounds match it exactly.
const CANVAS_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// State of the frame loop.
///
/// `Stopped → Running ⇄ Paused`, and Reset returns to `Stopped` from
/// anywhere. While not `Running`, neither tick nor FPS bookkeeping runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Stopped,
    Running,
    Paused,
}

/// Main application state.
///
/// The per-frame update while `Running` is:
/// 1. Apply any control-surface changes (buttons, sliders).
/// 2. Advance the engine one tick with the current speed.
/// 3. Draw the canvas and update the FPS window.
/// 4. Request a repaint, which schedules the next frame.
///
/// Pause and reset are plain state flags, so an already-scheduled frame
/// observes them at its top and no-ops the simulation step.
pub struct Viewer {
    engine: Engine,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    state: RunState,
    start_error: Option<String>,

    fps: u32,
    frames: u32,
    fps_window_start: f64,
}

impl Viewer {
    /// Creates a stopped viewer with an empty engine and default
    /// configuration.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(CANVAS_SIZE),
            cfg: Config::default(),
            rng: rand::rng(),
            state: RunState::Stopped,
            start_error: None,
            fps: 0,
            frames: 0,
            fps_window_start: 0.0,
        }
    }

    /// Starts (or restarts) a run from the current configuration.
    ///
    /// On a validation error the engine keeps its prior collection and
    /// the run state is untouched; the message is shown in the UI until
    /// the next successful start.
    fn start(&mut self) {
        match self.engine.initialize(&self.cfg, &mut self.rng) {
            Ok(()) => {
                self.state = RunState::Running;
                self.start_error = None;
                self.fps = 0;
                self.frames = 0;
                self.fps_window_start = 0.0;
            }
            Err(e) => {
                self.start_error = Some(e.to_string());
            }
        }
    }

    /// Toggles between `Running` and `Paused`; no effect while stopped.
    fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stopped => RunState::Stopped,
        };
    }

    /// Stops the loop, empties the engine, and zeroes counts and FPS.
    fn reset(&mut self) {
        self.engine.clear();
        self.state = RunState::Stopped;
        self.start_error = None;
        self.fps = 0;
        self.frames = 0;
        self.fps_window_start = 0.0;
    }

    /// Label for the pause/resume button in the current state.
    fn pause_label(&self) -> &'static str {
        match self.state {
            RunState::Paused => "▶ Resume",
            _ => "⏸ Pause",
        }
    }

    /// Records one rendered frame at time `now` (seconds).
    ///
    /// Frames are counted within a ≥1 s window; when the window closes,
    /// the count becomes the reported FPS and a new window starts.
    fn note_frame(&mut self, now: f64) {
        if self.fps_window_start == 0.0 {
            self.fps_window_start = now;
        }

        self.frames += 1;
        if now - self.fps_window_start >= 1.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.fps_window_start = now;
        }
    }

    /// Builds the top panel (start, pause/resume, reset, last error).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.start();
                }

                let can_pause = self.state != RunState::Stopped;
                if ui
                    .add_enabled(can_pause, egui::Button::new(self.pause_label()))
                    .clicked()
                {
                    self.toggle_pause();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if let Some(err) = &self.start_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        });
    }

    /// Builds the bottom status bar (per-kind counts and FPS).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let counts = self.engine.counts();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("fps = {}", self.fps));
                ui.separator();
                ui.label(format!("scissors = {}", counts.scissors));
                ui.label(format!("paper = {}", counts.paper));
                ui.label(format!("rock = {}", counts.rock));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    ///
    /// Particle count and radius take effect on the next Start; speed
    /// and the grid overlay apply live.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Simulation");

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("particles:");
                    ui.add(
                        egui::DragValue::new(&mut self.cfg.particle_count)
                            .range(1..=500)
                            .speed(1.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("radius:");
                    ui.add(
                        egui::DragValue::new(&mut self.cfg.radius)
                            .range(1.0..=50.0)
                            .speed(0.5),
                    );
                });

                ui.separator();
                ui.add(egui::Slider::new(&mut self.cfg.speed, 0.0..=5.0).text("Speed"));
                ui.checkbox(&mut self.cfg.show_grid, "Show grid");
            });
    }

    /// Builds the central canvas: advances the simulation while running,
    /// then draws the grid overlay and the particles.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, _response) = ui.allocate_exact_size(
                egui::vec2(CANVAS_SIZE.x, CANVAS_SIZE.y),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);

            if self.state == RunState::Running {
                self.engine.tick(self.cfg.speed);
                let now = ctx.input(|i| i.time);
                self.note_frame(now);
                ctx.request_repaint();
            }

            render::clear_canvas(&painter, rect);
            if self.cfg.show_grid {
                render::draw_grid(&painter, rect);
            }
            render::draw_particles(&painter, rect, &self.engine.particles, self.engine.radius());
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_populates_engine_and_enters_running() {
        let mut viewer = Viewer::new();
        viewer.cfg.particle_count = 25;

        viewer.start();

        assert_eq!(viewer.state, RunState::Running);
        assert_eq!(viewer.engine.len(), 25);
        assert!(viewer.start_error.is_none());
        assert_eq!(viewer.engine.counts().total(), 25);
    }

    #[test]
    fn failed_start_keeps_prior_run_untouched() {
        let mut viewer = Viewer::new();
        viewer.cfg.particle_count = 25;
        viewer.start();
        let before = viewer.engine.particles.clone();

        viewer.cfg.radius = -1.0;
        viewer.start();

        assert!(viewer.start_error.is_some());
        assert_eq!(viewer.state, RunState::Running);
        assert_eq!(viewer.engine.particles, before);
    }

    #[test]
    fn pause_resume_toggles_only_while_started() {
        let mut viewer = Viewer::new();

        // Stopped: toggling does nothing.
        viewer.toggle_pause();
        assert_eq!(viewer.state, RunState::Stopped);
        assert_eq!(viewer.pause_label(), "⏸ Pause");

        viewer.cfg.particle_count = 10;
        viewer.start();

        viewer.toggle_pause();
        assert_eq!(viewer.state, RunState::Paused);
        assert_eq!(viewer.pause_label(), "▶ Resume");

        viewer.toggle_pause();
        assert_eq!(viewer.state, RunState::Running);
        assert_eq!(viewer.pause_label(), "⏸ Pause");
    }

    #[test]
    fn reset_clears_everything() {
        let mut viewer = Viewer::new();
        viewer.cfg.particle_count = 10;
        viewer.start();
        viewer.note_frame(0.5);
        viewer.note_frame(1.6);

        viewer.reset();

        assert_eq!(viewer.state, RunState::Stopped);
        assert!(viewer.engine.is_empty());
        assert_eq!(viewer.engine.counts().total(), 0);
        assert_eq!(viewer.fps, 0);
        assert_eq!(viewer.frames, 0);
    }

    #[test]
    fn fps_reports_frames_per_one_second_window() {
        let mut viewer = Viewer::new();

        // 60 frames within the first second: window still open.
        for i in 0..60 {
            viewer.note_frame(0.1 + i as f64 * 0.01);
        }
        assert_eq!(viewer.fps, 0);

        // The frame that closes the window reports the count.
        viewer.note_frame(1.2);
        assert_eq!(viewer.fps, 61);
        assert_eq!(viewer.frames, 0);

        // The next window counts afresh.
        viewer.note_frame(1.5);
        assert_eq!(viewer.fps, 61);
        viewer.note_frame(2.3);
        assert_eq!(viewer.fps, 2);
    }

    #[test]
    fn restart_respawns_with_the_current_count() {
        let mut viewer = Viewer::new();
        viewer.cfg.particle_count = 10;
        viewer.start();
        assert_eq!(viewer.engine.len(), 10);

        viewer.cfg.particle_count = 30;
        viewer.start();
        assert_eq!(viewer.engine.len(), 30);
        assert_eq!(viewer.state, RunState::Running);
    }
}
