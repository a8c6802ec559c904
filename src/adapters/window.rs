//! # Window Adapter
//!
//! Native window built on eframe. Runs one simulation step per frame, paints
//! the canvas and plots the live particle count.

use std::time::Duration;

/// The `egui` re-export for building native GUIs with the eframe framework.
use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
/// Line plot of the particle count.
use egui_plot::{Line, Plot, PlotPoints};

use crate::adapters::Canvas;
use crate::config::SimulationParams;
use crate::core::{Color, Container, ShapeKind};
use crate::ports::Renderer;
use crate::scenario::Scenario;

const SIDE_PANEL_WIDTH: f32 = 220.0;

/// Map a palette color onto egui's.
pub fn color32(color: Color) -> Color32 {
    match color {
        Color::Red => Color32::RED,
        Color::Yellow => Color32::YELLOW,
        Color::Blue => Color32::BLUE,
        Color::Green => Color32::GREEN,
        Color::Magenta => Color32::from_rgb(255, 0, 255),
        Color::Black => Color32::BLACK,
    }
}

/// Application state: the container, what is on screen, and the run plan.
pub struct DemonApp {
    container: Container,
    canvas: Canvas,
    remaining: u32,
    running: bool,
    finished: bool,
    frame_pause: Duration,
    /// `[step, live particles]` after every step, for the plot.
    history: Vec<[f64; 2]>,
    report: String,
}

impl DemonApp {
    /// Create the container, show it and load `scenario`.
    pub fn new(params: &SimulationParams, scenario: &Scenario) -> Self {
        let mut container = Container::new();
        container.create(params.width, params.height);
        container.make_visible();
        scenario.populate(&mut container);

        let mut canvas = Canvas::new();
        canvas.apply_all(container.drain_intents());
        let report = container.census().to_string();

        Self {
            history: vec![[0.0, container.particles().len() as f64]],
            container,
            canvas,
            remaining: params.steps,
            running: true,
            finished: false,
            frame_pause: params.pause(),
            report,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn history(&self) -> &[[f64; 2]] {
        &self.history
    }

    /// Frame logic without any drawing: one step if running, then flush the
    /// intents to the canvas. Once the step budget is spent the final census
    /// is printed and the container finished. Returns `true` on the frame
    /// that finishes.
    pub fn advance_frame(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.running && self.remaining > 0 {
            self.container.start(1);
            self.remaining -= 1;
            self.history.push([
                self.container.steps_taken() as f64,
                self.container.particles().len() as f64,
            ]);
        }
        self.report = self.container.census().to_string();

        if self.remaining == 0 {
            println!("{}", self.container.consult());
            self.container.finish();
            self.finished = true;
        }
        self.canvas.apply_all(self.container.drain_intents());
        self.finished
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Maxwell's Demon");
        ui.label(format!(
            "Container: {} x {}",
            self.container.width(),
            self.container.height()
        ));
        ui.separator();

        for line in self.report.lines() {
            ui.label(line);
        }
        ui.label(format!("Steps left: {}", self.remaining));
        ui.separator();

        let label = if self.running { "Pause" } else { "Resume" };
        if ui.button(label).clicked() {
            self.running = !self.running;
        }
    }

    fn plot(&self, ui: &mut egui::Ui) {
        ui.label("Live particles per step");
        Plot::new("particle_count")
            .height(200.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(PlotPoints::from(self.history.clone())));
            });
    }

    fn paint(&self, ui: &mut egui::Ui) {
        let painter = ui.painter();
        let rect = ui.max_rect();

        // Scale from the container to the drawing area
        let scale_x = rect.width() / self.container.width().max(1) as f32;
        let scale_y = rect.height() / self.container.height().max(1) as f32;
        let scale = scale_x.min(scale_y);
        let at = |x: i32, y: i32| rect.min + Vec2::new(x as f32, y as f32) * scale;

        for (_, shape) in self.canvas.shapes() {
            let color = color32(shape.color);
            let origin = at(shape.x, shape.y);
            match shape.kind {
                ShapeKind::Circle { diameter } => {
                    let r = diameter as f32 * scale / 2.0;
                    painter.circle_filled(origin + Vec2::splat(r), r, color);
                }
                ShapeKind::Square { size } => {
                    let side = size as f32 * scale;
                    let square = Rect::from_min_size(origin, Vec2::splat(side));
                    painter.rect_stroke(square, 0.0, Stroke::new(2.0, color));
                }
                ShapeKind::Triangle { width, height } => {
                    let (w, h) = (width as f32 * scale, height as f32 * scale);
                    let points: Vec<Pos2> = vec![
                        origin,
                        origin + Vec2::new(w / 2.0, h),
                        origin + Vec2::new(-w / 2.0, h),
                    ];
                    painter.add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
                }
            }
        }
    }
}

impl eframe::App for DemonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.advance_frame() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::SidePanel::left("controls")
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("plot_panel")
            .resizable(true)
            .show(ctx, |ui| self.plot(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::WHITE))
            .show(ctx, |ui| self.paint(ui));

        ctx.request_repaint_after(self.frame_pause);
    }
}

/// Open the window and run until the step budget is spent or the window is closed.
pub fn run(params: &SimulationParams, scenario: &Scenario) -> eframe::Result<()> {
    let app = DemonApp::new(params, scenario);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                params.width.max(100) as f32 + 2.0 * SIDE_PANEL_WIDTH,
                params.height.max(100) as f32 + 40.0,
            ])
            .with_title("Maxwell's Demon"),
        ..Default::default()
    };

    eframe::run_native(
        "Maxwell's Demon",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
