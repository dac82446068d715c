//! Scribble Racer.
//!
//! Strecken zeichnen, Rennen starten, Münzen sammeln. Die Physik läuft
//! mit Rapier, die Darstellung mit egui/eframe.

use eframe::egui;
use scribble_racer::{ui, AppController, AppIntent, AppState};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Scribble Racer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Scribble Racer"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Scribble Racer",
            options,
            Box::new(|_cc| Ok(Box::new(GameApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct GameApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl GameApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);

        // Während des Rennens treibt jeder Frame die Simulation
        if self.state.race.is_running() {
            let dt = ctx.input(|i| i.stable_dt).min(0.05);
            events.push(AppIntent::FrameAdvanced { dt });
        }

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl GameApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_top_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(18, 22, 30)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                ));

                ui::draw_scene(ui.painter(), rect, &self.state);

                if self.state.track.is_empty() && !self.state.race.is_running() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Mit der linken Maustaste eine Strecke zeichnen",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.race.is_running()
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
