//! Obere Bedienleiste: Rennsteuerung, Undo, Zoom, Punkteanzeige.

use crate::app::{AppIntent, AppState};

const RECORD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 76, 0);

/// Rendert die obere Bedienleiste und gibt erzeugte Events zurück.
pub fn render_top_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let running = state.race.is_running();

            if running {
                if ui.button("⏹ Stopp").clicked() {
                    events.push(AppIntent::StopRaceRequested);
                }
            } else {
                if ui.button("▶ Start").clicked() {
                    events.push(AppIntent::StartRaceRequested);
                }

                if ui
                    .add_enabled(!state.track.is_empty(), egui::Button::new("↩ Rückgängig"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                }

                if ui.button("🎲 Münzen neu").clicked() {
                    events.push(AppIntent::RespawnCoinsRequested);
                }
            }

            ui.separator();

            if ui.button("＋").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("－").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("⌂").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.separator();

            if ui.button("Optionen").clicked() {
                events.push(AppIntent::OpenOptionsDialogRequested);
            }
            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }

            // Punkte rechtsbündig
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.race.new_record {
                    ui.colored_label(
                        RECORD_COLOR,
                        format!("Rekord: {}", state.scoreboard.record()),
                    );
                } else {
                    ui.label(format!("Rekord: {}", state.scoreboard.record()));
                }
                if state.race.is_running() {
                    ui.label(format!("Punkte: {}", state.race.score()));
                    ui.separator();
                }
            });
        });
    });

    events
}
