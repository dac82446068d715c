//! Optionen-Dialog für Zeichnen, Rennen, Münzen und Kamera.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Zeichnen ────────────────────────────────────
                    ui.collapsing("Zeichnen", |ui| {
                        changed |= drag_value(ui, "Mindestabstand:", &mut opts.min_distance, 0.05..=2.0, 0.01);
                        changed |= drag_value(ui, "Maximalabstand:", &mut opts.max_distance, 0.5..=10.0, 0.05);
                        changed |= drag_value(
                            ui,
                            "Winkel-Schwelle (°):",
                            &mut opts.max_angle_difference_deg,
                            1.0..=90.0,
                            0.5,
                        );
                        changed |= drag_value(ui, "Snap-Radius:", &mut opts.snap_range, 0.0..=5.0, 0.05);
                    });

                    // ── Rennen ──────────────────────────────────────
                    ui.collapsing("Rennen", |ui| {
                        changed |= drag_value(ui, "Fall-Puffer:", &mut opts.fall_margin, 5.0..=200.0, 1.0);
                    });

                    // ── Münzen ──────────────────────────────────────
                    ui.collapsing("Münzen", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Anzahl:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.coins_to_spawn).range(1..=100))
                                .changed();
                        });
                        changed |= drag_value(
                            ui,
                            "Zufallsanteil:",
                            &mut opts.coin_position_randomness,
                            0.0..=20.0,
                            0.1,
                        );
                        changed |= drag_value(ui, "Radius:", &mut opts.coin_radius, 0.1..=3.0, 0.05);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        changed |= drag_value(ui, "Zoom-Schritt:", &mut opts.camera_zoom_step, 1.01..=2.0, 0.01);
                        changed |= drag_value(
                            ui,
                            "Scroll-Zoom-Schritt:",
                            &mut opts.scroll_zoom_step,
                            1.01..=2.0,
                            0.01,
                        );
                        changed |= drag_value(ui, "Verfolgung nah:", &mut opts.follow_zoom_near, 0.6..=8.0, 0.1);
                        changed |= drag_value(ui, "Verfolgung fern:", &mut opts.follow_zoom_far, 0.6..=8.0, 0.1);
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Beschriftetes DragValue-Feld; gibt `true` bei Änderung zurück.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}
