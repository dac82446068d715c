//! Zeichnet die Szene (Strecke, Münzen, Fahrzeug, HUD) in den Viewport.

use glam::Vec2;

use crate::app::AppState;
use crate::core::coin::MEGA_COIN_SCALE;
use crate::core::PartShape;

// ── Farben ──────────────────────────────────────────────────────────

const TRACK_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 235, 235);
const PREVIEW_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(160, 160, 160, 160);
const COIN_COLOR: egui::Color32 = egui::Color32::from_rgb(240, 200, 60);
const MEGA_COIN_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 76, 0);
const CHASSIS_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 130, 220);
const WHEEL_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
const SPAWN_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 200, 90);
const RECORD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 76, 0);

const TRACK_WIDTH_PX: f32 = 3.0;
/// Deckkraft ausgegrauter (bereits gesammelter) Münzen.
const FADED_ALPHA: f32 = 0.25;

/// Zeichnet die komplette Szene in den gegebenen Viewport-Ausschnitt.
pub fn draw_scene(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let screen_size = glam::Vec2::new(rect.width(), rect.height());
    let camera = &state.view.camera;

    let to_screen = |world: Vec2| -> egui::Pos2 {
        let s = camera.world_to_screen(world, screen_size);
        egui::pos2(rect.min.x + s.x, rect.min.y + s.y)
    };
    // Welt-Einheiten → Pixel für Radien und Größen
    let px_per_world = 1.0 / camera.world_per_pixel(screen_size.y);

    // ── Startmarkierung ─────────────────────────────────────────────
    painter.circle_filled(to_screen(state.vehicle_spawn()), 4.0, SPAWN_COLOR);

    // ── Strecke ─────────────────────────────────────────────────────
    for stroke in state.track.strokes() {
        let points: Vec<egui::Pos2> = stroke.points().iter().map(|&p| to_screen(p)).collect();
        if points.len() >= 2 {
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(TRACK_WIDTH_PX, TRACK_COLOR),
            ));
        }

        // Vorschau-Segment vom letzten Vertex zur aktuellen Zeigerposition
        if let (Some(last), Some(preview)) = (stroke.last_point(), stroke.preview()) {
            painter.line_segment(
                [to_screen(last), to_screen(preview)],
                egui::Stroke::new(TRACK_WIDTH_PX, PREVIEW_COLOR),
            );
        }
    }

    // ── Münzen ──────────────────────────────────────────────────────
    let coin_radius_px = state.options.coin_radius * px_per_world;
    for coin in state.coins.coins() {
        let mut color = if coin.mega { MEGA_COIN_COLOR } else { COIN_COLOR };
        if coin.is_faded() {
            color = color.gamma_multiply(FADED_ALPHA);
        }
        let radius = if coin.mega {
            coin_radius_px * MEGA_COIN_SCALE
        } else {
            coin_radius_px
        };
        painter.circle_filled(to_screen(coin.position), radius, color);
    }

    // ── Fahrzeug ────────────────────────────────────────────────────
    for pose in state.physics.body_poses() {
        match pose.shape {
            PartShape::Chassis { half_extents } => {
                let (sin, cos) = pose.rotation.sin_cos();
                let rotate = |local: Vec2| -> Vec2 {
                    Vec2::new(
                        local.x * cos - local.y * sin,
                        local.x * sin + local.y * cos,
                    ) + pose.position
                };
                let corners = [
                    Vec2::new(-half_extents.x, -half_extents.y),
                    Vec2::new(half_extents.x, -half_extents.y),
                    Vec2::new(half_extents.x, half_extents.y),
                    Vec2::new(-half_extents.x, half_extents.y),
                ];
                let screen_corners: Vec<egui::Pos2> =
                    corners.iter().map(|&c| to_screen(rotate(c))).collect();
                painter.add(egui::Shape::convex_polygon(
                    screen_corners,
                    CHASSIS_COLOR,
                    egui::Stroke::NONE,
                ));
            }
            PartShape::Wheel { radius } => {
                let center = to_screen(pose.position);
                painter.circle_filled(center, radius * px_per_world, WHEEL_COLOR);
                // Speiche macht die Radrotation sichtbar
                let rim = pose.position
                    + Vec2::new(pose.rotation.cos(), pose.rotation.sin()) * radius;
                painter.line_segment(
                    [center, to_screen(rim)],
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(120, 120, 120)),
                );
            }
        }
    }

    // ── HUD ─────────────────────────────────────────────────────────
    if state.race.is_running() {
        painter.text(
            egui::pos2(rect.center().x, rect.min.y + 12.0),
            egui::Align2::CENTER_TOP,
            format!("Punkte: {}", state.race.score()),
            egui::FontId::proportional(24.0),
            TRACK_COLOR,
        );
        if state.race.new_record {
            painter.text(
                egui::pos2(rect.center().x, rect.min.y + 44.0),
                egui::Align2::CENTER_TOP,
                "NEUER REKORD",
                egui::FontId::proportional(18.0),
                RECORD_COLOR,
            );
        }
    }
}
