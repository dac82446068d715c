//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für den Kamera-Pan
    /// (Sekundär- oder Mittel-Drag).
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);
            // Welt ist Y-up, der Bildschirm Y-down: Y-Delta wechselt das Vorzeichen
            events.push(AppIntent::CameraPan {
                delta: glam::Vec2::new(-pointer_delta.x * wpp, pointer_delta.y * wpp),
            });
        }
    }
}
