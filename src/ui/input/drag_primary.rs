//! Zeichen-Drag: Start, Fortsetzung und Abschluss eines Streckenzugs.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt den Beginn eines Primär-Drags und startet einen Streckenzug.
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() hingegen die Position *nach* Drag-Erkennung
        // (offset um ~6px). Für den Streckenzug-Anfang zählt die exakte Position,
        // sonst greift das Endpunkt-Snapping daneben.
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let Some(pointer_pos) = press_pos.or_else(|| ctx.response.interact_pointer_pos()) else {
            return;
        };

        let world_pos =
            screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        events.push(AppIntent::StrokeStarted { world_pos });
        self.drawing = true;
        self.last_pointer_world = Some(world_pos);
    }

    /// Meldet Zeigerbewegungen während des Zeichnens.
    pub(crate) fn handle_drag_update(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        if !self.drawing || !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            let world_pos =
                screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
            events.push(AppIntent::StrokeMoved { world_pos });
            self.last_pointer_world = Some(world_pos);
        }
    }

    /// Schließt den Streckenzug beim Loslassen ab.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !self.drawing || !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }
        self.drawing = false;

        let world_pos = ctx
            .response
            .interact_pointer_pos()
            .or_else(|| ctx.response.hover_pos())
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera))
            .or(self.last_pointer_world);
        self.last_pointer_world = None;

        if let Some(world_pos) = world_pos {
            events.push(AppIntent::StrokeFinished { world_pos });
        }
    }
}
