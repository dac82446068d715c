//! Scroll-Zoom auf die Zeigerposition.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Übersetzt vertikales Scrollen in einen Zoom-Intent.
    ///
    /// Die Schritt-Auswahl liegt in `GameOptions::scroll_zoom_factor`;
    /// als Fokus dient der Welt-Punkt unter dem Zeiger, damit die Stelle
    /// unter dem Mausrad stehen bleibt.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let scroll_y = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        let Some(factor) = ctx.options.scroll_zoom_factor(scroll_y) else {
            return;
        };

        let focus_world = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera));

        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}
