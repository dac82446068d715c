//! Handler für den Streckenbau.

use glam::Vec2;

use crate::app::AppState;

/// Beginnt einen neuen Streckenzug, inklusive Endpunkt-Snapping.
pub fn begin_stroke(state: &mut AppState, world_pos: Vec2) {
    let start = state.track.begin_stroke(world_pos, state.options.snap_range);
    state.draw.stroke_active = true;
    log::debug!("Streckenzug begonnen bei {:?}", start);
}

/// Setzt den aktiven Streckenzug fort (Vorschau + Schwellwert-Commit).
pub fn extend_stroke(state: &mut AppState, world_pos: Vec2) {
    if !state.draw.stroke_active {
        return;
    }
    let params = state.options.simplify_params();
    state.track.continue_stroke(world_pos, &params);
}

/// Schließt den aktiven Streckenzug ab und baut die Kollisionsgeometrie neu.
pub fn finish_stroke(state: &mut AppState, world_pos: Vec2) {
    if !state.draw.stroke_active {
        return;
    }
    state.draw.stroke_active = false;

    let kept = state.track.end_stroke(world_pos);
    if kept {
        log::debug!(
            "Streckenzug abgeschlossen, {} Streckenzüge gesamt",
            state.track.stroke_count()
        );
    } else {
        log::debug!("Streckenzug verworfen (weniger als zwei Punkte)");
    }
    state
        .physics
        .rebuild_track(&state.track.collision_polylines());
}

/// Entfernt den zuletzt gezeichneten Streckenzug.
pub fn undo_stroke(state: &mut AppState) {
    if state.track.undo() {
        state
            .physics
            .rebuild_track(&state.track.collision_polylines());
        log::debug!(
            "Streckenzug entfernt, {} Streckenzüge verbleiben",
            state.track.stroke_count()
        );
    }
}
