//! Handler für Rennstart, Rennende und den Simulations-Tick.

use glam::Vec2;

use crate::app::AppState;
use crate::core::CoinField;

/// Entwurf → Rennen: Fallschwelle berechnen, Münzen aktivieren,
/// Fahrzeug freigeben.
pub fn start_race(state: &mut AppState) {
    // Ein mitten im Drag gestartetes Rennen verwirft den offenen Streckenzug
    if state.draw.stroke_active {
        state.draw.stroke_active = false;
        state.track.undo();
        state
            .physics
            .rebuild_track(&state.track.collision_polylines());
    }

    if !state
        .race
        .start(state.track.min_height(), state.options.fall_margin)
    {
        return;
    }

    state.coins.reset_for_race();
    state.physics.release_vehicle();
    log::info!(
        "Rennen gestartet (Fallschwelle: {})",
        state.race.min_height()
    );
}

/// Rennen → Entwurf: Fahrzeug parken, Münzen reaktivieren,
/// Kamera zurück auf das Fahrzeug.
pub fn stop_race(state: &mut AppState) {
    if !state.race.stop() {
        return;
    }

    state.physics.park_vehicle();
    state.coins.reactivate_all();
    state.view.camera.look_at(state.physics.vehicle_position());
    log::info!("Rennen beendet");
}

/// Ein Physik-Tick: Simulation, Münzkontakt, Kamera-Verfolgung, Fallprüfung.
pub fn advance_simulation(state: &mut AppState, dt: f32) {
    if !state.race.is_running() {
        return;
    }

    state.physics.step(dt);
    let vehicle_pos = state.physics.vehicle_position();

    let gained = state
        .coins
        .collect_at(vehicle_pos, state.options.coin_radius);
    if gained > 0 {
        state.race.add_points(gained);
        if state.scoreboard.submit(state.race.score()) {
            state.race.new_record = true;
        }
    }

    follow_vehicle(state, vehicle_pos);

    if state.race.has_fallen(vehicle_pos.y) {
        log::info!("Fahrzeug gestürzt bei y = {}", vehicle_pos.y);
        stop_race(state);
    }
}

/// Würfelt das Münzfeld neu aus (nur im Entwurfsmodus sinnvoll).
pub fn respawn_coins(state: &mut AppState) {
    let mut rng = rand::thread_rng();
    state.coins = CoinField::spawn(
        &mut rng,
        state.options.coins_to_spawn as usize,
        state.vehicle_spawn(),
        Vec2::from(state.options.coin_main_direction),
        state.options.coin_position_randomness,
    );
    log::debug!("{} Münzen neu verstreut", state.coins.len());
}

/// Kamera-Verfolgung: zentriert das Fahrzeug und zoomt abhängig von
/// der Geschwindigkeit zwischen Nah- und Fernsicht.
fn follow_vehicle(state: &mut AppState, vehicle_pos: Vec2) {
    state.view.camera.look_at(vehicle_pos);

    let t = (state.physics.vehicle_speed() / state.options.follow_speed_for_far).clamp(0.0, 1.0);
    let zoom =
        state.options.follow_zoom_near + (state.options.follow_zoom_far - state.options.follow_zoom_near) * t;
    state.view.camera.set_zoom_clamped(
        zoom,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}
