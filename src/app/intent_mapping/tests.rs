use glam::Vec2;

use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{BodyPose, PhysicsSim};

use super::map_intent_to_commands;

/// Physik-Attrappe: tut nichts, die Mapping-Tests brauchen keine Simulation.
struct NullPhysics;

impl PhysicsSim for NullPhysics {
    fn rebuild_track(&mut self, _polylines: &[Vec<Vec2>]) {}
    fn release_vehicle(&mut self) {}
    fn park_vehicle(&mut self) {}
    fn step(&mut self, _dt: f32) {}
    fn vehicle_position(&self) -> Vec2 {
        Vec2::ZERO
    }
    fn vehicle_speed(&self) -> f32 {
        0.0
    }
    fn body_poses(&self) -> Vec<BodyPose> {
        Vec::new()
    }
}

fn test_state() -> AppState {
    AppState::with_physics(Box::new(NullPhysics))
}

#[test]
fn stroke_started_maps_to_begin_stroke_while_designing() {
    let state = test_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::StrokeStarted {
            world_pos: Vec2::new(1.0, 2.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginStroke { .. }));
}

#[test]
fn stroke_intents_are_dropped_while_race_is_running() {
    let mut state = test_state();
    state.race.start(0.0, 50.0);

    for intent in [
        AppIntent::StrokeStarted {
            world_pos: Vec2::ZERO,
        },
        AppIntent::StrokeMoved {
            world_pos: Vec2::ZERO,
        },
        AppIntent::StrokeFinished {
            world_pos: Vec2::ZERO,
        },
        AppIntent::UndoRequested,
        AppIntent::RespawnCoinsRequested,
    ] {
        let commands = map_intent_to_commands(&state, intent);
        assert!(commands.is_empty());
    }
}

#[test]
fn frame_advanced_maps_to_simulation_tick_only_while_running() {
    let mut state = test_state();

    let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.016 });
    assert!(commands.is_empty());

    state.race.start(0.0, 50.0);
    let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.016 });
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::AdvanceSimulation { dt } if (dt - 0.016).abs() < 1e-6
    ));
}

#[test]
fn camera_intents_map_regardless_of_phase() {
    let mut state = test_state();
    state.race.start(0.0, 50.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CameraZoom {
            factor: 1.1,
            focus_world: Some(Vec2::new(3.0, 4.0)),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ZoomCamera { .. }));
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = test_state();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}
