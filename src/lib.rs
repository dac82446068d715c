//! Scribble Racer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod physics;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DrawState, ViewState};
pub use core::{
    BodyPose, Camera2D, Coin, CoinField, PartShape, PhysicsSim, RacePhase, RaceSession,
    SimplifyParams, Track, TrackStroke,
};
pub use physics::RapierSim;
pub use shared::{GameOptions, ScoreBoard};
