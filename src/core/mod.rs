//! Domänen-Kern: Kamera, Strecken-Geometrie, Münzen, Renn-Zustand, Physik-Grenze.

pub mod camera;
pub mod coin;
pub mod physics;
pub mod race;
pub mod stroke;
pub mod track;

pub use camera::Camera2D;
pub use coin::{Coin, CoinField};
pub use physics::{BodyPose, PartShape, PhysicsSim};
pub use race::{RacePhase, RaceSession};
pub use stroke::{SimplifyParams, TrackStroke};
pub use track::Track;
