//! Physik-Grenze: Schnittstelle zum externen Starrkörper-Backend.
//!
//! Der Kern kennt keine Physik-Engine; er beschreibt nur, was er von ihr
//! braucht: Kollisionsflächen aus den Streckenzügen aufbauen, das Fahrzeug
//! freigeben/parken, pro Tick integrieren und Posen zurücklesen.

use glam::Vec2;

/// Form eines Fahrzeugteils für die Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    /// Chassis-Quader mit Halbausdehnungen
    Chassis { half_extents: Vec2 },
    /// Rad mit Radius
    Wheel { radius: f32 },
}

/// Pose eines Fahrzeugteils (Position, Rotation, Form).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    /// Weltposition des Körpers
    pub position: Vec2,
    /// Rotation in Radiant
    pub rotation: f32,
    /// Form für die Darstellung
    pub shape: PartShape,
}

/// Starrkörper-Backend aus Sicht des Spiels.
///
/// Invariante: nach `park_vehicle` sind alle Fahrzeugkörper kinematisch und
/// stehen exakt auf ihrer beim Aufbau erfassten Startpose mit Rotation 0;
/// nach `release_vehicle` sind sie dynamisch und folgen der Integration.
pub trait PhysicsSim {
    /// Ersetzt die Strecken-Kollisionsflächen durch die übergebenen
    /// Vertex-Listen (je Liste ≥2 Punkte, aufeinanderfolgende Punkte bilden
    /// Liniensegmente).
    fn rebuild_track(&mut self, polylines: &[Vec<Vec2>]);

    /// Gibt das Fahrzeug für die Physik frei (dynamische Körper).
    fn release_vehicle(&mut self);

    /// Parkt das Fahrzeug: Startpose, Rotation 0, kinematisch.
    fn park_vehicle(&mut self);

    /// Integriert einen Zeitschritt.
    fn step(&mut self, dt: f32);

    /// Position des Fahrzeug-Wurzelkörpers (Chassis).
    fn vehicle_position(&self) -> Vec2;

    /// Betrag der Chassis-Geschwindigkeit (für Kamera-Zoom).
    fn vehicle_speed(&self) -> f32;

    /// Posen aller Fahrzeugteile für die Darstellung.
    fn body_poses(&self) -> Vec<BodyPose>;
}
