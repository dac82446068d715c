//! Rapier-Backend für die Physik-Grenze aus `core::physics`.
//!
//! Fahrzeug = Chassis-Quader plus zwei Räder an Drehgelenken; die Strecke
//! wird als statische Polyline-Collider abgebildet.

use crate::core::{BodyPose, PartShape, PhysicsSim};
use glam::Vec2;
use rapier2d::prelude::*;

/// Halbausdehnung des Chassis in Welteinheiten.
const CHASSIS_HALF_EXTENTS: Vec2 = Vec2::new(0.9, 0.3);
/// Radradius in Welteinheiten.
const WHEEL_RADIUS: f32 = 0.35;
/// Radaufhängungen relativ zum Chassis-Zentrum.
const WHEEL_ANCHORS: [Vec2; 2] = [Vec2::new(-0.6, -0.4), Vec2::new(0.6, -0.4)];
/// Schwerkraft in Welteinheiten pro Sekunde².
const GRAVITY_Y: f32 = -9.81;

/// `PhysicsSim`-Implementierung auf Basis von rapier2d.
pub struct RapierSim {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Collider der aktuellen Strecken-Polylines
    track_colliders: Vec<ColliderHandle>,
    /// Chassis-Handle (Wurzelkörper für Position/Geschwindigkeit)
    chassis: RigidBodyHandle,
    /// Alle Fahrzeugteile mit erfasster Startposition und Darstellungsform
    parts: Vec<(RigidBodyHandle, Vector<Real>, PartShape)>,
}

impl RapierSim {
    /// Baut die Physikwelt mit geparktem Fahrzeug an `spawn` auf.
    pub fn new(spawn: Vec2) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut impulse_joints = ImpulseJointSet::new();
        let mut parts = Vec::new();

        // Chassis: kinematisch bis zum Rennstart
        let chassis_body = RigidBodyBuilder::kinematic_position_based()
            .translation(vector![spawn.x, spawn.y])
            .build();
        let chassis = bodies.insert(chassis_body);
        let chassis_collider = ColliderBuilder::cuboid(CHASSIS_HALF_EXTENTS.x, CHASSIS_HALF_EXTENTS.y)
            .density(1.0)
            .friction(0.6)
            .build();
        colliders.insert_with_parent(chassis_collider, chassis, &mut bodies);
        parts.push((
            chassis,
            vector![spawn.x, spawn.y],
            PartShape::Chassis {
                half_extents: CHASSIS_HALF_EXTENTS,
            },
        ));

        // Räder an Drehgelenken
        for anchor in WHEEL_ANCHORS {
            let position = spawn + anchor;
            let wheel_body = RigidBodyBuilder::kinematic_position_based()
                .translation(vector![position.x, position.y])
                .build();
            let wheel = bodies.insert(wheel_body);
            let wheel_collider = ColliderBuilder::ball(WHEEL_RADIUS)
                .density(1.0)
                .friction(1.5)
                .build();
            colliders.insert_with_parent(wheel_collider, wheel, &mut bodies);

            let joint = RevoluteJointBuilder::new()
                .local_anchor1(point![anchor.x, anchor.y])
                .local_anchor2(point![0.0, 0.0]);
            impulse_joints.insert(chassis, wheel, joint, true);

            parts.push((
                wheel,
                vector![position.x, position.y],
                PartShape::Wheel {
                    radius: WHEEL_RADIUS,
                },
            ));
        }

        Self {
            gravity: vector![0.0, GRAVITY_Y],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints,
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            track_colliders: Vec::new(),
            chassis,
            parts,
        }
    }
}

impl PhysicsSim for RapierSim {
    fn rebuild_track(&mut self, polylines: &[Vec<Vec2>]) {
        for handle in self.track_colliders.drain(..) {
            self.colliders
                .remove(handle, &mut self.island_manager, &mut self.bodies, false);
        }

        for polyline in polylines {
            if polyline.len() < 2 {
                continue;
            }
            let vertices: Vec<Point<Real>> =
                polyline.iter().map(|p| point![p.x, p.y]).collect();
            let collider = ColliderBuilder::polyline(vertices, None)
                .friction(1.0)
                .build();
            self.track_colliders.push(self.colliders.insert(collider));
        }
    }

    fn release_vehicle(&mut self) {
        for (handle, _, _) in &self.parts {
            if let Some(body) = self.bodies.get_mut(*handle) {
                body.set_body_type(RigidBodyType::Dynamic, true);
            }
        }
    }

    fn park_vehicle(&mut self) {
        for (handle, start, _) in &self.parts {
            if let Some(body) = self.bodies.get_mut(*handle) {
                // Kinematische Körper ignorieren nachträglich gesetzte
                // Geschwindigkeiten, daher zuerst nullen
                body.set_linvel(vector![0.0, 0.0], true);
                body.set_angvel(0.0, true);
                body.set_body_type(RigidBodyType::KinematicPositionBased, true);
                body.set_position(Isometry::new(*start, 0.0), true);
            }
        }
    }

    fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn vehicle_position(&self) -> Vec2 {
        let translation = self.bodies[self.chassis].translation();
        Vec2::new(translation.x, translation.y)
    }

    fn vehicle_speed(&self) -> f32 {
        self.bodies[self.chassis].linvel().norm()
    }

    fn body_poses(&self) -> Vec<BodyPose> {
        self.parts
            .iter()
            .map(|(handle, _, shape)| {
                let body = &self.bodies[*handle];
                let translation = body.translation();
                BodyPose {
                    position: Vec2::new(translation.x, translation.y),
                    rotation: body.rotation().angle(),
                    shape: *shape,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parked_vehicle_ignores_gravity() {
        let mut sim = RapierSim::new(Vec2::new(0.0, 5.0));
        for _ in 0..60 {
            sim.step(1.0 / 60.0);
        }
        assert_relative_eq!(sim.vehicle_position().y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_released_vehicle_falls() {
        let mut sim = RapierSim::new(Vec2::new(0.0, 5.0));
        sim.release_vehicle();
        for _ in 0..60 {
            sim.step(1.0 / 60.0);
        }
        assert!(sim.vehicle_position().y < 4.0);
    }

    #[test]
    fn test_park_restores_starting_pose() {
        let mut sim = RapierSim::new(Vec2::new(0.0, 5.0));
        sim.release_vehicle();
        for _ in 0..30 {
            sim.step(1.0 / 60.0);
        }
        // Vor dem Parken ist das Fahrzeug in Bewegung
        assert!(sim.vehicle_speed() > 1.0);
        sim.park_vehicle();

        assert_relative_eq!(sim.vehicle_position().x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(sim.vehicle_position().y, 5.0, epsilon = 1e-5);
        assert_relative_eq!(sim.vehicle_speed(), 0.0, epsilon = 1e-5);
        for pose in sim.body_poses() {
            assert_relative_eq!(pose.rotation, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_track_polyline_supports_vehicle() {
        let mut sim = RapierSim::new(Vec2::new(0.0, 2.0));
        sim.rebuild_track(&[vec![Vec2::new(-20.0, 0.0), Vec2::new(20.0, 0.0)]]);
        sim.release_vehicle();
        for _ in 0..240 {
            sim.step(1.0 / 60.0);
        }
        // Fahrzeug kommt auf der Linie zur Ruhe statt durchzufallen
        assert!(sim.vehicle_position().y > 0.0);
    }

    #[test]
    fn test_rebuild_track_replaces_old_colliders() {
        let mut sim = RapierSim::new(Vec2::new(0.0, 2.0));
        sim.rebuild_track(&[vec![Vec2::new(-20.0, 0.0), Vec2::new(20.0, 0.0)]]);
        // Leerer Neuaufbau entfernt die Linie, das Fahrzeug fällt frei
        sim.rebuild_track(&[]);
        sim.release_vehicle();
        for _ in 0..240 {
            sim.step(1.0 / 60.0);
        }
        assert!(sim.vehicle_position().y < -1.0);
    }
}
