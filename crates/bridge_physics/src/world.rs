//! Physics world - owns the engine state and the body registry

use crate::body::BodySpec;
use crate::config::PhysicsConfig;
use crate::error::Result;
use bridge_proto::{BodyState, Quat, Vec3};
use rapier3d::prelude as rapier;

/// One registered body: the descriptor's tag plus the engine handle.
#[derive(Debug, Clone)]
struct TrackedBody {
    mesh_name: String,
    handle: rapier::RigidBodyHandle,
}

/// The simulation world: Rapier's solver state plus an append-only
/// registry of tracked bodies.
///
/// The registry preserves insertion order, and [`PhysicsWorld::step`]
/// reports states in exactly that order. Bodies live until the world is
/// dropped; there is no removal operation.
pub struct PhysicsWorld {
    /// Configuration the world was created with
    config: PhysicsConfig,

    /// Rapier physics pipeline
    pipeline: rapier::PhysicsPipeline,

    /// Gravity
    gravity: rapier::Vector<f32>,

    /// Integration parameters (dt pinned to the fixed sub-step size)
    integration_params: rapier::IntegrationParameters,

    /// Island manager
    islands: rapier::IslandManager,

    /// Broad phase
    broad_phase: rapier::DefaultBroadPhase,

    /// Narrow phase
    narrow_phase: rapier::NarrowPhase,

    /// Impulse joint set (unused but required by the pipeline)
    impulse_joints: rapier::ImpulseJointSet,

    /// Multibody joint set (unused but required by the pipeline)
    multibody_joints: rapier::MultibodyJointSet,

    /// CCD solver
    ccd_solver: rapier::CCDSolver,

    /// Rigid body set
    bodies: rapier::RigidBodySet,

    /// Collider set
    colliders: rapier::ColliderSet,

    /// Tracked bodies in insertion order
    registry: Vec<TrackedBody>,
}

impl PhysicsWorld {
    /// Create a new physics world
    pub fn new(config: PhysicsConfig) -> Self {
        let gravity = rapier::Vector::new(config.gravity[0], config.gravity[1], config.gravity[2]);

        let mut integration_params = rapier::IntegrationParameters::default();
        integration_params.dt = config.timestep;

        Self {
            config,
            pipeline: rapier::PhysicsPipeline::new(),
            gravity,
            integration_params,
            islands: rapier::IslandManager::new(),
            broad_phase: rapier::DefaultBroadPhase::new(),
            narrow_phase: rapier::NarrowPhase::new(),
            impulse_joints: rapier::ImpulseJointSet::new(),
            multibody_joints: rapier::MultibodyJointSet::new(),
            ccd_solver: rapier::CCDSolver::new(),
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
            registry: Vec::new(),
        }
    }

    /// Get the world configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Get gravity
    pub fn gravity(&self) -> [f32; 3] {
        [self.gravity.x, self.gravity.y, self.gravity.z]
    }

    /// Register a body and append it to the registry.
    ///
    /// Shape construction is the only fallible part and happens first, so
    /// a rejected construction leaves both the world and the registry
    /// untouched. On success the world's body count grows by exactly one.
    pub fn add_body(&mut self, spec: BodySpec) -> Result<()> {
        let collider = spec.to_rapier_collider()?;
        let body = spec.to_rapier_body();

        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.registry.push(TrackedBody {
            mesh_name: spec.mesh_name.clone(),
            handle,
        });

        log::debug!(
            "registered body {:?} (mass {}, {} total)",
            spec.mesh_name,
            spec.mass,
            self.registry.len()
        );
        Ok(())
    }

    /// Advance the world by a wall-clock delta and report all transforms.
    ///
    /// The delta is covered by `ceil(dt / timestep)` fixed-size sub-steps
    /// (see [`PhysicsConfig::substeps_for`]); `dt = 0` performs no
    /// sub-steps and just reads back current transforms. The returned
    /// states match the registry in length and insertion order.
    pub fn step(&mut self, dt: f32) -> Vec<BodyState> {
        let substeps = self.config.substeps_for(dt);
        log::trace!("stepping dt={dt} as {substeps} substeps");

        for _ in 0..substeps {
            self.pipeline.step(
                &self.gravity,
                &self.integration_params,
                &mut self.islands,
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

        self.registry
            .iter()
            .filter_map(|tracked| {
                let body = self.bodies.get(tracked.handle)?;
                let pos = body.translation();
                let rot = body.rotation();
                Some(BodyState {
                    mesh_name: tracked.mesh_name.clone(),
                    pos: Vec3::new(pos.x, pos.y, pos.z),
                    quat: Quat::new(rot.i, rot.j, rot.k, rot.w),
                })
            })
            .collect()
    }

    /// Number of rigid bodies in the engine
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of tracked bodies in the registry
    pub fn tracked_count(&self) -> usize {
        self.registry.len()
    }
}
