//! Resolved body specifications

use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::shape::ShapeKind;
use bridge_proto::{BodyDescriptor, SHAPE_COMPOUND, SHAPE_SPHERE};
use rapier3d::na::{Quaternion, UnitQuaternion};
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

/// A fully resolved body specification.
///
/// Produced once from a wire [`BodyDescriptor`]: defaults applied, Euler
/// angles converted, the shape tag narrowed to [`ShapeKind`]. Nothing
/// downstream re-checks optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    /// Collision shape
    pub shape: ShapeKind,
    /// Mass; 0 makes the body static
    pub mass: f32,
    /// Friction coefficient
    pub friction: f32,
    /// Restitution (bounciness)
    pub restitution: f32,
    /// Initial position in world space
    pub position: [f32; 3],
    /// Initial orientation (quaternion: x, y, z, w)
    pub rotation: [f32; 4],
    /// Tag correlating results back to a caller-side renderable
    pub mesh_name: String,
}

impl BodySpec {
    /// Resolve a wire descriptor against the configured defaults.
    ///
    /// Fails with [`PhysicsError::UnsupportedShape`] for an unknown shape
    /// tag and [`PhysicsError::InvalidDescriptor`] when the tag's required
    /// parameters are missing; neither touches any world state.
    pub fn resolve(desc: &BodyDescriptor, config: &PhysicsConfig) -> Result<Self> {
        let shape = match desc.shape.as_str() {
            SHAPE_SPHERE => {
                let radius = desc.radius.ok_or_else(|| {
                    PhysicsError::InvalidDescriptor("sphere descriptor missing radius".to_string())
                })?;
                if radius <= 0.0 {
                    return Err(PhysicsError::InvalidDescriptor(format!(
                        "sphere radius must be positive, got {radius}"
                    )));
                }
                ShapeKind::Sphere { radius }
            }
            SHAPE_COMPOUND => {
                let hulls = desc.hulls.clone().ok_or_else(|| {
                    PhysicsError::InvalidDescriptor(
                        "compound descriptor missing hulls".to_string(),
                    )
                })?;
                if hulls.is_empty() {
                    return Err(PhysicsError::InvalidDescriptor(
                        "compound descriptor has no hulls".to_string(),
                    ));
                }
                ShapeKind::CompoundHull { hulls }
            }
            other => return Err(PhysicsError::UnsupportedShape(other.to_string())),
        };

        if desc.mesh_name.is_empty() {
            return Err(PhysicsError::InvalidDescriptor(
                "meshName must not be empty".to_string(),
            ));
        }

        Ok(Self {
            mass: desc
                .mass
                .unwrap_or_else(|| shape.default_mass(config.sphere_density)),
            friction: desc.friction.unwrap_or(config.default_friction),
            restitution: desc.restitution.unwrap_or(config.default_restitution),
            position: desc.pos.to_array(),
            rotation: quat_from_yaw_pitch_roll(desc.rot.y, desc.rot.x, desc.rot.z),
            mesh_name: desc.mesh_name.clone(),
            shape,
        })
    }

    /// Whether the body is immovable (zero mass, zero local inertia)
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// Build a Rapier rigid body builder
    pub(crate) fn to_rapier_body(&self) -> rapier::RigidBodyBuilder {
        let builder = if self.is_static() {
            rapier::RigidBodyBuilder::fixed()
        } else {
            rapier::RigidBodyBuilder::dynamic()
        };

        builder.position(rapier::Isometry::from_parts(
            rapier::Translation::new(self.position[0], self.position[1], self.position[2]),
            UnitQuaternion::from_quaternion(Quaternion::new(
                self.rotation[3],
                self.rotation[0],
                self.rotation[1],
                self.rotation[2],
            )),
        ))
    }

    /// Build a Rapier collider builder.
    ///
    /// The engine derives the local inertia tensor from the shape and the
    /// explicit mass; a zero mass yields zero inertia on a fixed body.
    pub(crate) fn to_rapier_collider(&self) -> Result<rapier::ColliderBuilder> {
        Ok(rapier::ColliderBuilder::new(self.shape.to_rapier()?)
            .friction(self.friction)
            .restitution(self.restitution)
            .mass(self.mass))
    }
}

/// Quaternion from yaw (about Y), pitch (about X), roll (about Z).
///
/// Matches the engine convention the original host protocol used, where a
/// `rot {x, y, z}` vector is read as pitch = x, yaw = y, roll = z.
fn quat_from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> [f32; 4] {
    let (sy, cy) = (yaw * 0.5).sin_cos();
    let (sp, cp) = (pitch * 0.5).sin_cos();
    let (sr, cr) = (roll * 0.5).sin_cos();

    [
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
        sr * cp * cy - cr * sp * sy,
        cr * cp * cy + sr * sp * sy,
    ]
}
