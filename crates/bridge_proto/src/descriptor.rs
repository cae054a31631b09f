//! Body descriptors sent by the host when registering a body

use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Wire tag for a sphere collider
pub const SHAPE_SPHERE: &str = "sphere";

/// Wire tag for a compound collider built from convex hulls
pub const SHAPE_COMPOUND: &str = "concave-hull-compound";

/// One convex hull expressed as 3 or 4 points in body-local space.
///
/// The wire form is a plain array of point triples; the variant is picked
/// by length, so a hull can never carry fewer than 3 or more than 4 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HullPoints {
    /// A triangular hull
    Tri([[f32; 3]; 3]),
    /// A tetrahedral hull
    Quad([[f32; 3]; 4]),
}

impl HullPoints {
    /// The hull's points as a slice
    pub fn points(&self) -> &[[f32; 3]] {
        match self {
            Self::Tri(p) => p,
            Self::Quad(p) => p,
        }
    }
}

/// Description of a body to add to the simulation.
///
/// Optional fields resolve to documented defaults on the worker side:
/// `mass` to the solid sphere volume for spheres and 0 (static) for
/// compounds, `friction` to 0.4, `restitution` to 0.2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDescriptor {
    /// Shape tag; one of [`SHAPE_SPHERE`] or [`SHAPE_COMPOUND`]
    pub shape: String,
    /// Sphere radius; required when `shape` is `"sphere"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Convex hull point groups; required when `shape` is
    /// `"concave-hull-compound"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hulls: Option<Vec<HullPoints>>,
    /// Initial position in world space
    pub pos: Vec3,
    /// Initial orientation as Euler angles (x = pitch, y = yaw, z = roll)
    pub rot: Vec3,
    /// Mass in engine units; 0 means static
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    /// Friction coefficient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    /// Restitution (bounciness)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f32>,
    /// Opaque tag correlating result states to a caller-side renderable
    pub mesh_name: String,
}

impl BodyDescriptor {
    /// Describe a sphere body
    pub fn sphere(radius: f32, mesh_name: impl Into<String>) -> Self {
        Self {
            shape: SHAPE_SPHERE.to_string(),
            radius: Some(radius),
            hulls: None,
            pos: Vec3::ZERO,
            rot: Vec3::ZERO,
            mass: None,
            friction: None,
            restitution: None,
            mesh_name: mesh_name.into(),
        }
    }

    /// Describe a compound body built from convex hulls
    pub fn compound(hulls: Vec<HullPoints>, mesh_name: impl Into<String>) -> Self {
        Self {
            shape: SHAPE_COMPOUND.to_string(),
            radius: None,
            hulls: Some(hulls),
            pos: Vec3::ZERO,
            rot: Vec3::ZERO,
            mass: None,
            friction: None,
            restitution: None,
            mesh_name: mesh_name.into(),
        }
    }

    /// Set the initial position
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pos = Vec3::new(x, y, z);
        self
    }

    /// Set the initial orientation from Euler angles (radians)
    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rot = Vec3::new(x, y, z);
        self
    }

    /// Set an explicit mass (0 makes the body static)
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Set the friction coefficient
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Set the restitution
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = Some(restitution);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_points_by_length() {
        let tri: HullPoints =
            serde_json::from_str("[[0,0,0],[1,0,0],[0,1,0]]").unwrap();
        assert!(matches!(tri, HullPoints::Tri(_)));
        assert_eq!(tri.points().len(), 3);

        let quad: HullPoints =
            serde_json::from_str("[[0,0,0],[1,0,0],[0,1,0],[0,0,1]]").unwrap();
        assert!(matches!(quad, HullPoints::Quad(_)));
        assert_eq!(quad.points().len(), 4);
    }

    #[test]
    fn test_hull_points_reject_other_lengths() {
        assert!(serde_json::from_str::<HullPoints>("[[0,0,0],[1,0,0]]").is_err());
        assert!(serde_json::from_str::<HullPoints>(
            "[[0,0,0],[1,0,0],[0,1,0],[0,0,1],[1,1,1]]"
        )
        .is_err());
    }

    #[test]
    fn test_descriptor_optional_fields_default() {
        let desc: BodyDescriptor = serde_json::from_value(serde_json::json!({
            "shape": "sphere",
            "radius": 1.5,
            "pos": {"x": 0.0, "y": 10.0, "z": 0.0},
            "rot": {"x": 0.0, "y": 0.0, "z": 0.0},
            "meshName": "ball"
        }))
        .unwrap();

        assert_eq!(desc.radius, Some(1.5));
        assert_eq!(desc.mass, None);
        assert_eq!(desc.friction, None);
        assert_eq!(desc.restitution, None);
        assert_eq!(desc.mesh_name, "ball");
    }

    #[test]
    fn test_descriptor_round_trip() {
        let desc = BodyDescriptor::sphere(2.0, "rock")
            .with_position(1.0, 2.0, 3.0)
            .with_mass(5.0)
            .with_friction(0.9);

        let json = serde_json::to_string(&desc).unwrap();
        let back: BodyDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }
}
