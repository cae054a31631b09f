//! Collision shape construction

use crate::error::{PhysicsError, Result};
use bridge_proto::HullPoints;
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

/// Collision shape for a simulated body.
///
/// A closed variant: the shape tag on the wire is resolved into one of
/// these before anything touches the world, so unknown kinds can never
/// reach the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Sphere with radius
    Sphere { radius: f32 },
    /// Compound of convex hulls, each from 3 or 4 body-local points.
    /// The point-count invariant lives in [`HullPoints`] itself.
    CompoundHull { hulls: Vec<HullPoints> },
}

impl ShapeKind {
    /// Create a sphere shape
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Create a compound hull shape
    pub fn compound(hulls: Vec<HullPoints>) -> Self {
        Self::CompoundHull { hulls }
    }

    /// Mass assumed when a descriptor leaves it unspecified.
    ///
    /// Spheres default to their solid volume times `density`; compounds
    /// default to 0, marking scenery geometry as static.
    pub fn default_mass(&self, density: f32) -> f32 {
        match self {
            Self::Sphere { radius } => {
                density * (4.0 / 3.0) * std::f32::consts::PI * radius.powi(3)
            }
            Self::CompoundHull { .. } => 0.0,
        }
    }

    /// Build the Rapier shared shape
    pub(crate) fn to_rapier(&self) -> Result<rapier::SharedShape> {
        match self {
            Self::Sphere { radius } => Ok(rapier::SharedShape::ball(*radius)),
            Self::CompoundHull { hulls } => {
                if hulls.is_empty() {
                    return Err(PhysicsError::ShapeCreation(
                        "compound shape needs at least one hull".to_string(),
                    ));
                }

                // Hull points are already body-local, so children sit at
                // the identity transform.
                let mut children = Vec::with_capacity(hulls.len());
                for hull in hulls {
                    let points: Vec<_> = hull
                        .points()
                        .iter()
                        .map(|p| rapier::Point::new(p[0], p[1], p[2]))
                        .collect();
                    let convex = rapier::SharedShape::convex_hull(&points).ok_or_else(|| {
                        PhysicsError::ShapeCreation("degenerate convex hull".to_string())
                    })?;
                    children.push((rapier::Isometry::identity(), convex));
                }

                Ok(rapier::SharedShape::compound(children))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tetra() -> HullPoints {
        HullPoints::Quad([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_sphere_default_mass_is_solid_volume() {
        let shape = ShapeKind::sphere(1.0);
        assert_relative_eq!(shape.default_mass(1.0), 4.18879, epsilon = 1e-4);

        let shape = ShapeKind::sphere(2.0);
        assert_relative_eq!(shape.default_mass(1.0), 33.51032, epsilon = 1e-3);
    }

    #[test]
    fn test_compound_default_mass_is_zero() {
        let shape = ShapeKind::compound(vec![tetra()]);
        assert_eq!(shape.default_mass(1.0), 0.0);
    }

    #[test]
    fn test_compound_builds_from_hulls() {
        let shape = ShapeKind::compound(vec![tetra(), tetra()]);
        assert!(shape.to_rapier().is_ok());
    }

    #[test]
    fn test_collinear_hull_rejected() {
        let shape = ShapeKind::compound(vec![HullPoints::Tri([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
        ])]);
        assert!(matches!(
            shape.to_rapier(),
            Err(PhysicsError::ShapeCreation(_))
        ));
    }

    #[test]
    fn test_empty_compound_rejected() {
        let shape = ShapeKind::compound(Vec::new());
        assert!(matches!(
            shape.to_rapier(),
            Err(PhysicsError::ShapeCreation(_))
        ));
    }
}
