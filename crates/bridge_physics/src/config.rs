//! Simulation configuration

use serde::{Deserialize, Serialize};

/// Simulation world configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity vector (default: -20 in Y)
    pub gravity: [f32; 3],

    /// Fixed sub-step size for integration (default: 1/60 s)
    pub timestep: f32,

    /// Default friction coefficient for bodies that don't specify one
    pub default_friction: f32,

    /// Default restitution for bodies that don't specify one
    pub default_restitution: f32,

    /// Density used when deriving a sphere's default mass from its volume
    pub sphere_density: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -20.0, 0.0],
            timestep: 1.0 / 60.0,
            default_friction: 0.4,
            default_restitution: 0.2,
            sphere_density: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Set gravity
    pub fn with_gravity(mut self, x: f32, y: f32, z: f32) -> Self {
        self.gravity = [x, y, z];
        self
    }

    /// Set the fixed sub-step size
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    /// Number of fixed sub-steps covering a wall-clock delta.
    ///
    /// Always `ceil(dt / timestep)`: the integration resolves at the fixed
    /// rate regardless of the caller's frame pacing, and a large `dt` takes
    /// proportionally more sub-steps rather than one large unstable step.
    /// `dt = 0` takes zero sub-steps.
    pub fn substeps_for(&self, dt: f32) -> u32 {
        (dt / self.timestep).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, [0.0, -20.0, 0.0]);
        assert_eq!(config.default_friction, 0.4);
        assert_eq!(config.default_restitution, 0.2);
    }

    #[test]
    fn test_substep_counts() {
        let config = PhysicsConfig::default();
        assert_eq!(config.substeps_for(0.0), 0);
        assert_eq!(config.substeps_for(1.0 / 60.0), 1);
        assert_eq!(config.substeps_for(0.033), 2);
        assert_eq!(config.substeps_for(0.1), 6);
    }

    #[test]
    fn test_negative_dt_takes_no_substeps() {
        let config = PhysicsConfig::default();
        assert_eq!(config.substeps_for(-0.5), 0);
    }
}
