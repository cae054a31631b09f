//! Error types for the simulation worker

use thiserror::Error;

/// Simulation worker errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// A command other than `init` arrived before a world existed
    #[error("simulation world not initialized")]
    NotInitialized,

    /// Unrecognized shape tag in a body descriptor
    #[error("unsupported shape kind: {0:?}")]
    UnsupportedShape(String),

    /// A descriptor was missing the parameters its shape tag requires
    #[error("invalid body descriptor: {0}")]
    InvalidDescriptor(String),

    /// The physics engine rejected a shape construction
    #[error("failed to create collision shape: {0}")]
    ShapeCreation(String),

    /// The worker thread could not be started
    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    /// The channel to the worker thread disconnected
    #[error("worker channel closed")]
    WorkerClosed,
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
