//! # bridge_physics - Rapier 3D Simulation Worker
//!
//! A message-driven bridge between a host application and the Rapier 3D
//! rigid-body engine. The engine is treated as an opaque collaborator: this
//! crate only resolves body descriptors into engine constructions, steps
//! the world at a fixed 60 Hz sub-step granularity, and reads transforms
//! back into a flat result batch.
//!
//! # Architecture
//!
//! ```text
//!  host ──Command──▶ WorkerHandle ──channel──▶ SimulationWorker
//!                                                │ owns
//!                                                ▼
//!                                           PhysicsWorld
//!                                     (Rapier sets + registry)
//! ```
//!
//! Commands are processed strictly one at a time on the worker's thread;
//! the world and its append-only body registry are owned exclusively by
//! that loop, so no locking is involved.
//!
//! # Example
//!
//! ```no_run
//! use bridge_physics::prelude::*;
//! use bridge_proto::BodyDescriptor;
//!
//! # fn main() -> bridge_physics::error::Result<()> {
//! let worker = WorkerHandle::spawn(PhysicsConfig::default())?;
//! worker.init()?;
//! worker.add_body(BodyDescriptor::sphere(1.0, "ball").with_position(0.0, 10.0, 0.0))?;
//!
//! let states = worker.step(1.0 / 60.0)?;
//! assert_eq!(states[0].mesh_name, "ball");
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod config;
pub mod error;
pub mod shape;
pub mod world;
pub mod worker;

pub mod prelude {
    //! Common imports for the simulation worker
    pub use crate::body::BodySpec;
    pub use crate::config::PhysicsConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::shape::ShapeKind;
    pub use crate::worker::{SimulationWorker, WorkerHandle};
    pub use crate::world::PhysicsWorld;
}

pub use prelude::*;
