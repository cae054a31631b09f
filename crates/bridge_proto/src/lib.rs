//! # bridge_proto - Simulation Worker Wire Contract
//!
//! Message types exchanged between a host application and the physics
//! simulation worker. The contract is transport-agnostic: the same types
//! serve an in-process channel pair or a serialized message boundary.
//!
//! Three commands flow towards the worker (`init`, `addBody`, `step`) and
//! one event flows back (`syncState`). All types serialize with the field
//! names the host-side protocol expects (`meshName`, `pos {x,y,z}`,
//! `quat {x,y,z,w}`, messages tagged by `task`).

pub mod descriptor;
pub mod math;
pub mod message;

pub use descriptor::{BodyDescriptor, HullPoints, SHAPE_COMPOUND, SHAPE_SPHERE};
pub use math::{Quat, Vec3};
pub use message::{BodyState, Command, Event};
