//! Command and event envelopes, tagged by `task`

use crate::descriptor::BodyDescriptor;
use crate::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A command sent to the simulation worker.
///
/// Commands are processed strictly in arrival order; each produces exactly
/// one outcome. The enum is closed and exhaustively matched on the worker
/// side, so adding a command is a compile-checked extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "camelCase")]
pub enum Command {
    /// Create a fresh world, discarding any prior one and all its bodies
    Init,
    /// Register one body described by the payload
    AddBody(BodyDescriptor),
    /// Advance the simulation by a wall-clock delta (seconds)
    Step { dt: f32 },
}

/// An event emitted by the worker back to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "camelCase")]
pub enum Event {
    /// Batched post-step transforms, one per tracked body in insertion order
    SyncState { meshes: Vec<BodyState> },
}

/// World-space transform of one tracked body after a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyState {
    /// Tag from the descriptor that created the body
    pub mesh_name: String,
    /// World-space position
    pub pos: Vec3,
    /// World-space orientation
    pub quat: Quat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_task_tags() {
        let json = serde_json::to_value(Command::Init).unwrap();
        assert_eq!(json, serde_json::json!({"task": "init"}));

        let json = serde_json::to_value(Command::Step { dt: 0.016 }).unwrap();
        assert_eq!(json["task"], "step");
        assert!((json["dt"].as_f64().unwrap() - 0.016).abs() < 1e-6);

        let json =
            serde_json::to_value(Command::AddBody(BodyDescriptor::sphere(1.0, "ball"))).unwrap();
        assert_eq!(json["task"], "addBody");
        assert_eq!(json["shape"], "sphere");
        assert_eq!(json["meshName"], "ball");
    }

    #[test]
    fn test_sync_state_wire_shape() {
        let event = Event::SyncState {
            meshes: vec![BodyState {
                mesh_name: "ball".to_string(),
                pos: Vec3::new(0.0, 10.0, 0.0),
                quat: Quat::IDENTITY,
            }],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["task"], "syncState");
        assert_eq!(json["meshes"][0]["meshName"], "ball");
        assert_eq!(json["meshes"][0]["pos"]["y"], 10.0);
        assert_eq!(json["meshes"][0]["quat"]["w"], 1.0);
    }

    #[test]
    fn test_command_round_trip() {
        let cmd = Command::AddBody(
            BodyDescriptor::sphere(1.0, "ball").with_position(0.0, 5.0, 0.0),
        );
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
