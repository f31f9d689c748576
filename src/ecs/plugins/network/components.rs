use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One pose sample: position, then rotation. Field order is the wire order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSnapshot {
    pub position: Vec3,
    pub rotation: Quat,
}

impl PoseSnapshot {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }
}

/// Latest snapshot received for a mirrored character. Overwritten on every
/// arrival, regardless of order.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PendingRemoteTarget(pub PoseSnapshot);

/// A snapshot addressed to one character instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicationFrame {
    pub network_id: u32,
    pub snapshot: PoseSnapshot,
}

/// Text messages the relay sends to peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlMessage {
    /// Id of the character this peer owns.
    Welcome { network_id: u32 },
    /// The owner of this character left; its mirrors must go.
    PeerLeft { network_id: u32 },
}

/// What the transport hands to the ECS.
#[derive(Debug, Clone, PartialEq)]
pub enum PeerEvent {
    Control(ControlMessage),
    Frame(ReplicationFrame),
    Disconnected { reason: String },
}

/// Channel ends connecting the ECS to the transport task.
#[derive(Resource)]
pub struct NetworkChannels {
    pub inbound: crossbeam_channel::Receiver<PeerEvent>,
    pub outbound: tokio::sync::mpsc::UnboundedSender<ReplicationFrame>,
}

/// Transport-side ends of [`NetworkChannels`].
pub struct TransportChannels {
    pub inbound: crossbeam_channel::Sender<PeerEvent>,
    pub outbound: tokio::sync::mpsc::UnboundedReceiver<ReplicationFrame>,
}

pub fn network_channels() -> (NetworkChannels, TransportChannels) {
    let (inbound_send, inbound_recv) = crossbeam_channel::unbounded();
    let (outbound_send, outbound_recv) = tokio::sync::mpsc::unbounded_channel();
    (
        NetworkChannels { inbound: inbound_recv, outbound: outbound_send },
        TransportChannels { inbound: inbound_send, outbound: outbound_recv },
    )
}
