use bevy::prelude::*;
use std::collections::HashMap;

use crate::ecs::core::{GameConfig, NetworkId};
use crate::ecs::plugins::movement::LocalMotion;
use crate::ecs::plugins::network::components::*;
use crate::ecs::plugins::player::components::*;

/// Writer role: one snapshot per locally owned character per sync tick.
pub fn write_snapshots_system(
    channels: Res<NetworkChannels>,
    query: Query<(&NetworkId, &Transform), With<LocalMotion>>,
    mut closed_reported: Local<bool>,
) {
    for (network_id, transform) in query.iter() {
        let frame = ReplicationFrame {
            network_id: network_id.0,
            snapshot: PoseSnapshot::from_transform(transform),
        };

        if channels.outbound.send(frame).is_err() {
            if !*closed_reported {
                warn!("Outbound snapshot channel closed; local pose is no longer replicated");
                *closed_reported = true;
            }
            return;
        }
    }
}

/// Reader role: drains everything the transport delivered since last frame.
///
/// Frames overwrite the pending target of the addressed mirror; the first
/// frame for an unknown id spawns that mirror. Frames addressed to a locally
/// owned character are dropped.
pub fn read_snapshots_system(
    mut commands: Commands,
    channels: Res<NetworkChannels>,
    config: Res<GameConfig>,
    mut registry: ResMut<CharacterRegistry>,
    mut targets: Query<&mut PendingRemoteTarget>,
    mut local_spawns: EventWriter<LocalCharacterSpawnEvent>,
    mut despawns: EventWriter<CharacterDespawnEvent>,
) {
    // Later frames for the same id replace earlier ones within a drain too.
    let mut latest: HashMap<u32, PoseSnapshot> = HashMap::new();
    // Spawned by the player systems later this frame, not yet in the registry.
    let mut welcomed: Option<u32> = None;

    while let Ok(event) = channels.inbound.try_recv() {
        match event {
            PeerEvent::Frame(frame) => {
                latest.insert(frame.network_id, frame.snapshot);
            }
            PeerEvent::Control(ControlMessage::Welcome { network_id }) => {
                info!("Relay assigned network id {}", network_id);
                welcomed = Some(network_id);
                local_spawns.send(LocalCharacterSpawnEvent { network_id });
            }
            PeerEvent::Control(ControlMessage::PeerLeft { network_id }) => {
                latest.remove(&network_id);
                despawns.send(CharacterDespawnEvent { network_id });
            }
            PeerEvent::Disconnected { reason } => {
                warn!("Disconnected from relay: {}", reason);
            }
        }
    }

    for (network_id, snapshot) in latest {
        if registry.is_local(network_id) || welcomed == Some(network_id) {
            warn!("Dropping snapshot for character {}: owned by this process", network_id);
            continue;
        }

        match registry.get(network_id) {
            Some(entity) => {
                if let Ok(mut target) = targets.get_mut(entity) {
                    target.0 = snapshot;
                }
            }
            None => {
                let entity = commands
                    .spawn(RemoteCharacterBundle::new(network_id, snapshot, config.tuning))
                    .id();
                registry.register_remote(network_id, entity);
                info!("Mirroring remote character {} as {:?}", network_id, entity);
            }
        }
    }
}
