use bevy::prelude::*;
use crate::ecs::plugins::network::components::*;
use crate::ecs::plugins::network::systems::*;
use crate::ecs::plugins::input::InputSet;
use crate::ecs::plugins::player::PlayerSet;

/// Replication between this process and its peers.
///
/// The transport is started separately and connected through
/// [`NetworkChannels`]; without that resource the replication systems do not
/// run.
pub struct NetworkPlugin;

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        app
            // Reader runs every frame, before players are spawned and input is routed
            .add_systems(
                Update,
                read_snapshots_system
                    .run_if(resource_exists::<NetworkChannels>)
                    .in_set(ReplicationSet)
                    .before(PlayerSet)
                    .before(InputSet),
            )
            // Writer runs at the configured sync rate
            .add_systems(
                FixedUpdate,
                write_snapshots_system.run_if(resource_exists::<NetworkChannels>),
            );
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplicationSet;
