/*!
# Debug Systems

Periodic dump of every character's pose and simulator state to the log.
*/

use bevy::prelude::*;
use crate::ecs::core::{GameConfig, NetworkId};
use crate::ecs::plugins::movement::LocalMotion;
use crate::ecs::plugins::network::PendingRemoteTarget;
use crate::ecs::plugins::player::components::{Character, CharacterRegistry};

/// Countdown between state dumps.
#[derive(Resource)]
pub struct DebugTimer(pub Timer);

impl DebugTimer {
    pub fn from_config(config: &GameConfig) -> Self {
        Self(Timer::from_seconds(config.debug_interval_secs.max(0.1), TimerMode::Repeating))
    }
}

pub fn debug_system(
    time: Res<Time>,
    mut timer: ResMut<DebugTimer>,
    registry: Res<CharacterRegistry>,
    local_query: Query<(&NetworkId, &Transform, &LocalMotion), With<Character>>,
    remote_query: Query<(&NetworkId, &Transform, &PendingRemoteTarget), With<Character>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    if registry.is_empty() {
        debug!("No characters yet");
        return;
    }

    for (network_id, transform, motion) in local_query.iter() {
        debug!(
            "Local {}: pos({:.2}, {:.2}, {:.2}) vy {:.2} grounded {} jumping {}",
            network_id.0,
            transform.translation.x, transform.translation.y, transform.translation.z,
            motion.vertical_velocity, motion.grounded, motion.jumping
        );
    }

    for (network_id, transform, target) in remote_query.iter() {
        debug!(
            "Remote {}: pos({:.2}, {:.2}, {:.2}) lag {:.3}",
            network_id.0,
            transform.translation.x, transform.translation.y, transform.translation.z,
            transform.translation.distance(target.0.position)
        );
    }
}
