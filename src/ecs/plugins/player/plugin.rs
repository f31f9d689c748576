use bevy::prelude::*;
use crate::ecs::plugins::input::InputSet;
use crate::ecs::plugins::player::components::*;
use crate::ecs::plugins::player::systems::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LocalCharacterSpawnEvent>()
            .add_event::<CharacterDespawnEvent>()
            .init_resource::<CharacterRegistry>()
            .add_systems(Update, (
                local_character_spawn_system,
                character_despawn_system,
            ).chain().in_set(PlayerSet).before(InputSet));
    }
}

/// Spawns and despawns from this frame's events have been queued.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSet;
