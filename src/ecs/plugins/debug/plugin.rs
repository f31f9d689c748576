use bevy::prelude::*;
use crate::ecs::core::GameConfig;
use crate::ecs::plugins::debug::systems::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let timer = app
            .world()
            .get_resource::<GameConfig>()
            .map(DebugTimer::from_config)
            .unwrap_or_else(|| DebugTimer::from_config(&GameConfig::default()));

        app.insert_resource(timer)
            .add_systems(Last, debug_system);
    }
}
