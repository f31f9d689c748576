use bevy::prelude::*;
use crate::ecs::core::*;

pub struct CorePlugin {
    pub config: GameConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_hz(self.config.sync_hz));
    }
}
