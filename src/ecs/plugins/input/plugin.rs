use bevy::prelude::*;
use crate::ecs::plugins::input::components::*;
use crate::ecs::plugins::input::systems::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InputCommandEvent>()
            .add_systems(Update, (
                input_validation_system,
                input_routing_system,
            ).chain().in_set(InputSet));
    }
}

/// Input has been applied to every local character once this set has run.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet;
