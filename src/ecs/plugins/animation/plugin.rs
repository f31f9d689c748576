use bevy::prelude::*;
use crate::ecs::plugins::animation::components::*;
use crate::ecs::plugins::animation::systems::*;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpTransitionEvent>()
            .add_systems(PostUpdate, log_jump_transitions_system);
    }
}
