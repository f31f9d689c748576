use bevy::prelude::*;
use crate::ecs::plugins::animation::components::*;

pub fn log_jump_transitions_system(
    mut transitions: EventReader<JumpTransitionEvent>,
) {
    for transition in transitions.read() {
        if transition.jumping {
            debug!("{:?} took off", transition.entity);
        } else {
            debug!("{:?} landed", transition.entity);
        }
    }
}
