use bevy::prelude::*;
use crate::ecs::plugins::input::InputSet;
use crate::ecs::plugins::movement::systems::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, local_motion_system.in_set(MotionSet).after(InputSet));
    }
}

/// Local characters have been simulated for this frame once this set has run.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotionSet;
