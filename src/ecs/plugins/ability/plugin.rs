use bevy::prelude::*;
use crate::ecs::plugins::ability::systems::*;
use crate::ecs::plugins::movement::MotionSet;

pub struct AbilityPlugin;

impl Plugin for AbilityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ability_update_system.after(MotionSet));
    }
}
