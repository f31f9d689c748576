use bevy::prelude::*;
use crate::ecs::plugins::interpolation::systems::*;
use crate::ecs::plugins::network::ReplicationSet;

pub struct InterpolationPlugin;

impl Plugin for InterpolationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, remote_interpolation_system.after(ReplicationSet));
    }
}
