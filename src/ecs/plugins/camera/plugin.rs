use bevy::prelude::*;
use crate::ecs::plugins::camera::systems::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, follow_camera_system);
    }
}
