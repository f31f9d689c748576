use bevy::prelude::*;
use crate::ecs::plugins::camera::components::*;

/// Keeps follow cameras at their offset from the character they track.
/// Only translation is touched; orientation belongs to whoever steers the view.
pub fn follow_camera_system(
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
    targets: Query<&Transform, Without<FollowCamera>>,
) {
    for (follow, mut camera_transform) in cameras.iter_mut() {
        let Some(target) = follow.target else {
            continue;
        };
        if let Ok(target_transform) = targets.get(target) {
            camera_transform.translation = target_transform.translation + follow.offset;
        }
    }
}

/// Points a follow camera at a newly spawned local character.
pub fn attach_follow_camera(camera: Entity, character: Entity, cameras: &mut Query<&mut FollowCamera>) {
    match cameras.get_mut(camera) {
        Ok(mut follow) => {
            follow.target = Some(character);
            info!("Follow camera {:?} now tracks local character {:?}", camera, character);
        }
        Err(_) => {
            warn!("Camera {:?} has no FollowCamera; local character {:?} will not be tracked", camera, character);
        }
    }
}
