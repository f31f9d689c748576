use bevy::prelude::*;
use crate::ecs::plugins::movement::{LocalMotion, MotionTuning};
use crate::ecs::plugins::network::PendingRemoteTarget;

/// Fraction of the remaining distance covered this tick, capped at 1 so a
/// large step lands on the target instead of overshooting it.
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

pub fn damp_position(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    let t = damp_factor(rate, dt);
    if t >= 1.0 {
        return target;
    }
    current + (target - current) * t
}

pub fn damp_rotation(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    let t = damp_factor(rate, dt);
    if t >= 1.0 {
        return target;
    }
    current.slerp(target, t)
}

/// Eases every mirrored character toward its latest snapshot. No prediction:
/// with no new snapshots the character settles on the last one.
pub fn remote_interpolation_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &PendingRemoteTarget, &MotionTuning), Without<LocalMotion>>,
) {
    let dt = time.delta_secs();

    for (mut transform, target, tuning) in query.iter_mut() {
        let rate = tuning.remote_damping();
        transform.translation = damp_position(transform.translation, target.0.position, rate, dt);
        transform.rotation = damp_rotation(transform.rotation, target.0.rotation, rate, dt);
    }
}
