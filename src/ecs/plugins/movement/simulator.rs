/*!
# Local Motion Simulator

One tick of character motion for a locally owned character:

1. Camera-relative input mapping on the horizontal plane.
2. Grounded/jump/gravity transition of the vertical velocity.
3. Displacement handed to the collision resolver.
4. Facing blended toward the horizontal movement direction.

Everything here is a plain function of its arguments so it can be driven by
[`local_motion_system`](super::systems::local_motion_system) or called
directly.
*/

use bevy::prelude::*;

use crate::ecs::plugins::animation::AnimationParams;
use crate::ecs::plugins::camera::ViewDirection;
use crate::ecs::plugins::collision::{Collider, CollisionOutcome};
use crate::ecs::plugins::movement::components::*;

/// What the simulator consumes from input on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub move_direction: Vec3,
    /// Displacement asked of the resolver.
    pub requested: Vec3,
    /// Displacement the resolver allowed.
    pub applied: Vec3,
    pub animation: AnimationParams,
    /// New value of the jumping flag when it changed this tick.
    pub jump_transition: Option<bool>,
}

/// Projects a direction onto the ground plane and renormalizes it. A vertical
/// direction has no horizontal part and comes back as zero.
pub fn flatten(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Ground-plane forward and right of a view.
pub fn horizontal_basis(view: &impl ViewDirection) -> (Vec3, Vec3) {
    (flatten(view.forward()), flatten(view.right()))
}

/// `normalize(forward * vertical + right * horizontal) * speed`, or zero when
/// the input sums to nothing.
pub fn move_direction(horizontal: f32, vertical: f32, forward: Vec3, right: Vec3, speed: f32) -> Vec3 {
    (forward * vertical + right * horizontal).normalize_or_zero() * speed
}

/// Grounded characters are pinned to [`GROUNDED_VERTICAL_VELOCITY`] and may
/// jump; airborne ones accelerate downward with no terminal velocity.
pub fn integrate_vertical(motion: &mut LocalMotion, jump_pressed: bool, tuning: &MotionTuning, dt: f32) {
    if motion.grounded {
        motion.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        motion.jumping = false;

        if jump_pressed {
            motion.vertical_velocity = tuning.jump_velocity();
            motion.jumping = true;
        }
    } else {
        motion.vertical_velocity -= tuning.gravity() * dt;
    }
}

/// Rotation whose forward (-Z) points along `direction` on the ground plane.
pub fn facing_toward(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}

/// Turns `current` toward the horizontal part of `move_dir`. Idle or
/// near-idle movement leaves the rotation exactly as it was.
pub fn blend_facing(current: Quat, move_dir: Vec3, blend_rate: f32, dt: f32) -> Quat {
    let flat = Vec3::new(move_dir.x, 0.0, move_dir.z);
    if flat.length_squared() <= FACING_THRESHOLD_SQUARED {
        return current;
    }

    current.slerp(facing_toward(flat), (blend_rate * dt).clamp(0.0, 1.0))
}

/// Runs one tick against `transform` and `motion`.
///
/// `basis` is the ground-plane (forward, right) of the camera. Without a
/// collider the raw displacement is applied and the character is never
/// grounded.
pub fn simulate(
    transform: &mut Transform,
    motion: &mut LocalMotion,
    input: TickInput,
    basis: (Vec3, Vec3),
    tuning: &MotionTuning,
    collider: Option<&mut Collider>,
    dt: f32,
) -> TickReport {
    let was_jumping = motion.jumping;
    let (forward, right) = basis;
    let move_dir = move_direction(input.horizontal, input.vertical, forward, right, tuning.move_speed());

    integrate_vertical(motion, input.jump_pressed, tuning, dt);

    let requested = (move_dir + Vec3::Y * motion.vertical_velocity) * dt;
    let outcome = match collider {
        Some(collider) => collider.0.move_by(transform.translation, requested),
        None => CollisionOutcome { applied: requested, grounded: false },
    };

    transform.translation += outcome.applied;
    motion.grounded = outcome.grounded;
    transform.rotation = blend_facing(transform.rotation, move_dir, tuning.facing_blend_rate(), dt);

    TickReport {
        move_direction: move_dir,
        requested,
        applied: outcome.applied,
        animation: AnimationParams {
            forward_speed: input.vertical,
            is_jumping: motion.jumping,
        },
        jump_transition: (motion.jumping != was_jumping).then_some(motion.jumping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::plugins::collision::GroundPlane;

    const DT: f32 = 0.02;

    fn camera_along_z() -> (Vec3, Vec3) {
        horizontal_basis(&Transform::IDENTITY.looking_to(Vec3::Z, Vec3::Y))
    }

    fn grounded() -> LocalMotion {
        LocalMotion { vertical_velocity: GROUNDED_VERTICAL_VELOCITY, grounded: true, jumping: false }
    }

    #[test]
    fn forward_input_moves_along_camera_forward() {
        let mut transform = Transform::IDENTITY;
        let mut motion = grounded();
        let mut collider = Collider::new(GroundPlane::default());
        let input = TickInput { horizontal: 0.0, vertical: 1.0, jump_pressed: false };

        let report = simulate(
            &mut transform,
            &mut motion,
            input,
            camera_along_z(),
            &MotionTuning::default(),
            Some(&mut collider),
            DT,
        );

        assert!((report.applied - Vec3::new(0.0, 0.0, 6.0) * DT).length() < 1e-5);
        assert!((transform.translation - Vec3::new(0.0, 0.0, 6.0 * DT)).length() < 1e-5);
        assert_eq!(report.animation.forward_speed, 1.0);
        assert!(!report.animation.is_jumping);
        assert!(motion.grounded);
    }

    #[test]
    fn grounded_jump_sets_exact_initial_velocity() {
        let tuning = MotionTuning::default();
        let mut transform = Transform::IDENTITY;
        let mut motion = grounded();
        let mut collider = Collider::new(GroundPlane::default());
        let input = TickInput { jump_pressed: true, ..Default::default() };

        let report = simulate(
            &mut transform,
            &mut motion,
            input,
            camera_along_z(),
            &tuning,
            Some(&mut collider),
            DT,
        );

        assert_eq!(motion.vertical_velocity, tuning.jump_velocity());
        assert!(motion.jumping);
        assert!(!motion.grounded);
        assert_eq!(report.jump_transition, Some(true));
        assert!(report.animation.is_jumping);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let tuning = MotionTuning::default();
        let mut motion = LocalMotion { vertical_velocity: 2.0, grounded: false, jumping: true };
        integrate_vertical(&mut motion, true, &tuning, DT);
        assert!((motion.vertical_velocity - (2.0 - 20.0 * DT)).abs() < 1e-6);
    }

    #[test]
    fn three_airborne_ticks_accumulate_gravity() {
        let tuning = MotionTuning::default();
        let mut motion = grounded();

        // Grounded tick pins the velocity, then the character leaves the ground.
        integrate_vertical(&mut motion, false, &tuning, DT);
        motion.grounded = false;
        for _ in 0..3 {
            integrate_vertical(&mut motion, false, &tuning, DT);
        }

        assert!((motion.vertical_velocity - (-2.2)).abs() < 1e-5);
    }

    #[test]
    fn landing_clears_jumping_and_reports_transition() {
        let mut transform = Transform::from_xyz(0.0, 0.0, 0.0);
        let mut motion = LocalMotion { vertical_velocity: -3.0, grounded: true, jumping: true };
        let mut collider = Collider::new(GroundPlane::default());

        let report = simulate(
            &mut transform,
            &mut motion,
            TickInput::default(),
            camera_along_z(),
            &MotionTuning::default(),
            Some(&mut collider),
            DT,
        );

        assert_eq!(motion.vertical_velocity, GROUNDED_VERTICAL_VELOCITY);
        assert!(!motion.jumping);
        assert_eq!(report.jump_transition, Some(false));
    }

    #[test]
    fn idle_input_keeps_rotation_and_moves_nothing_horizontally() {
        let start = Quat::from_rotation_y(0.7);
        let mut transform = Transform::from_rotation(start);
        let mut motion = grounded();
        let mut collider = Collider::new(GroundPlane::default());

        let report = simulate(
            &mut transform,
            &mut motion,
            TickInput::default(),
            camera_along_z(),
            &MotionTuning::default(),
            Some(&mut collider),
            DT,
        );

        assert_eq!(report.move_direction, Vec3::ZERO);
        assert_eq!(transform.rotation, start);
        assert_eq!(report.applied.x, 0.0);
        assert_eq!(report.applied.z, 0.0);
    }

    struct FixedView {
        forward: Vec3,
        right: Vec3,
    }

    impl ViewDirection for FixedView {
        fn forward(&self) -> Vec3 {
            self.forward
        }

        fn right(&self) -> Vec3 {
            self.right
        }
    }

    #[test]
    fn vertical_camera_degenerates_to_no_movement() {
        let straight_down = FixedView { forward: Vec3::NEG_Y, right: Vec3::X };
        let (forward, _) = horizontal_basis(&straight_down);
        assert_eq!(forward, Vec3::ZERO);
        assert_eq!(move_direction(0.0, 1.0, forward, Vec3::ZERO, 6.0), Vec3::ZERO);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let (forward, right) = camera_along_z();
        let dir = move_direction(1.0, 1.0, forward, right, 6.0);
        assert!((dir.length() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn facing_turns_toward_movement() {
        let target = facing_toward(Vec3::X);
        assert!((target * Vec3::NEG_Z - Vec3::X).length() < 1e-5);

        let partial = blend_facing(Quat::IDENTITY, Vec3::X * 6.0, 15.0, DT);
        let full = blend_facing(Quat::IDENTITY, Vec3::X * 6.0, 15.0, 1.0);
        assert!(partial.angle_between(target) > 0.0);
        assert!(partial.angle_between(target) < Quat::IDENTITY.angle_between(target));
        assert!(full.angle_between(target) < 1e-3);
    }

    #[test]
    fn missing_collider_applies_raw_displacement() {
        let mut transform = Transform::IDENTITY;
        let mut motion = grounded();
        let input = TickInput { horizontal: 0.0, vertical: 1.0, jump_pressed: false };

        let report = simulate(
            &mut transform,
            &mut motion,
            input,
            camera_along_z(),
            &MotionTuning::default(),
            None,
            DT,
        );

        assert_eq!(report.applied, report.requested);
        assert!(!motion.grounded);
    }
}
