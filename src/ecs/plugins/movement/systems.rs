use bevy::prelude::*;
use crate::ecs::plugins::animation::{AnimationBridge, JumpTransitionEvent};
use crate::ecs::plugins::camera::CameraLink;
use crate::ecs::plugins::collision::Collider;
use crate::ecs::plugins::input::MoveInput;
use crate::ecs::plugins::movement::components::*;
use crate::ecs::plugins::movement::simulator::{horizontal_basis, simulate, TickInput};

/// Advances every locally owned character by one tick and forwards its
/// animation parameters.
pub fn local_motion_system(
    time: Res<Time>,
    cameras: Query<&Transform, Without<LocalMotion>>,
    mut characters: Query<(
        Entity,
        &mut Transform,
        &mut LocalMotion,
        &mut MoveInput,
        &MotionTuning,
        Option<&CameraLink>,
        Option<&mut Collider>,
        &mut AnimationBridge,
    )>,
    mut transitions: EventWriter<JumpTransitionEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut motion, mut input, tuning, camera, collider, mut animation) in characters.iter_mut() {
        let basis = camera
            .and_then(|link| cameras.get(link.0).ok())
            .map(|view| horizontal_basis(view))
            .unwrap_or((Vec3::ZERO, Vec3::ZERO));

        let tick_input = TickInput {
            horizontal: input.horizontal,
            vertical: input.vertical,
            jump_pressed: input.take_jump(),
        };

        let mut collider = collider;
        let report = simulate(
            &mut transform,
            &mut motion,
            tick_input,
            basis,
            tuning,
            collider.as_deref_mut(),
            dt,
        );

        animation.forward(report.animation);

        if let Some(jumping) = report.jump_transition {
            transitions.send(JumpTransitionEvent { entity, jumping });
        }
    }
}
