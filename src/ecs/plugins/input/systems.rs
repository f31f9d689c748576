use bevy::prelude::*;
use crate::ecs::plugins::input::components::*;
use crate::ecs::plugins::ownership::{resolve_authority, Authority};
use crate::ecs::plugins::player::components::CharacterRegistry;

pub fn input_validation_system(
    mut input_events: EventReader<InputCommandEvent>,
) {
    for event in input_events.read() {
        if let InputCommand::Axes { horizontal, vertical } = event.command {
            let magnitude = Vec2::new(horizontal, vertical).length();
            if !magnitude.is_finite() || horizontal.abs() > MAX_AXIS_MAGNITUDE || vertical.abs() > MAX_AXIS_MAGNITUDE {
                warn!("Out-of-range input axes for character {}: ({}, {})",
                    event.network_id, horizontal, vertical);
            }
        }
    }
}

/// Applies commands to the addressed character. Commands for characters this
/// process does not own are dropped.
pub fn input_routing_system(
    mut input_events: EventReader<InputCommandEvent>,
    registry: Res<CharacterRegistry>,
    authority: Query<&Authority>,
    mut inputs: Query<&mut MoveInput>,
) {
    for event in input_events.read() {
        let Some(entity) = registry.get(event.network_id) else {
            debug!("Input for unknown character {}", event.network_id);
            continue;
        };

        if !resolve_authority(entity, &authority) {
            warn!("Dropping input for character {}: not simulated by this process", event.network_id);
            continue;
        }

        if let Ok(mut input) = inputs.get_mut(entity) {
            input.apply(event.command);
        }
    }
}
