use bevy::prelude::*;
use crate::ecs::plugins::ability::components::*;
use crate::ecs::plugins::movement::LocalMotion;

/// Delegates to each local character's ability subsystem, once per tick.
pub fn ability_update_system(
    time: Res<Time>,
    mut query: Query<&mut Abilities, With<LocalMotion>>,
) {
    let dt = time.delta_secs();
    for mut abilities in query.iter_mut() {
        abilities.update(dt);
    }
}
