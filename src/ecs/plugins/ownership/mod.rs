/*!
# Ownership

Answers one question per character: does this process own its pose?

Everything else keys off the answer. Local characters are the only ones that
carry [`LocalMotion`](crate::ecs::plugins::movement::components::LocalMotion),
remote ones are the only ones that carry
[`PendingRemoteTarget`](crate::ecs::plugins::network::components::PendingRemoteTarget),
so the simulator and the snapshot reader can never touch the same entity.
*/

pub mod components;

pub use components::Authority;

use bevy::prelude::*;

/// Pure query used by systems that need to branch on authority.
pub fn is_authoritative(authority: &Authority) -> bool {
    authority.is_authoritative()
}

/// Resolves authority by entity. Unknown entities are treated as not owned.
pub fn resolve_authority(entity: Entity, query: &Query<&Authority>) -> bool {
    query.get(entity).map(is_authoritative).unwrap_or(false)
}
