use bevy::prelude::*;

/// Identity of a character instance on the wire. Assigned by the relay and
/// shared by the owning peer and every mirror of that character.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId(pub u32);
