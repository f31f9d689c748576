use bevy::prelude::*;

/// Whether this process simulates a character.
///
/// Chosen when the character is spawned and never changed afterwards: there
/// is no setter, and the spawn bundles decide which simulation components an
/// entity carries based on this value. A local character's pose is canonical
/// here; a remote one is mirrored from its owning peer and only interpolated.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority {
    local: bool,
}

impl Authority {
    pub(crate) fn local() -> Self {
        Self { local: true }
    }

    pub(crate) fn remote() -> Self {
        Self { local: false }
    }

    pub fn is_authoritative(&self) -> bool {
        self.local
    }
}
