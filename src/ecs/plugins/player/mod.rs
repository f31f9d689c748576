pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{
    Capabilities, CapabilityFactory, Character, CharacterDespawnEvent, CharacterRegistry,
    LocalCharacterBundle, LocalCharacterSpawnEvent, PlayerCamera, RemoteCharacterBundle,
};
pub use plugin::{PlayerPlugin, PlayerSet};
