pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Abilities, AbilityHook, LoggingAbilities};
pub use plugin::AbilityPlugin;
