pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{InputCommand, InputCommandEvent, MoveInput};
pub use plugin::{InputPlugin, InputSet};
