pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{CameraLink, FollowCamera, ViewDirection};
pub use plugin::CameraPlugin;
