pub mod core;
pub mod plugins;

pub use plugins::{
    AbilityPlugin, AnimationPlugin, CameraPlugin, DebugPlugin, InputPlugin, InterpolationPlugin,
    MovementPlugin, NetworkPlugin, PlayerPlugin,
};
