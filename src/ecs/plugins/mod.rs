pub mod ability;
pub mod animation;
pub mod camera;
pub mod collision;
pub mod debug;
pub mod input;
pub mod interpolation;
pub mod movement;
pub mod network;
pub mod ownership;
pub mod player;

pub use ability::AbilityPlugin;
pub use animation::AnimationPlugin;
pub use camera::CameraPlugin;
pub use debug::DebugPlugin;
pub use input::InputPlugin;
pub use interpolation::InterpolationPlugin;
pub use movement::MovementPlugin;
pub use network::NetworkPlugin;
pub use player::PlayerPlugin;
