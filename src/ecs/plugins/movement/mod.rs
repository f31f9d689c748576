pub mod components;
pub mod plugin;
pub mod simulator;
pub mod systems;

pub use components::{LocalMotion, MotionTuning};
pub use plugin::{MotionSet, MovementPlugin};
