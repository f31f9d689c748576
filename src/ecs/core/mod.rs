pub mod components;
pub mod error;
pub mod plugin;
pub mod resources;

pub use components::NetworkId;
pub use error::{ConfigError, NetworkError, SnapshotError};
pub use plugin::CorePlugin;
pub use resources::GameConfig;
