use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::ecs::core::error::ConfigError;
use crate::ecs::plugins::movement::components::MotionTuning;

/// Largest accepted `spawn_radius`. Keeps the sampled range finite.
pub const MAX_SPAWN_RADIUS: f32 = 1.0e6;

/// Process-wide settings. Every field has a default so a config file only
/// needs to name what it overrides.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tuning applied to characters spawned by this process.
    pub tuning: MotionTuning,
    /// Outbound snapshot rate.
    pub sync_hz: f64,
    /// Local characters spawn at a random point within `spawn_radius` of this.
    pub spawn_center: Vec3,
    pub spawn_radius: f32,
    pub relay_host: String,
    pub relay_port: u16,
    /// Address peers dial. Derived from host/port when empty.
    pub relay_url: String,
    pub log_filter: String,
    pub debug_interval_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tuning: MotionTuning::default(),
            sync_hz: 20.0,
            spawn_center: Vec3::ZERO,
            spawn_radius: 5.0,
            relay_host: "0.0.0.0".to_string(),
            relay_port: 5000,
            relay_url: String::new(),
            log_filter: "info,wgpu=error".to_string(),
            debug_interval_secs: 1.0,
        }
    }
}

impl GameConfig {
    /// Defaults, then the JSON file named by `MOVEMENT_CONFIG`, then the
    /// `RELAY_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("MOVEMENT_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("RELAY_HOST") {
            config.relay_host = host;
        }
        if let Some(port) = std::env::var("RELAY_PORT").ok().and_then(|p| p.parse().ok()) {
            config.relay_port = port;
        }
        if let Ok(url) = std::env::var("RELAY_URL") {
            config.relay_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Rejects values that would panic once the app is running: the fixed
    /// timestep, the spawn sampler and the debug timer all need finite,
    /// non-zero durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sync_period = (self.sync_hz > 0.0)
            .then(|| Duration::try_from_secs_f64(1.0 / self.sync_hz).ok())
            .flatten();
        if !sync_period.is_some_and(|period| !period.is_zero()) {
            return Err(ConfigError::InvalidSyncRate(self.sync_hz));
        }

        if !(self.spawn_radius.is_finite() && (0.0..=MAX_SPAWN_RADIUS).contains(&self.spawn_radius)) {
            return Err(ConfigError::InvalidSpawnRadius {
                value: self.spawn_radius,
                max: MAX_SPAWN_RADIUS,
            });
        }

        let debug_interval = (self.debug_interval_secs > 0.0)
            .then(|| Duration::try_from_secs_f32(self.debug_interval_secs).ok())
            .flatten();
        if debug_interval.is_none() {
            return Err(ConfigError::InvalidDebugInterval(self.debug_interval_secs));
        }

        Ok(())
    }

    pub fn relay_bind_addr(&self) -> String {
        format!("{}:{}", self.relay_host, self.relay_port)
    }

    pub fn relay_url(&self) -> String {
        if self.relay_url.is_empty() {
            let host = if self.relay_host == "0.0.0.0" { "127.0.0.1" } else { &self.relay_host };
            format!("ws://{}:{}", host, self.relay_port)
        } else {
            self.relay_url.clone()
        }
    }
}
