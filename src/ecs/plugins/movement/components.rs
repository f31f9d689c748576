use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ecs::core::error::ConfigError;

/// Vertical velocity held while grounded so the resolver keeps reporting
/// contact on the next move.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -1.0;

/// Horizontal movement below this squared length leaves facing untouched.
pub const FACING_THRESHOLD_SQUARED: f32 = 0.01;

/// Per-character motion parameters. Validated on construction and read-only
/// afterwards.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TuningValues", into = "TuningValues")]
pub struct MotionTuning {
    move_speed: f32,
    jump_velocity: f32,
    gravity: f32,
    facing_blend_rate: f32,
    remote_damping: f32,
}

impl MotionTuning {
    pub fn new(
        move_speed: f32,
        jump_velocity: f32,
        gravity: f32,
        facing_blend_rate: f32,
        remote_damping: f32,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("move_speed", move_speed),
            ("jump_velocity", jump_velocity),
            ("gravity", gravity),
            ("facing_blend_rate", facing_blend_rate),
            ("remote_damping", remote_damping),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTuning { name, value });
            }
        }

        Ok(Self {
            move_speed,
            jump_velocity,
            gravity,
            facing_blend_rate,
            remote_damping,
        })
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn jump_velocity(&self) -> f32 {
        self.jump_velocity
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// How fast a local character turns toward its movement direction.
    pub fn facing_blend_rate(&self) -> f32 {
        self.facing_blend_rate
    }

    /// How fast a mirrored character closes on its latest snapshot.
    pub fn remote_damping(&self) -> f32 {
        self.remote_damping
    }
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_velocity: 8.0,
            gravity: 20.0,
            facing_blend_rate: 15.0,
            remote_damping: 10.0,
        }
    }
}

/// Serialized form of [`MotionTuning`]; missing fields take the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct TuningValues {
    move_speed: f32,
    jump_velocity: f32,
    gravity: f32,
    facing_blend_rate: f32,
    remote_damping: f32,
}

impl Default for TuningValues {
    fn default() -> Self {
        MotionTuning::default().into()
    }
}

impl From<MotionTuning> for TuningValues {
    fn from(tuning: MotionTuning) -> Self {
        Self {
            move_speed: tuning.move_speed,
            jump_velocity: tuning.jump_velocity,
            gravity: tuning.gravity,
            facing_blend_rate: tuning.facing_blend_rate,
            remote_damping: tuning.remote_damping,
        }
    }
}

impl TryFrom<TuningValues> for MotionTuning {
    type Error = ConfigError;

    fn try_from(values: TuningValues) -> Result<Self, Self::Error> {
        MotionTuning::new(
            values.move_speed,
            values.jump_velocity,
            values.gravity,
            values.facing_blend_rate,
            values.remote_damping,
        )
    }
}

/// Simulator state of a locally owned character. Only local characters carry
/// this component, so only they are ever simulated.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalMotion {
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub jumping: bool,
}
