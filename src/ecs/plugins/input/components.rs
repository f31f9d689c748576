use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Accepted slack on axis magnitude before an input is reported as suspicious.
pub const MAX_AXIS_MAGNITUDE: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    /// Raw stick/key axes, each conceptually in [-1, 1].
    Axes { horizontal: f32, vertical: f32 },
    JumpPressed,
    JumpReleased,
    Stop,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct InputCommandEvent {
    pub network_id: u32,
    pub command: InputCommand,
}

/// Input state the motion simulator reads each tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveInput {
    pub horizontal: f32,
    pub vertical: f32,
    jump_held: bool,
    jump_latched: bool,
}

impl MoveInput {
    pub fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::Axes { horizontal, vertical } => {
                self.horizontal = sanitize_axis(horizontal);
                self.vertical = sanitize_axis(vertical);
            }
            InputCommand::JumpPressed => {
                if !self.jump_held {
                    self.jump_latched = true;
                }
                self.jump_held = true;
            }
            InputCommand::JumpReleased => {
                self.jump_held = false;
            }
            InputCommand::Stop => {
                self.horizontal = 0.0;
                self.vertical = 0.0;
            }
        }
    }

    /// True once per press. The latch is cleared whether or not the press
    /// produced a jump, so holding the button never re-triggers.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_latched)
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}
