use bevy::prelude::*;

pub const FORWARD_SPEED_PARAM: &str = "forwardSpeed";
pub const IS_JUMPING_PARAM: &str = "isJumping";

/// Whatever turns parameters into visual blending.
pub trait AnimationConsumer: Send + Sync + 'static {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Signals the motion simulator publishes every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub forward_speed: f32,
    pub is_jumping: bool,
}

/// Forwards [`AnimationParams`] to the consumer injected at spawn, unchanged.
/// Without a consumer forwarding is a no-op.
#[derive(Component)]
pub struct AnimationBridge(Option<Box<dyn AnimationConsumer>>);

impl AnimationBridge {
    pub fn new(consumer: impl AnimationConsumer) -> Self {
        Self(Some(Box::new(consumer)))
    }

    pub fn detached() -> Self {
        Self(None)
    }

    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }

    pub fn forward(&mut self, params: AnimationParams) {
        if let Some(consumer) = self.0.as_mut() {
            consumer.set_float(FORWARD_SPEED_PARAM, params.forward_speed);
            consumer.set_bool(IS_JUMPING_PARAM, params.is_jumping);
        }
    }
}

/// One-shot edge of the jumping flag: `true` on take-off, `false` on landing.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTransitionEvent {
    pub entity: Entity,
    pub jumping: bool,
}

/// Consumer that writes parameters to the trace log.
#[derive(Debug, Clone)]
pub struct LoggingAnimator {
    pub label: String,
}

impl AnimationConsumer for LoggingAnimator {
    fn set_float(&mut self, name: &str, value: f32) {
        trace!("[{}] {} = {:.2}", self.label, name, value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        trace!("[{}] {} = {}", self.label, name, value);
    }
}
