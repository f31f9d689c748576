pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{AnimationBridge, AnimationConsumer, AnimationParams, JumpTransitionEvent, LoggingAnimator};
pub use plugin::AnimationPlugin;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use super::components::{FORWARD_SPEED_PARAM, IS_JUMPING_PARAM};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Float(String, f32),
        Bool(String, bool),
    }

    /// Consumer that records every call for later inspection.
    #[derive(Clone, Default)]
    pub struct RecordingAnimator(pub Arc<Mutex<Vec<Call>>>);

    impl RecordingAnimator {
        pub fn calls(&self) -> Vec<Call> {
            self.0.lock().unwrap().clone()
        }
    }

    impl AnimationConsumer for RecordingAnimator {
        fn set_float(&mut self, name: &str, value: f32) {
            self.0.lock().unwrap().push(Call::Float(name.to_string(), value));
        }

        fn set_bool(&mut self, name: &str, value: bool) {
            self.0.lock().unwrap().push(Call::Bool(name.to_string(), value));
        }
    }

    #[test]
    fn forwards_parameters_unchanged() {
        let recorder = RecordingAnimator::default();
        let mut bridge = AnimationBridge::new(recorder.clone());
        bridge.forward(AnimationParams { forward_speed: -0.75, is_jumping: true });

        assert_eq!(recorder.calls(), vec![
            Call::Float(FORWARD_SPEED_PARAM.to_string(), -0.75),
            Call::Bool(IS_JUMPING_PARAM.to_string(), true),
        ]);
    }

    #[test]
    fn detached_bridge_is_a_no_op() {
        let mut bridge = AnimationBridge::detached();
        assert!(!bridge.is_attached());
        bridge.forward(AnimationParams { forward_speed: 1.0, is_jumping: false });
    }
}
