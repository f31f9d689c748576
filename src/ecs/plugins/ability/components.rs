use bevy::prelude::*;

/// Ability/combat subsystem hook. Ticked once per frame for local characters.
pub trait AbilityHook: Send + Sync + 'static {
    fn update(&mut self, dt: f32);
}

/// Ability subsystem injected at spawn. Absence is tolerated.
#[derive(Component)]
pub struct Abilities(Option<Box<dyn AbilityHook>>);

impl Abilities {
    pub fn new(hook: impl AbilityHook) -> Self {
        Self(Some(Box::new(hook)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(hook) = self.0.as_mut() {
            hook.update(dt);
        }
    }
}

/// Hook that only counts its ticks and reports them periodically.
#[derive(Debug, Default)]
pub struct LoggingAbilities {
    ticks: u64,
}

impl AbilityHook for LoggingAbilities {
    fn update(&mut self, _dt: f32) {
        self.ticks += 1;
        if self.ticks % 600 == 0 {
            debug!("Ability subsystem ticked {} times", self.ticks);
        }
    }
}
