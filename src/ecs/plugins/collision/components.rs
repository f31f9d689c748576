use bevy::prelude::*;

/// Result of asking the resolver to move a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    /// Displacement actually applied after collision.
    pub applied: Vec3,
    /// Whether the character ended the move supported from below.
    pub grounded: bool,
}

/// Kinematic move primitive the motion simulator calls once per tick.
///
/// Implementations receive the character's current position so they can be
/// stateless with respect to the entity they serve.
pub trait CollisionResolver: Send + Sync + 'static {
    fn move_by(&mut self, position: Vec3, displacement: Vec3) -> CollisionOutcome;
}

/// Collision capability injected at spawn.
#[derive(Component)]
pub struct Collider(pub Box<dyn CollisionResolver>);

impl Collider {
    pub fn new(resolver: impl CollisionResolver) -> Self {
        Self(Box::new(resolver))
    }
}

/// Infinite horizontal floor at `height`. Anything that would end below it is
/// stopped on it and reported as grounded.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    pub height: f32,
    /// Tolerance for treating a character resting on the plane as supported.
    pub skin: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { height: 0.0, skin: 0.001 }
    }
}

impl CollisionResolver for GroundPlane {
    fn move_by(&mut self, position: Vec3, displacement: Vec3) -> CollisionOutcome {
        let target = position + displacement;
        if target.y <= self.height + self.skin && displacement.y <= 0.0 {
            let clamped = Vec3::new(target.x, self.height, target.z);
            CollisionOutcome {
                applied: clamped - position,
                grounded: true,
            }
        } else {
            CollisionOutcome {
                applied: displacement,
                grounded: false,
            }
        }
    }
}
