use bevy::prelude::*;

/// Read-only view basis the motion simulator maps input against.
pub trait ViewDirection {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

impl ViewDirection for Transform {
    fn forward(&self) -> Vec3 {
        *Transform::forward(self)
    }

    fn right(&self) -> Vec3 {
        *Transform::right(self)
    }
}

/// The camera a local character reads its view basis from. Supplied at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraLink(pub Entity);

/// A camera that trails a character at a fixed offset.
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCamera {
    pub target: Option<Entity>,
    pub offset: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            target: None,
            offset: Vec3::new(0.0, 3.0, 6.0),
        }
    }
}
