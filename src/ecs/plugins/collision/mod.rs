pub mod components;

pub use components::{Collider, CollisionOutcome, CollisionResolver, GroundPlane};
