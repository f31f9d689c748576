use bevy::prelude::*;
use std::collections::HashMap;

use crate::ecs::core::NetworkId;
use crate::ecs::plugins::ability::Abilities;
use crate::ecs::plugins::animation::AnimationBridge;
use crate::ecs::plugins::collision::Collider;
use crate::ecs::plugins::input::MoveInput;
use crate::ecs::plugins::movement::{LocalMotion, MotionTuning};
use crate::ecs::plugins::network::{PendingRemoteTarget, PoseSnapshot};
use crate::ecs::plugins::ownership::Authority;

/// Marker for every character, local or mirrored.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Character;

/// Everything a locally owned character is simulated with. Only this bundle
/// carries [`LocalMotion`] and [`MoveInput`].
#[derive(Bundle)]
pub struct LocalCharacterBundle {
    pub character: Character,
    pub network_id: NetworkId,
    pub authority: Authority,
    pub transform: Transform,
    pub motion: LocalMotion,
    pub input: MoveInput,
    pub tuning: MotionTuning,
    pub animation: AnimationBridge,
    pub abilities: Abilities,
}

impl LocalCharacterBundle {
    pub fn new(network_id: u32, transform: Transform, tuning: MotionTuning, animation: AnimationBridge, abilities: Abilities) -> Self {
        Self {
            character: Character,
            network_id: NetworkId(network_id),
            authority: Authority::local(),
            transform,
            motion: LocalMotion::default(),
            input: MoveInput::default(),
            tuning,
            animation,
            abilities,
        }
    }
}

/// A mirror of a character owned by another peer. Starts at the pose of the
/// snapshot that announced it.
#[derive(Bundle)]
pub struct RemoteCharacterBundle {
    pub character: Character,
    pub network_id: NetworkId,
    pub authority: Authority,
    pub transform: Transform,
    pub target: PendingRemoteTarget,
    pub tuning: MotionTuning,
}

impl RemoteCharacterBundle {
    pub fn new(network_id: u32, snapshot: PoseSnapshot, tuning: MotionTuning) -> Self {
        Self {
            character: Character,
            network_id: NetworkId(network_id),
            authority: Authority::remote(),
            transform: Transform::from_translation(snapshot.position).with_rotation(snapshot.rotation),
            target: PendingRemoteTarget(snapshot),
            tuning,
        }
    }
}

/// Collaborators handed to a local character at spawn.
pub struct Capabilities {
    pub collider: Option<Collider>,
    pub animation: AnimationBridge,
    pub abilities: Abilities,
}

impl Capabilities {
    pub fn none() -> Self {
        Self {
            collider: None,
            animation: AnimationBridge::detached(),
            abilities: Abilities::none(),
        }
    }
}

/// Builds the [`Capabilities`] for each local character the relay assigns.
#[derive(Resource)]
pub struct CapabilityFactory(pub Box<dyn Fn(u32) -> Capabilities + Send + Sync>);

impl CapabilityFactory {
    pub fn new(factory: impl Fn(u32) -> Capabilities + Send + Sync + 'static) -> Self {
        Self(Box::new(factory))
    }
}

/// Camera local characters read their view basis from.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerCamera(pub Entity);

#[derive(Event, Debug, Clone, Copy)]
pub struct LocalCharacterSpawnEvent {
    pub network_id: u32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CharacterDespawnEvent {
    pub network_id: u32,
}

#[derive(Resource, Default)]
pub struct CharacterRegistry {
    characters: HashMap<u32, Entity>,
    local: Option<u32>,
}

impl CharacterRegistry {
    pub fn register_local(&mut self, network_id: u32, entity: Entity) {
        self.characters.insert(network_id, entity);
        self.local = Some(network_id);
    }

    pub fn register_remote(&mut self, network_id: u32, entity: Entity) {
        self.characters.insert(network_id, entity);
    }

    pub fn unregister(&mut self, network_id: u32) -> Option<Entity> {
        if self.local == Some(network_id) {
            self.local = None;
        }
        self.characters.remove(&network_id)
    }

    pub fn get(&self, network_id: u32) -> Option<Entity> {
        self.characters.get(&network_id).copied()
    }

    pub fn is_local(&self, network_id: u32) -> bool {
        self.local == Some(network_id)
    }

    pub fn local_id(&self) -> Option<u32> {
        self.local
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
