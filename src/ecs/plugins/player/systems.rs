use bevy::prelude::*;
use rand::Rng;

use crate::ecs::core::GameConfig;
use crate::ecs::plugins::camera::components::{CameraLink, FollowCamera};
use crate::ecs::plugins::camera::systems::attach_follow_camera;
use crate::ecs::plugins::player::components::*;

pub fn local_character_spawn_system(
    mut commands: Commands,
    mut spawn_events: EventReader<LocalCharacterSpawnEvent>,
    mut registry: ResMut<CharacterRegistry>,
    config: Res<GameConfig>,
    factory: Option<Res<CapabilityFactory>>,
    camera: Option<Res<PlayerCamera>>,
    mut cameras: Query<&mut FollowCamera>,
) {
    for event in spawn_events.read() {
        if let Some(existing) = registry.get(event.network_id) {
            warn!("Character {} already exists as {:?}; not spawning it again", event.network_id, existing);
            continue;
        }

        let capabilities = match factory.as_ref() {
            Some(factory) => (factory.0)(event.network_id),
            None => Capabilities::none(),
        };

        if capabilities.collider.is_none() {
            warn!("Local character {} has no collider; it will move unclipped and never land", event.network_id);
        }
        if !capabilities.animation.is_attached() {
            warn!("Local character {} has no animation consumer", event.network_id);
        }
        if !capabilities.abilities.is_present() {
            error!("Local character {} has no ability subsystem; ability input is disabled", event.network_id);
        }

        let transform = Transform::from_translation(spawn_point(&config));
        let mut entity = commands.spawn(LocalCharacterBundle::new(
            event.network_id,
            transform,
            config.tuning,
            capabilities.animation,
            capabilities.abilities,
        ));
        if let Some(collider) = capabilities.collider {
            entity.insert(collider);
        }
        let entity = entity.id();

        match camera.as_ref() {
            Some(camera) => {
                commands.entity(entity).insert(CameraLink(camera.0));
                attach_follow_camera(camera.0, entity, &mut cameras);
            }
            None => {
                warn!("No player camera configured; local character {} will not respond to movement input", event.network_id);
            }
        }

        registry.register_local(event.network_id, entity);
        info!("Spawned local character {} as {:?} at {:?}", event.network_id, entity, transform.translation);
    }
}

pub fn character_despawn_system(
    mut commands: Commands,
    mut despawn_events: EventReader<CharacterDespawnEvent>,
    mut registry: ResMut<CharacterRegistry>,
) {
    for event in despawn_events.read() {
        if let Some(entity) = registry.unregister(event.network_id) {
            commands.entity(entity).despawn();
            info!("Despawned character {}", event.network_id);
        }
    }
}

fn spawn_point(config: &GameConfig) -> Vec3 {
    if config.spawn_radius <= 0.0 {
        return config.spawn_center;
    }

    let mut rng = rand::thread_rng();
    let offset = Vec3::new(
        rng.gen_range(-config.spawn_radius..config.spawn_radius),
        0.0,
        rng.gen_range(-config.spawn_radius..config.spawn_radius),
    );
    config.spawn_center + offset
}
