pub mod codec;
pub mod components;
pub mod plugin;
pub mod systems;
pub mod ws;

pub use components::{
    network_channels, ControlMessage, NetworkChannels, PeerEvent, PendingRemoteTarget, PoseSnapshot,
    ReplicationFrame, TransportChannels,
};
pub use plugin::{NetworkPlugin, ReplicationSet};

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;
    use crate::ecs::core::{CorePlugin, GameConfig, NetworkId};
    use crate::ecs::plugins::movement::LocalMotion;
    use crate::ecs::plugins::ability::Abilities;
    use crate::ecs::plugins::animation::AnimationBridge;
    use crate::ecs::plugins::movement::MotionTuning;
    use crate::ecs::plugins::player::{CharacterRegistry, LocalCharacterBundle, PlayerPlugin, RemoteCharacterBundle};

    fn replication_app() -> (App, TransportChannels) {
        let (channels, transport) = network_channels();
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_plugins(CorePlugin { config: GameConfig::default() })
            .add_plugins((PlayerPlugin, NetworkPlugin))
            .insert_resource(channels);
        (app, transport)
    }

    fn frame(network_id: u32, x: f32) -> PeerEvent {
        PeerEvent::Frame(ReplicationFrame {
            network_id,
            snapshot: PoseSnapshot { position: Vec3::new(x, 0.0, 0.0), rotation: Quat::IDENTITY },
        })
    }

    fn target_of(app: &App, network_id: u32) -> Option<Vec3> {
        let entity = app.world().resource::<CharacterRegistry>().get(network_id)?;
        app.world().get::<PendingRemoteTarget>(entity).map(|target| target.0.position)
    }

    #[test]
    fn welcome_spawns_the_local_character() {
        let (mut app, transport) = replication_app();
        transport.inbound.send(PeerEvent::Control(ControlMessage::Welcome { network_id: 7 })).unwrap();
        app.update();

        let registry = app.world().resource::<CharacterRegistry>();
        assert!(registry.is_local(7));
        let entity = registry.get(7).unwrap();
        assert_eq!(app.world().get::<NetworkId>(entity), Some(&NetworkId(7)));
        assert!(app.world().get::<LocalMotion>(entity).is_some());
        assert!(app.world().get::<PendingRemoteTarget>(entity).is_none());
    }

    #[test]
    fn first_frame_spawns_a_mirror_and_later_frames_retarget_it() {
        let (mut app, transport) = replication_app();
        transport.inbound.send(frame(3, 1.0)).unwrap();
        app.update();
        assert_eq!(target_of(&app, 3), Some(Vec3::new(1.0, 0.0, 0.0)));

        // Last arrival wins within one drain.
        transport.inbound.send(frame(3, 2.0)).unwrap();
        transport.inbound.send(frame(3, 4.0)).unwrap();
        app.update();
        assert_eq!(target_of(&app, 3), Some(Vec3::new(4.0, 0.0, 0.0)));
        assert!(!app.world().resource::<CharacterRegistry>().is_local(3));
    }

    #[test]
    fn frames_for_the_local_character_are_dropped() {
        let (mut app, transport) = replication_app();
        transport.inbound.send(PeerEvent::Control(ControlMessage::Welcome { network_id: 1 })).unwrap();
        transport.inbound.send(frame(1, 9.0)).unwrap();
        app.update();
        transport.inbound.send(frame(1, 9.0)).unwrap();
        app.update();

        let entity = app.world().resource::<CharacterRegistry>().get(1).unwrap();
        assert!(app.world().get::<PendingRemoteTarget>(entity).is_none());
        assert_ne!(app.world().get::<Transform>(entity).unwrap().translation.x, 9.0);
    }

    #[test]
    fn peer_left_despawns_the_mirror() {
        let (mut app, transport) = replication_app();
        transport.inbound.send(frame(4, 1.0)).unwrap();
        app.update();
        let entity = app.world().resource::<CharacterRegistry>().get(4).unwrap();

        transport.inbound.send(PeerEvent::Control(ControlMessage::PeerLeft { network_id: 4 })).unwrap();
        app.update();

        assert_eq!(app.world().resource::<CharacterRegistry>().get(4), None);
        assert!(!app.world().entities().contains(entity));
    }

    fn spawn_local(app: &mut App, network_id: u32, transform: Transform) -> Entity {
        app.world_mut()
            .spawn(LocalCharacterBundle::new(
                network_id,
                transform,
                MotionTuning::default(),
                AnimationBridge::detached(),
                Abilities::none(),
            ))
            .id()
    }

    #[test]
    fn sync_tick_writes_one_frame_per_local_character() {
        let (mut app, mut transport) = replication_app();
        let transform = Transform::from_xyz(1.5, -0.25, 3.0).with_rotation(Quat::from_rotation_y(0.7));
        spawn_local(&mut app, 2, transform);
        let mirror = PoseSnapshot { position: Vec3::splat(9.0), rotation: Quat::IDENTITY };
        app.world_mut().spawn(RemoteCharacterBundle::new(5, mirror, MotionTuning::default()));

        app.world_mut().run_schedule(FixedUpdate);

        let frame = transport.outbound.try_recv().unwrap();
        assert_eq!(frame.network_id, 2);
        assert_eq!(
            frame.snapshot.position.to_array().map(f32::to_bits),
            transform.translation.to_array().map(f32::to_bits)
        );
        assert_eq!(
            frame.snapshot.rotation.to_array().map(f32::to_bits),
            transform.rotation.to_array().map(f32::to_bits)
        );
        assert!(transport.outbound.try_recv().is_err());

        app.world_mut().run_schedule(FixedUpdate);
        assert_eq!(transport.outbound.try_recv().unwrap().network_id, 2);
        assert!(transport.outbound.try_recv().is_err());
    }

    #[test]
    fn mirrors_never_write_frames() {
        let (mut app, mut transport) = replication_app();
        let mirror = PoseSnapshot { position: Vec3::X, rotation: Quat::IDENTITY };
        app.world_mut().spawn(RemoteCharacterBundle::new(8, mirror, MotionTuning::default()));

        app.world_mut().run_schedule(FixedUpdate);

        assert!(transport.outbound.try_recv().is_err());
    }

    #[test]
    fn closed_outbound_channel_keeps_the_app_running() {
        let (mut app, transport) = replication_app();
        let local = spawn_local(&mut app, 2, Transform::from_xyz(0.0, 1.0, 0.0));
        drop(transport);

        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(FixedUpdate);

        assert!(app.world().entities().contains(local));
        assert!(app.world().resource::<NetworkChannels>().outbound.is_closed());
    }
}
