/*!
# WebSocket Transport

Both ends of the replication transport run on a background thread with their
own tokio runtime and talk to the ECS only through channels:

- [`PeerConnectionPlugin`] connects this process to a relay and installs
  [`NetworkChannels`] for the replication systems.
- [`RelayPlugin`] runs the relay that peers connect to.
*/

pub mod client;
pub mod relay;

use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};

use crate::ecs::core::NetworkError;
use crate::ecs::plugins::network::components::{network_channels, NetworkChannels, PeerEvent, TransportChannels};

pub struct PeerConnectionPlugin {
    pub url: String,
}

impl Plugin for PeerConnectionPlugin {
    fn build(&self, app: &mut App) {
        let (channels, transport) = network_channels();
        app.insert_resource::<NetworkChannels>(channels);

        let url = self.url.clone();
        std::thread::spawn(move || {
            let inbound = transport.inbound.clone();
            if let Err(e) = run_on_runtime(|| async move { client::run_peer_connection(&url, transport).await }) {
                error!("Relay connection failed: {}", e);
                let _ = inbound.send(PeerEvent::Disconnected { reason: e.to_string() });
            }
        });
    }
}

/// Outcome of the relay task, polled by [`relay_status_system`].
#[derive(Resource)]
pub struct RelayStatus(pub Receiver<NetworkError>);

pub struct RelayPlugin {
    pub bind_addr: String,
}

impl Plugin for RelayPlugin {
    fn build(&self, app: &mut App) {
        let (status_send, status_recv): (Sender<NetworkError>, Receiver<NetworkError>) = crossbeam_channel::bounded(1);
        app.insert_resource(RelayStatus(status_recv))
            .add_systems(Update, relay_status_system);

        let bind_addr = self.bind_addr.clone();
        std::thread::spawn(move || {
            if let Err(e) = run_on_runtime(|| async move { relay::run_relay(&bind_addr).await }) {
                let _ = status_send.send(e);
            }
        });
    }
}

/// Stops the app when the relay task has failed.
pub fn relay_status_system(
    status: Res<RelayStatus>,
    mut exit: EventWriter<AppExit>,
) {
    if let Ok(e) = status.0.try_recv() {
        error!("Relay stopped: {}", e);
        exit.send(AppExit::error());
    }
}

fn run_on_runtime<F, Fut>(task: F) -> Result<(), NetworkError>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<(), NetworkError>>,
{
    let runtime = tokio::runtime::Runtime::new().map_err(NetworkError::Runtime)?;
    runtime.block_on(task())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::plugins::network::components::{ControlMessage, PoseSnapshot, ReplicationFrame};
    use std::sync::Arc;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn connect(url: &str) -> NetworkChannels {
        let (channels, transport) = network_channels();
        let url = url.to_string();
        tokio::spawn(async move { client::run_peer_connection(&url, transport).await });
        channels
    }

    fn expect_welcome(peer: &NetworkChannels) -> u32 {
        match peer.inbound.recv_timeout(WAIT).unwrap() {
            PeerEvent::Control(ControlMessage::Welcome { network_id }) => network_id,
            other => panic!("expected welcome, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn relay_forwards_own_frames_and_announces_departures() {
        let listener = relay::bind_relay("127.0.0.1:0").await.unwrap();
        let url = format!("ws://{}", listener.local_addr().unwrap());
        tokio::spawn(relay::serve_relay(listener, Arc::new(relay::RelayState::default())));

        let alice = connect(&url);
        let alice_id = expect_welcome(&alice);
        let bob = connect(&url);
        let bob_id = expect_welcome(&bob);
        assert_ne!(alice_id, bob_id);

        let snapshot = PoseSnapshot {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_y(0.5),
        };

        // Alice may not publish Bob's character; only her own frame gets through.
        alice.outbound.send(ReplicationFrame { network_id: bob_id, snapshot }).unwrap();
        alice.outbound.send(ReplicationFrame { network_id: alice_id, snapshot }).unwrap();

        match bob.inbound.recv_timeout(WAIT).unwrap() {
            PeerEvent::Frame(frame) => {
                assert_eq!(frame, ReplicationFrame { network_id: alice_id, snapshot });
            }
            other => panic!("expected frame, got {:?}", other),
        }

        drop(alice);

        match bob.inbound.recv_timeout(WAIT).unwrap() {
            PeerEvent::Control(ControlMessage::PeerLeft { network_id }) => assert_eq!(network_id, alice_id),
            other => panic!("expected peer left, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_relay_reports_disconnect() {
        let listener = relay::bind_relay("127.0.0.1:0").await.unwrap();
        let url = format!("ws://{}", listener.local_addr().unwrap());
        drop(listener);

        let (channels, transport) = network_channels();
        let result = client::run_peer_connection(&url, transport).await;

        assert!(matches!(result, Err(NetworkError::Connect { .. })));
        assert!(matches!(channels.inbound.try_recv(), Ok(PeerEvent::Disconnected { .. })));
    }
}
