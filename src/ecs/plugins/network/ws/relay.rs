/*!
# Relay

Stands between peers the way a hosted room service would. It assigns every
connection the network id of the character that peer owns, and forwards that
peer's replication frames to everyone else. Frames carrying any other id are
dropped, so a peer can only ever publish poses for its own character.
*/

use bevy::prelude::*;
use futures_util::{SinkExt, StreamExt};
use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::{accept_async, tungstenite::Message};

use crate::ecs::core::NetworkError;
use crate::ecs::plugins::network::codec::{frame_network_id, FRAME_LEN};
use crate::ecs::plugins::network::components::ControlMessage;

/// Pause after a failed accept before trying again.
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Connected peers by the network id they own.
pub struct RelayState {
    peers: Mutex<HashMap<u32, mpsc::UnboundedSender<Message>>>,
    next_id: AtomicU32,
}

impl Default for RelayState {
    fn default() -> Self {
        Self {
            peers: Mutex::new(HashMap::new()),
            next_id: AtomicU32::new(1),
        }
    }
}

impl RelayState {
    fn allocate_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn join(&self, network_id: u32, sender: mpsc::UnboundedSender<Message>) {
        self.peers.lock().await.insert(network_id, sender);
    }

    async fn leave(&self, network_id: u32) {
        self.peers.lock().await.remove(&network_id);
    }

    async fn broadcast_except(&self, sender_id: u32, message: Message) {
        let peers = self.peers.lock().await;
        for (network_id, peer) in peers.iter() {
            if *network_id != sender_id {
                // A closed peer is removed by its own connection task.
                let _ = peer.send(message.clone());
            }
        }
    }

    pub async fn peer_count(&self) -> usize {
        self.peers.lock().await.len()
    }
}

pub async fn bind_relay(addr: &str) -> Result<TcpListener, NetworkError> {
    TcpListener::bind(addr).await.map_err(|source| NetworkError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Accepts peers for as long as the relay runs.
pub async fn serve_relay(listener: TcpListener, state: Arc<RelayState>) {
    if let Ok(addr) = listener.local_addr() {
        info!("Relay listening on ws://{}", addr);
    }

    loop {
        let (stream, client_addr) = accept_next(|| listener.accept()).await;

        let state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_peer(stream, client_addr, state).await {
                warn!("Peer {} closed with error: {}", client_addr, e);
            }
        });
    }
}

/// Retries `accept` until it yields a connection, pausing after each failure.
async fn accept_next<S, F, Fut>(mut accept: F) -> (S, SocketAddr)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<(S, SocketAddr)>>,
{
    loop {
        match accept().await {
            Ok(connection) => return connection,
            Err(e) => {
                // Errors like EMFILE persist until a peer goes away.
                warn!("Failed to accept relay connection: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            }
        }
    }
}

pub async fn run_relay(addr: &str) -> Result<(), NetworkError> {
    let listener = bind_relay(addr).await?;
    serve_relay(listener, Arc::new(RelayState::default())).await;
    Ok(())
}

async fn handle_peer(stream: TcpStream, client_addr: SocketAddr, state: Arc<RelayState>) -> Result<(), NetworkError> {
    let ws_stream = accept_async(stream).await?;
    let (mut sink, mut source) = ws_stream.split();

    // Welcome is queued before joining so it is the first thing the peer reads.
    let (sender, mut outgoing) = mpsc::unbounded_channel::<Message>();
    let network_id = state.allocate_id();
    let welcome = serde_json::to_string(&ControlMessage::Welcome { network_id })?;
    let _ = sender.send(Message::text(welcome));
    state.join(network_id, sender).await;
    info!(
        "Peer {} joined as character {} ({} connected)",
        client_addr,
        network_id,
        state.peer_count().await
    );

    let writer = tokio::spawn(async move {
        while let Some(message) = outgoing.recv().await {
            if sink.send(message).await.is_err() {
                break;
            }
        }
    });

    let result = async {
        while let Some(message) = source.next().await {
            match message? {
                Message::Binary(data) => {
                    if data.len() == FRAME_LEN && frame_network_id(&data) == Some(network_id) {
                        state.broadcast_except(network_id, Message::Binary(data)).await;
                    } else {
                        debug!("Dropping frame from peer {}: not addressed to its own character", network_id);
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        Ok::<(), NetworkError>(())
    }
    .await;

    state.leave(network_id).await;
    writer.abort();
    let left = serde_json::to_string(&ControlMessage::PeerLeft { network_id })?;
    state.broadcast_except(network_id, Message::text(left)).await;
    info!("Peer {} (character {}) left", client_addr, network_id);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn failed_accepts_back_off_before_retrying() {
        let mut failures = 2;
        let started = Instant::now();

        let (connection, addr) = accept_next(|| {
            let result = if failures > 0 {
                failures -= 1;
                Err(io::Error::other("too many open files"))
            } else {
                Ok((7u8, SocketAddr::from(([127, 0, 0, 1], 4000))))
            };
            std::future::ready(result)
        })
        .await;

        assert_eq!(connection, 7);
        assert_eq!(addr.port(), 4000);
        assert_eq!(failures, 0);
        assert!(started.elapsed() >= ACCEPT_RETRY_DELAY * 2);
    }
}
