use bevy::prelude::*;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::ecs::core::NetworkError;
use crate::ecs::plugins::network::codec::{decode_frame, encode_frame};
use crate::ecs::plugins::network::components::{ControlMessage, PeerEvent, TransportChannels};

/// Connects to the relay and pumps frames both ways until either side closes.
/// Reports the end of the connection as [`PeerEvent::Disconnected`].
pub async fn run_peer_connection(url: &str, transport: TransportChannels) -> Result<(), NetworkError> {
    let TransportChannels { inbound, mut outbound } = transport;

    let (ws_stream, _) = match connect_async(url).await {
        Ok(connection) => connection,
        Err(source) => {
            let _ = inbound.send(PeerEvent::Disconnected { reason: source.to_string() });
            return Err(NetworkError::Connect { url: url.to_string(), source });
        }
    };
    info!("Connected to relay {}", url);

    let (mut sink, mut source) = ws_stream.split();

    let writer = async {
        while let Some(frame) = outbound.recv().await {
            sink.send(Message::binary(encode_frame(&frame))).await?;
        }
        Ok::<(), NetworkError>(())
    };

    let reader = async {
        while let Some(message) = source.next().await {
            let event = match message? {
                Message::Binary(data) => match decode_frame(&data) {
                    Ok(frame) => PeerEvent::Frame(frame),
                    Err(e) => {
                        warn!("Dropping malformed frame: {}", e);
                        continue;
                    }
                },
                Message::Text(text) => match serde_json::from_str::<ControlMessage>(text.as_str()) {
                    Ok(control) => PeerEvent::Control(control),
                    Err(e) => {
                        warn!("Ignoring unknown control message: {}", e);
                        continue;
                    }
                },
                Message::Close(_) => break,
                _ => continue,
            };

            if inbound.send(event).is_err() {
                // The app is gone; nothing left to deliver to.
                break;
            }
        }
        Ok::<(), NetworkError>(())
    };

    let result = tokio::select! {
        result = writer => result,
        result = reader => result,
    };

    let reason = match &result {
        Ok(()) => "connection closed".to_string(),
        Err(e) => e.to_string(),
    };
    let _ = inbound.send(PeerEvent::Disconnected { reason });

    result
}
