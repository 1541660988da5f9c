//! One websocket connection: a reader that forwards commands into the loop and
//! a writer that drains the hub buffer and keeps the connection alive.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use bastion_core::commands::Command;

use crate::hub::Hub;
use crate::protocol;

/// Time allowed to write one message.
pub const WRITE_WAIT: Duration = Duration::from_secs(10);

/// Time allowed between inbound frames (any message or pong).
pub const PONG_WAIT: Duration = Duration::from_secs(60);

/// Ping cadence. Must be shorter than `PONG_WAIT`.
pub const PING_PERIOD: Duration = Duration::from_secs(54);

/// Serve a connection until either side gives up.
pub async fn serve_client(socket: WebSocket, hub: Arc<Hub>, commands: mpsc::Sender<Command>) {
    let (client, outbound) = hub.register();
    info!(client, clients = hub.client_count(), "listener connected");

    let (sink, stream) = socket.split();
    let mut writer = tokio::spawn(write_pump(sink, outbound));
    let mut reader = tokio::spawn(read_pump(stream, commands));

    tokio::select! {
        _ = &mut writer => reader.abort(),
        _ = &mut reader => writer.abort(),
    }

    hub.unregister(client);
    info!(client, "listener disconnected");
}

async fn read_pump(mut stream: SplitStream<WebSocket>, commands: mpsc::Sender<Command>) {
    loop {
        let frame = match time::timeout(PONG_WAIT, stream.next()).await {
            Ok(Some(Ok(frame))) => frame,
            Ok(Some(Err(e))) => {
                debug!(error = %e, "websocket read failed");
                return;
            }
            Ok(None) => return,
            Err(_) => {
                info!("listener silent past deadline, closing");
                return;
            }
        };

        let bytes = match &frame {
            Message::Text(text) => text.as_str().as_bytes(),
            Message::Binary(data) => data.as_ref(),
            Message::Close(_) => return,
            // Pings are answered by the socket; pongs only refresh the deadline.
            Message::Ping(_) | Message::Pong(_) => continue,
        };

        match protocol::decode_command(bytes) {
            Ok(command) => {
                debug!(action = command.action(), "command received");
                if commands.send(command).await.is_err() {
                    warn!("engine intake closed, dropping listener");
                    return;
                }
            }
            Err(e) => warn!(error = %e, "dropping inbound message"),
        }
    }
}

async fn write_pump(
    mut sink: SplitSink<WebSocket, Message>,
    mut outbound: mpsc::Receiver<Utf8Bytes>,
) {
    let mut ping = time::interval_at(Instant::now() + PING_PERIOD, PING_PERIOD);

    loop {
        let message = tokio::select! {
            next = outbound.recv() => match next {
                Some(snapshot) => Message::Text(snapshot),
                None => {
                    // The hub dropped us.
                    let _ = time::timeout(WRITE_WAIT, sink.send(Message::Close(None))).await;
                    return;
                }
            },
            _ = ping.tick() => Message::Ping(Default::default()),
        };

        match time::timeout(WRITE_WAIT, sink.send(message)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                debug!(error = %e, "websocket write failed");
                return;
            }
            Err(_) => {
                warn!("websocket write timed out");
                return;
            }
        }
    }
}
