use std::net::SocketAddr;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde::{de::DeserializeOwned, Serialize};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::broadcast,
};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

use crate::error::WebsocketError;

pub async fn bind(address: &str) -> Result<TcpListener, WebsocketError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| WebsocketError::Bind {
            address: address.to_owned(),
            source,
        })
}

/// JSON-over-websocket server loop. Each accepted connection gets its own
/// `Session`, owned by the connection task for its whole lifetime.
#[async_trait]
pub trait WebsocketHandler<RQ, RS>
where
    Self: Clone + Send + Sync + 'static,
    RQ: DeserializeOwned + Send + 'static,
    RS: Serialize + Send + Sync + 'static,
{
    type Session: Send + 'static;

    fn open_session(&self, address: SocketAddr) -> Self::Session;

    // Logic to handle a client's request
    fn respond_to_request(&self, session: &mut Self::Session, request: RQ) -> Vec<RS>;

    // Reply for frames that could not be decoded into a request
    fn reject_request(&self, reason: String) -> RS;

    async fn listen(
        &self,
        ws_listener: TcpListener,
        shutdown_receiver: &mut broadcast::Receiver<()>,
    ) {
        match ws_listener.local_addr() {
            Ok(address) => info!("Initialized ws listener: {}", address),
            Err(e) => warn!("Initialized ws listener on unknown address: {}", e),
        }
        loop {
            tokio::select! {
                result = ws_listener.accept() => {
                    match result {
                        Err(e) => {
                            error!("Failed to accept connection: {}", e);
                        }
                        Ok((stream, address)) => {
                            let handler = self.clone();
                            let connection_shutdown = shutdown_receiver.resubscribe();
                            tokio::spawn(async move {
                                if let Err(e) = handler
                                    .connection_thread(stream, address, connection_shutdown)
                                    .await
                                {
                                    warn!("Connection {} ended with error: {}", address, e);
                                }
                            });
                        }
                    }
                },
                _ = shutdown_receiver.recv() => {
                    break;
                }
            };
        }
        info!("Exited ws listener");
    }

    // Task to handle connection lifetime
    async fn connection_thread(
        &self,
        stream: TcpStream,
        address: SocketAddr,
        mut shutdown_receiver: broadcast::Receiver<()>,
    ) -> Result<(), WebsocketError> {
        info!("New ws connection: {}", address);
        let stream = accept_async(stream).await?;
        let (mut ws_sender, mut ws_receiver) = stream.split();
        let mut session = self.open_session(address);

        loop {
            let msg = tokio::select! {
                msg = ws_receiver.next() => msg,
                _ = shutdown_receiver.recv() => {
                    debug!("Shutting down connection {}", address);
                    break;
                }
            };
            let Some(msg) = msg else {
                debug!("Connection {} closed by peer", address);
                break;
            };

            let responses = match msg? {
                Message::Text(body) => match serde_json::from_str::<RQ>(&body) {
                    Ok(request) => self.respond_to_request(&mut session, request),
                    Err(e) => {
                        warn!("Failed to parse request from {}: {}", address, e);
                        vec![self.reject_request(format!("malformed request: {}", e))]
                    }
                },
                Message::Close(_) => break,
                // tungstenite answers pings on its own
                Message::Ping(_) | Message::Pong(_) => continue,
                _ => vec![self.reject_request("expected a text frame".to_owned())],
            };

            for response in responses {
                let response_body = serde_json::to_string(&response)?;
                ws_sender.send(Message::text(response_body)).await?;
            }
        }
        info!("Closed ws connection: {}", address);
        Ok(())
    }
}
