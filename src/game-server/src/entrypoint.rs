use std::net::SocketAddr;

use rps_common::websocket::{self, WebsocketHandler};
use tokio::{
    sync::{broadcast, oneshot},
    task::JoinHandle,
};
use tracing::{info, warn, Level};

use crate::{config::GameServerConfig, error::ServerError, service::game_socket::GameSocket};

pub async fn serve(
    config: GameServerConfig,
    mut shutdown_receiver: broadcast::Receiver<()>,
    ready_signal: Option<oneshot::Sender<SocketAddr>>,
) -> Result<(), ServerError> {
    let game_socket = GameSocket::new(&config)?;
    let listener = websocket::bind(&config.socket_address).await?;
    let address = listener.local_addr()?;
    info!(
        "Serving matches to {} against {} opponent on {}",
        config.winning_score, config.opponent, address
    );

    // Signal that the server is ready
    if let Some(ready_signal) = ready_signal {
        if ready_signal.send(address).is_err() {
            warn!("Nobody waiting for the ready signal");
        }
    }

    game_socket.listen(listener, &mut shutdown_receiver).await;
    Ok(())
}

/// In-process server handle, used by tests and embedding callers.
pub struct GameServer {
    pub socket_address: SocketAddr,
    shutdown_sender: broadcast::Sender<()>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl GameServer {
    pub async fn start(config: GameServerConfig) -> Result<Self, ServerError> {
        // Init logging, ignore error if already set
        let _ = tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_max_level(Level::DEBUG)
            .try_init();

        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let (ready_sender, ready_receiver) = oneshot::channel();
        let handle = tokio::spawn(serve(config, shutdown_receiver, Some(ready_sender)));

        // Wait for server to be ready
        match ready_receiver.await {
            Ok(socket_address) => Ok(GameServer {
                socket_address,
                shutdown_sender,
                handle,
            }),
            Err(_) => match handle.await? {
                Err(e) => Err(e),
                Ok(()) => Err(ServerError::NotReady),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("ws://{}", self.socket_address)
    }

    pub async fn shutdown(self) -> Result<(), ServerError> {
        if self.shutdown_sender.send(()).is_err() {
            warn!("Server already stopped");
        }
        self.handle.await?
    }
}
