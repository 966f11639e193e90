use rps_common::error::{GameError, WebsocketError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Websocket(#[from] WebsocketError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("server stopped before it was ready")]
    NotReady,
}
