use rps_common::model::messages::ClientResponse;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("websocket error: {0}")]
    Socket(#[from] tungstenite::Error),
    #[error("bad message from server: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server closed the connection")]
    Closed,
    #[error("server rejected the move: {0}")]
    Rejected(String),
    #[error("match is already over, start a new one first")]
    MatchAlreadyOver,
    #[error("unexpected response: {0:?}")]
    Unexpected(ClientResponse),
}
