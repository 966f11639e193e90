use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move {0:?}, expected one of rock, paper, scissors")]
    InvalidMove(String),
    #[error("winning score must be at least 1, got {0}")]
    InvalidWinningScore(u8),
    #[error("scores {player_score}-{computer_score} are not reachable when playing to {winning_score}")]
    InvalidScores {
        player_score: u8,
        computer_score: u8,
        winning_score: u8,
    },
    #[error("unknown strategy {0:?}, expected one of random, rock, paper, scissors, beat-last")]
    UnknownStrategy(String),
}

#[derive(Debug, Error)]
pub enum WebsocketError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("websocket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("failed to encode message: {0}")]
    Json(#[from] serde_json::Error),
}
