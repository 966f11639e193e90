use std::net::SocketAddr;

use async_trait::async_trait;
use rps_common::{
    error::GameError,
    model::{
        game::MatchState,
        messages::{ClientRequest, ClientResponse},
    },
    strategy::StrategyKind,
    websocket::WebsocketHandler,
};
use tracing::info;

use crate::{config::GameServerConfig, service::game_session::GameSession};

#[derive(Clone)]
pub struct GameSocket {
    initial: MatchState,
    opponent: StrategyKind,
}

impl GameSocket {
    pub fn new(config: &GameServerConfig) -> Result<Self, GameError> {
        Ok(GameSocket {
            initial: MatchState::with_winning_score(config.winning_score)?,
            opponent: config.opponent,
        })
    }
}

#[async_trait]
impl WebsocketHandler<ClientRequest, ClientResponse> for GameSocket {
    type Session = GameSession;

    fn open_session(&self, address: SocketAddr) -> GameSession {
        let session = GameSession::new(self.initial, self.opponent.build());
        info!(
            "Session {} opened for {} against {}",
            session.id, address, self.opponent
        );
        session
    }

    fn respond_to_request(
        &self,
        session: &mut GameSession,
        request: ClientRequest,
    ) -> Vec<ClientResponse> {
        session.update(request)
    }

    fn reject_request(&self, reason: String) -> ClientResponse {
        ClientResponse::Error { message: reason }
    }
}
