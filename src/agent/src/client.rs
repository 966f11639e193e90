use futures_util::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use rps_common::{
    model::{
        game::Side,
        messages::{ClientRequest, ClientResponse},
    },
    strategy::{Round, Strategy},
};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};

use crate::error::ClientError;

type SocketWriteHandle = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type SocketReadHandle = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

pub struct Client {
    write: SocketWriteHandle,
    read: SocketReadHandle,
    history: Vec<Round>,
}

impl Client {
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        let (ws_stream, _) = connect_async(url).await?;
        info!("Connected to {}", url);
        let (write, read) = ws_stream.split();
        Ok(Client {
            write,
            read,
            history: Vec::new(),
        })
    }

    /// Rounds of the current match, from this player's side.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    async fn send(&mut self, request: &ClientRequest) -> Result<(), ClientError> {
        let body = serde_json::to_string(request)?;
        self.write.send(Message::text(body)).await?;
        Ok(())
    }

    async fn receive(&mut self) -> Result<ClientResponse, ClientError> {
        loop {
            match self.read.next().await {
                None => return Err(ClientError::Closed),
                Some(msg) => match msg? {
                    Message::Text(body) => {
                        let response: ClientResponse = serde_json::from_str(&body)?;
                        debug!("Received {:?}", response);
                        return Ok(response);
                    }
                    Message::Close(_) => return Err(ClientError::Closed),
                    _ => continue,
                },
            }
        }
    }

    /// Replaces the server-side match with a fresh one; returns its winning score.
    pub async fn new_match(&mut self) -> Result<u8, ClientError> {
        self.send(&ClientRequest::NewMatch).await?;
        match self.receive().await? {
            ClientResponse::MatchStarted { winning_score } => {
                self.history.clear();
                Ok(winning_score)
            }
            other => Err(ClientError::Unexpected(other)),
        }
    }

    /// Sends one raw move and collects every response that belongs to it.
    pub async fn play(&mut self, value: &str) -> Result<Vec<ClientResponse>, ClientError> {
        self.send(&ClientRequest::Move {
            value: value.to_owned(),
        })
        .await?;
        let first = self.receive().await?;
        let match_over = match &first {
            ClientResponse::RoundResult {
                player_move,
                computer_move,
                match_over,
                ..
            } => {
                self.history.push(Round {
                    my_move: *player_move,
                    their_move: *computer_move,
                });
                *match_over
            }
            ClientResponse::MoveIgnored { .. } | ClientResponse::Error { .. } => false,
            other => return Err(ClientError::Unexpected(other.clone())),
        };

        let mut responses = vec![first];
        if match_over {
            responses.push(self.receive().await?);
        }
        Ok(responses)
    }

    /// Plays moves chosen by `strategy` until the match ends.
    pub async fn play_match<F>(
        &mut self,
        strategy: &mut dyn Strategy,
        mut on_response: F,
    ) -> Result<Side, ClientError>
    where
        F: FnMut(&ClientResponse),
    {
        loop {
            let next_move = strategy.make_move(&self.history);
            for response in self.play(next_move.as_str()).await? {
                on_response(&response);
                match response {
                    ClientResponse::MatchResult { winner, .. } => return Ok(winner),
                    ClientResponse::MoveIgnored { .. } => return Err(ClientError::MatchAlreadyOver),
                    ClientResponse::Error { message } => return Err(ClientError::Rejected(message)),
                    _ => {}
                }
            }
        }
    }
}
