use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::game::{Move, Outcome, RoundReport, Side};

/// Identifies one websocket session in logs.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Client types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientRequest {
    NewMatch,
    // Raw literal; validated by the engine, not by serde.
    Move { value: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ClientResponse {
    MatchStarted {
        winning_score: u8,
    },
    RoundResult {
        player_move: Move,
        computer_move: Move,
        outcome: Outcome,
        player_score: u8,
        computer_score: u8,
        match_over: bool,
    },
    MatchResult {
        winner: Side,
        player_score: u8,
        computer_score: u8,
    },
    MoveIgnored {
        player_score: u8,
        computer_score: u8,
    },
    Error {
        message: String,
    },
}

impl ClientResponse {
    /// Translates an engine report into the frames sent back for one move.
    pub fn from_report(report: &RoundReport) -> Vec<ClientResponse> {
        let (player_score, computer_score) =
            (report.state.player_score(), report.state.computer_score());
        let Some(round) = report.round else {
            return vec![ClientResponse::MoveIgnored {
                player_score,
                computer_score,
            }];
        };
        let mut responses = vec![ClientResponse::RoundResult {
            player_move: round.player_move,
            computer_move: round.computer_move,
            outcome: round.outcome,
            player_score,
            computer_score,
            match_over: report.match_over,
        }];
        if let Some(winner) = report.match_winner {
            responses.push(ClientResponse::MatchResult {
                winner,
                player_score,
                computer_score,
            });
        }
        responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::play_round_with,
        model::game::MatchState,
    };

    #[test]
    fn request_wire_format() {
        let request: ClientRequest =
            serde_json::from_str(r#"{"type":"Move","value":"rock"}"#).unwrap();
        assert_eq!(
            request,
            ClientRequest::Move {
                value: "rock".to_owned()
            }
        );
        let request: ClientRequest = serde_json::from_str(r#"{"type":"NewMatch"}"#).unwrap();
        assert_eq!(request, ClientRequest::NewMatch);
    }

    #[test]
    fn winning_move_yields_round_and_match_result() {
        let state = MatchState::from_scores(4, 0, 5).unwrap();
        let report = play_round_with(state, Move::Rock, || Move::Scissors);
        let responses = ClientResponse::from_report(&report);
        assert_eq!(
            responses,
            vec![
                ClientResponse::RoundResult {
                    player_move: Move::Rock,
                    computer_move: Move::Scissors,
                    outcome: Outcome::PlayerWins,
                    player_score: 5,
                    computer_score: 0,
                    match_over: true,
                },
                ClientResponse::MatchResult {
                    winner: Side::Player,
                    player_score: 5,
                    computer_score: 0,
                },
            ]
        );
        let json = serde_json::to_value(&responses[0]).unwrap();
        assert_eq!(json["type"], "RoundResult");
        assert_eq!(json["outcome"], "playerWins");
    }

    #[test]
    fn ignored_move_yields_single_notice() {
        let state = MatchState::from_scores(5, 3, 5).unwrap();
        let report = play_round_with(state, Move::Rock, || Move::Scissors);
        assert_eq!(
            ClientResponse::from_report(&report),
            vec![ClientResponse::MoveIgnored {
                player_score: 5,
                computer_score: 3
            }]
        );
    }
}
