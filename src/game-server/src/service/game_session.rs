use rps_common::{
    engine::play_input_with,
    model::{
        game::MatchState,
        messages::{ClientRequest, ClientResponse, SessionId},
    },
    strategy::{Round, Strategy},
};
use tracing::{debug, info, warn};

/// Per-connection game: the match in progress, the computer opponent and the
/// last round played, seen from the computer's side.
pub struct GameSession {
    pub id: SessionId,
    initial: MatchState,
    state: MatchState,
    opponent: Box<dyn Strategy + Send>,
    last_round: Option<Round>,
}

impl GameSession {
    pub fn new(initial: MatchState, opponent: Box<dyn Strategy + Send>) -> Self {
        GameSession {
            id: SessionId::new(),
            initial,
            state: initial,
            opponent,
            last_round: None,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn update(&mut self, request: ClientRequest) -> Vec<ClientResponse> {
        match request {
            ClientRequest::NewMatch => {
                info!("Session {} starting a new match", self.id);
                self.state = self.initial;
                self.last_round = None;
                vec![ClientResponse::MatchStarted {
                    winning_score: self.state.winning_score(),
                }]
            }
            ClientRequest::Move { value } => {
                let report = match play_input_with(self.state, &value, || {
                    self.opponent.make_move(self.last_round.as_slice())
                }) {
                    Ok(report) => report,
                    Err(e) => {
                        warn!("Session {} sent a bad move: {}", self.id, e);
                        return vec![ClientResponse::Error {
                            message: e.to_string(),
                        }];
                    }
                };

                if report.was_ignored() {
                    debug!("Session {} moved after match end", self.id);
                    return ClientResponse::from_report(&report);
                }

                // Opponents only look at the previous round.
                self.last_round = report.round.map(|round| Round {
                    my_move: round.computer_move,
                    their_move: round.player_move,
                });
                if let Some(winner) = report.match_winner {
                    info!(
                        "Session {} finished: {} wins {}-{}",
                        self.id,
                        winner,
                        report.state.player_score(),
                        report.state.computer_score()
                    );
                }
                self.state = report.state;
                ClientResponse::from_report(&report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_common::{
        model::game::{Move, Outcome, Side},
        strategy::{BeatLast, FixedMove},
    };

    fn play(session: &mut GameSession, value: &str) -> Vec<ClientResponse> {
        session.update(ClientRequest::Move {
            value: value.to_owned(),
        })
    }

    #[test]
    fn plays_to_the_winning_score_then_ignores_moves() {
        let initial = MatchState::with_winning_score(2).unwrap();
        let mut session = GameSession::new(initial, Box::new(FixedMove(Move::Scissors)));

        assert_eq!(play(&mut session, "rock").len(), 1);
        let responses = play(&mut session, "rock");
        assert_eq!(
            responses.last(),
            Some(&ClientResponse::MatchResult {
                winner: Side::Player,
                player_score: 2,
                computer_score: 0,
            })
        );
        assert_eq!(
            play(&mut session, "paper"),
            vec![ClientResponse::MoveIgnored {
                player_score: 2,
                computer_score: 0,
            }]
        );
        assert_eq!(session.state().player_score(), 2);
    }

    #[test]
    fn invalid_move_is_reported_and_not_scored() {
        let mut session = GameSession::new(MatchState::new(), Box::new(FixedMove(Move::Rock)));
        let responses = play(&mut session, "lizard");
        assert!(matches!(
            responses.as_slice(),
            [ClientResponse::Error { message }] if message.contains("lizard")
        ));
        assert_eq!(session.state(), MatchState::new());
    }

    #[test]
    fn new_match_resets_scores_and_history() {
        let mut session = GameSession::new(MatchState::new(), Box::new(BeatLast));
        play(&mut session, "scissors");
        assert_eq!(session.state().computer_score(), 1);

        let responses = session.update(ClientRequest::NewMatch);
        assert_eq!(responses, vec![ClientResponse::MatchStarted { winning_score: 5 }]);
        assert_eq!(session.state(), MatchState::new());

        // Fresh history: beat-last opens with rock again.
        let responses = play(&mut session, "rock");
        assert!(matches!(
            responses.as_slice(),
            [ClientResponse::RoundResult {
                computer_move: Move::Rock,
                outcome: Outcome::Tie,
                ..
            }]
        ));
    }

    #[test]
    fn endless_ties_keep_a_single_round() {
        let mut session = GameSession::new(MatchState::new(), Box::new(FixedMove(Move::Rock)));
        for _ in 0..1000 {
            play(&mut session, "rock");
        }
        assert_eq!(
            session.last_round,
            Some(Round {
                my_move: Move::Rock,
                their_move: Move::Rock,
            })
        );
        assert_eq!(session.state(), MatchState::new());

        play(&mut session, "lizard");
        assert!(session.last_round.is_some());
    }

    #[test]
    fn history_feeds_the_opponent() {
        let mut session = GameSession::new(MatchState::new(), Box::new(BeatLast));
        play(&mut session, "paper");
        // Counters the player's paper with scissors.
        let responses = play(&mut session, "paper");
        assert!(matches!(
            responses.as_slice(),
            [ClientResponse::RoundResult {
                computer_move: Move::Scissors,
                outcome: Outcome::ComputerWins,
                ..
            }]
        ));
    }
}
