//! Round engine: resolves one player move against a computer move and scores
//! it against a caller-owned [`MatchState`].

use tracing::debug;

use crate::{
    error::GameError,
    model::game::{MatchState, Move, Outcome, RoundReport, RoundResult},
};

pub fn new_match() -> MatchState {
    MatchState::new()
}

pub fn random_move() -> Move {
    Move::random(&mut rand::thread_rng())
}

pub fn resolve(player_move: Move, computer_move: Move) -> Outcome {
    if player_move == computer_move {
        Outcome::Tie
    } else if player_move.beats(&computer_move) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

/// Plays one round against a uniformly random computer move.
pub fn play_round(state: MatchState, player_move: Move) -> RoundReport {
    play_round_with(state, player_move, random_move)
}

/// Plays one round with the computer move drawn from `computer`. The closure is
/// not called when the match has already ended.
pub fn play_round_with<F>(state: MatchState, player_move: Move, computer: F) -> RoundReport
where
    F: FnOnce() -> Move,
{
    if state.is_over() {
        debug!("Match already over, ignoring {}", player_move);
        return RoundReport {
            round: None,
            state,
            match_over: true,
            match_winner: state.winner(),
        };
    }

    let computer_move = computer();
    let outcome = resolve(player_move, computer_move);
    let state = state.record(outcome);
    debug!(
        "{} vs {}: {:?} ({}-{})",
        player_move,
        computer_move,
        outcome,
        state.player_score(),
        state.computer_score()
    );
    RoundReport {
        round: Some(RoundResult {
            player_move,
            computer_move,
            outcome,
        }),
        state,
        match_over: state.is_over(),
        match_winner: state.winner(),
    }
}

/// Validates raw player input before playing it.
pub fn play_input(state: MatchState, input: &str) -> Result<RoundReport, GameError> {
    play_input_with(state, input, random_move)
}

pub fn play_input_with<F>(
    state: MatchState,
    input: &str,
    computer: F,
) -> Result<RoundReport, GameError>
where
    F: FnOnce() -> Move,
{
    let player_move: Move = input.parse()?;
    Ok(play_round_with(state, player_move, computer))
}
