use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_WINNING_SCORE: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Uniform draw over the three moves.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The move that beats this one.
    pub fn beaten_by(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "✋",
            Move::Scissors => "✌️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            other => Err(GameError::InvalidMove(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Computer => f.write_str("Computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    InProgress,
    Terminal,
}

/// Cumulative scores of one match. Owned by the caller and threaded through
/// [`crate::engine::play_round`]; the engine keeps no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    player_score: u8,
    computer_score: u8,
    winning_score: u8,
}

impl MatchState {
    pub fn new() -> Self {
        MatchState {
            player_score: 0,
            computer_score: 0,
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }

    pub fn with_winning_score(winning_score: u8) -> Result<Self, GameError> {
        Self::from_scores(0, 0, winning_score)
    }

    /// Rebuilds a state mid-match, e.g. to resume a saved scoreboard.
    pub fn from_scores(
        player_score: u8,
        computer_score: u8,
        winning_score: u8,
    ) -> Result<Self, GameError> {
        if winning_score == 0 {
            return Err(GameError::InvalidWinningScore(winning_score));
        }
        let over_limit = player_score > winning_score || computer_score > winning_score;
        let both_won = player_score == winning_score && computer_score == winning_score;
        if over_limit || both_won {
            return Err(GameError::InvalidScores {
                player_score,
                computer_score,
                winning_score,
            });
        }
        Ok(MatchState {
            player_score,
            computer_score,
            winning_score,
        })
    }

    pub fn player_score(&self) -> u8 {
        self.player_score
    }

    pub fn computer_score(&self) -> u8 {
        self.computer_score
    }

    pub fn winning_score(&self) -> u8 {
        self.winning_score
    }

    pub fn phase(&self) -> MatchPhase {
        if self.winner().is_some() {
            MatchPhase::Terminal
        } else {
            MatchPhase::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase() == MatchPhase::Terminal
    }

    pub fn winner(&self) -> Option<Side> {
        if self.player_score == self.winning_score {
            Some(Side::Player)
        } else if self.computer_score == self.winning_score {
            Some(Side::Computer)
        } else {
            None
        }
    }

    // Callers must check `is_over` first; a terminal state is never scored.
    pub(crate) fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWins => MatchState {
                player_score: self.player_score + 1,
                ..self
            },
            Outcome::ComputerWins => MatchState {
                computer_score: self.computer_score + 1,
                ..self
            },
            Outcome::Tie => self,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

/// What a call to `play_round` hands back to its caller. `round` is `None`
/// when the call arrived after the match had already ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: Option<RoundResult>,
    pub state: MatchState,
    pub match_over: bool,
    pub match_winner: Option<Side>,
}

impl RoundReport {
    pub fn computer_move(&self) -> Option<Move> {
        self.round.map(|round| round.computer_move)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.round.map(|round| round.outcome)
    }

    pub fn was_ignored(&self) -> bool {
        self.round.is_none()
    }
}
