use std::{fmt, str::FromStr};

use rand::{rngs::StdRng, SeedableRng};

use crate::{error::GameError, model::game::Move};

/// One finished round, seen from the side that owns the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
}

pub trait Strategy {
    fn make_move(&mut self, history: &[Round]) -> Move;
}

pub struct FixedMove(pub Move);
impl Strategy for FixedMove {
    fn make_move(&mut self, _: &[Round]) -> Move {
        self.0
    }
}

pub struct RandomMove {
    rng: StdRng,
}
impl RandomMove {
    pub fn new() -> Self {
        RandomMove {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomMove {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
impl Default for RandomMove {
    fn default() -> Self {
        Self::new()
    }
}
impl Strategy for RandomMove {
    fn make_move(&mut self, _: &[Round]) -> Move {
        Move::random(&mut self.rng)
    }
}

// Counters whatever the other side played last; opens with rock.
pub struct BeatLast;
impl Strategy for BeatLast {
    fn make_move(&mut self, history: &[Round]) -> Move {
        history
            .last()
            .map(|round| round.their_move.beaten_by())
            .unwrap_or(Move::Rock)
    }
}

/// Strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Fixed(Move),
    BeatLast,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy + Send> {
        match self {
            StrategyKind::Random => Box::new(RandomMove::new()),
            StrategyKind::Fixed(value) => Box::new(FixedMove(value)),
            StrategyKind::BeatLast => Box::new(BeatLast),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(StrategyKind::Random),
            "beat-last" => Ok(StrategyKind::BeatLast),
            other => other
                .parse::<Move>()
                .map(StrategyKind::Fixed)
                .map_err(|_| GameError::UnknownStrategy(other.to_owned())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Fixed(value) => write!(f, "{}", value),
            StrategyKind::BeatLast => f.write_str("beat-last"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_always_plays_its_move() {
        let mut strategy = FixedMove(Move::Paper);
        assert_eq!(strategy.make_move(&[]), Move::Paper);
        let history = [Round {
            my_move: Move::Paper,
            their_move: Move::Scissors,
        }];
        assert_eq!(strategy.make_move(&history), Move::Paper);
    }

    #[test]
    fn beat_last_counters_previous_move() {
        let mut strategy = BeatLast;
        assert_eq!(strategy.make_move(&[]), Move::Rock);
        let history = [
            Round {
                my_move: Move::Rock,
                their_move: Move::Paper,
            },
            Round {
                my_move: Move::Scissors,
                their_move: Move::Rock,
            },
        ];
        assert_eq!(strategy.make_move(&history), Move::Paper);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = RandomMove::seeded(3);
        let mut b = RandomMove::seeded(3);
        let first: Vec<Move> = (0..20).map(|_| a.make_move(&[])).collect();
        let second: Vec<Move> = (0..20).map(|_| b.make_move(&[])).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert_eq!("beat-last".parse::<StrategyKind>(), Ok(StrategyKind::BeatLast));
        assert_eq!("rock".parse::<StrategyKind>(), Ok(StrategyKind::Fixed(Move::Rock)));
        assert_eq!(
            "mirror".parse::<StrategyKind>(),
            Err(GameError::UnknownStrategy("mirror".to_owned()))
        );
        for kind in [
            StrategyKind::Random,
            StrategyKind::BeatLast,
            StrategyKind::Fixed(Move::Scissors),
        ] {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }
}
