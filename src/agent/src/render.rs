//! Text rendering of server responses for the terminal.

use rps_common::model::{
    game::{Move, Outcome},
    messages::ClientResponse,
};

const WINNER: &str = "WINNER!";

fn hand(value: Move) -> String {
    format!("{} {}", value.icon(), value)
}

/// One line per round. Exactly one side carries the winner mark, or neither on a tie.
pub fn render_round(player_move: Move, computer_move: Move, outcome: Outcome) -> String {
    let (player_mark, computer_mark) = match outcome {
        Outcome::PlayerWins => (format!("{} ", WINNER), String::new()),
        Outcome::ComputerWins => (String::new(), format!(" {}", WINNER)),
        Outcome::Tie => (String::new(), String::new()),
    };
    let tie = if outcome == Outcome::Tie { " (tie)" } else { "" };
    format!(
        "{}You {}  vs  {} CPU{}{}",
        player_mark,
        hand(player_move),
        hand(computer_move),
        computer_mark,
        tie
    )
}

pub fn render_score(player_score: u8, computer_score: u8) -> String {
    format!("Score: You {} - {} CPU", player_score, computer_score)
}

pub fn render_response(response: &ClientResponse) -> String {
    match response {
        ClientResponse::MatchStarted { winning_score } => {
            format!("New match: first to {} wins.", winning_score)
        }
        ClientResponse::RoundResult {
            player_move,
            computer_move,
            outcome,
            player_score,
            computer_score,
            ..
        } => format!(
            "{}\n{}",
            render_round(*player_move, *computer_move, *outcome),
            render_score(*player_score, *computer_score)
        ),
        ClientResponse::MatchResult { winner, .. } => {
            format!("Game Over! {} wins the match!", winner)
        }
        ClientResponse::MoveIgnored { .. } => {
            "The match is over. Start a new match to keep playing.".to_owned()
        }
        ClientResponse::Error { message } => format!("Error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_common::{engine::resolve, model::game::Side};

    #[test]
    fn marks_exactly_one_winner() {
        for player in Move::ALL {
            for computer in Move::ALL {
                let outcome = resolve(player, computer);
                let line = render_round(player, computer, outcome);
                let marks = line.matches(WINNER).count();
                assert_eq!(marks, usize::from(outcome != Outcome::Tie), "{}", line);
            }
        }
    }

    #[test]
    fn winner_mark_sits_on_the_winning_side() {
        assert_eq!(
            render_round(Move::Rock, Move::Scissors, Outcome::PlayerWins),
            "WINNER! You ✊ rock  vs  ✌️ scissors CPU"
        );
        assert_eq!(
            render_round(Move::Rock, Move::Paper, Outcome::ComputerWins),
            "You ✊ rock  vs  ✋ paper CPU WINNER!"
        );
        assert_eq!(
            render_round(Move::Paper, Move::Paper, Outcome::Tie),
            "You ✋ paper  vs  ✋ paper CPU (tie)"
        );
    }

    #[test]
    fn renders_round_with_score() {
        let response = ClientResponse::RoundResult {
            player_move: Move::Paper,
            computer_move: Move::Rock,
            outcome: Outcome::PlayerWins,
            player_score: 2,
            computer_score: 1,
            match_over: false,
        };
        assert_eq!(
            render_response(&response),
            "WINNER! You ✋ paper  vs  ✊ rock CPU\nScore: You 2 - 1 CPU"
        );
    }

    #[test]
    fn renders_end_of_match() {
        let response = ClientResponse::MatchResult {
            winner: Side::Computer,
            player_score: 1,
            computer_score: 5,
        };
        assert_eq!(
            render_response(&response),
            "Game Over! Computer wins the match!"
        );
    }
}
