use clap::Parser;
use rps_common::{model::game::DEFAULT_WINNING_SCORE, strategy::StrategyKind};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "rps-server", about = "Rock-paper-scissors against the computer over websockets")]
pub struct GameServerConfig {
    /// Address the websocket listener binds to
    #[arg(long, env = "RPS_SOCKET_ADDRESS", default_value = "0.0.0.0:3001")]
    pub socket_address: String,

    /// Rounds a side must win to take the match
    #[arg(
        long,
        env = "RPS_WINNING_SCORE",
        default_value_t = DEFAULT_WINNING_SCORE,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    pub winning_score: u8,

    /// Computer opponent: random, rock, paper, scissors or beat-last
    #[arg(long, env = "RPS_OPPONENT", default_value = "random")]
    pub opponent: StrategyKind,

    #[arg(long, env = "RPS_LOG_LEVEL", default_value = "debug")]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_common::model::game::Move;

    #[test]
    fn defaults() {
        let config = GameServerConfig::try_parse_from(["rps-server"]).unwrap();
        assert_eq!(config.socket_address, "0.0.0.0:3001");
        assert_eq!(config.winning_score, 5);
        assert_eq!(config.opponent, StrategyKind::Random);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn parses_overrides() {
        let config = GameServerConfig::try_parse_from([
            "rps-server",
            "--winning-score",
            "3",
            "--opponent",
            "scissors",
            "--log-level",
            "info",
        ])
        .unwrap();
        assert_eq!(config.winning_score, 3);
        assert_eq!(config.opponent, StrategyKind::Fixed(Move::Scissors));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn rejects_zero_winning_score_and_unknown_opponent() {
        assert!(GameServerConfig::try_parse_from(["rps-server", "--winning-score", "0"]).is_err());
        assert!(GameServerConfig::try_parse_from(["rps-server", "--opponent", "lizard"]).is_err());
    }
}
