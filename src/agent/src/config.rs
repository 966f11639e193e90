use clap::Parser;
use rps_common::strategy::StrategyKind;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "rps-agent", about = "Terminal client for the rock-paper-scissors server")]
pub struct AgentConfig {
    #[arg(long, env = "RPS_SERVER_URL", default_value = "ws://127.0.0.1:3001")]
    pub server_url: String,

    /// Play automatically with this strategy instead of reading moves from stdin
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Matches to play in automatic mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub matches: u32,

    #[arg(long, env = "RPS_LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,
}
