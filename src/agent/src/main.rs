use clap::Parser;
use rps_agent::{
    client::Client,
    config::AgentConfig,
    error::ClientError,
    play::{run_automatic, run_interactive},
};
use tokio::io::BufReader;
use tracing::error;

async fn run(config: AgentConfig) -> Result<(), ClientError> {
    let mut client = Client::connect(&config.server_url).await?;
    let mut stdout = std::io::stdout();
    match config.strategy {
        Some(kind) => {
            run_automatic(&mut client, kind, config.matches, &mut stdout).await?;
        }
        None => {
            run_interactive(&mut client, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = AgentConfig::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(config).await {
        error!("Agent exited: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
