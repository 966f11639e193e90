use clap::Parser;
use rps_common::utility::create_shutdown_channel;
use rps_server::{config::GameServerConfig, entrypoint::serve};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = GameServerConfig::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(config.log_level)
        .init();

    let (_shutdown_sender, shutdown_receiver) = create_shutdown_channel();
    if let Err(e) = serve(config, shutdown_receiver, None).await {
        error!("Game server exited: {}", e);
        std::process::exit(1);
    }
}
