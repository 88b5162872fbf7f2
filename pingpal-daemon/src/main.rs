mod api;
mod ops;
mod state;
mod store;

use clap::Parser;
use state::AppState;
use std::net::SocketAddr;
use tracing::Level;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(
        long,
        env = "PINGPALD_LISTEN",
        default_value = "127.0.0.1:1337",
        help = "API endpoint to listen on"
    )]
    listen: SocketAddr,

    #[clap(
        long,
        env = "PINGPALD_LOG_LEVEL",
        default_value_t = Level::INFO,
        help = "Maximum log level"
    )]
    log_level: Level,

    #[clap(
        long,
        env = "PINGPALD_JSON_LOGS",
        default_value_t = false,
        help = "Emit logs as JSON lines"
    )]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let subscriber = tracing_subscriber::fmt().with_max_level(args.log_level);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }

    api::run(args.listen, AppState::in_memory()).await
}
