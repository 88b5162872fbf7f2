mod client;
mod commands;
mod decor;
mod notifier;
mod prefs;
mod table;
mod util;
mod watch;

use crate::{
    client::PingPalClient,
    commands::{
        mood_command, ping_command, rain_command, task_command, MoodArgs, PingCommand, RainArgs,
        TaskCommand,
    },
    prefs::Prefs,
    watch::watch_command,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[clap(
        long,
        default_value = "http://127.0.0.1:1337",
        use_value_delimiter = true,
        env = "PINGPAL_SERVER",
        help = "Comma-separated list of pingpald endpoints"
    )]
    server: Vec<Url>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Manage pings
    #[command(subcommand)]
    Ping(PingCommand),
    /// Show or change your mood
    Mood(MoodArgs),
    /// Live view with countdowns and alerts
    Watch,
    /// Make it rain emoji
    Rain(RainArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PINGPAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = PingPalClient::new(cli.server)?;
    let prefs = Prefs::open_default();

    let result = match cli.command {
        Command::Task(command) => task_command(command, client).await,
        Command::Ping(command) => ping_command(command, client).await,
        Command::Mood(args) => mood_command(args, prefs),
        Command::Watch => watch_command(client, prefs).await,
        Command::Rain(args) => rain_command(args).await,
    };

    if let Err(error) = result {
        eprintln!("{} {}", "✖".red().bold(), error);
        process::exit(1);
    }

    Ok(())
}
