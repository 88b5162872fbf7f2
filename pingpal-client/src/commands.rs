use crate::{
    client::PingPalClient,
    decor::{self, random_icon},
    prefs::Prefs,
    table::{ping_table, task_table},
    util::{clean_text, Compact},
};
use anyhow::bail;
use chrono::Utc;
use clap::{Args, Subcommand};
use colored::Colorize;
use pingpal_types::{Mood, RecordId};

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task
    Add(AddTaskArgs),
    /// List tasks
    List,
    /// Remove tasks
    Rm(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AddTaskArgs {
    #[clap(required = true, help = "What needs doing")]
    text: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[clap(required = true, help = "Ids to remove")]
    ids: Vec<RecordId>,
}

pub async fn task_command(command: TaskCommand, client: PingPalClient) -> anyhow::Result<()> {
    match command {
        TaskCommand::Add(args) => {
            let Some(text) = clean_text(&args.text) else {
                bail!("Task text is empty");
            };

            let task = client.create_task(text).await?;
            println!(
                "{} Added task {}",
                "✓".green().bold(),
                task.id.to_string().bright_black().italic()
            );
        }
        TaskCommand::List => println!("{}", task_table(&client.list_tasks().await?)),
        TaskCommand::Rm(args) => {
            let results = futures::future::join_all(
                args.ids
                    .compact()
                    .into_iter()
                    .map(|id| client.delete_task(id)),
            )
            .await;
            report_removals("task", results);
        }
    }

    Ok(())
}

#[derive(Debug, Subcommand)]
pub enum PingCommand {
    /// Schedule a ping
    Add(AddPingArgs),
    /// List pings with their countdowns
    List,
    /// Remove pings
    Rm(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AddPingArgs {
    #[clap(required = true, help = "What to be reminded of")]
    text: String,

    #[clap(
        long,
        default_value_t = 15,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Minutes until the ping goes off"
    )]
    minutes: u32,
}

pub async fn ping_command(command: PingCommand, client: PingPalClient) -> anyhow::Result<()> {
    match command {
        PingCommand::Add(args) => {
            let Some(text) = clean_text(&args.text) else {
                bail!("Ping text is empty");
            };

            let ping = client.create_ping(text, args.minutes).await?;
            println!(
                "{} Ping {} goes off in {}",
                "✓".green().bold(),
                ping.id.to_string().bright_black().italic(),
                ping.countdown(Utc::now()).bold()
            );
        }
        PingCommand::List => {
            let pings = client.list_pings().await?;
            println!("{}", ping_table(&pings, Utc::now()));
        }
        PingCommand::Rm(args) => {
            let results = futures::future::join_all(
                args.ids
                    .compact()
                    .into_iter()
                    .map(|id| client.delete_ping(id)),
            )
            .await;
            report_removals("ping", results);
        }
    }

    Ok(())
}

fn report_removals(kind: &str, results: Vec<anyhow::Result<RecordId>>) {
    for result in results {
        match result {
            Ok(id) => println!(
                "{} Removed {kind} {}",
                "✓".green().bold(),
                id.to_string().bright_black().italic()
            ),
            Err(error) => println!("{} {}", "✖".red().bold(), error),
        }
    }
}

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[clap(help = "New mood: happy, neutral, sad or stressed")]
    mood: Option<Mood>,
}

pub fn mood_command(args: MoodArgs, prefs: Prefs) -> anyhow::Result<()> {
    if let Some(mood) = args.mood {
        prefs.set_mood(mood)?;
    }

    println!("{}", mood_selector(prefs.mood()));
    Ok(())
}

/// All moods in a row, the current one highlighted.
pub fn mood_selector(current: Mood) -> String {
    Mood::VARIANTS
        .iter()
        .map(|mood| {
            let cell = format!(" {} {} ", mood.label(), mood);
            if *mood == current {
                cell.white().on_blue().bold().to_string()
            } else {
                cell.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Args)]
pub struct RainArgs {
    #[clap(help = "Emoji to rain, a random icon if omitted")]
    emoji: Option<String>,
}

pub async fn rain_command(args: RainArgs) -> anyhow::Result<()> {
    let emoji = match args.emoji {
        Some(emoji) => emoji,
        None => random_icon(&mut rand::thread_rng()).to_string(),
    };

    decor::rain(&emoji).await
}
