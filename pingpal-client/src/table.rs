use chrono::{DateTime, Utc};
use colored::Colorize;
use pingpal_types::{Ping, Task};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Color, Style,
    },
};

pub fn task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet!".dimmed().to_string();
    }

    let mut builder = Builder::new();
    builder.push_record(["ID", "Task"]);

    for task in tasks {
        builder.push_record([task.id.to_string(), task.text.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Rows::first(), Color::FG_WHITE | Color::BOLD);
    table.to_string()
}

pub fn ping_table(pings: &[Ping], now: DateTime<Utc>) -> String {
    if pings.is_empty() {
        return "No pings yet!".dimmed().to_string();
    }

    let mut builder = Builder::new();
    builder.push_record(["ID", "Ping", "Expires", "Left"]);

    for ping in pings {
        builder.push_record([
            ping.id.to_string(),
            ping.text.clone(),
            ping.expires_at
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string(),
            ping.countdown(now),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Columns::last(), Color::FG_GREEN)
        .modify(Rows::first(), Color::FG_WHITE | Color::BOLD);
    table.to_string()
}

/// Boxed alert shown while a ping is alerting.
pub fn alert_modal(ping: &Ping) -> String {
    let mut builder = Builder::new();
    builder.push_record(["⏰ Time's up!"]);
    builder.push_record([ping.text.clone()]);
    builder.push_record(["Press Enter to dismiss".to_string()]);

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Rows::first(), Color::FG_RED | Color::BOLD);
    table.to_string()
}
