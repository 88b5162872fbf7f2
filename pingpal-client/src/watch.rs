use crate::{
    client::PingPalClient,
    commands::mood_selector,
    decor::quote_for,
    notifier::ExpiryNotifier,
    prefs::Prefs,
    table::{alert_modal, ping_table, task_table},
};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use pingpal_types::{Mood, Ping, Rgb, Task};
use std::{
    io::{self, Write},
    time::Duration,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time::{interval, Instant, MissedTickBehavior},
};

pub const TICK: Duration = Duration::from_millis(500);

/// Everything the live view knows between ticks.
#[derive(Debug, Default)]
pub struct WatchView {
    pub tasks: Vec<Task>,
    pub pings: Vec<Ping>,
    pub notifier: ExpiryNotifier,
}

impl WatchView {
    /// Runs expiry detection, returning the ping whose alert was just raised.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Ping> {
        self.notifier.sync(&self.pings);
        self.notifier.tick(&self.pings, now).cloned()
    }

    /// Ends the current alert and drops its ping from the local list.
    pub fn dismiss(&mut self) -> Option<Ping> {
        let ping = self.notifier.dismiss()?;
        self.pings.retain(|other| other.id != ping.id);
        Some(ping)
    }

    pub fn render(&self, mood: Mood, uptime: Duration, now: DateTime<Utc>) -> String {
        let Rgb(r, g, b) = mood.color();
        let mut frame = String::new();

        frame.push_str(&format!(
            "{}\n",
            format!("  PingPal {}  ", mood.label())
                .bold()
                .black()
                .on_truecolor(r, g, b)
        ));
        frame.push_str(&format!("{}\n", mood_selector(mood)));
        frame.push_str(&format!("{}\n\n", quote_for(uptime).italic()));

        frame.push_str(&format!("{}\n{}\n\n", "Tasks".bold(), task_table(&self.tasks)));
        frame.push_str(&format!(
            "{}\n{}\n",
            "Pings".bold(),
            ping_table(&self.pings, now)
        ));

        match self.notifier.alerting() {
            Some(ping) => frame.push_str(&format!("\n{}\n", alert_modal(ping))),
            None => frame.push_str(&format!("\n{}\n", "q + Enter to quit".bright_black())),
        }

        frame
    }
}

async fn refresh(client: &PingPalClient, view: &mut WatchView) {
    let (tasks, pings) = futures::join!(client.list_tasks(), client.list_pings());

    match tasks {
        Ok(tasks) => view.tasks = tasks,
        Err(error) => tracing::debug!("Keeping previous tasks: {error:#}"),
    }

    match pings {
        Ok(pings) => view.pings = pings,
        Err(error) => tracing::debug!("Keeping previous pings: {error:#}"),
    }
}

fn ring_bell() {
    let mut stdout = io::stdout();
    if let Err(error) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        tracing::warn!("Failed to play alert sound: {error}");
    }
}

fn draw(frame: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// What a line typed into the live view asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Dismiss,
    /// Stdin is gone; keep ticking without listening for keys.
    Closed,
}

impl Input {
    fn parse(line: Option<&str>) -> Self {
        match line {
            None => Self::Closed,
            Some(line) if line.trim().eq_ignore_ascii_case("q") => Self::Quit,
            Some(_) => Self::Dismiss,
        }
    }
}

pub async fn watch_command(client: PingPalClient, prefs: Prefs) -> anyhow::Result<()> {
    let mut view = WatchView::default();
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let started = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh(&client, &mut view).await;

                let now = Utc::now();
                if view.tick(now).is_some() {
                    ring_bell();
                }

                draw(&view.render(prefs.mood(), started.elapsed(), now))?;
            }
            line = lines.next_line(), if stdin_open => {
                match Input::parse(line?.as_deref()) {
                    Input::Quit => break,
                    Input::Closed => {
                        tracing::warn!("Stdin closed, alerts can no longer be dismissed");
                        stdin_open = false;
                    }
                    Input::Dismiss => {
                        if let Some(ping) = view.dismiss() {
                            if let Err(error) = client.delete_ping(ping.id).await {
                                tracing::warn!("Failed to delete ping {}: {error:#}", ping.id);
                            }
                            draw(&view.render(prefs.mood(), started.elapsed(), Utc::now()))?;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use pingpal_types::RecordId;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn view_with(pings: Vec<Ping>) -> WatchView {
        WatchView {
            pings,
            ..WatchView::default()
        }
    }

    #[test]
    fn drink_water_alerts_once_its_minute_is_up() {
        let mut view = view_with(vec![Ping::new(
            RecordId(1),
            "Drink water".into(),
            t0() + TimeDelta::milliseconds(60_000),
        )]);

        assert_eq!(view.tick(t0()), None);
        assert_eq!(view.tick(t0() + TimeDelta::milliseconds(59_500)), None);

        let raised = view.tick(t0() + TimeDelta::milliseconds(60_000)).unwrap();
        assert_eq!(raised.text, "Drink water");

        let frame = view.render(Mood::Happy, Duration::ZERO, t0() + TimeDelta::minutes(1));
        assert!(frame.contains("Time's up!"));
        assert!(frame.contains("Drink water"));
        assert!(frame.contains("00:00"));
    }

    #[test]
    fn dismiss_removes_exactly_the_alerting_ping() {
        let mut view = view_with(vec![
            Ping::new(RecordId(1), "a".into(), t0()),
            Ping::new(RecordId(2), "b".into(), t0()),
            Ping::new(RecordId(3), "c".into(), t0() + TimeDelta::hours(1)),
        ]);

        assert_eq!(view.tick(t0()).map(|ping| ping.id), Some(RecordId(1)));
        assert_eq!(view.tick(t0()), None);

        let dismissed = view.dismiss().unwrap();
        assert_eq!(dismissed.id, RecordId(1));
        assert_eq!(
            view.pings.iter().map(|ping| ping.id).collect::<Vec<_>>(),
            [RecordId(2), RecordId(3)]
        );
        assert!(view.notifier.alerting().is_none());

        assert_eq!(view.tick(t0()).map(|ping| ping.id), Some(RecordId(2)));
    }

    #[test]
    fn alert_clears_when_ping_vanishes_from_server() {
        let mut view = view_with(vec![Ping::new(RecordId(1), "a".into(), t0())]);
        view.tick(t0());

        view.pings.clear();
        assert_eq!(view.tick(t0()), None);
        assert!(view.notifier.alerting().is_none());
    }

    #[test]
    fn closed_stdin_does_not_quit() {
        assert_eq!(Input::parse(None), Input::Closed);
        assert_eq!(Input::parse(Some(" Q ")), Input::Quit);
        assert_eq!(Input::parse(Some("")), Input::Dismiss);
        assert_eq!(Input::parse(Some("ok")), Input::Dismiss);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_lists() {
        let client = PingPalClient::new(vec!["http://127.0.0.1:1".parse().unwrap()]).unwrap();
        let tasks = vec![Task::new(RecordId(1), "Water the plants".into())];
        let pings = vec![Ping::new(RecordId(2), "Drink water".into(), t0())];
        let mut view = WatchView {
            tasks: tasks.clone(),
            pings: pings.clone(),
            ..WatchView::default()
        };

        refresh(&client, &mut view).await;

        assert_eq!(view.tasks, tasks);
        assert_eq!(view.pings, pings);
    }

    #[test]
    fn idle_frame_has_no_modal() {
        let view = view_with(vec![Ping::new(
            RecordId(1),
            "Later".into(),
            t0() + TimeDelta::minutes(15),
        )]);

        let frame = view.render(Mood::Sad, Duration::ZERO, t0());
        assert!(frame.contains("15:00"));
        assert!(!frame.contains("Time's up!"));
    }
}
