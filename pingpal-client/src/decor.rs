use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{seq::SliceRandom, Rng};
use std::{
    io::{self, Write},
    time::Duration,
};
use tokio::time::{sleep, Instant};

pub const ICONS: [&str; 6] = ["💡", "⏰", "📝", "🎯", "💙", "✨"];

pub const QUOTES: [&str; 6] = [
    "Productivity is never an accident.",
    "Small steps every day.",
    "You are capable of amazing things.",
    "Dream big. Start small. Act now.",
    "Your future is created by what you do today.",
    "Stay positive, work hard, make it happen.",
];

/// Quotes rotate every 10 seconds.
pub const QUOTE_PERIOD: Duration = Duration::from_secs(10);

const DROPS_PER_BURST: usize = 18;
const BURST_LIFETIME: Duration = Duration::from_millis(2200);
const FRAME: Duration = Duration::from_millis(50);

pub fn quote_for(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_secs() / QUOTE_PERIOD.as_secs()) as usize % QUOTES.len();
    QUOTES[index]
}

pub fn random_icon<R: Rng>(rng: &mut R) -> &'static str {
    ICONS.choose(rng).copied().unwrap_or(ICONS[0])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raindrop {
    pub emoji: String,
    /// Horizontal position in percent of the terminal width.
    pub left: u16,
    pub fall: Duration,
}

impl Raindrop {
    /// Row of the drop after `elapsed`, or `None` once it has left the screen.
    pub fn row(&self, elapsed: Duration, height: u16) -> Option<u16> {
        if elapsed >= self.fall {
            return None;
        }

        let progress = elapsed.as_secs_f32() / self.fall.as_secs_f32();
        Some((progress * f32::from(height)) as u16)
    }

    pub fn column(&self, width: u16) -> u16 {
        (u32::from(width) * u32::from(self.left) / 100) as u16
    }
}

pub fn burst<R: Rng>(emoji: &str, rng: &mut R) -> Vec<Raindrop> {
    (0..DROPS_PER_BURST)
        .map(|_| Raindrop {
            emoji: emoji.to_string(),
            left: rng.gen_range(5..=95),
            fall: Duration::from_millis(rng.gen_range(1200..=2000)),
        })
        .collect()
}

/// Plays one emoji-rain burst on the alternate screen.
pub async fn rain(emoji: &str) -> anyhow::Result<()> {
    let drops = burst(emoji, &mut rand::thread_rng());
    let (width, height) = terminal::size()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let started = Instant::now();
    let result = async {
        while started.elapsed() < BURST_LIFETIME {
            let elapsed = started.elapsed();
            queue!(stdout, Clear(ClearType::All))?;
            for raindrop in &drops {
                if let Some(row) = raindrop.row(elapsed, height) {
                    queue!(
                        stdout,
                        MoveTo(raindrop.column(width), row),
                        Print(&raindrop.emoji)
                    )?;
                }
            }
            stdout.flush()?;
            sleep(FRAME).await;
        }
        anyhow::Ok(())
    }
    .await;

    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    result
}
