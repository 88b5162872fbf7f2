//! Client-side preferences that never reach the daemon.
//!
//! State lives in a single JSON file under `dirs::data_dir()/pingpal/`.
//! Set `PINGPAL_DATA_DIR` to put it somewhere else.

use anyhow::Context;
use pingpal_types::Mood;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const STATE_FILE: &str = "state.json";

pub fn data_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("PINGPAL_DATA_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::data_dir()
        .map(|d| d.join("pingpal"))
        .unwrap_or_else(|| PathBuf::from("/tmp/pingpal-data"))
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LocalState {
    #[serde(rename = "pingpal-mood", default)]
    mood: Mood,
}

#[derive(Debug, Clone)]
pub struct Prefs {
    path: PathBuf,
}

impl Prefs {
    pub fn open_default() -> Self {
        Self::at(data_dir())
    }

    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STATE_FILE),
        }
    }

    /// The stored mood, or the default one if nothing usable is stored.
    pub fn mood(&self) -> Mood {
        match self.load() {
            Ok(state) => state.mood,
            Err(error) => {
                tracing::debug!("Using default mood: {error:#}");
                Mood::default()
            }
        }
    }

    pub fn set_mood(&self, mood: Mood) -> anyhow::Result<()> {
        self.store(&LocalState { mood })
    }

    fn load(&self) -> anyhow::Result<LocalState> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn store(&self, state: &LocalState) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&self.path, serde_json::to_vec_pretty(state)?)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_happy_without_state() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Prefs::at(dir.path()).mood(), Mood::Happy);
    }

    #[test]
    fn mood_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        Prefs::at(dir.path()).set_mood(Mood::Stressed).unwrap();

        assert_eq!(Prefs::at(dir.path()).mood(), Mood::Stressed);

        let raw = fs::read_to_string(dir.path().join(STATE_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["pingpal-mood"], "stressed");
    }

    #[test]
    fn corrupt_state_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "{not json").unwrap();
        assert_eq!(Prefs::at(dir.path()).mood(), Mood::Happy);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        Prefs::at(&nested).set_mood(Mood::Sad).unwrap();
        assert_eq!(Prefs::at(&nested).mood(), Mood::Sad);
    }
}
