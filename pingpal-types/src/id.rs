use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of a stored task or ping.
///
/// Ids are handed out by the daemon in strictly increasing order and read as
/// creation timestamps in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteRecord {
    pub id: RecordId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { success: true }
    }
}
