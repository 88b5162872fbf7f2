use anyhow::bail;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;

pub const MINUTE_MILLIS: i64 = 60 * 1000;

/// Payload for creating a ping.
///
/// The daemon prefers `minutes` and computes the expiry from its own clock.
/// An absolute `expiresAt` is still accepted when no duration is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePing {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreatePing {
    pub fn in_minutes(text: String, minutes: u32) -> Self {
        Self {
            text,
            minutes: Some(minutes),
            expires_at: None,
        }
    }

    pub fn at(text: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            text,
            minutes: None,
            expires_at: Some(expires_at),
        }
    }

    pub fn resolve_expiry(&self, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
        match (self.minutes, self.expires_at) {
            (Some(0), _) => bail!("minutes must be at least 1"),
            (Some(minutes), _) => {
                Ok(now + TimeDelta::milliseconds(i64::from(minutes) * MINUTE_MILLIS))
            }
            (None, Some(expires_at)) => Ok(expires_at),
            (None, None) => bail!("either minutes or expiresAt is required"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ping {
    pub id: RecordId,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl Ping {
    pub fn new(id: RecordId, text: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            expires_at,
        }
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        self.expires_at - now
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Time left as `MM:SS`, clamped to `00:00` once expired.
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        format_countdown(self.remaining(now))
    }
}

pub fn format_countdown(remaining: TimeDelta) -> String {
    let millis = remaining.num_milliseconds();
    if millis <= 0 {
        return "00:00".into();
    }

    // Round up so a ping shows 00:01 until its very last millisecond.
    let total_secs = (millis + 999) / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
