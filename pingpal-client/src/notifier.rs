use chrono::{DateTime, Utc};
use pingpal_types::{Ping, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum NotifierState {
    #[default]
    Idle,
    Alerting(Ping),
}

/// Raises one alert at a time for expired pings.
///
/// While an alert is showing, other expired pings wait until it has been
/// dismissed and are picked up on the following tick, in list order.
#[derive(Debug, Default)]
pub struct ExpiryNotifier {
    state: NotifierState,
}

impl ExpiryNotifier {
    pub fn alerting(&self) -> Option<&Ping> {
        match &self.state {
            NotifierState::Idle => None,
            NotifierState::Alerting(ping) => Some(ping),
        }
    }

    /// Evaluates `pings` at `now`. Returns the ping whose alert was just raised.
    pub fn tick(&mut self, pings: &[Ping], now: DateTime<Utc>) -> Option<&Ping> {
        if let NotifierState::Alerting(_) = self.state {
            return None;
        }

        let expired = pings.iter().find(|ping| ping.is_expired(now))?;
        tracing::info!("Ping {} expired: {}", expired.id, expired.text);
        self.state = NotifierState::Alerting(expired.clone());
        self.alerting()
    }

    /// Ends the current alert, handing back the ping that should be deleted.
    pub fn dismiss(&mut self) -> Option<Ping> {
        match std::mem::take(&mut self.state) {
            NotifierState::Idle => None,
            NotifierState::Alerting(ping) => Some(ping),
        }
    }

    /// Drops the alert if its ping was removed some other way.
    pub fn forget(&mut self, id: RecordId) {
        if self.alerting().is_some_and(|ping| ping.id == id) {
            self.state = NotifierState::Idle;
        }
    }

    /// Drops the alert if its ping is no longer among `pings`.
    pub fn sync(&mut self, pings: &[Ping]) {
        if let Some(id) = self.alerting().map(|ping| ping.id) {
            if !pings.iter().any(|ping| ping.id == id) {
                self.forget(id);
            }
        }
    }
}
