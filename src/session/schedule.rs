use std::time::{Duration, Instant};

use crate::session::round::RoundId;

/// A deferred "start the next round" request, tagged with the round that was
/// answered. It is only honoured while that round is still the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRound {
    pub after: RoundId,
    pub due: Instant,
}

impl ScheduledRound {
    pub fn new(after: RoundId, now: Instant, delay: Duration) -> Self {
        Self {
            after,
            due: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn is_for(&self, round: Option<RoundId>) -> bool {
        round == Some(self.after)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
