use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::alphabet::{self, AlphabetError, LetterRecord};
use crate::session::feedback::Feedback;
use crate::session::round::{Round, RoundId};
use crate::session::schedule::ScheduledRound;

pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Learn,
    Game,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Learn => "learn",
            Mode::Game => "game",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Learn => Mode::Game,
            Mode::Game => Mode::Learn,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Every state change a caller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Advance(Direction),
    SelectCursor(usize),
    SetMode(Mode),
    SubmitAnswer(char),
    ResetScore,
}

/// The session controller. It is the only writer of its fields.
pub struct Session<R = SmallRng> {
    mode: Mode,
    cursor: usize,
    score: u32,
    attempts: u32,
    round: Option<Round>,
    feedback: Option<Feedback>,
    scheduled: Option<ScheduledRound>,
    last_round_id: Option<RoundId>,
    feedback_delay: Duration,
    rng: R,
}

impl Session<SmallRng> {
    pub fn new(feedback_delay: Duration) -> Self {
        Self::with_rng(SmallRng::from_entropy(), feedback_delay)
    }

    pub fn seeded(seed: u64, feedback_delay: Duration) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), feedback_delay)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(rng: R, feedback_delay: Duration) -> Self {
        Self {
            mode: Mode::Learn,
            cursor: 0,
            score: 0,
            attempts: 0,
            round: None,
            feedback: None,
            scheduled: None,
            last_round_id: None,
            feedback_delay,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &'static LetterRecord {
        &alphabet::records()[self.cursor]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    /// True while the current round's verdict is on display.
    pub fn is_showing_feedback(&self) -> bool {
        self.feedback.is_some()
    }

    /// Time left before the scheduled next round, if one is pending.
    pub fn next_round_in(&self, now: Instant) -> Option<Duration> {
        self.scheduled.map(|s| s.remaining(now))
    }

    pub fn advance(&mut self, direction: Direction) {
        self.cursor = match direction {
            Direction::Forward => (self.cursor + 1) % alphabet::LEN,
            Direction::Backward => (self.cursor + alphabet::LEN - 1) % alphabet::LEN,
        };
    }

    pub fn select_cursor(&mut self, index: usize) -> Result<(), AlphabetError> {
        alphabet::get(index)?;
        self.cursor = index;
        Ok(())
    }

    pub fn start_round(&mut self) {
        let id = self.last_round_id.map_or(RoundId(0), RoundId::next);
        let round = Round::generate(id, &mut self.rng);
        debug!(
            "round {} started: target {} options {:?}",
            id.0, round.target.upper, round.options
        );
        self.last_round_id = Some(id);
        self.round = Some(round);
        self.feedback = None;
        self.scheduled = None;
    }

    /// Evaluate an answer for the active round. Returns `None` when the
    /// answer is ignored: outside Game mode, with no active round, or while
    /// the previous verdict is still displayed.
    pub fn submit_answer(&mut self, selected: char, now: Instant) -> Option<Feedback> {
        if self.mode != Mode::Game || self.feedback.is_some() {
            return None;
        }
        let round = self.round.as_ref()?;

        let feedback = if round.is_correct(selected) {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                expected: round.answer(),
            }
        };
        self.attempts += 1;
        info!(
            "round {}: answered '{}' for '{}' ({})",
            round.id.0,
            selected,
            round.target.upper,
            if feedback.is_correct() { "correct" } else { "incorrect" }
        );

        self.scheduled = Some(ScheduledRound::new(round.id, now, self.feedback_delay));
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Fire the scheduled next round if it is due. Returns true when a new
    /// round was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(scheduled) = self.scheduled else {
            return false;
        };
        if !scheduled.is_due(now) {
            return false;
        }
        self.scheduled = None;

        let current = self.round.as_ref().map(|r| r.id);
        if self.mode == Mode::Game && scheduled.is_for(current) {
            self.start_round();
            true
        } else {
            debug!("dropping stale round start scheduled after round {}", scheduled.after.0);
            false
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
        self.attempts = 0;
        if self.scheduled.take().is_some() {
            debug!("score reset cancelled the pending round start");
            if self.mode == Mode::Game {
                self.start_round();
            }
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Learn && self.scheduled.take().is_some() {
            // The answered round is finished; Game mode gets a fresh one on return.
            debug!("leaving game mode cancelled the pending round start");
            self.round = None;
            self.feedback = None;
        }
        self.mode = mode;
        if mode == Mode::Game && self.round.is_none() {
            self.start_round();
        }
    }

    pub fn dispatch(
        &mut self,
        action: Action,
        now: Instant,
    ) -> Result<Option<Feedback>, AlphabetError> {
        match action {
            Action::Advance(direction) => self.advance(direction),
            Action::SelectCursor(index) => self.select_cursor(index)?,
            Action::SetMode(mode) => self.set_mode(mode),
            Action::SubmitAnswer(selected) => return Ok(self.submit_answer(selected, now)),
            Action::ResetScore => self.reset_score(),
        }
        Ok(None)
    }
}
