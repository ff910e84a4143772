pub mod feedback;
pub mod round;
pub mod schedule;
pub mod state;

pub use feedback::Feedback;
pub use round::{OPTION_COUNT, Round, RoundId};
pub use state::{Action, DEFAULT_FEEDBACK_DELAY, Direction, Mode, Session};
