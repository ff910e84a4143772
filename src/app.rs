use std::time::Instant;

use log::error;

use lettr::alphabet;
use lettr::config::Config;
use lettr::session::{Action, Direction, Mode, OPTION_COUNT, Session};
use lettr::speech::Speaker;

use crate::ui::theme::Theme;

pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub option_selected: usize,
    pub should_quit: bool,
    speaker: Box<dyn Speaker>,
}

impl App {
    pub fn new(config: &Config, theme: Theme, speaker: Box<dyn Speaker>, seed: Option<u64>) -> Self {
        let delay = config.feedback_delay();
        let mut session = match seed {
            Some(seed) => Session::seeded(seed, delay),
            None => Session::new(delay),
        };
        session.set_mode(config.start_mode);

        Self {
            session,
            theme,
            option_selected: 0,
            should_quit: false,
            speaker,
        }
    }

    pub fn apply(&mut self, action: Action) {
        self.apply_at(action, Instant::now());
    }

    pub fn apply_at(&mut self, action: Action, now: Instant) {
        let previous_round = self.session.round().map(|r| r.id);
        match self.session.dispatch(action, now) {
            Ok(Some(feedback)) => self.speaker.speak(feedback.utterance()),
            Ok(None) => {}
            Err(err) => error!("rejected {action:?}: {err}"),
        }
        if self.session.round().map(|r| r.id) != previous_round {
            self.option_selected = 0;
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.speaker.poll();
        if self.session.tick(now) {
            self.option_selected = 0;
        }
    }

    pub fn toggle_mode(&mut self) {
        let mode = self.session.mode().toggled();
        self.apply(Action::SetMode(mode));
    }

    pub fn speak_current(&mut self) {
        let text = self.session.current().utterance();
        self.speaker.speak(&text);
    }

    /// Jump the flashcard to a typed letter.
    pub fn jump_to(&mut self, ch: char) {
        if let Some(index) = alphabet::position_of(ch) {
            self.apply(Action::SelectCursor(index));
        }
    }

    pub fn step(&mut self, direction: Direction) {
        self.apply(Action::Advance(direction));
    }

    pub fn answer_slot(&mut self, slot: usize) {
        let Some(selected) = self.session.round().and_then(|r| r.options.get(slot).copied()) else {
            return;
        };
        self.option_selected = slot;
        self.apply(Action::SubmitAnswer(selected));
    }

    /// Answer by typing a letter; letters that are not among the options
    /// are ignored rather than counted as wrong.
    pub fn answer_letter(&mut self, ch: char) {
        let slot = self.session.round().and_then(|r| r.slot_of(ch));
        if let Some(slot) = slot {
            self.answer_slot(slot);
        }
    }

    pub fn answer_highlighted(&mut self) {
        self.answer_slot(self.option_selected);
    }

    /// Move the highlight around the 2x2 option grid, wrapping at the edges.
    pub fn move_highlight(&mut self, dx: i8, dy: i8) {
        if self.session.is_showing_feedback() {
            return;
        }
        let cols = 2usize;
        let col = self.option_selected % cols;
        let row = self.option_selected / cols;
        let col = (col as i8 + dx).rem_euclid(cols as i8) as usize;
        let row = (row as i8 + dy).rem_euclid((OPTION_COUNT / cols) as i8) as usize;
        self.option_selected = row * cols + col;
    }

    pub fn reset_score(&mut self) {
        self.apply(Action::ResetScore);
    }

    pub fn leave_game(&mut self) {
        if self.session.mode() == Mode::Game {
            self.apply(Action::SetMode(Mode::Learn));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>, Rc<RefCell<usize>>);

    impl Speaker for Recorder {
        fn speak(&mut self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }

        fn poll(&mut self) {
            *self.1.borrow_mut() += 1;
        }
    }

    fn app_with(mode: Mode) -> (App, Recorder) {
        let recorder = Recorder::default();
        let config = Config {
            start_mode: mode,
            ..Config::default()
        };
        let app = App::new(&config, Theme::default(), Box::new(recorder.clone()), Some(99));
        (app, recorder)
    }

    #[test]
    fn test_start_mode_from_config() {
        let (app, _) = app_with(Mode::Game);
        assert_eq!(app.session.mode(), Mode::Game);
        assert!(app.session.round().is_some());

        let (app, _) = app_with(Mode::Learn);
        assert!(app.session.round().is_none());
    }

    #[test]
    fn test_speak_current_card() {
        let (mut app, recorder) = app_with(Mode::Learn);
        app.jump_to('d');
        app.speak_current();
        assert_eq!(recorder.0.borrow().as_slice(), ["D. Dog"]);
    }

    #[test]
    fn test_answer_speaks_verdict() {
        let (mut app, recorder) = app_with(Mode::Game);
        let answer = app.session.round().unwrap().answer();
        app.answer_letter(answer);
        assert_eq!(app.session.score(), 1);
        assert_eq!(recorder.0.borrow().as_slice(), ["Correct! Well done!"]);
    }

    #[test]
    fn test_letter_not_in_options_is_ignored() {
        let (mut app, recorder) = app_with(Mode::Game);
        let round = app.session.round().cloned().unwrap();
        let outsider = ('a'..='z').find(|c| round.slot_of(*c).is_none()).unwrap();
        app.answer_letter(outsider);
        assert_eq!(app.session.attempts(), 0);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_wrong_slot_then_next_round_resets_highlight() {
        let (mut app, recorder) = app_with(Mode::Game);
        let round = app.session.round().cloned().unwrap();
        let wrong = (0..OPTION_COUNT).find(|&s| s != round.correct_slot()).unwrap();
        let now = Instant::now();

        app.option_selected = wrong;
        let selected = round.options[wrong];
        app.apply_at(Action::SubmitAnswer(selected), now);
        assert_eq!(recorder.0.borrow().as_slice(), ["Try again!"]);
        assert_eq!(app.option_selected, wrong);

        app.tick_at(now + Duration::from_secs(3));
        assert_ne!(app.session.round().unwrap().id, round.id);
        assert_eq!(app.option_selected, 0);
    }

    #[test]
    fn test_tick_polls_speaker() {
        let (mut app, recorder) = app_with(Mode::Learn);
        app.tick();
        app.tick();
        assert_eq!(*recorder.1.borrow(), 2);
    }

    #[test]
    fn test_move_highlight_wraps_grid() {
        let (mut app, _) = app_with(Mode::Game);
        app.move_highlight(1, 0);
        assert_eq!(app.option_selected, 1);
        app.move_highlight(1, 0);
        assert_eq!(app.option_selected, 0);
        app.move_highlight(0, 1);
        assert_eq!(app.option_selected, 2);
        app.move_highlight(-1, 1);
        assert_eq!(app.option_selected, 1);
    }

    #[test]
    fn test_toggle_and_leave_game() {
        let (mut app, _) = app_with(Mode::Learn);
        app.toggle_mode();
        assert_eq!(app.session.mode(), Mode::Game);
        app.leave_game();
        assert_eq!(app.session.mode(), Mode::Learn);
    }

    #[test]
    fn test_invalid_select_is_logged_not_applied() {
        let (mut app, _) = app_with(Mode::Learn);
        app.apply(Action::SelectCursor(99));
        assert_eq!(app.session.cursor(), 0);
    }
}
