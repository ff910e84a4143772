use std::collections::HashSet;
use std::time::{Duration, Instant};

use lettr::alphabet::{self, AlphabetError};
use lettr::session::{Action, DEFAULT_FEEDBACK_DELAY, Direction, Feedback, Mode, Session};

fn seeded(seed: u64) -> Session {
    Session::seeded(seed, DEFAULT_FEEDBACK_DELAY)
}

/// Answer the current round (correctly or not), then let the feedback delay
/// elapse so the next round starts. Returns the time after the delay.
fn play_round(session: &mut Session, correct: bool, now: Instant) -> Instant {
    let round = session.round().cloned().expect("game mode has a round");
    let selected = if correct {
        round.answer()
    } else {
        round
            .options
            .iter()
            .copied()
            .find(|&c| !round.is_correct(c))
            .expect("three distractors")
    };
    session.submit_answer(selected, now).expect("answer accepted");
    let later = now + session.feedback_delay();
    assert!(session.tick(later));
    later
}

#[test]
fn backward_from_a_wraps_to_z() {
    let mut session = seeded(1);
    assert_eq!(session.current().upper, 'A');
    session.advance(Direction::Backward);
    assert_eq!(session.cursor(), 25);
    assert_eq!(session.current().upper, 'Z');
}

#[test]
fn forward_from_z_wraps_to_a() {
    let mut session = seeded(1);
    session.select_cursor(25).unwrap();
    session.advance(Direction::Forward);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn entering_game_from_initial_state_creates_round() {
    let mut session = seeded(2);
    assert!(session.round().is_none());
    session.set_mode(Mode::Game);
    assert!(session.round().is_some());
}

#[test]
fn double_correct_submission_scores_once() {
    let mut session = seeded(3);
    session.set_mode(Mode::Game);
    let answer = session.round().unwrap().answer();
    let now = Instant::now();
    assert_eq!(session.submit_answer(answer, now), Some(Feedback::Correct));
    assert_eq!(session.submit_answer(answer, now + Duration::from_millis(10)), None);
    assert_eq!(session.score(), 1);
}

#[test]
fn score_counts_only_correct_answers_over_many_rounds() {
    let mut session = seeded(4);
    session.set_mode(Mode::Game);
    let mut now = Instant::now();
    for i in 0..30 {
        now = play_round(&mut session, i % 3 != 0, now);
    }
    assert_eq!(session.score(), 20);
    assert_eq!(session.attempts(), 30);

    session.reset_score();
    assert_eq!(session.score(), 0);
}

#[test]
fn every_round_has_four_distinct_options() {
    let mut session = seeded(5);
    session.set_mode(Mode::Game);
    let mut now = Instant::now();
    for _ in 0..300 {
        let round = session.round().unwrap();
        let unique: HashSet<char> = round.options.iter().copied().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(unique.iter().filter(|&&c| c == round.answer()).count(), 1);
        assert!(unique.iter().all(|&c| alphabet::position_of(c).is_some()));
        now = play_round(&mut session, true, now);
    }
}

#[test]
fn correct_slot_is_fair_across_sessions() {
    let mut slots = [0usize; 4];
    let mut session = seeded(6);
    session.set_mode(Mode::Game);
    for _ in 0..2000 {
        session.start_round();
        slots[session.round().unwrap().correct_slot()] += 1;
    }
    // Expected 500 each, std dev ~19.
    for count in slots {
        assert!((400..=600).contains(&count), "{slots:?}");
    }
}

#[test]
fn round_ids_increase() {
    let mut session = seeded(7);
    session.set_mode(Mode::Game);
    let first = session.round().unwrap().id;
    session.start_round();
    assert!(session.round().unwrap().id > first);
}

#[test]
fn stale_scheduled_round_never_overwrites_new_state() {
    let mut session = seeded(8);
    session.set_mode(Mode::Game);
    let now = Instant::now();
    let answer = session.round().unwrap().answer();
    session.submit_answer(answer, now);

    // Mode switch during the feedback window cancels the pending start.
    session.set_mode(Mode::Learn);
    session.advance(Direction::Forward);
    assert!(!session.tick(now + Duration::from_secs(5)));
    assert_eq!(session.mode(), Mode::Learn);
    assert_eq!(session.cursor(), 1);
}

#[test]
fn feedback_delay_is_configurable() {
    let mut session = Session::seeded(9, Duration::from_millis(500));
    session.set_mode(Mode::Game);
    let now = Instant::now();
    let answer = session.round().unwrap().answer();
    session.submit_answer(answer, now);
    assert_eq!(session.next_round_in(now), Some(Duration::from_millis(500)));
    assert!(!session.tick(now + Duration::from_millis(499)));
    assert!(session.tick(now + Duration::from_millis(500)));
}

#[test]
fn dispatch_rejects_out_of_range_selection() {
    let mut session = seeded(10);
    let err = session
        .dispatch(Action::SelectCursor(alphabet::LEN), Instant::now())
        .unwrap_err();
    assert_eq!(err, AlphabetError::OutOfRange { index: 26 });
    assert_eq!(err.to_string(), "letter index 26 is out of range (expected 0..26)");
}

#[test]
fn letter_outside_the_options_is_incorrect() {
    let mut session = seeded(11);
    session.set_mode(Mode::Game);
    let round = session.round().cloned().unwrap();
    let outsider = ('a'..='z')
        .find(|&c| round.slot_of(c).is_none())
        .expect("22 letters are not on offer");

    let feedback = session.submit_answer(outsider, Instant::now());
    assert_eq!(
        feedback,
        Some(Feedback::Incorrect {
            expected: round.target.lower
        })
    );
    assert_eq!(session.score(), 0);
    assert_eq!(session.attempts(), 1);
    assert!(session.is_showing_feedback());
}
