use rand::Rng;
use rand::seq::SliceRandom;

use crate::alphabet::{self, LetterRecord};

pub const OPTION_COUNT: usize = 4;
const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Identifies one round for the lifetime of a session. Scheduled round
/// starts are tagged with the id they were scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl RoundId {
    pub fn next(self) -> Self {
        RoundId(self.0 + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub target: &'static LetterRecord,
    pub options: [char; OPTION_COUNT],
}

impl Round {
    /// Draw a target uniformly from the table, three distinct distractors
    /// from the remaining 25 records, and shuffle all four lowercase forms.
    pub fn generate<R: Rng + ?Sized>(id: RoundId, rng: &mut R) -> Self {
        let records = alphabet::records();
        let target_idx = rng.gen_range(0..records.len());
        let target = &records[target_idx];

        let mut candidates: Vec<usize> = (0..records.len()).filter(|&i| i != target_idx).collect();
        let (picked, _) = candidates.partial_shuffle(rng, DISTRACTOR_COUNT);

        let mut options = [target.lower; OPTION_COUNT];
        for (slot, &idx) in options.iter_mut().zip(picked.iter()) {
            *slot = records[idx].lower;
        }
        options.shuffle(rng);

        Self {
            id,
            target,
            options,
        }
    }

    pub fn answer(&self) -> char {
        self.target.lower
    }

    pub fn is_correct(&self, selected: char) -> bool {
        selected == self.target.lower
    }

    pub fn correct_slot(&self) -> usize {
        self.options
            .iter()
            .position(|&c| c == self.target.lower)
            .unwrap_or(0)
    }

    pub fn slot_of(&self, ch: char) -> Option<usize> {
        self.options.iter().position(|&c| c == ch)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_options_are_distinct_with_one_answer() {
        let mut rng = SmallRng::seed_from_u64(7);
        for i in 0..2000 {
            let round = Round::generate(RoundId(i), &mut rng);
            let unique: HashSet<char> = round.options.iter().copied().collect();
            assert_eq!(unique.len(), OPTION_COUNT, "duplicate option in {round:?}");
            let hits = round.options.iter().filter(|&&c| c == round.answer()).count();
            assert_eq!(hits, 1);
            assert!(round.options.iter().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_correct_slot_is_uniform() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut slots = [0usize; OPTION_COUNT];
        let n = 4000;
        for i in 0..n {
            let round = Round::generate(RoundId(i), &mut rng);
            slots[round.correct_slot()] += 1;
        }
        // Expected 1000 per slot, std dev ~27.
        for (slot, &count) in slots.iter().enumerate() {
            assert!(
                (850..=1150).contains(&count),
                "slot {slot} got {count} of {n}: {slots:?}"
            );
        }
    }

    #[test]
    fn test_every_letter_is_drawn_as_target() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut counts = [0usize; alphabet::LEN];
        for i in 0..26_000 {
            let round = Round::generate(RoundId(i), &mut rng);
            counts[alphabet::position_of(round.target.upper).unwrap()] += 1;
        }
        for (idx, &count) in counts.iter().enumerate() {
            assert!((700..=1300).contains(&count), "letter {idx} drawn {count} times");
        }
    }

    #[test]
    fn test_distractors_never_include_target() {
        let mut rng = SmallRng::seed_from_u64(11);
        for i in 0..500 {
            let round = Round::generate(RoundId(i), &mut rng);
            let distractors: Vec<char> = round
                .options
                .iter()
                .copied()
                .filter(|&c| !round.is_correct(c))
                .collect();
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
        }
    }

    #[test]
    fn test_slot_of_and_correct_slot_agree() {
        let mut rng = SmallRng::seed_from_u64(5);
        let round = Round::generate(RoundId(0), &mut rng);
        assert_eq!(round.slot_of(round.answer()), Some(round.correct_slot()));
        assert_eq!(round.slot_of('?'), None);
    }
}
