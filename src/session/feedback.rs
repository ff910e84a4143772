#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { expected: char },
}

impl Feedback {
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }

    pub fn message(self) -> String {
        match self {
            Feedback::Correct => "Great job! That's right!".to_string(),
            Feedback::Incorrect { expected } => format!("Try again! The answer is {expected}"),
        }
    }

    /// Short phrase for the speech boundary.
    pub fn utterance(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct! Well done!",
            Feedback::Incorrect { .. } => "Try again!",
        }
    }
}
