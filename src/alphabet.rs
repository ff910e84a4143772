use thiserror::Error;

/// Number of records in the content table.
pub const LEN: usize = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterRecord {
    pub upper: char,
    pub lower: char,
    pub word: &'static str,
}

impl LetterRecord {
    const fn new(upper: char, lower: char, word: &'static str) -> Self {
        Self { upper, lower, word }
    }

    /// Text handed to the speech boundary when the card is read aloud.
    pub fn utterance(&self) -> String {
        format!("{}. {}", self.upper, self.word)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("letter index {index} is out of range (expected 0..26)")]
    OutOfRange { index: usize },
}

static ALPHABET: [LetterRecord; LEN] = [
    LetterRecord::new('A', 'a', "Apple"),
    LetterRecord::new('B', 'b', "Ball"),
    LetterRecord::new('C', 'c', "Cat"),
    LetterRecord::new('D', 'd', "Dog"),
    LetterRecord::new('E', 'e', "Egg"),
    LetterRecord::new('F', 'f', "Fish"),
    LetterRecord::new('G', 'g', "Grape"),
    LetterRecord::new('H', 'h', "Hat"),
    LetterRecord::new('I', 'i', "Ice"),
    LetterRecord::new('J', 'j', "Juice"),
    LetterRecord::new('K', 'k', "Kite"),
    LetterRecord::new('L', 'l', "Lion"),
    LetterRecord::new('M', 'm', "Moon"),
    LetterRecord::new('N', 'n', "Nose"),
    LetterRecord::new('O', 'o', "Orange"),
    LetterRecord::new('P', 'p', "Pen"),
    LetterRecord::new('Q', 'q', "Queen"),
    LetterRecord::new('R', 'r', "Rose"),
    LetterRecord::new('S', 's', "Sun"),
    LetterRecord::new('T', 't', "Tree"),
    LetterRecord::new('U', 'u', "Umbrella"),
    LetterRecord::new('V', 'v', "Violin"),
    LetterRecord::new('W', 'w', "Water"),
    LetterRecord::new('X', 'x', "Xylophone"),
    LetterRecord::new('Y', 'y', "Yellow"),
    LetterRecord::new('Z', 'z', "Zebra"),
];

pub fn records() -> &'static [LetterRecord] {
    &ALPHABET
}

pub fn get(index: usize) -> Result<&'static LetterRecord, AlphabetError> {
    ALPHABET
        .get(index)
        .ok_or(AlphabetError::OutOfRange { index })
}

/// Table index for an ASCII letter in either case.
pub fn position_of(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
