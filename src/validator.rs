use crate::dictionary::{Dictionary, ENGLISH};
use std::fmt;

/// Answers shorter than this are never accepted.
pub const MIN_WORD_LENGTH: usize = 3;

/// Why an answer was turned down. Variant order is the order checks run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotPossible,
    NotOriginal,
    NotReal,
}

impl Rejection {
    pub fn title(self) -> &'static str {
        match self {
            Self::NotPossible => "Word not possible",
            Self::NotOriginal => "Word used already",
            Self::NotReal => "Word not recognized",
        }
    }

    pub fn message(self, puzzle_word: &str) -> String {
        match self {
            Self::NotPossible => format!("You can't spell that word from {puzzle_word}"),
            Self::NotOriginal => "Be more original!".to_string(),
            Self::NotReal => "You can't just make them up, you know".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Multiset-subset test: each letter of `candidate` must consume a distinct
/// remaining occurrence of that letter in `puzzle_word`.
pub fn is_possible(candidate: &str, puzzle_word: &str) -> bool {
    let mut remaining: Vec<char> = puzzle_word.chars().collect();
    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|w| w == candidate)
}

pub fn is_real<D: Dictionary + ?Sized>(candidate: &str, puzzle_word: &str, dictionary: &D) -> bool {
    if candidate.chars().count() < MIN_WORD_LENGTH {
        return false;
    }
    if candidate == puzzle_word {
        return false;
    }
    dictionary.is_known_word(candidate, ENGLISH)
}

/// Runs the checks in fixed order and reports the first one that fails.
/// `candidate` is expected to be lowercased already.
pub fn check_answer<D: Dictionary + ?Sized>(
    candidate: &str,
    puzzle_word: &str,
    used_words: &[String],
    dictionary: &D,
) -> Result<(), Rejection> {
    if !is_possible(candidate, puzzle_word) {
        return Err(Rejection::NotPossible);
    }
    if !is_original(candidate, used_words) {
        return Err(Rejection::NotOriginal);
    }
    if !is_real(candidate, puzzle_word, dictionary) {
        return Err(Rejection::NotReal);
    }
    Ok(())
}
