use crate::dictionary::Dictionary;
use crate::validator::{Rejection, check_answer};
use crate::wordlist::WordList;
use crate::debug_log;
use rand::Rng;
use std::fmt;

/// Outcome of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted(String),
    RejectedNotPossible { word: String, puzzle_word: String },
    RejectedNotOriginal { word: String },
    RejectedNotReal { word: String },
}

impl SubmissionResult {
    fn rejected(rejection: Rejection, word: String, puzzle_word: &str) -> Self {
        match rejection {
            Rejection::NotPossible => Self::RejectedNotPossible {
                word,
                puzzle_word: puzzle_word.to_string(),
            },
            Rejection::NotOriginal => Self::RejectedNotOriginal { word },
            Rejection::NotReal => Self::RejectedNotReal { word },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The lowercased answer this outcome is about.
    pub fn word(&self) -> &str {
        match self {
            Self::Accepted(word)
            | Self::RejectedNotPossible { word, .. }
            | Self::RejectedNotOriginal { word }
            | Self::RejectedNotReal { word } => word,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::RejectedNotPossible { .. } => Some(Rejection::NotPossible),
            Self::RejectedNotOriginal { .. } => Some(Rejection::NotOriginal),
            Self::RejectedNotReal { .. } => Some(Rejection::NotReal),
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rejection, puzzle_word) = match self {
            Self::Accepted(word) => return write!(f, "Accepted: {word}"),
            Self::RejectedNotPossible { puzzle_word, .. } => (Rejection::NotPossible, puzzle_word.as_str()),
            Self::RejectedNotOriginal { .. } => (Rejection::NotOriginal, ""),
            Self::RejectedNotReal { .. } => (Rejection::NotReal, ""),
        };
        write!(f, "{}: {}", rejection.title(), rejection.message(puzzle_word))
    }
}

/// One round: the puzzle word plus accepted answers, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    puzzle_word: String,
    used_words: Vec<String>,
}

impl RoundState {
    /// Starts a round on a uniformly random word from `word_list`.
    pub fn start<R: Rng + ?Sized>(word_list: &WordList, rng: &mut R) -> Self {
        Self::with_puzzle_word(word_list.random_word(rng))
    }

    pub fn with_puzzle_word(puzzle_word: &str) -> Self {
        Self {
            puzzle_word: puzzle_word.to_lowercase(),
            used_words: Vec::new(),
        }
    }

    pub fn puzzle_word(&self) -> &str {
        &self.puzzle_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Swaps in a new random puzzle word. Accepted answers stay.
    pub fn reroll<R: Rng + ?Sized>(&mut self, word_list: &WordList, rng: &mut R) {
        self.puzzle_word = word_list.random_word(rng).to_lowercase();
    }

    /// Lowercases `raw_answer` and validates it. Only an accepted answer
    /// changes the round.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        raw_answer: &str,
        dictionary: &D,
    ) -> SubmissionResult {
        let answer = raw_answer.to_lowercase();
        match check_answer(&answer, &self.puzzle_word, &self.used_words, dictionary) {
            Ok(()) => {
                debug_log!("'{}' accepted for '{}'", answer, self.puzzle_word);
                self.used_words.insert(0, answer.clone());
                SubmissionResult::Accepted(answer)
            }
            Err(rejection) => {
                debug_log!("'{}' rejected for '{}': {}", answer, self.puzzle_word, rejection);
                SubmissionResult::rejected(rejection, answer, &self.puzzle_word)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordSet {
        WordSet::english(["silk", "worm", "milk", "work", "oil", "soil", "silkworm"])
    }

    #[test]
    fn test_silkworm_scenario() {
        let dict = dictionary();
        let mut round = RoundState::with_puzzle_word("silkworm");

        assert_eq!(round.submit("silk", &dict), SubmissionResult::Accepted("silk".to_string()));
        assert_eq!(round.used_words(), &["silk".to_string()]);

        assert_eq!(
            round.submit("silk", &dict),
            SubmissionResult::RejectedNotOriginal { word: "silk".to_string() }
        );
        assert_eq!(
            round.submit("silkworm", &dict),
            SubmissionResult::RejectedNotReal { word: "silkworm".to_string() }
        );
        assert_eq!(round.used_words(), &["silk".to_string()]);
    }

    #[test]
    fn test_submit_lowercases_answer() {
        let dict = dictionary();
        let mut round = RoundState::with_puzzle_word("silkworm");
        assert_eq!(round.submit("MILK", &dict), SubmissionResult::Accepted("milk".to_string()));
        assert_eq!(
            round.submit("Milk", &dict),
            SubmissionResult::RejectedNotOriginal { word: "milk".to_string() }
        );
    }

    #[test]
    fn test_used_words_most_recent_first() {
        let dict = dictionary();
        let mut round = RoundState::with_puzzle_word("silkworm");
        for word in ["silk", "worm", "oil"] {
            assert!(round.submit(word, &dict).is_accepted());
        }
        assert_eq!(round.used_words(), &["oil", "worm", "silk"].map(String::from));
    }

    #[test]
    fn test_rejected_not_possible_carries_puzzle_word() {
        let dict = dictionary();
        let mut round = RoundState::with_puzzle_word("silkworm");
        let result = round.submit("silks", &dict);
        assert_eq!(
            result,
            SubmissionResult::RejectedNotPossible {
                word: "silks".to_string(),
                puzzle_word: "silkworm".to_string(),
            }
        );
        assert_eq!(result.rejection(), Some(Rejection::NotPossible));
        assert_eq!(
            result.to_string(),
            "Word not possible: You can't spell that word from silkworm"
        );
        assert!(round.used_words().is_empty());
    }

    #[test]
    fn test_short_answer_not_real() {
        let dict = dictionary();
        let mut round = RoundState::with_puzzle_word("silkworm");
        assert_eq!(
            round.submit("so", &dict),
            SubmissionResult::RejectedNotReal { word: "so".to_string() }
        );
    }

    #[test]
    fn test_puzzle_word_is_lowercased() {
        let round = RoundState::with_puzzle_word("SilkWorm");
        assert_eq!(round.puzzle_word(), "silkworm");
    }

    #[test]
    fn test_start_always_empties_used_words() {
        let dict = dictionary();
        let list = WordList::with_fallback(vec!["silkworm".to_string()]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut round = RoundState::start(&list, &mut rng);
        assert!(round.submit("silk", &dict).is_accepted());
        assert!(!round.used_words().is_empty());

        let round = RoundState::start(&list, &mut rng);
        assert_eq!(round.puzzle_word(), "silkworm");
        assert!(round.used_words().is_empty());
    }

    #[test]
    fn test_reroll_keeps_used_words() {
        let dict = dictionary();
        let list = WordList::with_fallback(vec!["silkworm".to_string(), "keyboard".to_string()]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = RoundState::with_puzzle_word("silkworm");
        assert!(round.submit("silk", &dict).is_accepted());

        round.reroll(&list, &mut rng);
        assert!(list.words().iter().any(|w| w == round.puzzle_word()));
        assert_eq!(round.used_words(), &["silk".to_string()]);
    }

    #[test]
    fn test_submission_result_word() {
        let result = SubmissionResult::RejectedNotReal { word: "slik".to_string() };
        assert_eq!(result.word(), "slik");
        assert!(!result.is_accepted());
        assert_eq!(result.to_string(), "Word not recognized: You can't just make them up, you know");
    }
}
