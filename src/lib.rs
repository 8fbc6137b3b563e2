// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod validator;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, ENGLISH, WordSet, resolve_dictionary};
pub use game_state::{Game, GameInterface, UserAction, game_loop};
pub use round::{RoundState, SubmissionResult};
pub use validator::{Rejection, check_answer, is_original, is_possible, is_real};
pub use wordlist::{
    WordList, load_start_words_from_file, load_start_words_from_str, resolve_word_list,
};
