use crate::dictionary::Dictionary;
use crate::round::{RoundState, SubmissionResult};
use crate::wordlist::WordList;
use crate::{debug_log, info_log};
use rand::Rng;

/// A play session: the word list and dictionary it was built with, plus the
/// round currently in progress.
pub struct Game<D, R> {
    word_list: WordList,
    dictionary: D,
    rng: R,
    round: RoundState,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Creates the session and starts its first round.
    pub fn new(word_list: WordList, dictionary: D, mut rng: R) -> Self {
        let round = RoundState::start(&word_list, &mut rng);
        info_log!("First round puzzle word: {}", round.puzzle_word());
        Self {
            word_list,
            dictionary,
            rng,
            round,
        }
    }

    /// Replaces the current round with a fresh one.
    pub fn start_round(&mut self) -> &RoundState {
        self.round = RoundState::start(&self.word_list, &mut self.rng);
        info_log!("New round puzzle word: {}", self.round.puzzle_word());
        &self.round
    }

    /// Picks a new puzzle word without clearing accepted answers.
    pub fn reroll_puzzle(&mut self) -> &str {
        self.round.reroll(&self.word_list, &mut self.rng);
        info_log!("Puzzle word rerolled to: {}", self.round.puzzle_word());
        self.round.puzzle_word()
    }

    pub fn submit_answer(&mut self, raw_answer: &str) -> SubmissionResult {
        self.round.submit(raw_answer, &self.dictionary)
    }

    /// Accepted answers for the current round, most recent first.
    pub fn list_used_words(&self) -> &[String] {
        self.round.used_words()
    }

    pub fn puzzle_word(&self) -> &str {
        self.round.puzzle_word()
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }
}

/// What the player asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Answer(String),
    NewRound,
    Reroll,
    ShowWords,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
pub trait GameInterface {
    fn display_puzzle_word(&mut self, puzzle_word: &str);

    /// `None` means the input was unusable and the turn is skipped.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_result(&mut self, result: &SubmissionResult, used_words: &[String]);

    fn display_used_words(&mut self, used_words: &[String]);

    fn display_exit_message(&mut self);
}

/// Runs turns until the interface asks to exit.
pub fn game_loop<D, R, I>(game: &mut Game<D, R>, interface: &mut I)
where
    D: Dictionary,
    R: Rng,
    I: GameInterface + ?Sized,
{
    interface.display_puzzle_word(game.puzzle_word());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewRound => {
                game.start_round();
                interface.display_puzzle_word(game.puzzle_word());
            }
            UserAction::Reroll => {
                game.reroll_puzzle();
                interface.display_puzzle_word(game.puzzle_word());
            }
            UserAction::ShowWords => interface.display_used_words(game.list_used_words()),
            UserAction::Answer(raw) => {
                let result = game.submit_answer(&raw);
                log::debug!("submission '{}' -> {:?}", raw, result);
                interface.display_result(&result, game.list_used_words());
            }
        }
    }
}
