use crate::game_state::{GameInterface, UserAction};
use crate::round::SubmissionResult;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: spell new words from the letters of a random start word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of start words
    #[arg(short = 'i', long = "input")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited English dictionary
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for choosing puzzle words, for reproducible rounds
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Maps one line of player input to an action. Blank lines map to `None`.
pub fn parse_action(line: &str) -> Option<UserAction> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    let action = match input.to_lowercase().as_str() {
        "exit" => UserAction::Exit,
        "new" => UserAction::NewRound,
        "refresh" => UserAction::Reroll,
        "words" => UserAction::ShowWords,
        _ => UserAction::Answer(input.to_string()),
    };
    Some(action)
}

/// Reads one action. End of input and read errors both mean exit.
pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter an answer ('new' for a new word, 'refresh' to swap the word, 'words' to list answers, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Some(UserAction::Exit),
        Ok(_) => parse_action(&input),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            Some(UserAction::Exit)
        }
    }
}

pub fn display_puzzle_word(puzzle_word: &str) {
    println!("Your word: {}", puzzle_word.to_uppercase());
}

pub fn display_used_words(used_words: &[String]) {
    if used_words.is_empty() {
        println!("No words found yet.");
        return;
    }
    println!("Words found ({}):", used_words.len());
    for word in used_words {
        println!("  {word}");
    }
}

pub fn display_result(result: &SubmissionResult, used_words: &[String]) {
    match result {
        SubmissionResult::Accepted(word) => {
            println!("Nice! '{word}' added.");
            display_used_words(used_words);
        }
        SubmissionResult::RejectedNotPossible { puzzle_word, .. } => {
            display_rejection(result, puzzle_word);
        }
        _ => display_rejection(result, ""),
    }
}

fn display_rejection(result: &SubmissionResult, puzzle_word: &str) {
    if let Some(rejection) = result.rejection() {
        println!("{}", rejection.title());
        println!("{}", rejection.message(puzzle_word));
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait, reading one line per turn.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_puzzle_word(&mut self, puzzle_word: &str) {
        display_puzzle_word(puzzle_word);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_result(&mut self, result: &SubmissionResult, used_words: &[String]) {
        display_result(result, used_words);
    }

    fn display_used_words(&mut self, used_words: &[String]) {
        display_used_words(used_words);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::parse_from(["word-scramble"]);
        assert_eq!(cli.start_words_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_cli_with_args() {
        let cli = Cli::parse_from([
            "word-scramble",
            "-i",
            "start.txt",
            "--dictionary",
            "/usr/share/dict/words",
            "--seed",
            "12",
            "-v",
        ]);
        assert_eq!(cli.start_words_path, Some(PathBuf::from("start.txt")));
        assert_eq!(cli.dictionary_path, Some(PathBuf::from("/usr/share/dict/words")));
        assert_eq!(cli.seed, Some(12));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["word-scramble", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("exit\n"), Some(UserAction::Exit));
        assert_eq!(parse_action("EXIT"), Some(UserAction::Exit));
        assert_eq!(parse_action("new"), Some(UserAction::NewRound));
        assert_eq!(parse_action("Refresh"), Some(UserAction::Reroll));
        assert_eq!(parse_action("words"), Some(UserAction::ShowWords));
    }

    #[test]
    fn test_parse_action_answer_keeps_case() {
        // lowercasing is the round's job
        assert_eq!(
            parse_action("  Silk \n"),
            Some(UserAction::Answer("Silk".to_string()))
        );
    }

    #[test]
    fn test_parse_action_blank() {
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("   \n"), None);
    }

    #[test]
    fn test_read_action_sequence() {
        let mut reader = Cursor::new("silk\n\nexit\n");
        assert_eq!(read_action(&mut reader), Some(UserAction::Answer("silk".to_string())));
        assert_eq!(read_action(&mut reader), None);
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_eof_is_exit() {
        let mut reader = Cursor::new("");
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn test_read_action_error_is_exit() {
        let mut reader = io::BufReader::new(FailingReader);
        assert_eq!(read_action(&mut reader), Some(UserAction::Exit));
    }

    #[test]
    fn test_cli_interface_reads_from_reader() {
        let mut interface = CliInterface::new(Cursor::new("refresh\nwords\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Reroll));
        assert_eq!(interface.read_action(), Some(UserAction::ShowWords));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
