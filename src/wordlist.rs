use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Puzzle word used when every other source comes up empty.
pub const DEFAULT_START_WORD: &str = "silkworm";

const START_WORDS_FILE: &str = "start.txt";

/// Candidate puzzle words for a session. Never empty once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Wraps `words`, substituting the single default word if there are none.
    pub fn with_fallback(words: Vec<String>) -> Self {
        if words.is_empty() {
            log::warn!("start word list is empty, falling back to '{DEFAULT_START_WORD}'");
            return Self {
                words: vec![DEFAULT_START_WORD.to_string()],
            };
        }
        Self { words }
    }

    pub fn embedded() -> Self {
        Self::with_fallback(load_start_words_from_str(EMBEDDED_START_WORDS))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map_or(DEFAULT_START_WORD, String::as_str)
    }
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

pub fn load_start_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_start_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<config dir>/word-scramble/<file_name>`, if the platform has a config dir.
pub fn get_config_file_path(file_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("word-scramble").join(file_name))
}

pub fn get_start_words_path() -> Option<PathBuf> {
    get_config_file_path(START_WORDS_FILE)
}

/// Resolves the start words: explicit path, then the user's config dir, then
/// the embedded list. Read failures are logged and skipped.
pub fn resolve_word_list(explicit: Option<&Path>) -> WordList {
    if let Some(path) = explicit {
        match load_start_words_from_file(path) {
            Ok(words) => {
                log::info!("Loaded {} start words from {}", words.len(), path.display());
                return WordList::with_fallback(words);
            }
            Err(e) => log::warn!("Failed to load start words from '{}': {e}", path.display()),
        }
    }

    if let Some(path) = get_start_words_path()
        && path.exists()
    {
        match load_start_words_from_file(&path) {
            Ok(words) => {
                log::info!("Loaded {} start words from {}", words.len(), path.display());
                return WordList::with_fallback(words);
            }
            Err(e) => log::warn!("Failed to load start words from '{}': {e}", path.display()),
        }
    }

    WordList::embedded()
}
