//! Dictionary oracle used to decide whether an answer is a real word.
//!
//! The game only ever asks one question of a dictionary, so the seam is a
//! single-method trait. [`WordSet`] is the in-memory implementation used by the
//! binary and by tests; anything else (a spell checker, a frequency list) can
//! be swapped in behind [`Dictionary`].

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::wordlist::get_config_file_path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language tag the game asks the dictionary about.
pub const ENGLISH: &str = "en";

const DICTIONARY_FILE: &str = "dictionary.txt";

pub trait Dictionary {
    /// Whether `word` is a known word in `language`.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Fixed set of lowercase words for a single language.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    language: String,
    words: HashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty()).then(|| w.to_lowercase())
            })
            .collect();
        Self {
            language: language.to_lowercase(),
            words,
        }
    }

    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ENGLISH, words)
    }

    pub fn embedded() -> Self {
        Self::english(EMBEDDED_DICTIONARY.lines())
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::new(language, lines))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(&word.to_lowercase())
    }
}

pub fn get_dictionary_path() -> Option<PathBuf> {
    get_config_file_path(DICTIONARY_FILE)
}

/// Explicit path, then the user's config dir, then the embedded English list.
pub fn resolve_dictionary(explicit: Option<&Path>) -> WordSet {
    let configured = get_dictionary_path().filter(|p| p.exists());
    for path in explicit.map(Path::to_path_buf).into_iter().chain(configured) {
        match WordSet::from_file(ENGLISH, &path) {
            Ok(set) if !set.is_empty() => {
                log::info!("Loaded {} dictionary words from {}", set.len(), path.display());
                return set;
            }
            Ok(_) => log::warn!("Dictionary '{}' is empty, skipping", path.display()),
            Err(e) => log::warn!("Failed to load dictionary from '{}': {e}", path.display()),
        }
    }

    let set = WordSet::embedded();
    log::info!("Using embedded dictionary ({} words)", set.len());
    set
}
