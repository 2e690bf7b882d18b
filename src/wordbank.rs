use crate::error::ConfigError;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Something that can hand out secret words.
pub trait WordSource {
    fn pick_random_word(&mut self) -> String;
}

fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_word).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_word(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Fixed pool of candidate words, picked from uniformly at random.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn new(words: Vec<String>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        Ok(Self { words })
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
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
}

impl WordSource for WordBank {
    fn pick_random_word(&mut self) -> String {
        // `new` rejects an empty pool, so `choose` always yields a word.
        self.words
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

/// Hands out words in a fixed order, cycling when exhausted.
///
/// Useful wherever the secret word has to be known up front.
#[derive(Debug, Clone)]
pub struct ScriptedWords {
    queue: VecDeque<String>,
}

impl ScriptedWords {
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let queue: VecDeque<String> = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        if queue.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        Ok(Self { queue })
    }
}

impl WordSource for ScriptedWords {
    fn pick_random_word(&mut self) -> String {
        match self.queue.pop_front() {
            Some(word) => {
                self.queue.push_back(word.clone());
                word
            }
            None => String::new(),
        }
    }
}
