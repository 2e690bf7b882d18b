//! The roster of languages standing between the player and Assembly.
//!
//! Order matters: the first wrong guess eliminates index 0, the second index 1,
//! and so on. A roster is never re-sorted after construction.

use crate::error::ConfigError;

/// RGB triple used for chip colors.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub background_color: Rgb,
    pub color: Rgb,
}

impl Language {
    pub fn new(name: &str, background_color: Rgb, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            background_color,
            color,
        }
    }
}

const LIGHT: Rgb = (0xF9, 0xF4, 0xDA);
const DARK: Rgb = (0x1E, 0x1E, 0x1E);

const DEFAULT_LANGUAGES: [(&str, Rgb, Rgb); 9] = [
    ("HTML", (0xE2, 0x68, 0x0F), LIGHT),
    ("CSS", (0x32, 0x8A, 0xF1), LIGHT),
    ("JavaScript", (0xF4, 0xEB, 0x13), DARK),
    ("React", (0x2E, 0xD3, 0xE9), DARK),
    ("TypeScript", (0x29, 0x8E, 0xC6), LIGHT),
    ("Node.js", (0x59, 0x91, 0x37), LIGHT),
    ("Python", (0xFF, 0xD7, 0x42), DARK),
    ("Ruby", (0xD0, 0x2B, 0x2B), LIGHT),
    ("Assembly", (0x2D, 0x51, 0x9F), LIGHT),
];

/// Ordered, index-stable list of languages. Its length bounds the mistakes allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    languages: Vec<Language>,
}

impl Roster {
    pub fn new(languages: Vec<Language>) -> Result<Self, ConfigError> {
        if languages.len() < 2 {
            return Err(ConfigError::RosterTooShort(languages.len()));
        }
        for (i, lang) in languages.iter().enumerate() {
            if languages[..i].iter().any(|other| other.name == lang.name) {
                return Err(ConfigError::DuplicateRosterEntry(lang.name.clone()));
            }
        }
        Ok(Self { languages })
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Wrong guesses that end the game.
    pub fn mistake_budget(&self) -> usize {
        self.languages.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Language> {
        self.languages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    /// The language knocked out by the `wrong_guess_count`-th wrong guess.
    pub fn eliminated_by(&self, wrong_guess_count: usize) -> Option<&Language> {
        wrong_guess_count
            .checked_sub(1)
            .and_then(|index| self.languages.get(index))
    }

    pub fn is_eliminated(index: usize, wrong_guess_count: usize) -> bool {
        index < wrong_guess_count
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|&(name, bg, fg)| Language::new(name, bg, fg))
                .collect(),
        }
    }
}
