//! Derived game status.
//!
//! Nothing here is stored: every value is recomputed from the secret word and
//! the guessed letters each time it is read.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// Snapshot of every derived value for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub wrong_guess_count: usize,
    pub is_game_won: bool,
    pub is_game_lost: bool,
    pub is_game_over: bool,
    pub last_guessed_letter: Option<char>,
    pub is_last_guess_incorrect: bool,
}

impl GameStatus {
    pub fn compute(secret_word: &str, guessed_letters: &[char], roster_len: usize) -> Self {
        let wrong_guess_count = wrong_guess_count(secret_word, guessed_letters);
        let is_game_won = is_word_covered(secret_word, guessed_letters);
        let is_game_lost = wrong_guess_count >= roster_len.saturating_sub(1);
        let last_guessed_letter = guessed_letters.last().copied();
        Self {
            wrong_guess_count,
            is_game_won,
            is_game_lost,
            is_game_over: is_game_won || is_game_lost,
            last_guessed_letter,
            is_last_guess_incorrect: last_guessed_letter
                .is_some_and(|c| !secret_word.contains(c)),
        }
    }

    /// Win is checked before loss.
    pub fn phase(&self) -> GamePhase {
        if self.is_game_won {
            GamePhase::Won
        } else if self.is_game_lost {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }

    /// Whether the status banner should carry farewell text.
    pub fn shows_farewell(&self) -> bool {
        !self.is_game_over && self.is_last_guess_incorrect
    }
}

pub fn wrong_guess_count(secret_word: &str, guessed_letters: &[char]) -> usize {
    guessed_letters
        .iter()
        .filter(|&&c| !secret_word.contains(c))
        .count()
}

pub fn is_word_covered(secret_word: &str, guessed_letters: &[char]) -> bool {
    secret_word.chars().all(|c| guessed_letters.contains(&c))
}

/// How a key on the on-screen keyboard should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

pub fn key_state(secret_word: &str, guessed_letters: &[char], letter: char) -> KeyState {
    if !guessed_letters.contains(&letter) {
        KeyState::Unused
    } else if secret_word.contains(letter) {
        KeyState::Correct
    } else {
        KeyState::Wrong
    }
}

/// One position of the secret word as the player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedLetter {
    Hidden,
    Guessed(char),
    /// Only produced after a loss, for letters the player never found.
    Missed(char),
}

pub fn reveal_word(
    secret_word: &str,
    guessed_letters: &[char],
    is_game_lost: bool,
) -> Vec<RevealedLetter> {
    secret_word
        .chars()
        .map(|c| {
            if guessed_letters.contains(&c) {
                RevealedLetter::Guessed(c)
            } else if is_game_lost {
                RevealedLetter::Missed(c)
            } else {
                RevealedLetter::Hidden
            }
        })
        .collect()
}
