use crate::farewell::NarrativeText;
use crate::roster::{Language, Roster};
use crate::status::{GamePhase, GameStatus, KeyState, RevealedLetter, key_state, reveal_word};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

fn in_alphabet(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

/// One game's progress: the secret word and the letters tried so far.
///
/// Replaced wholesale on a new game, never reset field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret_word: String,
    guessed_letters: Vec<char>,
}

impl Session {
    pub fn new(secret_word: String) -> Self {
        Self {
            secret_word,
            guessed_letters: Vec::new(),
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Guessed letters in the order they were entered.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }
}

/// What happened to a submitted letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Outside the alphabet, already guessed, or the game was already over.
    Ignored,
    Correct,
    /// Wrong, and the game goes on. `eliminated` is the roster index knocked out.
    Wrong { eliminated: usize },
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// The game engine: owns the session, the roster and the word source.
pub struct Game<W: WordSource> {
    session: Session,
    roster: Roster,
    source: W,
}

impl<W: WordSource> Game<W> {
    pub fn new(mut source: W, roster: Roster) -> Self {
        let session = Session::new(source.pick_random_word());
        info_log!(
            "Game::new() - {} letter word, {} languages",
            session.secret_word.len(),
            roster.len()
        );
        Self {
            session,
            roster,
            source,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn secret_word(&self) -> &str {
        self.session.secret_word()
    }

    pub fn guessed_letters(&self) -> &[char] {
        self.session.guessed_letters()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::compute(
            &self.session.secret_word,
            &self.session.guessed_letters,
            self.roster.len(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.status().phase()
    }

    /// Record a guess. Invalid, repeated and post-game letters change nothing.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if !in_alphabet(letter)
            || self.session.guessed_letters.contains(&letter)
            || self.status().is_game_over
        {
            return GuessOutcome::Ignored;
        }

        self.session.guessed_letters.push(letter);
        let status = self.status();
        debug_log!(
            "Game::guess() - accepted {:?}, wrong count now {}",
            letter,
            status.wrong_guess_count
        );

        match status.phase() {
            GamePhase::Won => GuessOutcome::Won,
            GamePhase::Lost => GuessOutcome::Lost,
            GamePhase::Playing if status.is_last_guess_incorrect => GuessOutcome::Wrong {
                eliminated: status.wrong_guess_count - 1,
            },
            GamePhase::Playing => GuessOutcome::Correct,
        }
    }

    /// Swap in a fresh session. Allowed at any time.
    pub fn start_new_game(&mut self) {
        let session = Session::new(self.source.pick_random_word());
        self.session = session;
        info_log!(
            "Game::start_new_game() - new {} letter word",
            self.session.secret_word.len()
        );
    }

    /// The language whose farewell belongs in the status banner right now.
    pub fn farewell_language(&self) -> Option<&Language> {
        let status = self.status();
        if status.shows_farewell() {
            self.roster.eliminated_by(status.wrong_guess_count)
        } else {
            None
        }
    }

    pub fn view<'a>(&'a self, farewell: Option<&'a str>) -> GameView<'a> {
        GameView {
            secret_word: self.session.secret_word(),
            guessed_letters: self.session.guessed_letters(),
            roster: &self.roster,
            status: self.status(),
            farewell,
        }
    }
}

/// Read-only snapshot handed to the presentation after every change.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub secret_word: &'a str,
    pub guessed_letters: &'a [char],
    pub roster: &'a Roster,
    pub status: GameStatus,
    pub farewell: Option<&'a str>,
}

impl GameView<'_> {
    pub fn revealed_letters(&self) -> Vec<RevealedLetter> {
        reveal_word(self.secret_word, self.guessed_letters, self.status.is_game_lost)
    }

    pub fn key_state(&self, letter: char) -> KeyState {
        key_state(self.secret_word, self.guessed_letters, letter)
    }

    pub fn is_eliminated(&self, roster_index: usize) -> bool {
        Roster::is_eliminated(roster_index, self.status.wrong_guess_count)
    }

    /// Heading and message for the status banner, if it has anything to say.
    pub fn banner(&self) -> Option<(&str, &str)> {
        match self.status.phase() {
            GamePhase::Won => Some(("You win!", "Well Done!")),
            GamePhase::Lost => Some(("Game Over!", "You lose! Better start learning Assembly")),
            GamePhase::Playing => None,
        }
    }

    pub fn attempts_allowed(&self) -> usize {
        self.roster.mistake_budget()
    }
}

/// Everything a front end must provide to host the game.
pub trait GameInterface {
    fn display_game(&mut self, view: &GameView<'_>);
    /// `None` means the input was not understood and is dropped.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

pub fn game_loop<W, N, I>(game: &mut Game<W>, narrative: &mut N, interface: &mut I)
where
    W: WordSource,
    N: NarrativeText,
    I: GameInterface,
{
    let mut farewell: Option<String> = None;
    interface.display_game(&game.view(None));

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                game.start_new_game();
                farewell = None;
            }
            UserAction::Guess(letter) => match game.guess(letter) {
                GuessOutcome::Ignored => continue,
                GuessOutcome::Wrong { eliminated } => {
                    farewell = game
                        .roster()
                        .get(eliminated)
                        .map(|lang| narrative.farewell_text(&lang.name));
                }
                GuessOutcome::Correct | GuessOutcome::Won | GuessOutcome::Lost => {
                    farewell = None;
                }
            },
        }

        interface.display_game(&game.view(farewell.as_deref()));
    }
}
