use crate::game_state::{ALPHABET, GameInterface, GameView, UserAction};
use crate::status::{KeyState, RevealedLetter};
use clap::Parser;
use std::io::{BufRead, ErrorKind};

/// Assembly: Endgame - guess the word before every language falls to Assembly
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum LineInput {
    Action(UserAction),
    Invalid,
    Eof,
}

pub fn parse_line(line: &str) -> Option<UserAction> {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "exit" | "quit" => Some(UserAction::Exit),
        "new" | "next" => Some(UserAction::NewGame),
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(UserAction::Guess(c)),
                _ => None,
            }
        }
    }
}

pub fn read_line_input<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nGuess a letter ('new' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => LineInput::Eof,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            println!("Invalid input. Please enter a single letter.");
            LineInput::Invalid
        }
        Err(_) => LineInput::Eof,
        Ok(_) => match parse_line(&input) {
            Some(action) => LineInput::Action(action),
            None => {
                println!("Invalid input. Please enter a single letter.");
                LineInput::Invalid
            }
        },
    }
}

#[must_use]
pub fn format_word(letters: &[RevealedLetter]) -> String {
    letters
        .iter()
        .map(|letter| match letter {
            RevealedLetter::Hidden => '_',
            RevealedLetter::Guessed(c) | RevealedLetter::Missed(c) => c.to_ascii_uppercase(),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_roster(view: &GameView<'_>) -> String {
    view.roster
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            if view.is_eliminated(i) {
                format!("[x {}]", lang.name)
            } else {
                format!("[{}]", lang.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_keyboard(view: &GameView<'_>) -> String {
    ALPHABET
        .chars()
        .map(|c| match view.key_state(c) {
            KeyState::Unused => c.to_ascii_uppercase(),
            KeyState::Correct => '+',
            KeyState::Wrong => '-',
        })
        .collect()
}

pub fn display_game(view: &GameView<'_>) {
    println!();
    println!("{}", format_roster(view));
    println!("Word: {}", format_word(&view.revealed_letters()));
    println!("Keys: {}", format_keyboard(view));
    println!(
        "Wrong guesses: {}/{}",
        view.status.wrong_guess_count,
        view.attempts_allowed()
    );

    if let Some((heading, message)) = view.banner() {
        println!("{heading} {message}");
        println!("Type 'new' to play again.");
    } else if let Some(text) = view.farewell {
        println!("{text}");
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
    is_game_over: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            is_game_over: false,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_game(&mut self, view: &GameView<'_>) {
        self.is_game_over = view.status.is_game_over;
        display_game(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line_input(&mut self.reader) {
            LineInput::Action(UserAction::Guess(_)) if self.is_game_over => {
                println!("The game is over. Type 'new' to play again.");
                None
            }
            LineInput::Action(action) => Some(action),
            LineInput::Eof => Some(UserAction::Exit),
            LineInput::Invalid => None,
        }
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Game;
    use crate::roster::Roster;
    use crate::wordbank::ScriptedWords;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["assembly-endgame"]);
        assert_eq!(cli.wordbank_path, None);
        assert!(!cli.plain);
    }

    #[test]
    fn test_parse_cli_with_path() {
        let cli = Cli::parse_from(["assembly-endgame", "-i", "words.txt", "--plain"]);
        assert_eq!(cli.wordbank_path, Some("words.txt".to_string()));
        assert!(cli.plain);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("a\n"), Some(UserAction::Guess('a')));
        assert_eq!(parse_line("  Q  "), Some(UserAction::Guess('q')));
        assert_eq!(parse_line("EXIT"), Some(UserAction::Exit));
        assert_eq!(parse_line("quit"), Some(UserAction::Exit));
        assert_eq!(parse_line("new"), Some(UserAction::NewGame));
        assert_eq!(parse_line("next"), Some(UserAction::NewGame));
        assert_eq!(parse_line("ab"), None);
        assert_eq!(parse_line("7"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_read_line_input_eof() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_line_input(&mut reader), LineInput::Eof));
    }

    #[test]
    fn test_read_line_input_invalid_then_valid() {
        let mut reader = Cursor::new("??\nb\n");
        assert!(matches!(read_line_input(&mut reader), LineInput::Invalid));
        assert!(matches!(
            read_line_input(&mut reader),
            LineInput::Action(UserAction::Guess('b'))
        ));
    }

    #[test]
    fn test_cli_interface_eof_exits() {
        let mut interface = CliInterface::new(Cursor::new("x\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Guess('x')));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_line_input_invalid_utf8_keeps_reading() {
        let mut reader = Cursor::new(b"\xff\xfe\nb\n".to_vec());
        assert!(matches!(read_line_input(&mut reader), LineInput::Invalid));
        assert!(matches!(
            read_line_input(&mut reader),
            LineInput::Action(UserAction::Guess('b'))
        ));
    }

    #[test]
    fn test_cli_interface_drops_letters_after_game_over() {
        let mut game = Game::new(ScriptedWords::new(["go"]).unwrap(), Roster::default());
        game.guess('g');
        game.guess('o');
        let mut interface = CliInterface::new(Cursor::new("x\nnew\nexit\n"));
        interface.display_game(&game.view(None));
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::NewGame));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_format_word() {
        let letters = [
            RevealedLetter::Guessed('g'),
            RevealedLetter::Hidden,
            RevealedLetter::Missed('o'),
        ];
        assert_eq!(format_word(&letters), "G _ O");
    }

    #[test]
    fn test_format_roster_and_keyboard() {
        let mut game = Game::new(ScriptedWords::new(["go"]).unwrap(), Roster::default());
        game.guess('g');
        game.guess('z');
        let view = game.view(None);

        let roster = format_roster(&view);
        assert!(roster.starts_with("[x HTML] [CSS]"));
        assert!(roster.ends_with("[Assembly]"));

        let keys = format_keyboard(&view);
        assert_eq!(keys.len(), 26);
        assert!(keys.starts_with("ABCDEF+"));
        assert!(keys.ends_with("Y-"));
    }
}
