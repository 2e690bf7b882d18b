// Library interface for assembly-endgame
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod farewell;
pub mod game_state;
pub mod logging;
pub mod roster;
pub mod status;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::ConfigError;
pub use farewell::{NarrativeText, RandomFarewell};
pub use game_state::{Game, GameInterface, GameView, GuessOutcome, Session, UserAction, game_loop};
pub use roster::{Language, Roster};
pub use status::{GamePhase, GameStatus, KeyState, RevealedLetter};
pub use wordbank::{
    ScriptedWords, WordBank, WordSource, load_wordbank_from_file, load_wordbank_from_str,
};
