use assembly_endgame::cli::{CliInterface, parse_cli};
use assembly_endgame::logging::init_logging;
use assembly_endgame::tui::TuiInterface;
use assembly_endgame::wordbank::EMBEDDED_WORDBANK;
use assembly_endgame::{
    Game, RandomFarewell, Roster, WordBank, game_loop, load_wordbank_from_file,
    load_wordbank_from_str,
};
use std::io;
use std::process::ExitCode;

/// Load the configured word list, or the embedded one, into a usable bank.
fn load_wordbank(path: Option<&str>) -> Result<WordBank, String> {
    let words = match path {
        Some(path) => load_wordbank_from_file(path)
            .map_err(|e| format!("Failed to load word list from '{path}': {e}"))?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    WordBank::new(words).map_err(|e| format!("Cannot start game: {e}"))
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging();

    let wordbank = match load_wordbank(cli.wordbank_path.as_deref()) {
        Ok(bank) => bank,
        Err(message) => {
            log::error!("{message}");
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words", wordbank.len());

    let mut game = Game::new(wordbank, Roster::default());
    let mut narrative = RandomFarewell;

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut narrative, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => game_loop(&mut game, &mut narrative, &mut interface),
        Err(e) => {
            log::error!("Failed to start terminal interface: {e}");
            eprintln!("Failed to start terminal interface ({e}); falling back to plain mode.");
            let stdin = io::stdin();
            let mut interface = CliInterface::new(stdin.lock());
            game_loop(&mut game, &mut narrative, &mut interface);
        }
    }

    ExitCode::SUCCESS
}
