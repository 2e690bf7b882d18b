// Integration tests for assembly-endgame
// These tests verify that the engine, word sources, roster and interfaces work together

use assembly_endgame::cli::CliInterface;
use assembly_endgame::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

fn scripted_game(words: &[&str]) -> Game<ScriptedWords> {
    Game::new(ScriptedWords::new(words).unwrap(), Roster::default())
}

fn random_letter(rng: &mut StdRng) -> char {
    (b'a' + rng.gen_range(0..26u8)) as char
}

#[test]
fn test_example_scenario_with_four_languages() {
    let roster = Roster::new(vec![
        Language::new("C", (0, 0, 0), (255, 255, 255)),
        Language::new("Go", (0, 0, 0), (255, 255, 255)),
        Language::new("Rust", (0, 0, 0), (255, 255, 255)),
        Language::new("Assembly", (0, 0, 0), (255, 255, 255)),
    ])
    .unwrap();
    let mut game = Game::new(ScriptedWords::new(["go", "zig"]).unwrap(), roster);

    assert_eq!(game.status().wrong_guess_count, 0);
    assert_eq!(game.guess('g'), GuessOutcome::Correct);
    assert_eq!(game.guess('z'), GuessOutcome::Wrong { eliminated: 0 });
    assert_eq!(game.farewell_language().unwrap().name, "C");
    assert_eq!(game.guess('o'), GuessOutcome::Won);
    assert_eq!(game.guessed_letters(), &['g', 'z', 'o']);
    assert_eq!(game.guess('x'), GuessOutcome::Ignored);
    assert_eq!(game.guessed_letters(), &['g', 'z', 'o']);

    game.start_new_game();
    assert_eq!(game.secret_word(), "zig");
    assert!(game.guessed_letters().is_empty());
    assert!(!game.status().is_game_over);
}

#[test]
fn test_guess_properties_over_random_play() {
    let mut rng = StdRng::seed_from_u64(7);
    let words = ["assembly", "rust", "go", "javascript", "queue", "zzz"];

    for round in 0..200 {
        let mut game = scripted_game(&[words[round % words.len()]]);
        let mut previous_len = 0;

        for _ in 0..60 {
            let letter = random_letter(&mut rng);
            let before = game.session().clone();
            let status_before = game.status();

            game.guess(letter);
            let after_once = game.session().clone();
            // Idempotence
            game.guess(letter);
            assert_eq!(game.session(), &after_once);

            let len = game.guessed_letters().len();
            assert!(len >= previous_len && len <= previous_len + 1);
            assert!(len <= 26);
            previous_len = len;

            let status = game.status();
            // Termination soundness
            if status.is_game_won {
                assert!(game.secret_word().chars().all(|c| game.guessed_letters().contains(&c)));
            }
            if status.is_game_lost {
                assert!(status.wrong_guess_count >= game.roster().mistake_budget());
            }
            // Mutual exclusion
            assert!(!(status.is_game_won && status.is_game_lost));
            // Post-game freeze
            if status_before.is_game_over {
                assert_eq!(game.session(), &before);
                assert_eq!(status, status_before);
            }
            // Never past the budget
            assert!(status.wrong_guess_count <= game.roster().mistake_budget());
        }
    }
}

#[test]
fn test_reset_completeness_from_any_state() {
    let mut game = scripted_game(&["go"]);
    // mid-game
    game.guess('q');
    game.start_new_game();
    assert!(game.guessed_letters().is_empty());
    assert_eq!(game.phase(), GamePhase::Playing);

    // after a win
    game.guess('g');
    game.guess('o');
    assert_eq!(game.phase(), GamePhase::Won);
    game.start_new_game();
    let status = game.status();
    assert!(!status.is_game_won && !status.is_game_lost && !status.is_game_over);

    // after a loss
    for c in "abcdefhi".chars() {
        game.guess(c);
    }
    assert_eq!(game.phase(), GamePhase::Lost);
    game.start_new_game();
    let status = game.status();
    assert!(!status.is_game_over);
    assert_eq!(status.wrong_guess_count, 0);
    assert_eq!(status.last_guessed_letter, None);
}

#[test]
fn test_eight_wrong_guesses_lose_with_default_roster() {
    let mut game = scripted_game(&["rust"]);
    let wrong = "abcdefgh";
    for (i, c) in wrong.chars().enumerate().take(7) {
        assert_eq!(game.guess(c), GuessOutcome::Wrong { eliminated: i });
    }
    assert_eq!(game.farewell_language().unwrap().name, "Python");
    assert_eq!(game.guess('h'), GuessOutcome::Lost);
    let view = game.view(None);
    assert!(view.is_eliminated(7));
    assert!(!view.is_eliminated(8));
    assert!(
        view.revealed_letters()
            .iter()
            .all(|l| matches!(l, RevealedLetter::Missed(_)))
    );
}

#[test]
fn test_cli_game_win_then_exit() {
    let mut game = scripted_game(&["go"]);
    let mut requested = Vec::new();
    let mut narrative = |lang: &str| {
        requested.push(lang.to_string());
        format!("Adios, {lang}")
    };
    let mut interface = CliInterface::new(Cursor::new("g\nz\nnonsense\no\nx\nexit\n"));

    game_loop(&mut game, &mut narrative, &mut interface);

    assert_eq!(requested, vec!["HTML"]);
    assert_eq!(game.guessed_letters(), &['g', 'z', 'o']);
    assert!(game.status().is_game_won);
}

/// Passes everything through to the wrapped interface, keeping the actions it hands out.
struct RecordingInterface<I: GameInterface> {
    inner: I,
    actions: Vec<UserAction>,
}

impl<I: GameInterface> GameInterface for RecordingInterface<I> {
    fn display_game(&mut self, view: &GameView<'_>) {
        self.inner.display_game(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        let action = self.inner.read_action();
        if let Some(action) = action {
            self.actions.push(action);
        }
        action
    }

    fn display_exit_message(&mut self) {
        self.inner.display_exit_message();
    }
}

#[test]
fn test_cli_letters_after_game_over_never_reach_engine() {
    let mut game = scripted_game(&["go", "rust"]);
    let mut narrative = RandomFarewell;
    let mut interface = RecordingInterface {
        inner: CliInterface::new(Cursor::new("g\no\nx\ny\nnew\nr\n")),
        actions: Vec::new(),
    };

    game_loop(&mut game, &mut narrative, &mut interface);

    assert_eq!(
        interface.actions,
        vec![
            UserAction::Guess('g'),
            UserAction::Guess('o'),
            UserAction::NewGame,
            UserAction::Guess('r'),
            UserAction::Exit,
        ]
    );
    assert_eq!(game.secret_word(), "rust");
    assert_eq!(game.guessed_letters(), &['r']);
}

#[test]
fn test_cli_new_game_after_loss() {
    let mut game = scripted_game(&["go", "rust"]);
    let mut narrative = RandomFarewell;
    let mut interface = CliInterface::new(Cursor::new("a\nb\nc\nd\ne\nf\nh\ni\nj\nnew\nr\n"));

    game_loop(&mut game, &mut narrative, &mut interface);

    // input ran out, which exits the loop
    assert_eq!(game.secret_word(), "rust");
    assert_eq!(game.guessed_letters(), &['r']);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("assembly_endgame_custom_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Kotlin").unwrap();
        writeln!(file, "not a word").unwrap();
        writeln!(file, "swift").unwrap();
    }

    let words = load_wordbank_from_file(&path).unwrap();
    assert_eq!(words, vec!["kotlin", "swift"]);

    let mut game = Game::new(WordBank::new(words).unwrap(), Roster::default());
    assert!(game.secret_word() == "kotlin" || game.secret_word() == "swift");
    game.start_new_game();
    assert!(game.secret_word() == "kotlin" || game.secret_word() == "swift");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        WordBank::new(load_wordbank_from_str("123\n\n")).unwrap_err(),
        ConfigError::EmptyWordBank
    );
    let single = vec![Language::new("Assembly", (0, 0, 0), (0, 0, 0))];
    assert_eq!(
        Roster::new(single).unwrap_err(),
        ConfigError::RosterTooShort(1)
    );
}
