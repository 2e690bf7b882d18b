//! TUI (Terminal User Interface) module for Assembly: Endgame
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, status banner, language chips, the secret word, the keyboard and a
//! line of instructions, stacked top to bottom.
//!
//! # Input
//! - Letters are forwarded as guesses while the game is running, and ignored
//!   once it is over.
//! - ENTER starts a new game once the game is over, CTRL+N at any time.
//! - ESC quits.

use crate::game_state::{ALPHABET, GameInterface, GameView, UserAction};
use crate::roster::Rgb;
use crate::status::{KeyState, RevealedLetter};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYS_PER_ROW: usize = 13;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WON_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);
const LOST_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);
const FAREWELL_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::ITALIC);
const ELIMINATED_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .bg(Color::Black)
    .add_modifier(Modifier::CROSSED_OUT);
const MISSED_STYLE: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);
const LETTER_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn key_colors(state: KeyState) -> (Color, Color) {
    match state {
        KeyState::Unused => (Color::Yellow, Color::Black),
        KeyState::Correct => (Color::Green, Color::Black),
        KeyState::Wrong => (Color::Red, Color::White),
    }
}

/// Main TUI interface component.
///
/// Owns the terminal; redraws from the last `GameView` it was given.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: RenderedGame,
    cleaned_up: bool,
}

/// Owned copy of what is on screen, so input handling can redraw without the engine.
#[derive(Debug, Default, Clone)]
struct RenderedGame {
    attempts_allowed: usize,
    chips: Vec<(String, Rgb, Rgb, bool)>,
    word: Vec<RevealedLetter>,
    keys: Vec<(char, KeyState)>,
    banner: Option<(String, String, Style)>,
    is_game_over: bool,
}

impl RenderedGame {
    fn from_view(view: &GameView<'_>) -> Self {
        let banner = if let Some((heading, message)) = view.banner() {
            let style = if view.status.is_game_won {
                WON_STYLE
            } else {
                LOST_STYLE
            };
            Some((heading.to_string(), message.to_string(), style))
        } else {
            view.farewell
                .map(|text| (String::new(), text.to_string(), FAREWELL_STYLE))
        };

        Self {
            attempts_allowed: view.attempts_allowed(),
            chips: view
                .roster
                .iter()
                .enumerate()
                .map(|(i, lang)| {
                    (
                        lang.name.clone(),
                        lang.background_color,
                        lang.color,
                        view.is_eliminated(i),
                    )
                })
                .collect(),
            word: view.revealed_letters(),
            keys: ALPHABET.chars().map(|c| (c, view.key_state(c))).collect(),
            banner,
            is_game_over: view.status.is_game_over,
        }
    }
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            screen: RenderedGame::default(),
            cleaned_up: false,
        })
    }

    /// Restore the terminal. Only the first call does anything.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if already_cleaned_up(&mut self.cleaned_up) {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let game = &self.screen;
        self.terminal.draw(|f| {
            Self::render_static(f, game);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, game: &RenderedGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(4), // Status banner
                Constraint::Length(4), // Language chips
                Constraint::Length(3), // Word
                Constraint::Length(6), // Keyboard
                Constraint::Min(3),    // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], game.attempts_allowed);
        Self::render_banner(f, chunks[1], game.banner.as_ref());
        Self::render_chips(f, chunks[2], &game.chips);
        Self::render_word(f, chunks[3], &game.word);
        Self::render_keyboard(f, chunks[4], &game.keys);
        Self::render_instructions(f, chunks[5], game.is_game_over);
    }

    fn render_title(f: &mut Frame, area: Rect, attempts_allowed: usize) {
        let lines = vec![
            Line::from(Span::styled("ASSEMBLY: ENDGAME", HEADER_STYLE)),
            Line::from(format!(
                "Guess the word within {attempts_allowed} attempts to keep the programming world safe from Assembly!"
            )),
        ];
        let title = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_banner(f: &mut Frame, area: Rect, banner: Option<&(String, String, Style)>) {
        let (lines, style) = match banner {
            Some((heading, message, style)) if heading.is_empty() => {
                (vec![Line::from(message.as_str())], *style)
            }
            Some((heading, message, style)) => (
                vec![Line::from(heading.as_str()), Line::from(message.as_str())],
                *style,
            ),
            None => (Vec::new(), Style::default()),
        };
        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_chips(f: &mut Frame, area: Rect, chips: &[(String, Rgb, Rgb, bool)]) {
        let mut spans = Vec::new();
        for (name, bg, fg, eliminated) in chips {
            let style = if *eliminated {
                ELIMINATED_STYLE
            } else {
                Style::default().fg(rgb(*fg)).bg(rgb(*bg))
            };
            spans.push(Span::styled(format!(" {name} "), style));
            spans.push(Span::raw(" "));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Languages"));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, word: &[RevealedLetter]) {
        let mut spans = Vec::new();
        for letter in word {
            let (text, style) = match letter {
                RevealedLetter::Hidden => (' ', LETTER_STYLE),
                RevealedLetter::Guessed(c) => (c.to_ascii_uppercase(), LETTER_STYLE),
                RevealedLetter::Missed(c) => (c.to_ascii_uppercase(), MISSED_STYLE),
            };
            spans.push(Span::styled(format!(" {text} "), style));
            spans.push(Span::raw(" "));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, keys: &[(char, KeyState)]) {
        let lines: Vec<Line> = keys
            .chunks(KEYS_PER_ROW)
            .flat_map(|row| {
                let mut spans = Vec::new();
                for (c, state) in row {
                    let (bg, fg) = key_colors(*state);
                    spans.push(Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        Style::default().fg(fg).bg(bg),
                    ));
                    spans.push(Span::raw(" "));
                }
                [Line::from(spans), Line::from("")]
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Keyboard"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, is_game_over: bool) {
        let text = if is_game_over {
            "ENTER: New Game | ESC: Quit"
        } else {
            "Type a letter to guess | CTRL+N: New Game | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                Ok(key_to_action(key, self.screen.is_game_over))
            }
            _ => Ok(None),
        }
    }
}

/// Marks the terminal as restored, returning whether it already was.
fn already_cleaned_up(flag: &mut bool) -> bool {
    std::mem::replace(flag, true)
}

/// Translate a key press into an action, given whether the game is over.
fn key_to_action(key: KeyEvent, is_game_over: bool) -> Option<UserAction> {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Char('c') if has_ctrl => Some(UserAction::Exit),
        KeyCode::Char('n' | 'N') if has_ctrl => Some(UserAction::NewGame),
        KeyCode::Enter if is_game_over => Some(UserAction::NewGame),
        // Garbage from escape sequences when alt-tabbing
        KeyCode::Char(c) if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD => None,
        KeyCode::Char(c) if c.is_ascii_alphabetic() && !has_ctrl && !has_alt && !is_game_over => {
            Some(UserAction::Guess(c.to_ascii_lowercase()))
        }
        _ => None,
    }
}

impl GameInterface for TuiInterface {
    fn display_game(&mut self, view: &GameView<'_>) {
        self.screen = RenderedGame::from_view(view);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    if !matches!(action, UserAction::Guess(_)) {
                        info_log!("read_action() - Action received: {:?}", action);
                    }
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        info_log!("display_exit_message() - Leaving TUI");
        if let Err(e) = self.cleanup() {
            debug_log!("Cleanup error: {}", e);
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
