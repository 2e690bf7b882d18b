//! Configuration errors.
//!
//! Play itself never fails: bad guesses are absorbed by the engine. The only
//! failures are startup data that cannot produce a playable game.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No usable words survived loading.
    #[error("word bank contains no usable words")]
    EmptyWordBank,

    /// A roster of `N` entries allows `N - 1` mistakes, so fewer than two is unplayable.
    #[error("roster needs at least 2 entries, got {0}")]
    RosterTooShort(usize),

    /// Two roster entries share a display name.
    #[error("duplicate roster entry: {0}")]
    DuplicateRosterEntry(String),
}
