//! Error types for session setup and termination.

use thiserror::Error;

use crate::options::{MAX_DECKS, MAX_SEATS};

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// No seats configured.
    #[error("at least one seat is required")]
    NoSeats,
    /// Too many seats configured.
    #[error("{0} seats requested, at most {max} supported", max = MAX_SEATS)]
    TooManySeats(u8),
    /// No decks configured.
    #[error("at least one deck is required")]
    NoDecks,
    /// Too many decks configured.
    #[error("{0} decks requested, at most {max} supported", max = MAX_DECKS)]
    TooManyDecks(u8),
}

/// Reasons a session stops in the middle of a round.
///
/// Returned from every prompt site and propagated straight up to the session
/// loop; the round in progress is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Terminated {
    /// The interaction boundary has no more input.
    #[error("no more input available")]
    InputClosed,
    /// The player asked to quit.
    #[error("player quit")]
    Quit,
}
