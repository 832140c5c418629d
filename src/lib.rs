//! A single-table blackjack simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: bet
//! collection, the initial deal, the dealer's peek for a natural, each seat's
//! decisions (hit, stand, double, split), the dealer's turn and settlement.
//! The engine never talks to a terminal directly; it calls an
//! [`Interaction`] to render the table and collect answers.
//!
//! # Example
//!
//! ```
//! use bjsim::{Card, Game, GameOptions, Rank, Scripted, Suit};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let spade = |rank| Card::new(rank, Suit::Spades);
//!
//! // Player, dealer up, player, dealer hole.
//! game.shoe.stack(&[
//!     spade(Rank::Ten),
//!     spade(Rank::Nine),
//!     spade(Rank::Queen),
//!     spade(Rank::Eight),
//! ]);
//!
//! let mut ui = Scripted::new(["5", "stand"]);
//! let result = game.play_round(&mut ui).unwrap();
//! assert_eq!(result.net, 5);
//! assert_eq!(game.bankroll(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod interaction;
pub mod options;
pub mod result;
pub mod shoe;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{OptionsError, Terminated};
pub use game::{Action, Game, LegalActions, RoundPhase, TableView, TurnPosition, parse_bet};
pub use hand::{DealerHand, Hand, HandStatus, HandValue, Seat, card_value, hand_value, is_blackjack};
pub use interaction::{Event, Interaction, Scripted};
pub use options::{GameOptions, MAX_DECKS, MAX_SEATS};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{Shoe, build_shoe, shuffle};
