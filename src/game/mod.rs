//! Round engine and session state.

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{OptionsError, Terminated};
use crate::hand::{DealerHand, Hand, Seat};
use crate::interaction::Interaction;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod peek;
pub mod state;

pub use actions::{Action, LegalActions};
pub use bet::parse_bet;
pub use state::{RoundPhase, TurnPosition};

const NEW_ROUND_PROMPT: &str = "\nPress ENTER to deal a new round, or 'q' to quit: ";

/// A single blackjack table: seats, dealer, shoe and a running bankroll.
///
/// The game owns everything a round touches. Seats and the dealer are reset at
/// the start of every round; the shoe and bankroll carry over for the whole
/// session. All player input and output goes through an [`Interaction`].
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// The shoe cards are drawn from.
    pub shoe: Shoe<R>,
    /// Seats in table order.
    seats: Vec<Seat>,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Net result of every settled round.
    bankroll: isize,
    /// Phase of the current round.
    phase: RoundPhase,
    /// Hand currently being played, if any.
    turn: Option<TurnPosition>,
    /// Number of rounds settled so far.
    rounds: usize,
}

/// A read-only snapshot of the table handed to [`Interaction::redraw`].
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// Game options.
    pub options: &'a GameOptions,
    /// Seats in table order.
    pub seats: &'a [Seat],
    /// Dealer's hand.
    pub dealer: &'a DealerHand,
    /// Current bankroll.
    pub bankroll: isize,
    /// Undealt cards in the shoe.
    pub cards_remaining: usize,
    /// Phase of the current round.
    pub phase: RoundPhase,
    /// Hand currently being played, if any.
    pub turn: Option<TurnPosition>,
}

impl Game {
    /// Creates a new game whose shoe is shuffled by a `ChaCha8Rng` seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(2), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 104);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game that shuffles with the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            options,
            shoe: Shoe::new(options.decks, rng),
            seats: (0..options.seats).map(|_| Seat::new()).collect(),
            dealer: DealerHand::new(),
            bankroll: 0,
            phase: RoundPhase::Idle,
            turn: None,
            rounds: 0,
        })
    }

    /// Runs rounds until the player quits or input runs out.
    ///
    /// Before each round the player is asked to press enter; answering `q`
    /// ends the session.
    pub fn run<I: Interaction + ?Sized>(&mut self, ui: &mut I) {
        loop {
            let answer = ui.prompt(NEW_ROUND_PROMPT);
            if answer.is_none_or(|answer| answer.trim().eq_ignore_ascii_case("q")) {
                ui.notify("Goodbye.");
                tracing::info!(rounds = self.rounds, bankroll = self.bankroll, "session ended");
                return;
            }

            if let Err(reason) = self.play_round(ui) {
                tracing::info!(%reason, rounds = self.rounds, "session terminated mid-round");
                return;
            }
        }
    }

    /// Plays one full round: bets, deal, dealer peek, player turns, dealer
    /// turn and settlement.
    ///
    /// A dealer natural ends the round at the peek.
    ///
    /// # Errors
    ///
    /// Returns [`Terminated`] if the interaction runs out of input or the
    /// player quits; the round is abandoned and the bankroll is unchanged.
    pub fn play_round<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Result<RoundResult, Terminated> {
        self.reset_round();
        self.take_bets(ui)?;

        self.deal_initial();
        ui.redraw(&self.view(), "Initial deal");

        if let Some(result) = self.dealer_peek(ui) {
            return Ok(result);
        }

        self.play_seats(ui)?;
        self.play_dealer(ui);

        Ok(self.settle(ui))
    }

    /// Clears every seat and the dealer for a new round.
    fn reset_round(&mut self) {
        for seat in &mut self.seats {
            seat.clear();
        }
        self.dealer.clear();
        self.turn = None;
        self.phase = RoundPhase::Idle;
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Card {
        self.shoe.draw()
    }

    fn hand_mut(&mut self, position: TurnPosition) -> &mut Hand {
        &mut self.seats[position.seat_index].hands_mut()[position.hand_index]
    }

    /// Returns a snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            options: &self.options,
            seats: &self.seats,
            dealer: &self.dealer,
            bankroll: self.bankroll,
            cards_remaining: self.shoe.cards_remaining(),
            phase: self.phase,
            turn: self.turn,
        }
    }

    /// Returns the seats in table order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the running bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> isize {
        self.bankroll
    }

    /// Returns the phase of the current round.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of undealt cards in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds
    }
}
