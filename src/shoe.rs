//! Shoe construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::{Rng, RngCore};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds an unshuffled shoe of `decks` full decks.
///
/// Each deck is laid out suit by suit, deuce to ace.
#[must_use]
pub fn build_shoe(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}

/// Shuffles `cards` in place with a Fisher-Yates pass from the last index down.
///
/// Index `i` is swapped with a uniformly chosen index in `0..=i`.
pub fn shuffle<R: RngCore + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// A shoe of one or more decks with a draw cursor.
///
/// When the cursor reaches the end, the whole shoe is reshuffled and drawing
/// restarts from the top. Cards already dealt into hands keep their values;
/// the shoe only tracks its own ordering.
#[derive(Debug, Clone)]
pub struct Shoe<R> {
    cards: Vec<Card>,
    cursor: usize,
    reshuffles: usize,
    rng: R,
}

impl<R: RngCore> Shoe<R> {
    /// Builds and shuffles a shoe of `decks` decks.
    ///
    /// # Panics
    ///
    /// A shoe built from zero decks holds no cards, so its first
    /// [`draw`](Self::draw) panics. [`Game::new`](crate::Game::new) rejects
    /// zero decks before building one.
    pub fn new(decks: u8, mut rng: R) -> Self {
        let mut cards = build_shoe(decks);
        shuffle(&mut cards, &mut rng);

        Self {
            cards,
            cursor: 0,
            reshuffles: 0,
            rng,
        }
    }

    /// Replaces the shoe contents with `cards`, drawn in the given order.
    ///
    /// Once the stacked cards run out they are reshuffled like any other shoe.
    /// An empty list is ignored.
    pub fn stack(&mut self, cards: &[Card]) {
        if cards.is_empty() {
            return;
        }
        self.cards = cards.to_vec();
        self.cursor = 0;
    }

    /// Draws the next card, reshuffling the full shoe first if it is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the shoe holds no cards at all, which a shoe built from at
    /// least one deck never does.
    pub fn draw(&mut self) -> Card {
        if self.cursor >= self.cards.len() {
            self.reshuffle();
        }
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Reshuffles every card in the shoe and resets the cursor.
    pub fn reshuffle(&mut self) {
        shuffle(&mut self.cards, &mut self.rng);
        self.cursor = 0;
        self.reshuffles += 1;
        tracing::debug!(cards = self.cards.len(), "shoe reshuffled");
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the shoe has been reshuffled since it was built.
    #[must_use]
    pub const fn reshuffle_count(&self) -> usize {
        self.reshuffles
    }
}
