//! Hand valuation rules and player/dealer hand representations.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Returns the blackjack value of a rank, counting an ace as 11.
#[must_use]
pub const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

/// The evaluated total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best total: aces count as 11 until that would bust.
    pub total: u8,
    /// Whether at least one ace still counts as 11.
    pub soft: bool,
}

/// Evaluates a set of cards.
///
/// Every ace starts at 11; while the total is over 21, aces are dropped to 1
/// one at a time.
///
/// ```
/// use bjsim::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// let value = hand_value(&cards);
/// assert_eq!(value.total, 21);
/// assert!(value.soft);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card_value(card.rank));
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        soft: aces > 0 && total <= 21,
    }
}

/// Returns whether the cards form a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).total == 21
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is still being played.
    Active,
    /// Player stood (also used for naturals and automatic 21s).
    Stand,
    /// Player doubled down and took the one card.
    Doubled,
    /// Hand went over 21.
    Bust,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Bet amount for this hand.
    bet: usize,
    /// Whether the bet was doubled.
    doubled: bool,
    /// Number of splits in this hand's ancestry.
    split_depth: u8,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
            split_depth: 0,
        }
    }

    /// Creates a hand from explicit cards.
    ///
    /// The hand is marked bust if the cards already exceed 21.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize, split_depth: u8) -> Self {
        let mut hand = Self {
            cards: Vec::with_capacity(cards.len()),
            status: HandStatus::Active,
            bet,
            doubled: false,
            split_depth,
        };
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand, marking it bust if it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if self.value().total > 21 {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Marks the hand as stood.
    pub const fn stand(&mut self) {
        self.status = HandStatus::Stand;
    }

    /// Marks the hand as bust.
    pub const fn bust(&mut self) {
        self.status = HandStatus::Bust;
    }

    /// Doubles the bet, takes exactly one card and finishes the hand.
    pub fn double_down(&mut self, card: Card) {
        self.bet *= 2;
        self.doubled = true;
        self.add_card(card);

        if self.status == HandStatus::Active {
            self.status = HandStatus::Doubled;
        }
    }

    /// Returns whether the hand takes no further action this round.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != HandStatus::Active
    }

    /// Returns whether the hand went over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.status == HandStatus::Bust
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the number of splits in this hand's ancestry.
    #[must_use]
    pub const fn split_depth(&self) -> u8 {
        self.split_depth
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural.
    ///
    /// Only the card count and total matter, so a two-card 21 reached after a
    /// split counts too.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand can be split under a cap of `max_splits`.
    ///
    /// Requires exactly two cards of equal value (a king and a queen pair up)
    /// and a split depth below the cap.
    #[must_use]
    pub fn can_split(&self, max_splits: u8) -> bool {
        match self.cards.as_slice() {
            [first, second] => {
                self.split_depth < max_splits
                    && card_value(first.rank) == card_value(second.rank)
            }
            _ => false,
        }
    }

    /// Splits a two-card hand into two hands, one per original card, each
    /// completed with the given draw.
    ///
    /// Both hands keep the bet and sit one split deeper. Returns `None` if the
    /// hand does not hold exactly two cards.
    #[must_use]
    pub fn split(&self, first_draw: Card, second_draw: Card) -> Option<(Self, Self)> {
        let [first, second] = self.cards.as_slice() else {
            return None;
        };
        let depth = self.split_depth + 1;

        Some((
            Self::with_cards(&[*first, first_draw], self.bet, depth),
            Self::with_cards(&[*second, second_draw], self.bet, depth),
        ))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The first card is the up card and the second the hole card; anything after
/// that was drawn during the dealer's turn.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the hole card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value().total
        } else {
            self.up_card().map_or(0, |c| card_value(c.rank))
        }
    }

    /// Evaluates the full hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().total > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

/// One bettor's place at the table.
///
/// A seat starts each round with a single hand and gains hands by splitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    hands: Vec<Hand>,
}

impl Seat {
    /// Creates an empty seat.
    #[must_use]
    pub const fn new() -> Self {
        Self { hands: Vec::new() }
    }

    /// Returns the seat's hands in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the seat's hands for in-place updates.
    pub fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    /// Starts the round with one empty hand holding `bet`.
    pub fn place_bet(&mut self, bet: usize) {
        self.hands.clear();
        self.hands.push(Hand::new(bet));
    }

    /// Replaces the hand at `index` with `first` and inserts `second` right
    /// after it, shifting later hands along.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace_with_split(&mut self, index: usize, first: Hand, second: Hand) {
        self.hands[index] = first;
        self.hands.insert(index + 1, second);
    }

    /// Clears every hand.
    pub fn clear(&mut self) {
        self.hands.clear();
    }
}
