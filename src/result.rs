//! Round result types for settlement.

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher total).
    Win,
    /// Player loses (player busts, dealer has higher total or a natural).
    Lose,
    /// Push (tie); the bet is returned.
    Push,
    /// Player has a natural, paid 3:2.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Seat index (zero-based).
    pub seat: usize,
    /// The hand index within the seat (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: usize,
    /// Net change for this hand (positive = profit, negative = loss).
    pub net: isize,
    /// The player's hand total.
    pub player_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, seat by seat.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural (the round ended at the peek).
    pub dealer_blackjack: bool,
    /// Net change of the round across all hands.
    pub net: isize,
    /// Bankroll after applying the net change.
    pub bankroll: isize,
}

impl RoundResult {
    /// Returns the summed net change for one seat.
    #[must_use]
    pub fn seat_net(&self, seat: usize) -> isize {
        self.hands
            .iter()
            .filter(|hand| hand.seat == seat)
            .map(|hand| hand.net)
            .sum()
    }
}
