//! Round phase types.

/// Phase of the current round. Phases run strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Between rounds; nothing on the table.
    Idle,
    /// Collecting one bet per seat.
    BetCollection,
    /// Dealing two cards to each seat and the dealer.
    InitialDeal,
    /// Dealer checks for a natural under a ten or ace.
    DealerPeek,
    /// Seats play their hands.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are paid and the bankroll updated.
    Settlement,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the seats.
    pub seat_index: usize,
    /// Index into the seat's hands (for splits).
    pub hand_index: usize,
}
