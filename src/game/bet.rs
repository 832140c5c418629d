use alloc::format;

use rand::RngCore;

use crate::error::Terminated;
use crate::interaction::Interaction;

use super::{Game, RoundPhase};

/// Parses a bet answer, falling back to 1.
///
/// Anything other than a plain run of digits (including an empty answer, a
/// sign, or zero) is treated as the default bet.
///
/// ```
/// use bjsim::parse_bet;
///
/// assert_eq!(parse_bet("25"), 25);
/// assert_eq!(parse_bet(""), 1);
/// assert_eq!(parse_bet("0"), 1);
/// assert_eq!(parse_bet("-5"), 1);
/// ```
#[must_use]
pub fn parse_bet(input: &str) -> usize {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }

    match input.parse::<usize>() {
        Ok(bet) if bet > 0 => bet,
        _ => 1,
    }
}

impl<R: RngCore> Game<R> {
    fn deal_one_card_to_seats(&mut self) {
        for seat in &mut self.seats {
            if let Some(hand) = seat.hands_mut().first_mut() {
                hand.add_card(self.shoe.draw());
            }
        }
    }

    /// Asks every seat for a bet and starts each with one empty hand.
    pub(super) fn take_bets<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Result<(), Terminated> {
        self.phase = RoundPhase::BetCollection;

        for (index, seat) in self.seats.iter_mut().enumerate() {
            let answer = ui
                .prompt(&format!("Seat {} bet [1]: ", index + 1))
                .ok_or(Terminated::InputClosed)?;
            let bet = parse_bet(&answer);
            seat.place_bet(bet);
            tracing::debug!(seat = index + 1, bet, "bet placed");
        }

        Ok(())
    }

    /// Deals one card to each seat, the dealer's up card, a second card to
    /// each seat, then the dealer's hole card face down.
    pub(super) fn deal_initial(&mut self) {
        self.phase = RoundPhase::InitialDeal;

        self.deal_one_card_to_seats();
        let up = self.draw();
        self.dealer.add_card(up);

        self.deal_one_card_to_seats();
        let hole = self.draw();
        self.dealer.add_card(hole);

        tracing::debug!(up = %up, remaining = self.shoe.cards_remaining(), "initial deal complete");
    }
}
