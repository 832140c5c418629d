use alloc::vec::Vec;

use rand::RngCore;

use crate::card::Rank;
use crate::hand::card_value;
use crate::interaction::Interaction;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::dealer::signed;
use super::{Game, RoundPhase};

impl<R: RngCore> Game<R> {
    /// Returns whether the dealer's up card calls for a peek (ten-value or ace).
    fn dealer_shows_ten_or_ace(&self) -> bool {
        self.dealer
            .up_card()
            .is_some_and(|c| c.rank == Rank::Ace || card_value(c.rank) == 10)
    }

    /// Checks the hole card for a dealer natural.
    ///
    /// With a dealer natural every hand is settled on the spot: a player
    /// natural pushes, anything else loses its bet. No 3:2 is paid here.
    /// Otherwise player naturals are stood so they skip the player turns and
    /// are paid at settlement.
    pub(super) fn dealer_peek<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Option<RoundResult> {
        self.phase = RoundPhase::DealerPeek;

        if self.dealer_shows_ten_or_ace() && self.dealer.is_blackjack() {
            self.dealer.reveal_hole();
            ui.redraw(&self.view(), "Dealer has BLACKJACK");
            tracing::debug!("dealer natural");

            let mut hands = Vec::new();
            for (seat, seat_hands) in self.seats.iter().map(|s| s.hands()).enumerate() {
                for (hand_index, hand) in seat_hands.iter().enumerate() {
                    let (outcome, net) = if hand.is_blackjack() {
                        (HandOutcome::Push, 0)
                    } else {
                        (HandOutcome::Lose, -signed(hand.bet()))
                    };
                    hands.push(HandResult {
                        seat,
                        hand_index,
                        outcome,
                        bet: hand.bet(),
                        net,
                        player_value: hand.value().total,
                    });
                }
            }

            return Some(self.record_round(ui, hands));
        }

        for seat in &mut self.seats {
            for hand in seat.hands_mut() {
                if hand.is_blackjack() {
                    hand.stand();
                }
            }
        }

        None
    }
}
