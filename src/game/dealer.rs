use alloc::format;
use alloc::vec::Vec;

use rand::RngCore;

use crate::hand::Hand;
use crate::interaction::Interaction;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, RoundPhase};

#[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
pub(super) const fn signed(amount: usize) -> isize {
    amount as isize
}

/// Outcome and net change of one hand against the dealer's final total.
fn settle_hand(hand: &Hand, dealer_total: u8, dealer_bust: bool) -> (HandOutcome, isize) {
    let bet = signed(hand.bet());
    let player_total = hand.value().total;

    if hand.is_bust() {
        (HandOutcome::Lose, -bet)
    } else if hand.is_blackjack() {
        (HandOutcome::Blackjack, bet * 3 / 2)
    } else if dealer_bust {
        (HandOutcome::Win, 2 * bet)
    } else if player_total > dealer_total {
        (HandOutcome::Win, bet)
    } else if player_total < dealer_total {
        (HandOutcome::Lose, -bet)
    } else {
        (HandOutcome::Push, 0)
    }
}

impl<R: RngCore> Game<R> {
    /// Returns whether the dealer has to take another card.
    ///
    /// The dealer hits below 17, and on soft 17 unless the table stands on it.
    fn dealer_must_hit(&self) -> bool {
        let value = self.dealer.value();
        if value.total < 17 {
            return true;
        }
        value.total == 17 && value.soft && !self.options.stand_on_soft_17
    }

    /// Dealer reveals the hole card and draws until the standing rule holds.
    ///
    /// The dealer plays out the hand even when every seat has busted.
    pub(super) fn play_dealer<I: Interaction + ?Sized>(&mut self, ui: &mut I) {
        self.phase = RoundPhase::DealerTurn;
        self.dealer.reveal_hole();
        ui.redraw(&self.view(), "Dealer reveals");

        while self.dealer_must_hit() {
            let card = self.draw();
            self.dealer.add_card(card);
            tracing::debug!(card = %card, total = self.dealer.value().total, "dealer hits");
            ui.dealer_hit(self.dealer.cards());
        }

        ui.dealer_final(self.dealer.cards());
    }

    /// Pays every hand against the dealer's final hand.
    pub(super) fn settle<I: Interaction + ?Sized>(&mut self, ui: &mut I) -> RoundResult {
        self.phase = RoundPhase::Settlement;

        let dealer_total = self.dealer.value().total;
        let dealer_bust = self.dealer.is_bust();

        let mut hands = Vec::new();
        for (seat, seat_hands) in self.seats.iter().map(|s| s.hands()).enumerate() {
            for (hand_index, hand) in seat_hands.iter().enumerate() {
                let (outcome, net) = settle_hand(hand, dealer_total, dealer_bust);
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

        self.record_round(ui, hands)
    }

    /// Applies the round's net change to the bankroll and reports it.
    pub(super) fn record_round<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
        hands: Vec<HandResult>,
    ) -> RoundResult {
        let net: isize = hands.iter().map(|hand| hand.net).sum();
        self.bankroll += net;
        self.rounds += 1;
        self.turn = None;

        ui.notify(&format!("Round result: {net:+} (Bankroll: {})", self.bankroll));
        tracing::info!(round = self.rounds, net, bankroll = self.bankroll, "round settled");

        RoundResult {
            hands,
            dealer_value: self.dealer.value().total,
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
            net,
            bankroll: self.bankroll,
        }
    }
}
