use alloc::format;
use alloc::string::String;

use rand::RngCore;

use crate::error::Terminated;
use crate::hand::Hand;
use crate::interaction::Interaction;

use super::{Game, RoundPhase, TurnPosition};

/// A player decision typed at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// End the session.
    Quit,
}

impl Action {
    /// Parses an answer, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use bjsim::Action;
    ///
    /// assert_eq!(Action::parse(" HIT "), Some(Action::Hit));
    /// assert_eq!(Action::parse("p"), Some(Action::Split));
    /// assert_eq!(Action::parse("fold"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "h" | "hit" => Some(Self::Hit),
            "s" | "stand" => Some(Self::Stand),
            "d" | "double" => Some(Self::Double),
            "p" | "split" => Some(Self::Split),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Which actions a hand may take right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalActions {
    /// Hitting is always allowed.
    pub hit: bool,
    /// Standing is always allowed.
    pub stand: bool,
    /// Doubling needs exactly two cards and no earlier double.
    pub double: bool,
    /// Splitting needs a splittable pair under the split cap.
    pub split: bool,
}

impl LegalActions {
    /// Works out the legal actions for `hand`.
    #[must_use]
    pub fn for_hand(hand: &Hand, max_splits: u8) -> Self {
        Self {
            hit: true,
            stand: true,
            double: hand.len() == 2 && !hand.is_doubled(),
            split: hand.can_split(max_splits),
        }
    }

    /// Returns whether `action` may be taken. Quitting is always allowed.
    #[must_use]
    pub const fn allows(&self, action: Action) -> bool {
        match action {
            Action::Hit => self.hit,
            Action::Stand => self.stand,
            Action::Double => self.double,
            Action::Split => self.split,
            Action::Quit => true,
        }
    }

    /// Returns the action menu shown in the prompt, e.g. `[h]it/[s]tand/[d]ouble`.
    #[must_use]
    pub fn menu(&self) -> String {
        let options = [
            (self.hit, "[h]it"),
            (self.stand, "[s]tand"),
            (self.double, "[d]ouble"),
            (self.split, "s[p]lit"),
        ];

        let mut menu = String::new();
        for (_, label) in options.iter().filter(|(allowed, _)| *allowed) {
            if !menu.is_empty() {
                menu.push('/');
            }
            menu.push_str(label);
        }
        menu
    }
}

impl<R: RngCore> Game<R> {
    /// Plays every seat's hands in order.
    ///
    /// The hand count is re-read on every step, so hands inserted by a split
    /// are played before moving on to the next seat.
    pub(super) fn play_seats<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
    ) -> Result<(), Terminated> {
        self.phase = RoundPhase::PlayerTurns;

        for seat_index in 0..self.seats.len() {
            let mut hand_index = 0;
            while hand_index < self.seats[seat_index].hands().len() {
                self.play_hand(
                    ui,
                    TurnPosition {
                        seat_index,
                        hand_index,
                    },
                )?;
                hand_index += 1;
            }
        }

        self.turn = None;
        Ok(())
    }

    /// Prompts for decisions on one hand until it is finished.
    fn play_hand<I: Interaction + ?Sized>(
        &mut self,
        ui: &mut I,
        position: TurnPosition,
    ) -> Result<(), Terminated> {
        self.turn = Some(position);
        let step = format!(
            "Seat {} - Hand {}",
            position.seat_index + 1,
            position.hand_index + 1
        );

        loop {
            ui.redraw(&self.view(), &step);

            let hand = &self.seats[position.seat_index].hands()[position.hand_index];
            if hand.is_finished() || hand.is_blackjack() {
                return Ok(());
            }

            let value = hand.value();
            if value.total > 21 {
                self.hand_mut(position).bust();
                return Ok(());
            }
            // 21 reached by drawing stands without asking.
            if value.total == 21 {
                self.hand_mut(position).stand();
                return Ok(());
            }

            let legal = LegalActions::for_hand(hand, self.options.max_splits);
            let message = format!(
                "Seat {} Hand {} total={}{} - choose {}: ",
                position.seat_index + 1,
                position.hand_index + 1,
                value.total,
                if value.soft { " (soft)" } else { "" },
                legal.menu()
            );
            let answer = ui.prompt(&message).ok_or(Terminated::InputClosed)?;

            match Action::parse(&answer) {
                Some(Action::Hit) => {
                    let card = self.draw();
                    self.hand_mut(position).add_card(card);
                    tracing::debug!(card = %card, "hit");
                }
                Some(Action::Stand) => {
                    self.hand_mut(position).stand();
                    return Ok(());
                }
                Some(Action::Double) if legal.double => {
                    let card = self.draw();
                    self.hand_mut(position).double_down(card);
                    tracing::debug!(card = %card, "double down");
                    return Ok(());
                }
                Some(Action::Split) if legal.split => self.split_hand(position),
                Some(Action::Quit) => return Err(Terminated::Quit),
                _ => {}
            }
        }
    }

    /// Replaces the hand with two split hands, the second inserted right
    /// after the first.
    fn split_hand(&mut self, position: TurnPosition) {
        let first_draw = self.draw();
        let second_draw = self.draw();

        let seat = &mut self.seats[position.seat_index];
        let Some((first, second)) =
            seat.hands()[position.hand_index].split(first_draw, second_draw)
        else {
            return;
        };
        tracing::debug!(
            seat = position.seat_index + 1,
            hand = position.hand_index + 1,
            depth = first.split_depth(),
            "split"
        );
        seat.replace_with_split(position.hand_index, first, second);
    }
}
