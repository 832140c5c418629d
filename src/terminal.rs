//! Line-based terminal front end.
//!
//! [`Terminal`] implements [`Interaction`] over any reader and writer, so the
//! same code drives stdin/stdout and in-memory buffers.

use core::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::TableView;
use crate::hand::{Hand, HandStatus, hand_value};
use crate::interaction::Interaction;

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "--------------------------------------------------";
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// A terminal that reads answers line by line and prints the table.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Creates a terminal on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over the given input and output.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Sets whether each redraw clears the screen first.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Consumes the terminal and returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = written {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> Interaction for Terminal<R, W> {
    fn redraw(&mut self, table: &TableView<'_>, step: &str) {
        let mut text = String::new();
        if self.clear_screen {
            text.push_str(CLEAR_SCREEN);
        }
        text.push_str(&render_table(table, step));
        self.emit(&text);
    }

    fn notify(&mut self, message: &str) {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        self.emit(&line);
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.emit(message);

        // Raw bytes, so a stray non-UTF-8 byte is just an unusual answer.
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(err) => {
                tracing::warn!(%err, "failed to read from terminal");
                None
            }
        }
    }

    fn dealer_hit(&mut self, cards: &[Card]) {
        let text = format!("\n[Dealer hits]\n{}\n", dealer_line(cards));
        self.emit(&text);
    }

    fn dealer_final(&mut self, cards: &[Card]) {
        let header = if hand_value(cards).total > 21 {
            "[Dealer busts]"
        } else {
            "[Dealer stands]"
        };
        let text = format!("\n{header}\n{}\n", dealer_line(cards));
        self.emit(&text);
    }
}

/// Renders the full table. Rendering has no side effects, so the same table
/// always renders the same text.
#[must_use]
pub fn render_table(table: &TableView<'_>, step: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, table, step);
    out
}

fn write_table(out: &mut String, table: &TableView<'_>, step: &str) -> fmt::Result {
    writeln!(out, "\n{RULE_HEAVY}")?;
    writeln!(
        out,
        "BLACKJACK - {step} | Bankroll: {} | Shoe Remaining: {}",
        table.bankroll, table.cards_remaining
    )?;
    writeln!(out, "{RULE_LIGHT}")?;

    out.push_str("Dealer:  ");
    let dealer = table.dealer;
    if dealer.is_empty() {
        out.push_str("(no cards)");
    } else if dealer.is_hole_revealed() {
        out.push_str(&bracketed(dealer.cards()));
        write!(out, "  => {}", dealer.value().total)?;
    } else if let Some(up) = dealer.up_card() {
        write!(out, "[{up}] [??]  => {}", dealer.visible_value())?;
    }
    writeln!(out)?;
    writeln!(out, "{RULE_LIGHT}")?;

    for (seat_index, seat) in table.seats.iter().enumerate() {
        writeln!(out, "Seat {}:", seat_index + 1)?;
        if seat.hands().is_empty() {
            writeln!(out, "  (empty)")?;
            continue;
        }
        for (hand_index, hand) in seat.hands().iter().enumerate() {
            let current = table
                .turn
                .is_some_and(|t| t.seat_index == seat_index && t.hand_index == hand_index);
            write_hand(out, hand, hand_index, current)?;
        }
    }

    writeln!(out, "{RULE_HEAVY}")
}

fn write_hand(out: &mut String, hand: &Hand, index: usize, current: bool) -> fmt::Result {
    let value = hand.value();
    write!(
        out,
        "{} Hand {} (bet={}, splits={}): {}  => {}",
        if current { '>' } else { ' ' },
        index + 1,
        hand.bet(),
        hand.split_depth(),
        spaced(hand.cards()),
        value.total
    )?;
    if value.soft {
        out.push_str(" (soft)");
    }
    if let Some(tag) = status_tag(hand) {
        write!(out, "  [{tag}]")?;
    }
    writeln!(out)
}

fn status_tag(hand: &Hand) -> Option<&'static str> {
    if hand.is_bust() {
        Some("BUST")
    } else if hand.is_blackjack() {
        Some("BLACKJACK")
    } else {
        match hand.status() {
            HandStatus::Stand => Some("STAND"),
            HandStatus::Doubled => Some("DOUBLE"),
            HandStatus::Active | HandStatus::Bust => None,
        }
    }
}

fn dealer_line(cards: &[Card]) -> String {
    let value = hand_value(cards);
    let soft = if value.soft { " (soft)" } else { "" };
    match cards.split_first() {
        Some((up, rest)) => format!("Dealer: [{up}] {}  => {}{soft}", spaced(rest), value.total),
        None => format!("Dealer:  => {}{soft}", value.total),
    }
}

fn spaced(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn bracketed(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("[{card}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
