//! The boundary between the round engine and whatever presents it.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::TableView;

/// Callbacks the round engine uses to show the table and collect decisions.
///
/// Every call is synchronous: the engine blocks on [`prompt`](Self::prompt)
/// until it returns. Returning `None` from `prompt` ends the session.
pub trait Interaction {
    /// Renders the full table. Must not change any session state.
    fn redraw(&mut self, table: &TableView<'_>, step: &str);

    /// Emits an informational line.
    fn notify(&mut self, message: &str);

    /// Asks for one line of input; `None` means no more input is available.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Called after each card the dealer draws, with all dealer cards so far.
    fn dealer_hit(&mut self, cards: &[Card]);

    /// Called once the dealer stands or busts, with the final dealer cards.
    fn dealer_final(&mut self, cards: &[Card]);
}

/// Something the engine told a [`Scripted`] interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A redraw with its step label and the bankroll shown.
    Redraw {
        /// Step label.
        step: String,
        /// Bankroll at the time of the redraw.
        bankroll: isize,
    },
    /// An informational line.
    Notify(String),
    /// A prompt message.
    Prompt(String),
    /// Dealer cards after a dealer draw.
    DealerHit(Vec<Card>),
    /// Final dealer cards.
    DealerFinal(Vec<Card>),
}

/// A headless interaction that answers prompts from a fixed script.
///
/// Every call is recorded as an [`Event`]. Once the script is used up,
/// prompts return `None`, which ends the session.
///
/// ```
/// use bjsim::{Game, GameOptions, Scripted};
///
/// let mut game = Game::new(GameOptions::default(), 7).unwrap();
/// let mut ui = Scripted::new(["", "10", "s"]);
/// game.run(&mut ui);
/// assert!(ui.script_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    events: Vec<Event>,
}

impl Scripted {
    /// Creates a scripted interaction that answers prompts in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    /// Returns whether every scripted answer has been consumed.
    #[must_use]
    pub fn script_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    /// Returns everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the prompt messages in the order they were asked.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            Event::Prompt(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// Returns the informational lines in the order they were emitted.
    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            Event::Notify(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// Returns the step labels of every redraw.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            Event::Redraw { step, .. } => Some(step.as_str()),
            _ => None,
        })
    }
}

impl Interaction for Scripted {
    fn redraw(&mut self, table: &TableView<'_>, step: &str) {
        self.events.push(Event::Redraw {
            step: step.to_string(),
            bankroll: table.bankroll,
        });
    }

    fn notify(&mut self, message: &str) {
        self.events.push(Event::Notify(message.to_string()));
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.events.push(Event::Prompt(message.to_string()));
        self.answers.pop_front()
    }

    fn dealer_hit(&mut self, cards: &[Card]) {
        self.events.push(Event::DealerHit(cards.to_vec()));
    }

    fn dealer_final(&mut self, cards: &[Card]) {
        self.events.push(Event::DealerFinal(cards.to_vec()));
    }
}
