//! Face-down or face-up stack of cards with a single open end.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Ordered stack of cards. The top is the most recently pushed card.
///
/// Backed by `im::Vector`, so cloning a whole game is cheap.
///
/// ```
/// use skipbo_engine::cards::Card;
/// use skipbo_engine::zones::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::Number(3));
/// pile.push(Card::Wild);
/// assert_eq!(pile.peek(), Some(Card::Wild));
/// assert_eq!(pile.pop(), Some(Card::Wild));
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from cards listed bottom to top.
    pub fn from_bottom_up<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Remove every card, leaving the pile empty.
    pub fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Push cards in order; the last one ends up on top.
    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}
