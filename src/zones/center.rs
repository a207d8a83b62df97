//! Shared center stacks, built upward from 1 to 12.
//!
//! The value a card counts as is stored in the stack entry, not on the
//! card. A wild card that leaves the stack therefore carries nothing with
//! it into its next placement.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, MAX_RANK, MIN_RANK};

/// A card resting on a center stack with the value it counts as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Card,
    pub value: u8,
}

/// Result of placing a card on a center stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Card is now on top, counting as `value`.
    Placed { value: u8 },
    /// Card completed the stack at `MAX_RANK`; the stack's cards are
    /// returned bottom to top and the stack is empty again.
    Completed { cards: Vec<Card> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterStack {
    entries: Vec<PlacedCard>,
}

impl CenterStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a stack from entries listed bottom to top, rejecting any
    /// that do not read 1, 2, ..., k.
    pub fn from_entries(entries: Vec<PlacedCard>) -> Result<Self, String> {
        let stack = Self { entries };
        stack.check_sequence()?;
        Ok(stack)
    }

    /// Effective value of the top card.
    #[must_use]
    pub fn top_value(&self) -> Option<u8> {
        self.entries.last().map(|e| e.value)
    }

    /// The value the next card must count as.
    #[must_use]
    pub fn next_value(&self) -> u8 {
        self.top_value().map_or(MIN_RANK, |v| v + 1)
    }

    /// Whether `card` may be placed here.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        card.can_play_as(self.next_value())
    }

    /// Place a card; the caller has already checked `accepts`.
    pub fn place(&mut self, card: Card) -> Placement {
        let value = self.next_value();
        debug_assert!(card.can_play_as(value), "{card} placed as {value}");
        self.entries.push(PlacedCard { card, value });

        if value >= MAX_RANK {
            let cards = self.entries.drain(..).map(|e| e.card).collect();
            Placement::Completed { cards }
        } else {
            Placement::Placed { value }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[PlacedCard] {
        &self.entries
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().map(|e| e.card)
    }

    /// Check that the stack reads 1, 2, ..., k from the bottom with
    /// k < 12, and that numbered cards count as their own rank.
    pub fn check_sequence(&self) -> Result<(), String> {
        if self.entries.len() >= MAX_RANK as usize {
            return Err(format!("holds {} cards without clearing", self.entries.len()));
        }
        for (depth, entry) in self.entries.iter().enumerate() {
            let expected = depth as u8 + MIN_RANK;
            if entry.value != expected {
                return Err(format!(
                    "position {depth} counts as {:02}, expected {expected:02}",
                    entry.value
                ));
            }
            if !entry.card.can_play_as(entry.value) {
                return Err(format!(
                    "{} at position {depth} counts as {:02}",
                    entry.card, entry.value
                ));
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, card: Card, value: u8) {
        self.entries.push(PlacedCard { card, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_up_to(top: u8) -> CenterStack {
        let mut stack = CenterStack::new();
        for rank in 1..=top {
            stack.place(Card::Number(rank));
        }
        stack
    }

    #[test]
    fn test_from_entries_checks_sequence() {
        let ok = vec![
            PlacedCard { card: Card::Number(1), value: 1 },
            PlacedCard { card: Card::Wild, value: 2 },
        ];
        let stack = CenterStack::from_entries(ok).unwrap();
        assert_eq!(stack.next_value(), 3);

        let gap = vec![
            PlacedCard { card: Card::Number(1), value: 1 },
            PlacedCard { card: Card::Number(3), value: 3 },
        ];
        assert!(CenterStack::from_entries(gap).is_err());
    }

    #[test]
    fn test_empty_stack_needs_one() {
        let stack = CenterStack::new();
        assert_eq!(stack.next_value(), 1);
        assert!(stack.accepts(Card::Number(1)));
        assert!(stack.accepts(Card::Wild));
        assert!(!stack.accepts(Card::Number(2)));
    }

    #[test]
    fn test_numbered_card_sequence() {
        let mut stack = CenterStack::new();
        assert_eq!(stack.place(Card::Number(1)), Placement::Placed { value: 1 });
        assert!(stack.accepts(Card::Number(2)));
        assert!(!stack.accepts(Card::Number(3)));
        assert_eq!(stack.place(Card::Number(2)), Placement::Placed { value: 2 });
        assert!(stack.check_sequence().is_ok());
    }

    #[test]
    fn test_wild_takes_next_value() {
        let mut stack = stack_up_to(4);
        assert_eq!(stack.place(Card::Wild), Placement::Placed { value: 5 });
        assert_eq!(stack.top_value(), Some(5));
        assert!(stack.accepts(Card::Number(6)));
    }

    #[test]
    fn test_wild_on_empty_counts_as_one() {
        let mut stack = CenterStack::new();
        assert_eq!(stack.place(Card::Wild), Placement::Placed { value: 1 });
        assert!(stack.accepts(Card::Number(2)));
    }

    #[test]
    fn test_wild_on_eleven_completes() {
        let mut stack = stack_up_to(11);
        match stack.place(Card::Wild) {
            Placement::Completed { cards } => {
                assert_eq!(cards.len(), 12);
                assert_eq!(cards[11], Card::Wild);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(stack.is_empty());
        assert_eq!(stack.next_value(), 1);
    }

    #[test]
    fn test_reused_wild_gets_fresh_value() {
        let mut first = stack_up_to(11);
        let Placement::Completed { cards } = first.place(Card::Wild) else {
            panic!("expected completion");
        };
        let wild = cards[11];

        let mut second = CenterStack::new();
        assert_eq!(second.place(wild), Placement::Placed { value: 1 });
    }

    #[test]
    fn test_check_sequence_detects_gap() {
        let mut stack = CenterStack::new();
        stack.push_unchecked(Card::Number(1), 1);
        stack.push_unchecked(Card::Number(3), 3);
        assert!(stack.check_sequence().is_err());
    }

    #[test]
    fn test_check_sequence_detects_mislabelled_card() {
        let mut stack = CenterStack::new();
        stack.push_unchecked(Card::Number(4), 1);
        assert!(stack.check_sequence().is_err());
    }
}
