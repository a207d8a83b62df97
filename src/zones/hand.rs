//! A player's hand: a fixed row of slots that may be empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::HAND_SIZE;

/// Five hand slots. Playing a card leaves a hole; refilling fills holes
/// in slot order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: SmallVec<[Option<Card>; HAND_SIZE]>,
}

impl Default for Hand {
    fn default() -> Self {
        Self {
            slots: SmallVec::from_elem(None, HAND_SIZE),
        }
    }
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a hand from its slot contents. `None` unless exactly
    /// `HAND_SIZE` slots are given.
    #[must_use]
    pub fn from_slots(slots: &[Option<Card>]) -> Option<Self> {
        if slots.len() != HAND_SIZE {
            return None;
        }
        Some(Self {
            slots: SmallVec::from_slice(slots),
        })
    }

    /// Card in `slot`; `None` if the slot is empty or out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied().flatten()
    }

    /// Remove the card from `slot`, leaving it empty.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        self.slots.get_mut(slot)?.take()
    }

    #[must_use]
    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty_slots() == HAND_SIZE
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_slots() == 0
    }

    /// Place cards into empty slots in slot order.
    ///
    /// Returns how many were placed; cards beyond the free slots are
    /// handed back.
    pub fn fill<I>(&mut self, cards: I) -> (usize, Vec<Card>)
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards = cards.into_iter();
        let mut placed = 0;
        for slot in self.slots.iter_mut().filter(|s| s.is_none()) {
            match cards.next() {
                Some(card) => {
                    *slot = Some(card);
                    placed += 1;
                }
                None => break,
            }
        }
        (placed, cards.collect())
    }

    /// Slot contents in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<Card>> + '_ {
        self.slots.iter().copied()
    }

    /// Cards currently held, skipping holes.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slots_keeps_holes() {
        let slots = [Some(Card::Wild), None, Some(Card::Number(4)), None, None];
        let hand = Hand::from_slots(&slots).unwrap();
        assert_eq!(hand.slots().collect::<Vec<_>>(), slots);
        assert_eq!(hand.empty_slots(), 3);

        assert!(Hand::from_slots(&slots[..4]).is_none());
    }

    #[test]
    fn test_new_hand_is_empty() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(hand.empty_slots(), HAND_SIZE);
        assert_eq!(hand.cards().count(), 0);
    }

    #[test]
    fn test_take_leaves_hole() {
        let mut hand = Hand::new();
        hand.fill((1..=5).filter_map(Card::number));
        assert!(hand.is_full());

        assert_eq!(hand.take(2), Some(Card::Number(3)));
        assert_eq!(hand.get(2), None);
        assert_eq!(hand.take(2), None);
        assert_eq!(hand.empty_slots(), 1);
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut hand = Hand::new();
        hand.fill([Card::Wild]);
        assert_eq!(hand.get(HAND_SIZE), None);
        assert_eq!(hand.take(HAND_SIZE + 3), None);
    }

    #[test]
    fn test_fill_only_holes() {
        let mut hand = Hand::new();
        hand.fill((1..=5).filter_map(Card::number));
        hand.take(1);
        hand.take(3);

        let (placed, leftover) = hand.fill([Card::Wild, Card::Wild, Card::Number(9)]);
        assert_eq!(placed, 2);
        assert_eq!(leftover, vec![Card::Number(9)]);
        assert_eq!(hand.get(1), Some(Card::Wild));
        assert_eq!(hand.get(3), Some(Card::Wild));
        assert_eq!(hand.get(0), Some(Card::Number(1)));
    }

    #[test]
    fn test_short_fill() {
        let mut hand = Hand::new();
        let (placed, leftover) = hand.fill([Card::Number(4)]);
        assert_eq!(placed, 1);
        assert!(leftover.is_empty());
        assert_eq!(hand.empty_slots(), HAND_SIZE - 1);
    }
}
