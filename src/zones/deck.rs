//! Draw pile and discard pile.
//!
//! When the draw pile runs out mid-draw, the discard pile is shuffled
//! into it and drawing continues. A draw that still comes up short
//! returns what it got; the caller decides what a short draw means.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pile::Pile;
use crate::cards::Card;
use crate::core::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Pile,
    discard_pile: Pile,
    reshuffles: u32,
}

impl Deck {
    /// Shuffle `cards` into a fresh draw pile.
    pub fn shuffled(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut draw_pile = Pile::from_bottom_up(cards);
        draw_pile.shuffle(rng);
        Self {
            draw_pile,
            discard_pile: Pile::new(),
            reshuffles: 0,
        }
    }

    /// Build from explicit piles, listed bottom to top. No shuffle.
    #[must_use]
    pub fn from_piles(draw_pile: Pile, discard_pile: Pile) -> Self {
        Self::restore(draw_pile, discard_pile, 0)
    }

    /// Build from explicit piles with a recycle count carried over from a
    /// captured game.
    #[must_use]
    pub fn restore(draw_pile: Pile, discard_pile: Pile, reshuffles: u32) -> Self {
        Self {
            draw_pile,
            discard_pile,
            reshuffles,
        }
    }

    /// Draw up to `n` cards, recycling the discard pile if needed.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        while drawn.len() < n {
            match self.draw_pile.pop() {
                Some(card) => drawn.push(card),
                None if !self.discard_pile.is_empty() => self.recycle(rng),
                None => break,
            }
        }
        if drawn.len() < n {
            debug!(requested = n, delivered = drawn.len(), "short draw");
        }
        drawn
    }

    /// Move the whole discard pile into the draw pile and shuffle.
    fn recycle(&mut self, rng: &mut GameRng) {
        let recycled = self.discard_pile.take_all();
        debug!(cards = recycled.len(), "recycling discard pile");
        self.draw_pile.extend(recycled);
        self.draw_pile.shuffle(rng);
        self.reshuffles += 1;
    }

    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard_pile.extend(cards);
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    /// Cards that can still be drawn, counting the discard pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// How many times the discard pile has been recycled.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw_pile.iter().chain(self.discard_pile.iter())
    }
}
