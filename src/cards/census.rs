//! Card multiset counting, used to check that no card is lost or duplicated.

use rustc_hash::FxHashMap;

use super::card::Card;

/// Count of each distinct card across a set of zones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCensus {
    counts: FxHashMap<Card, usize>,
    total: usize,
}

impl CardCensus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every card yielded by `cards`.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut census = Self::new();
        census.extend(cards);
        census
    }

    pub fn add(&mut self, card: Card) {
        *self.counts.entry(card).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add(card);
        }
    }

    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Describe the first difference against `expected`, if any.
    #[must_use]
    pub fn diff(&self, expected: &CardCensus) -> Option<String> {
        if self.total != expected.total {
            return Some(format!(
                "card total is {}, expected {}",
                self.total, expected.total
            ));
        }
        let mut cards: Vec<_> = expected.counts.keys().chain(self.counts.keys()).collect();
        cards.sort_unstable();
        cards.dedup();
        cards.into_iter().find_map(|&card| {
            let (have, want) = (self.count(card), expected.count(card));
            (have != want).then(|| format!("{card} appears {have} times, expected {want}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::build_deck;

    #[test]
    fn test_counts() {
        let census = CardCensus::from_cards(build_deck(18, 18));
        assert_eq!(census.total(), 234);
        assert_eq!(census.count(Card::Wild), 18);
        assert_eq!(census.count(Card::Number(12)), 18);
        assert_eq!(census.count(Card::Number(13)), 0);
    }

    #[test]
    fn test_diff_equal() {
        let a = CardCensus::from_cards(build_deck(2, 1));
        let b = CardCensus::from_cards(build_deck(2, 1).into_iter().rev());
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_diff_reports_swapped_card() {
        let expected = CardCensus::from_cards([Card::Wild, Card::Number(3)]);
        let actual = CardCensus::from_cards([Card::Wild, Card::Number(4)]);

        let diff = actual.diff(&expected).unwrap();
        assert!(diff.contains("03"), "{diff}");
    }

    #[test]
    fn test_diff_reports_missing_card() {
        let expected = CardCensus::from_cards([Card::Wild, Card::Wild]);
        let actual = CardCensus::from_cards([Card::Wild]);

        assert_eq!(
            actual.diff(&expected),
            Some("card total is 1, expected 2".to_string())
        );
    }
}
