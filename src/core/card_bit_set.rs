use std::fmt;

use super::card::{Card, Suit, Value};
use super::error::NotationError;

/// A set of cards packed into the low 52 bits of a `u64`.
///
/// Bit `value * 4 + suit` is set when the card is present, so iterating
/// yields cards from the lowest value upwards. The upper 12 bits are always
/// clear; serde goes through `TryFrom<u64>` to keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct CardBitSet {
    cards: u64,
}

const FULL_DECK: u64 = (1 << 52) - 1;

fn bit(card: Card) -> u64 {
    1 << (card.value.index() as u64 * 4 + card.suit.index() as u64)
}

impl CardBitSet {
    /// An empty set.
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Every card of a standard 52 card deck.
    pub fn full_deck() -> Self {
        Self { cards: FULL_DECK }
    }

    /// Add a card. Returns `false` if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let b = bit(card);
        let fresh = self.cards & b == 0;
        self.cards |= b;
        fresh
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & bit(card) != 0
    }

    /// Number of cards in the set.
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter {
            remaining: self.cards & FULL_DECK,
        }
    }

    /// True when no bit above the 52 card deck is set.
    pub(crate) fn within_deck(&self) -> bool {
        self.cards & !FULL_DECK == 0
    }
}

impl TryFrom<u64> for CardBitSet {
    type Error = NotationError;

    fn try_from(cards: u64) -> Result<Self, Self::Error> {
        let set = Self { cards };
        if !set.within_deck() {
            return Err(NotationError::OutsideDeck(cards));
        }
        Ok(set)
    }
}

impl From<CardBitSet> for u64 {
    fn from(set: CardBitSet) -> Self {
        set.cards
    }
}

/// Iterator over a `CardBitSet`, lowest value first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    remaining: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        let value = Value::from_index(idx / 4)?;
        let suit = Suit::from_index(idx % 4)?;
        Some(Card::new(value, suit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl fmt::Display for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = CardBitSet::new();
        let ace = Card::new(Value::Ace, Suit::Spade);
        assert!(set.insert(ace));
        assert!(!set.insert(ace));
        assert_eq!(1, set.count());
        assert!(set.contains(ace));
    }

    #[test]
    fn test_try_from_bits() {
        let two_clubs = CardBitSet::try_from(1).unwrap();
        assert!(two_clubs.contains(Card::new(Value::Two, Suit::Club)));
        assert_eq!(1, u64::from(two_clubs));
        assert_eq!(Ok(CardBitSet::full_deck()), CardBitSet::try_from(FULL_DECK));

        let above = 31 << 52;
        assert_eq!(Err(NotationError::OutsideDeck(above)), CardBitSet::try_from(above));
        assert_eq!(
            Err(NotationError::OutsideDeck(above | 1)),
            CardBitSet::try_from(above | 1)
        );
    }

    #[test]
    fn test_full_deck() {
        let deck = CardBitSet::full_deck();
        assert_eq!(52, deck.count());
        assert_eq!(52, deck.iter().len());
        for v in Value::values() {
            for s in Suit::suits() {
                assert!(deck.contains(Card::new(v, s)));
            }
        }
    }

    #[test]
    fn test_iter_lowest_value_first() {
        let set: CardBitSet = [
            Card::new(Value::Ace, Suit::Club),
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Nine, Suit::Heart),
        ]
        .into_iter()
        .collect();
        let cards: Vec<Card> = set.iter().collect();
        assert_eq!(
            vec![
                Card::new(Value::Two, Suit::Spade),
                Card::new(Value::Nine, Suit::Heart),
                Card::new(Value::Ace, Suit::Club),
            ],
            cards
        );
    }

    #[test]
    fn test_display() {
        let set: CardBitSet = [
            Card::new(Value::King, Suit::Diamond),
            Card::new(Value::Three, Suit::Heart),
        ]
        .into_iter()
        .collect();
        assert_eq!("3H KD", set.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_bits() {
        let set: CardBitSet = [
            Card::new(Value::Two, Suit::Club),
            Card::new(Value::Two, Suit::Diamond),
        ]
        .into_iter()
        .collect();
        assert_eq!("3", serde_json::to_string(&set).unwrap());
        assert_eq!(set, serde_json::from_str::<CardBitSet>("3").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_bits_outside_deck() {
        let json = (31u64 << 52).to_string();
        assert!(serde_json::from_str::<CardBitSet>(&json).is_err());
        let json = u64::MAX.to_string();
        assert!(serde_json::from_str::<CardBitSet>(&json).is_err());
    }
}
