use std::fmt;
use std::str::FromStr;

use super::card::Card;
use super::card_bit_set::{CardBitSet, CardBitSetIter};
use super::category::{Classification, Classifications, HandProfile};
use super::classify::{Classifiable, HAND_SIZE};
use super::error::NotationError;
use super::notation::tokenize;

/// Exactly five distinct cards.
///
/// There is no way to add or remove cards once a `Hand` exists, so
/// classification never fails on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Hand {
    cards: CardBitSet,
}

impl Hand {
    /// Build a hand from cards.
    ///
    /// # Errors
    ///
    /// `NotationError::DuplicateCard` for the first card seen twice, then
    /// `NotationError::WrongCardCount` if there aren't five cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::from_cards([
    ///     Card::new(Value::Ace, Suit::Spade),
    ///     Card::new(Value::Two, Suit::Diamond),
    ///     Card::new(Value::Three, Suit::Spade),
    ///     Card::new(Value::Seven, Suit::Spade),
    ///     Card::new(Value::Jack, Suit::Spade),
    /// ])
    /// .unwrap();
    /// assert!(hand.contains(Card::new(Value::Ace, Suit::Spade)));
    /// ```
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, NotationError> {
        let mut set = CardBitSet::new();
        for card in cards {
            if !set.insert(card) {
                return Err(NotationError::DuplicateCard(card));
            }
        }
        if set.count() != HAND_SIZE {
            return Err(NotationError::WrongCardCount(set.count()));
        }
        Ok(Self { cards: set })
    }

    /// Parse hand notation like `"AS 2D 3S 7S JS"`. Whitespace between
    /// cards is optional.
    ///
    /// # Errors
    ///
    /// `NotationError::InvalidHand` when the text doesn't follow the card
    /// grammar, plus the errors of [`Hand::from_cards`].
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Hand, NotationError};
    ///
    /// assert!(Hand::parse("AS 2D 3S 7S JS").is_ok());
    /// assert!(Hand::parse("AS2D3S7SJS").is_ok());
    /// assert!(matches!(Hand::parse("foo!"), Err(NotationError::InvalidHand(_))));
    /// assert!(matches!(
    ///     Hand::parse("AS AS 3S 7S JS"),
    ///     Err(NotationError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        Self::from_cards(tokenize(text)?)
    }

    /// Same as [`Hand::parse`].
    pub fn new_from_str(text: &str) -> Result<Self, NotationError> {
        Self::parse(text)
    }

    /// Iterate the cards lowest value first.
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.iter()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    /// The cards lowest value first.
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Every category this hand satisfies.
    pub fn classification(&self) -> Classifications {
        Classifications::from_profile(&HandProfile::new(self.cards))
    }

    /// The best category along with its tie breakers. Two hands compare
    /// exactly as their strengths do.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Category, Hand};
    ///
    /// let hand = Hand::new_from_str("AS AC AD AH TC").unwrap();
    /// let strength = hand.strength();
    /// assert_eq!(Category::FourOfAKind, strength.category);
    /// assert_eq!(vec![12], strength.tie_breakers);
    /// ```
    pub fn strength(&self) -> Classification {
        self.classification().into_best()
    }
}

impl Classifiable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.cards.iter()
    }

    fn card_set(&self) -> CardBitSet {
        self.cards
    }
}

impl FromStr for Hand {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Hand {
    type Error = NotationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Hand {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<CardBitSet> for Hand {
    type Error = NotationError;

    fn try_from(cards: CardBitSet) -> Result<Self, Self::Error> {
        if !cards.within_deck() {
            return Err(NotationError::OutsideDeck(cards.into()));
        }
        if cards.count() != HAND_SIZE {
            return Err(NotationError::WrongCardCount(cards.count()));
        }
        Ok(Self { cards })
    }
}

impl From<Hand> for CardBitSet {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl IntoIterator for &Hand {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

/// Notation, lowest value first, separated by spaces.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cards, f)
    }
}
