use super::card::{Card, Suit, Value};
use super::card_bit_set::CardBitSet;
use super::category::{Category, Classification, Classifications, HandProfile};
use super::error::IncorrectHandSizeError;

/// Number of distinct cards a hand must hold before it can be classified.
pub const HAND_SIZE: usize = 5;

/// Anything that can be classified as a poker hand. There are
/// implementations for `Hand`, `CardBitSet`, `Vec<Card>` and card slices.
///
/// Only `cards` needs to be provided. Every query works on the distinct
/// cards, so a slice that repeats a card is simply a smaller hand.
pub trait Classifiable {
    /// The cards to classify. Repeats are ignored.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// The distinct cards as a set.
    fn card_set(&self) -> CardBitSet {
        self.cards().collect()
    }

    /// Number of distinct cards.
    fn size(&self) -> usize {
        self.card_set().count()
    }

    /// How many times each value appears, indexed by `Value::index`.
    fn frequency_by_value(&self) -> [u8; 13] {
        HandProfile::new(self.card_set()).value_counts()
    }

    /// How many times each suit appears, indexed by `Suit::index`.
    fn frequency_by_suit(&self) -> [u8; 4] {
        HandProfile::new(self.card_set()).suit_counts()
    }

    /// The card with the highest value. When several cards share that
    /// value which one comes back is unspecified.
    fn highest_card(&self) -> Option<Card> {
        self.card_set().iter().last()
    }

    /// Values that appear at least `freq` times, highest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Classifiable, Hand, Value};
    ///
    /// let hand = Hand::new_from_str("3C 3D 9H 9S KC").unwrap();
    /// assert_eq!(vec![Value::Nine, Value::Three], hand.values_at_least(2));
    /// ```
    fn values_at_least(&self, freq: u8) -> Vec<Value> {
        HandProfile::new(self.card_set())
            .values_at_least(freq)
            .collect()
    }

    /// Suits that appear at least `freq` times.
    fn suits_at_least(&self, freq: u8) -> Vec<Suit> {
        HandProfile::new(self.card_set())
            .suits_at_least(freq)
            .collect()
    }

    /// Values that appear exactly once, highest first.
    fn kicker_values(&self) -> Vec<Value> {
        HandProfile::new(self.card_set()).kickers().collect()
    }

    /// Does the hand satisfy `category`?
    ///
    /// Unlike `classify` this doesn't check the hand size.
    fn satisfies(&self, category: Category) -> bool {
        category.applies(&HandProfile::new(self.card_set()))
    }

    fn is_high_card(&self) -> bool {
        self.satisfies(Category::HighCard)
    }

    fn is_one_pair(&self) -> bool {
        self.satisfies(Category::OnePair)
    }

    fn is_two_pair(&self) -> bool {
        self.satisfies(Category::TwoPair)
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.satisfies(Category::ThreeOfAKind)
    }

    fn is_straight(&self) -> bool {
        self.satisfies(Category::Straight)
    }

    fn is_flush(&self) -> bool {
        self.satisfies(Category::Flush)
    }

    fn is_full_house(&self) -> bool {
        self.satisfies(Category::FullHouse)
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.satisfies(Category::FourOfAKind)
    }

    fn is_straight_flush(&self) -> bool {
        self.satisfies(Category::StraightFlush)
    }

    /// Every category the hand satisfies, lowest class score first.
    ///
    /// # Errors
    ///
    /// `IncorrectHandSizeError` unless there are exactly five distinct
    /// cards. No predicate runs in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Category, Classifiable, Hand};
    ///
    /// let hand = Hand::new_from_str("AS AD AH TC TD").unwrap();
    /// let classes = hand.classify().unwrap();
    /// assert!(classes.contains(Category::ThreeOfAKind));
    /// assert_eq!(Category::FullHouse, classes.best().category);
    /// assert_eq!(vec![12], classes.best().tie_breakers);
    /// ```
    fn classify(&self) -> Result<Classifications, IncorrectHandSizeError> {
        let cards = self.card_set();
        let found = cards.count();
        if found != HAND_SIZE {
            return Err(IncorrectHandSizeError { found });
        }
        Ok(Classifications::from_profile(&HandProfile::new(cards)))
    }

    /// The highest scoring classification, used for comparisons.
    fn best_classification(&self) -> Result<Classification, IncorrectHandSizeError> {
        self.classify().map(Classifications::into_best)
    }
}

impl Classifiable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }

    fn card_set(&self) -> CardBitSet {
        *self
    }
}

impl Classifiable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Classifiable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Classifiable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Classifiable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
