/// Card values, suits and the `Card` type.
mod card;
/// Export `Card`, `Suit` and `Value`
pub use self::card::{Card, Suit, Value};

/// Compact set of cards.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Errors for notation and hand size.
mod error;
/// Export the error types.
pub use self::error::{ClassificationError, IncorrectHandSizeError, NotationError};

/// The nine poker categories and the results of classifying a hand.
mod category;
/// Export `Category` and the classification results.
pub use self::category::{Category, Classification, Classifications};

/// The `Classifiable` trait.
mod classify;
/// Export `Classifiable`
pub use self::classify::{Classifiable, HAND_SIZE};

/// Five card hands.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// Notation parsing shared by hands and hand pairs.
mod notation;
/// Export `parse_two_hands`
pub use self::notation::parse_two_hands;

/// Counting head to head outcomes.
mod tally;
/// Export `Tally`
pub use self::tally::Tally;

/// Comparing hands.
mod compare;
/// Export the comparison functions.
pub use self::compare::{compare, compare_hands, score_batch};

/// A deck to deal random hands from.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;
