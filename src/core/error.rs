use thiserror::Error;

use super::card::Card;
use super::category::Category;

/// Errors from turning notation text, or raw card bits, into cards and
/// hands.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum NotationError {
    #[error("The string {0:?} is invalid card notation")]
    InvalidCard(String),
    #[error("The string {0:?} is invalid hand notation")]
    InvalidHand(String),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("A hand needs exactly 5 cards, found {0}")]
    WrongCardCount(usize),
    #[error("Two hand notation needs 20 characters without whitespace, found {0}")]
    InvalidPairLength(usize),
    #[error("Card bits {0:#x} fall outside the 52 card deck")]
    OutsideDeck(u64),
}

/// Classification was asked for on a collection that doesn't hold exactly
/// five distinct cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[error("Expected a hand of exactly 5 distinct cards, found {found}")]
pub struct IncorrectHandSizeError {
    pub found: usize,
}

/// A serialized classification that no hand could have produced.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ClassificationError {
    #[error("{category} has class score {expected}, found {found}")]
    ClassScoreMismatch {
        category: Category,
        expected: u8,
        found: u8,
    },
    #[error("A hand always has at least the high card category")]
    MissingHighCard,
    #[error("Categories must be listed once each from lowest to highest")]
    Unsorted,
}
