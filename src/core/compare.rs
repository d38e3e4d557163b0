use std::cmp::Ordering;

use super::classify::Classifiable;
use super::error::IncorrectHandSizeError;
use super::hand::Hand;
use super::tally::Tally;

/// Compare two collections of cards as poker hands.
///
/// Only each side's best category counts. Class scores decide first, then
/// the tie breakers are compared element by element. `Greater` means `a`
/// wins, `Equal` is a true tie. Suits never break a tie.
///
/// # Errors
///
/// `IncorrectHandSizeError` if either side doesn't hold five distinct
/// cards.
///
/// # Examples
///
/// ```
/// use showdown::core::{Card, compare};
/// use std::cmp::Ordering;
///
/// let parse = |s: &str| -> Vec<Card> {
///     s.split(' ').map(|t| Card::parse(t).unwrap()).collect()
/// };
/// let royal = parse("AS KS QS JS TS");
/// let junk = parse("AS 3D 4C 7H TC");
/// assert_eq!(Ok(Ordering::Greater), compare(&royal, &junk));
/// assert!(compare(&royal, &parse("AS KS")).is_err());
/// ```
pub fn compare<A, B>(a: &A, b: &B) -> Result<Ordering, IncorrectHandSizeError>
where
    A: Classifiable + ?Sized,
    B: Classifiable + ?Sized,
{
    let ours = a.best_classification()?;
    let theirs = b.best_classification()?;
    Ok(ours.cmp(&theirs))
}

/// [`compare`] for two `Hand`s, which always have the right size.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.strength().cmp(&b.strength())
}

/// Compare every pair in order and count the outcomes.
///
/// The `scoring` module wraps the same fold with configuration, logging and
/// parallelism.
pub fn score_batch(pairs: &[(Hand, Hand)]) -> Tally {
    pairs
        .iter()
        .map(|(first, second)| compare_hands(first, second))
        .collect()
}
