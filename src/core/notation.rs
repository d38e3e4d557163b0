use super::card::{Card, Suit, Value};
use super::error::NotationError;
use super::hand::Hand;

/// Characters of notation per hand once whitespace is gone.
const HAND_NOTATION_LEN: usize = 10;

/// Split hand notation into cards.
///
/// Whitespace only separates. Each whitespace free chunk has to be one or
/// more two character card tokens back to back, so `"ASKD QH"` is fine but
/// `"A SKD"` is not. Repeats are returned as is, `Hand` decides what to do
/// with them.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Card>, NotationError> {
    let invalid = || NotationError::InvalidHand(text.to_string());
    let mut cards = Vec::with_capacity(5);

    for chunk in text.split_whitespace() {
        let mut chars = chunk.chars();
        while let Some(v) = chars.next() {
            let s = chars.next().ok_or_else(invalid)?;
            let value = Value::from_char(v).ok_or_else(invalid)?;
            let suit = Suit::from_char(s).ok_or_else(invalid)?;
            cards.push(Card::new(value, suit));
        }
    }

    if cards.is_empty() {
        return Err(invalid());
    }
    Ok(cards)
}

/// Parse one line holding two hands, the first five cards belong to the
/// first hand and the next five to the second.
///
/// All whitespace is dropped first, what remains must be exactly twenty
/// characters. The two hands are validated independently, a card that shows
/// up in both is not an error.
///
/// # Errors
///
/// `NotationError::InvalidPairLength` when the compacted text isn't twenty
/// characters, otherwise whatever parsing either half returns.
///
/// # Examples
///
/// ```
/// use showdown::core::{parse_two_hands, compare_hands};
/// use std::cmp::Ordering;
///
/// let (a, b) = parse_two_hands("5H 5C 6S 7S KD 2C 3S 8S 8D TD").unwrap();
/// assert_eq!(Ordering::Less, compare_hands(&a, &b));
///
/// assert!(parse_two_hands("5H 5C 6S 7S KD").is_err());
/// ```
pub fn parse_two_hands(notation: &str) -> Result<(Hand, Hand), NotationError> {
    let compact: String = notation.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.is_ascii() {
        return Err(NotationError::InvalidHand(notation.to_string()));
    }
    if compact.len() != HAND_NOTATION_LEN * 2 {
        return Err(NotationError::InvalidPairLength(compact.len()));
    }

    let (first, second) = compact.split_at(HAND_NOTATION_LEN);
    Ok((Hand::parse(first)?, Hand::parse(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_with_and_without_spaces() {
        let spaced = tokenize("AS KD QH").unwrap();
        let packed = tokenize("ASKDQH").unwrap();
        let mixed = tokenize("  ASKD\tQH\n").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced, mixed);
        assert_eq!(3, spaced.len());
    }

    #[test]
    fn test_tokenize_keeps_repeats() {
        assert_eq!(2, tokenize("AS AS").unwrap().len());
    }

    #[test]
    fn test_tokenize_rejects_split_token() {
        assert_eq!(
            Err(NotationError::InvalidHand("A SKD".to_string())),
            tokenize("A SKD")
        );
    }

    #[test]
    fn test_tokenize_rejects_bad_characters() {
        for text in ["foo!", "AS KX", "as kd", "ASK", "", "   ", "AS,KD"] {
            assert!(tokenize(text).is_err(), "{text:?} should not tokenize");
        }
    }

    #[test]
    fn test_parse_two_hands() {
        let (a, b) = parse_two_hands("QD 5H 4D 5D KH 7H 3D JS KD 4H").unwrap();
        assert_eq!(Hand::parse("QD 5H 4D 5D KH").unwrap(), a);
        assert_eq!(Hand::parse("7H 3D JS KD 4H").unwrap(), b);
    }

    #[test]
    fn test_parse_two_hands_ignores_whitespace_layout() {
        let spaced = parse_two_hands("QD 5H 4D 5D KH 7H 3D JS KD 4H").unwrap();
        let packed = parse_two_hands("QD5H4D5DKH7H3DJSKD4H\r\n").unwrap();
        assert_eq!(spaced, packed);
    }

    #[test]
    fn test_parse_two_hands_wrong_length() {
        assert_eq!(
            Err(NotationError::InvalidPairLength(10)),
            parse_two_hands("QD 5H 4D 5D KH")
        );
        assert_eq!(
            Err(NotationError::InvalidPairLength(22)),
            parse_two_hands("QD 5H 4D 5D KH 7H 3D JS KD 4H 2C")
        );
    }

    #[test]
    fn test_parse_two_hands_bad_half() {
        assert_eq!(
            Err(NotationError::DuplicateCard(Card::parse("QD").unwrap())),
            parse_two_hands("QD QD 4D 5D KH 7H 3D JS KD 4H")
        );
        assert!(matches!(
            parse_two_hands("QD 5H 4D 5D KH 7H 3D JS KD 4X"),
            Err(NotationError::InvalidHand(_))
        ));
    }

    #[test]
    fn test_parse_two_hands_non_ascii() {
        assert!(matches!(
            parse_two_hands("Q♦ 5H 4D 5D KH 7H 3D JS KD"),
            Err(NotationError::InvalidHand(_))
        ));
    }

    #[test]
    fn test_parse_two_hands_shared_card_allowed() {
        assert!(parse_two_hands("AS KD QH JC 9S AS KD QH JC 8S").is_ok());
    }
}
