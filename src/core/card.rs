use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::NotationError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// The rank index of this value, 2 is 0 and Ace is 12.
    ///
    /// This is the number used in every tie break vector.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a value by its rank index.
    pub fn from_index(index: u8) -> Option<Self> {
        VALUES.get(index as usize).copied()
    }

    /// Given a notation character try and parse it into a `Value`.
    ///
    /// Only the upper case face letters are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// English name of the value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Position of the suit, used to index suit frequency tables.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a suit by its index.
    pub fn from_index(index: u8) -> Option<Self> {
        SUITS.get(index as usize).copied()
    }

    /// This Suit to a notation character.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Suit;
    ///
    /// assert_eq!('S', Suit::Spade.to_char());
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Heart => 'H',
            Self::Spade => 'S',
        }
    }

    /// Given a notation character try and parse it into a `Suit`.
    /// Lower case letters are not valid notation.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'C' => Some(Self::Club),
            'D' => Some(Self::Diamond),
            'H' => Some(Self::Heart),
            'S' => Some(Self::Spade),
            _ => None,
        }
    }

    /// English name of the suit, plural as in "Ace of Spades".
    pub fn name(self) -> &'static str {
        match self {
            Self::Club => "Clubs",
            Self::Diamond => "Diamonds",
            Self::Heart => "Hearts",
            Self::Spade => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Two cards are equal only if both value and suit match. There is
/// deliberately no `Ord` implementation: hands only ever order cards by
/// value, see [`Card::cmp_value`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a card from a value and a suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a two character notation token such as `"KD"`.
    ///
    /// # Errors
    ///
    /// Returns `NotationError::InvalidCard` unless the token is exactly a
    /// value character followed by a suit character.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Suit, Value};
    ///
    /// let card = Card::parse("KD").unwrap();
    /// assert_eq!(Card::new(Value::King, Suit::Diamond), card);
    ///
    /// assert!(Card::parse("kd").is_err());
    /// assert!(Card::parse("KDX").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, NotationError> {
        let mut chars = token.chars();
        let card = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => Value::from_char(v)
                .zip(Suit::from_char(s))
                .map(|(value, suit)| Self { value, suit }),
            _ => None,
        };
        card.ok_or_else(|| NotationError::InvalidCard(token.to_string()))
    }

    /// Compare two cards by value alone. Suits never break ties.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// English name, e.g. "Ten of Clubs".
    pub fn name(&self) -> String {
        format!("{} of {}", self.value.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Card {
    type Error = NotationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Card {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_parse_round_trips_every_token() {
        for value in Value::values() {
            for suit in Suit::suits() {
                let token = format!("{}{}", value.to_char(), suit.to_char());
                let card = Card::parse(&token).unwrap();
                assert_eq!(value, card.value);
                assert_eq!(suit, card.suit);
                assert_eq!(token, card.to_string());
            }
        }
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        for token in ["", "A", "ASS", "AX", "XS", "as", "aS", "As", "1S", "10S", " AS", "AS "] {
            assert_eq!(
                Err(NotationError::InvalidCard(token.to_string())),
                Card::parse(token),
                "token {token:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_multibyte() {
        assert!(Card::parse("A♠").is_err());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Card = "QH".parse().unwrap();
        let b = Card::try_from("QH").unwrap();
        let c = Card::try_from(String::from("QH")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_eq_needs_value_and_suit() {
        let kd = Card::parse("KD").unwrap();
        assert_eq!(kd, Card::parse("KD").unwrap());
        assert_ne!(kd, Card::parse("AD").unwrap());
        assert_ne!(kd, Card::parse("KS").unwrap());
    }

    #[test]
    fn test_cmp_value_ignores_suit() {
        let ks = Card::parse("KS").unwrap();
        let kd = Card::parse("KD").unwrap();
        let two = Card::parse("2H").unwrap();
        assert_eq!(Ordering::Equal, ks.cmp_value(&kd));
        assert_eq!(Ordering::Greater, ks.cmp_value(&two));
        assert_eq!(Ordering::Less, two.cmp_value(&kd));
    }

    #[test]
    fn test_value_index() {
        assert_eq!(0, Value::Two.index());
        assert_eq!(8, Value::Ten.index());
        assert_eq!(12, Value::Ace.index());
        for (i, v) in Value::values().iter().enumerate() {
            assert_eq!(Some(*v), Value::from_index(i as u8));
        }
        assert_eq!(None, Value::from_index(13));
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Two < Value::Three);
        assert!(Value::King < Value::Ace);
    }

    #[test]
    fn test_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!("Ace of Spades", Card::parse("AS").unwrap().name());
        assert_eq!("King of Clubs", Card::parse("KC").unwrap().name());
        assert_eq!("Two of Diamonds", Card::parse("2D").unwrap().name());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_notation() {
        let card = Card::parse("TC").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!("\"TC\"", json);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert!(serde_json::from_str::<Card>("\"XX\"").is_err());
    }
}
