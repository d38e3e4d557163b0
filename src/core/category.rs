use std::cmp::Ordering;
use std::fmt;

use super::card::{Suit, Value};
use super::card_bit_set::CardBitSet;
use super::error::ClassificationError;

/// All the different poker categories a five card hand can fall into.
///
/// Declaration order is strength order, so the derived `Ord` agrees with
/// [`Category::class_score`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest category. Every hand has a high card.
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence. The ace only counts high.
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
}

impl Category {
    /// Every category from lowest to highest class score.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Position of this category in [`Category::ALL`], 0 through 8.
    pub const fn class_score(self) -> u8 {
        self as u8
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// Does a hand with this profile satisfy the category?
    pub(crate) fn applies(self, profile: &HandProfile) -> bool {
        match self {
            Category::HighCard => true,
            Category::OnePair => profile.values_at_least(2).next().is_some(),
            Category::TwoPair => profile.values_at_least(2).count() >= 2,
            Category::ThreeOfAKind => profile.values_at_least(3).next().is_some(),
            Category::Straight => profile.is_run(),
            Category::Flush => profile.suits_at_least(5).next().is_some(),
            Category::FullHouse => {
                profile.values_at_least(3).next().is_some()
                    && profile.values_at_least(2).count() > 1
            }
            Category::FourOfAKind => profile.values_at_least(4).next().is_some(),
            Category::StraightFlush => {
                Category::Flush.applies(profile) && Category::Straight.applies(profile)
            }
        }
    }

    /// Rank indices used to order two hands of this category, most
    /// significant first.
    pub(crate) fn tie_breakers(self, profile: &HandProfile) -> Vec<u8> {
        match self {
            Category::OnePair => profile
                .values_at_least(2)
                .chain(profile.kickers())
                .map(Value::index)
                .collect(),
            Category::TwoPair => profile.values_at_least(2).map(Value::index).collect(),
            Category::ThreeOfAKind => profile.values_at_least(3).map(Value::index).collect(),
            Category::FourOfAKind => profile.values_at_least(4).map(Value::index).collect(),
            Category::HighCard
            | Category::Straight
            | Category::Flush
            | Category::FullHouse
            | Category::StraightFlush => profile.highest.map(Value::index).into_iter().collect(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One category a hand satisfies along with the numbers needed to compare
/// it against another hand of the same category.
///
/// Ordering is by category, then lexicographically by tie breakers.
/// Deserializing rejects a `class_score` that doesn't match the category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ClassificationRecord"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: Category,
    /// Same as `category.class_score()`.
    pub class_score: u8,
    /// Rank indices, most significant first.
    pub tie_breakers: Vec<u8>,
}

impl Classification {
    pub(crate) fn new(category: Category, profile: &HandProfile) -> Self {
        Self {
            category,
            class_score: category.class_score(),
            tie_breakers: category.tie_breakers(profile),
        }
    }
}

/// Wire shape of a `Classification` before its class score is checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ClassificationRecord {
    category: Category,
    class_score: u8,
    tie_breakers: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<ClassificationRecord> for Classification {
    type Error = ClassificationError;

    fn try_from(record: ClassificationRecord) -> Result<Self, Self::Error> {
        let expected = record.category.class_score();
        if record.class_score != expected {
            return Err(ClassificationError::ClassScoreMismatch {
                category: record.category,
                expected,
                found: record.class_score,
            });
        }
        Ok(Self {
            category: record.category,
            class_score: record.class_score,
            tie_breakers: record.tie_breakers,
        })
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tie_breakers.cmp(&other.tie_breakers))
    }
}

/// Every category a hand satisfies, ascending by class score.
///
/// `HighCard` always applies so this is never empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Classification>", into = "Vec<Classification>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classifications(Vec<Classification>);

impl Classifications {
    pub(crate) fn from_profile(profile: &HandProfile) -> Self {
        Self(
            Category::ALL
                .iter()
                .filter(|c| c.applies(profile))
                .map(|&c| Classification::new(c, profile))
                .collect(),
        )
    }

    /// The highest scoring category, the only one that matters when
    /// comparing hands.
    pub fn best(&self) -> &Classification {
        &self.0[self.0.len() - 1]
    }

    pub fn into_best(mut self) -> Classification {
        let last = self.0.len() - 1;
        self.0.swap_remove(last)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.iter().any(|c| c.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().map(|c| c.category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Classification> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Classification>> for Classifications {
    type Error = ClassificationError;

    /// Accepts the list only if it starts at `HighCard` and each category
    /// appears once, in ascending order.
    fn try_from(list: Vec<Classification>) -> Result<Self, Self::Error> {
        match list.first() {
            Some(first) if first.category == Category::HighCard => {}
            _ => return Err(ClassificationError::MissingHighCard),
        }
        if list.windows(2).any(|w| w[0].category >= w[1].category) {
            return Err(ClassificationError::Unsorted);
        }
        Ok(Self(list))
    }
}

impl From<Classifications> for Vec<Classification> {
    fn from(classifications: Classifications) -> Self {
        classifications.0
    }
}

impl<'a> IntoIterator for &'a Classifications {
    type Item = &'a Classification;
    type IntoIter = std::slice::Iter<'a, Classification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Frequency tables for a set of distinct cards. Everything a category
/// predicate or tie breaker needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HandProfile {
    value_counts: [u8; 13],
    suit_counts: [u8; 4],
    highest: Option<Value>,
}

impl HandProfile {
    pub(crate) fn new(cards: CardBitSet) -> Self {
        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut highest = None;
        for c in cards {
            value_counts[c.value.index() as usize] += 1;
            suit_counts[c.suit.index() as usize] += 1;
            // Cards come out lowest value first.
            highest = Some(c.value);
        }
        Self {
            value_counts,
            suit_counts,
            highest,
        }
    }

    pub(crate) fn value_counts(&self) -> [u8; 13] {
        self.value_counts
    }

    pub(crate) fn suit_counts(&self) -> [u8; 4] {
        self.suit_counts
    }

    /// Values seen at least `freq` times, highest first.
    pub(crate) fn values_at_least(&self, freq: u8) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| {
                let count = self.value_counts[v.index() as usize];
                count > 0 && count >= freq
            })
    }

    /// Values seen exactly once, highest first.
    pub(crate) fn kickers(&self) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(|v| self.value_counts[v.index() as usize] == 1)
    }

    pub(crate) fn suits_at_least(&self, freq: u8) -> impl Iterator<Item = Suit> + '_ {
        Suit::suits().into_iter().filter(move |s| {
            let count = self.suit_counts[s.index() as usize];
            count > 0 && count >= freq
        })
    }

    /// True when the sorted values each step up by exactly one.
    ///
    /// A repeated value breaks the run, and ace never plays low.
    fn is_run(&self) -> bool {
        let mut present = self
            .value_counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0);
        let Some((first, _)) = present.next() else {
            return false;
        };
        let mut expected = first;
        for (idx, &count) in std::iter::once((first, &self.value_counts[first])).chain(present) {
            if count != 1 || idx != expected {
                return false;
            }
            expected += 1;
        }
        true
    }
}
